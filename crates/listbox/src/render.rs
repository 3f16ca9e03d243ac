//! Presentation sinks.
//!
//! A list model pushes its state to a [`Renderer`] once per operation. The
//! core does not prescribe an output format; [`MarkupRenderer`] produces one
//! markup row per item, which is what a form-hosted listbox usually needs.

use std::fmt::{self, Display};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::ListBoxOptions;
use crate::model::ListView;

/// Receives the model state on every render.
pub trait Renderer<T>: Send {
    /// Presents the current items and selection.
    fn render(&mut self, view: &ListView<'_, T>);
}

/// A renderer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl<T> Renderer<T> for NullRenderer {
    fn render(&mut self, _view: &ListView<'_, T>) {}
}

/// One rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Position of the item in the list.
    pub position: usize,
    /// Output of the item renderer.
    pub markup: String,
    /// The selected marker, present when the item is selected and a marker is
    /// configured.
    pub marker: Option<String>,
}

impl RenderedRow {
    /// Returns `true` if the row carries the selected marker.
    pub fn is_marked(&self) -> bool {
        self.marker.is_some()
    }
}

/// Shared handle on the rows produced by a [`MarkupRenderer`].
///
/// The renderer is owned by the model once installed; the host keeps this
/// handle to read what was rendered.
#[derive(Debug, Clone, Default)]
pub struct RenderedOutput {
    rows: Arc<Mutex<Vec<RenderedRow>>>,
}

impl RenderedOutput {
    /// A copy of the rows from the last render.
    pub fn rows(&self) -> Vec<RenderedRow> {
        self.rows.lock().clone()
    }

    /// The markup of each row, in order.
    pub fn markup(&self) -> Vec<String> {
        self.rows.lock().iter().map(|row| row.markup.clone()).collect()
    }

    /// Positions of the rows carrying the selected marker.
    pub fn marked_positions(&self) -> Vec<usize> {
        self.rows
            .lock()
            .iter()
            .filter(|row| row.is_marked())
            .map(|row| row.position)
            .collect()
    }

    /// Number of rows from the last render.
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    /// Returns `true` if the last render produced no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }

    fn replace(&self, rows: Vec<RenderedRow>) {
        *self.rows.lock() = rows;
    }
}

type ItemRenderFn<T> = Box<dyn Fn(&T, usize) -> String + Send + Sync>;

/// Renders each item through an item renderer function and marks selected
/// rows.
///
/// # Example
///
/// ```
/// use listbox::model::ListBox;
/// use listbox::render::MarkupRenderer;
///
/// let renderer = MarkupRenderer::<String>::list_items();
/// let output = renderer.output();
///
/// let mut list = ListBox::<String>::builder()
///     .initial_items(vec!["Apple".into(), "Pear".into()])
///     .renderer(renderer)
///     .build()
///     .unwrap();
/// list.select(1);
///
/// assert_eq!(output.markup(), vec!["<li>Apple</li>", "<li>Pear</li>"]);
/// assert_eq!(output.marked_positions(), vec![1]);
/// ```
pub struct MarkupRenderer<T> {
    item_renderer: ItemRenderFn<T>,
    selected_marker: Option<String>,
    output: RenderedOutput,
}

impl<T> fmt::Debug for MarkupRenderer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkupRenderer")
            .field("selected_marker", &self.selected_marker)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

impl<T> MarkupRenderer<T> {
    /// Creates a renderer from an item renderer function
    /// `(item, position) -> markup`. The selected marker defaults to
    /// `"selected"`.
    pub fn new<F>(item_renderer: F) -> Self
    where
        F: Fn(&T, usize) -> String + Send + Sync + 'static,
    {
        Self {
            item_renderer: Box::new(item_renderer),
            selected_marker: Some("selected".to_string()),
            output: RenderedOutput::default(),
        }
    }

    /// Sets the marker attached to selected rows; `None` disables marking.
    pub fn with_selected_marker(mut self, marker: Option<String>) -> Self {
        self.selected_marker = marker;
        self
    }

    /// Returns a handle on the rendered rows.
    pub fn output(&self) -> RenderedOutput {
        self.output.clone()
    }
}

impl<T: Display + 'static> MarkupRenderer<T> {
    /// Wraps each item's `Display` output in `<tag>...</tag>`.
    pub fn tagged(tag: &str) -> Self {
        let tag = tag.to_string();
        Self::new(move |item: &T, _| format!("<{tag}>{item}</{tag}>"))
    }

    /// Renders each item as `<li>item</li>`.
    pub fn list_items() -> Self {
        Self::tagged("li")
    }

    /// Uses the options' item selector as the tag and their selected marker.
    pub fn from_options(options: &ListBoxOptions) -> Self {
        Self::tagged(&options.item_selector).with_selected_marker(options.selected_marker.clone())
    }
}

impl<T> Renderer<T> for MarkupRenderer<T> {
    fn render(&mut self, view: &ListView<'_, T>) {
        let rows = view
            .items()
            .iter()
            .enumerate()
            .map(|(position, item)| RenderedRow {
                position,
                markup: (self.item_renderer)(item, position),
                marker: self
                    .selected_marker
                    .clone()
                    .filter(|_| view.is_selected(position)),
            })
            .collect();
        self.output.replace(rows);
    }
}
