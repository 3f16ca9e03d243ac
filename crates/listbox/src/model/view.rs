//! Read-only snapshot of a list model.

use super::selection::Selection;

/// A borrowed, read-only view of a list model's state.
///
/// Handed to before-hooks and to the [`Renderer`](crate::render::Renderer),
/// so neither needs access to the model itself.
#[derive(Debug)]
pub struct ListView<'a, T> {
    items: &'a [T],
    selection: &'a Selection,
    encoded: &'a str,
}

impl<T> Clone for ListView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListView<'_, T> {}

impl<'a, T> ListView<'a, T> {
    pub(crate) fn new(items: &'a [T], selection: &'a Selection, encoded: &'a str) -> Self {
        Self {
            items,
            selection,
            encoded,
        }
    }

    /// The items, in order.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `position`.
    pub fn get(&self, position: usize) -> Option<&'a T> {
        self.items.get(position)
    }

    /// The selection.
    pub fn selection(&self) -> &'a Selection {
        self.selection
    }

    /// Checks if `position` is selected.
    pub fn is_selected(&self, position: usize) -> bool {
        self.selection.is_selected(position)
    }

    /// Whether more than one position may be selected.
    pub fn is_multiselect(&self) -> bool {
        self.selection.mode().is_multi()
    }

    /// The encoded value of the items, as last produced by the codec.
    pub fn encoded_value(&self) -> &'a str {
        self.encoded
    }
}
