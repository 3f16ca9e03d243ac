//! The list model.
//!
//! `ListBox<T>` owns an ordered list of items and the set of selected
//! positions, and mirrors the items into an encoded string on every change.
//! Every mutating operation follows the same pipeline:
//!
//! 1. the before-hook runs and may veto or substitute the input,
//! 2. the new state is built and encoded by the codec,
//! 3. the state is committed and rendered (input source write, then renderer),
//! 4. the after-signal and [`ListSignals::changed`] are emitted.
//!
//! Encoding happens before the commit, so a codec failure leaves the model
//! exactly as it was.

use std::fmt;

use listbox_core::logging::targets;

use crate::error::Result;
use crate::input::InputSource;
use crate::model::codec::Codec;
use crate::render::Renderer;

use super::hooks::{ChangeKind, ListHooks, ListSignals, UpdateEvent};
use super::selection::{Selection, SelectionMode};
use super::view::ListView;

/// What a click on an item did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// The clicked position was selected.
    Selected,
    /// The clicked position was deselected.
    Deselected,
}

/// A list of items with a selection, hooks and an encoded mirror.
///
/// Build one with [`ListBox::builder`] (JSON encoding) or
/// [`ListBox::builder_with_codec`].
///
/// # Example
///
/// ```
/// use listbox::model::ListBox;
///
/// let mut list = ListBox::<String>::builder()
///     .initial_items(vec!["A".into(), "B".into(), "C".into()])
///     .build()
///     .unwrap();
///
/// list.select(1);
/// list.move_up().unwrap();
///
/// assert_eq!(list.items(), ["B", "A", "C"]);
/// assert_eq!(list.selected(), vec![0]);
/// assert_eq!(list.encoded_value(), r#"["B","A","C"]"#);
/// ```
pub struct ListBox<T> {
    pub(super) items: Vec<T>,
    pub(super) selection: Selection,
    /// Encoding of `items`, refreshed on every commit.
    pub(super) encoded: String,
    pub(super) codec: Box<dyn Codec<T>>,
    pub(super) renderer: Box<dyn Renderer<T>>,
    pub(super) input: Option<Box<dyn InputSource>>,
    pub(super) hooks: ListHooks<T>,
    pub(super) signals: ListSignals<T>,
    pub(super) auto_select_on_click: bool,
    /// Items restored by `reset`.
    pub(super) initial: Vec<T>,
}

impl<T: 'static> fmt::Debug for ListBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListBox")
            .field("len", &self.items.len())
            .field("selection", &self.selection)
            .field("encoded", &self.encoded)
            .field("has_input", &self.input.is_some())
            .field("hooks", &self.hooks)
            .field("auto_select_on_click", &self.auto_select_on_click)
            .finish_non_exhaustive()
    }
}

impl<T> ListBox<T>
where
    T: Clone + Send + 'static,
{
    // =========================================================================
    // Item access
    // =========================================================================

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the item at `position`.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Returns a copy of the items.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Returns the encoded value as of the last commit.
    pub fn encoded_value(&self) -> &str {
        &self.encoded
    }

    /// Encodes the current items with the codec.
    pub fn target_value(&self) -> Result<String> {
        Ok(self.codec.encode(&self.items)?)
    }

    /// Returns a read-only view of the current state.
    pub fn view(&self) -> ListView<'_, T> {
        ListView::new(&self.items, &self.selection, &self.encoded)
    }

    /// Calls `f(item, position)` for every item.
    pub fn item_walk<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for (position, item) in self.items.iter().enumerate() {
            f(item, position);
        }
    }

    /// Replaces all items without running hooks, then renders.
    ///
    /// The selection is cleared. Returns the new length.
    pub fn set_from_vec(&mut self, items: Vec<T>) -> Result<usize> {
        self.replace_items(items)?;
        self.render();
        Ok(self.items.len())
    }

    /// Decodes `encoded` and replaces all items with the result, as
    /// [`set_from_vec`](Self::set_from_vec) does.
    pub fn set_from_encoded(&mut self, encoded: &str) -> Result<usize> {
        let items = self.codec.decode(encoded)?;
        self.set_from_vec(items)
    }

    // =========================================================================
    // Hooks and signals
    // =========================================================================

    /// Returns the before-hooks for registration.
    pub fn hooks_mut(&mut self) -> &mut ListHooks<T> {
        &mut self.hooks
    }

    /// Returns the after-signals.
    pub fn signals(&self) -> &ListSignals<T> {
        &self.signals
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Appends one item. Returns the new length.
    ///
    /// The before-insert hook receives `[item]`; if it substitutes a batch,
    /// the first element is inserted.
    pub fn insert(&mut self, item: T) -> Result<usize> {
        let position = self.items.len();
        self.insert_batch(vec![item], position, true)
    }

    /// Inserts one item at `position`.
    ///
    /// Negative positions count from the end (`-1` inserts before the last
    /// item). Positions past either end clamp to it.
    pub fn insert_at(&mut self, item: T, position: isize) -> Result<usize> {
        let position = self.clamp_insert_position(position);
        self.insert_batch(vec![item], position, true)
    }

    /// Appends a batch. The hooks see the whole batch once.
    pub fn insert_multi(&mut self, items: Vec<T>) -> Result<usize> {
        let position = self.items.len();
        self.insert_batch(items, position, false)
    }

    /// Inserts a batch at `position`, resolved as in
    /// [`insert_at`](Self::insert_at).
    pub fn insert_multi_at(&mut self, items: Vec<T>, position: isize) -> Result<usize> {
        let position = self.clamp_insert_position(position);
        self.insert_batch(items, position, false)
    }

    fn clamp_insert_position(&self, position: isize) -> usize {
        let len = self.items.len();
        if position < 0 {
            len.saturating_sub(position.unsigned_abs())
        } else {
            usize::try_from(position).map_or(len, |pos| pos.min(len))
        }
    }

    fn insert_batch(&mut self, batch: Vec<T>, position: usize, single: bool) -> Result<usize> {
        if batch.is_empty() {
            return Ok(self.items.len());
        }
        let position = position.min(self.items.len());

        let decision = self.hooks.before_insert(&batch, &self.view());
        let Some(mut batch) = decision.resolve(batch) else {
            tracing::trace!(target: targets::MODEL, "insert vetoed by hook");
            return Ok(self.items.len());
        };
        if single {
            batch.truncate(1);
        }

        let mut items = self.items.clone();
        items.splice(position..position, batch.iter().cloned());
        let mut selection = self.selection.clone();
        selection.remap_inserted(position, batch.len());
        self.commit(items, selection)?;

        tracing::debug!(target: targets::MODEL, position, count = batch.len(), "inserted items");
        self.signals.inserted.emit(batch);
        self.signals.changed.emit(ChangeKind::Insert);
        Ok(self.items.len())
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Replaces every selected item with `item`.
    ///
    /// Returns the number of positions updated: 0 when nothing is selected or
    /// the before-update hook vetoes.
    pub fn update(&mut self, item: T) -> Result<usize> {
        if self.selection.is_empty() {
            return Ok(0);
        }
        let current = self.selected_items();
        let decision = self
            .hooks
            .before_update(&current, std::slice::from_ref(&item), &self.view());
        let Some(mut replacement) = decision.resolve(vec![item]) else {
            tracing::trace!(target: targets::MODEL, "update vetoed by hook");
            return Ok(0);
        };
        replacement.truncate(1);

        let positions = self.selection.positions();
        self.apply_update(positions, current, replacement)
    }

    /// Replaces the selected items cyclically: the i-th selected position
    /// receives `items[i % items.len()]`.
    ///
    /// No-op returning 0 if `items` or the selection is empty.
    pub fn update_multi(&mut self, items: Vec<T>) -> Result<usize> {
        if self.selection.is_empty() || items.is_empty() {
            return Ok(0);
        }
        let current = self.selected_items();
        let decision = self.hooks.before_update(&current, &items, &self.view());
        let Some(replacement) = decision.resolve(items) else {
            tracing::trace!(target: targets::MODEL, "update vetoed by hook");
            return Ok(0);
        };

        let positions = self.selection.positions();
        self.apply_update(positions, current, replacement)
    }

    /// Replaces the item at `position`. Negative positions count from the end.
    ///
    /// Returns `None` if the position is out of range, the existing item if
    /// the hook vetoes, and the new item otherwise.
    pub fn update_at(&mut self, item: T, position: isize) -> Result<Option<T>> {
        let Some(position) = self.resolve_position(position) else {
            return Ok(None);
        };
        let current = vec![self.items[position].clone()];
        let decision = self
            .hooks
            .before_update(&current, std::slice::from_ref(&item), &self.view());
        let Some(mut replacement) = decision.resolve(vec![item]) else {
            tracing::trace!(target: targets::MODEL, position, "update vetoed by hook");
            return Ok(Some(current[0].clone()));
        };
        replacement.truncate(1);

        self.apply_update(vec![position], current, replacement)?;
        Ok(self.items.get(position).cloned())
    }

    fn resolve_position(&self, position: isize) -> Option<usize> {
        let resolved = if position < 0 {
            self.items.len().checked_sub(position.unsigned_abs())?
        } else {
            usize::try_from(position).ok()?
        };
        (resolved < self.items.len()).then_some(resolved)
    }

    fn apply_update(
        &mut self,
        positions: Vec<usize>,
        previous: Vec<T>,
        replacement: Vec<T>,
    ) -> Result<usize> {
        let mut items = self.items.clone();
        for (slot, &position) in positions.iter().enumerate() {
            items[position] = replacement[slot % replacement.len()].clone();
        }
        let selection = self.selection.clone();
        self.commit(items, selection)?;

        let count = positions.len();
        tracing::debug!(target: targets::MODEL, count, "updated items");
        self.signals.updated.emit(UpdateEvent {
            positions,
            previous,
            replacement,
        });
        self.signals.changed.emit(ChangeKind::Update);
        Ok(count)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes every selected item. Returns the new length.
    ///
    /// The before-remove hook receives the selected positions and may narrow
    /// them. Surviving items are renumbered; a selected survivor stays
    /// selected at its new position.
    pub fn remove(&mut self) -> Result<usize> {
        if self.selection.is_empty() {
            return Ok(self.items.len());
        }
        let selected = self.selection.positions();
        let decision = self.hooks.before_remove(&selected, &self.view());
        let Some(positions) = decision.resolve(selected) else {
            tracing::trace!(target: targets::MODEL, "remove vetoed by hook");
            return Ok(self.items.len());
        };
        self.remove_positions(positions)
    }

    /// Removes the item at `position`. Returns the new length.
    ///
    /// The before-remove hook receives `[position]`; any non-empty result lets
    /// the removal proceed. The selection is renumbered the same way as in
    /// [`remove`](Self::remove). Negative positions count from the end;
    /// out-of-range positions are a no-op.
    pub fn remove_by_index(&mut self, position: isize) -> Result<usize> {
        match self.resolve_position(position) {
            Some(position) => self.remove_single(position),
            None => Ok(self.items.len()),
        }
    }

    /// `position` must be in range.
    pub(super) fn remove_single(&mut self, position: usize) -> Result<usize> {
        let decision = self.hooks.before_remove(&[position], &self.view());
        if decision.resolve(vec![position]).is_none() {
            tracing::trace!(target: targets::MODEL, position, "remove vetoed by hook");
            return Ok(self.items.len());
        }
        self.remove_positions(vec![position])
    }

    fn remove_positions(&mut self, mut positions: Vec<usize>) -> Result<usize> {
        let len = self.items.len();
        positions.retain(|&pos| pos < len);
        positions.sort_unstable();
        positions.dedup();
        if positions.is_empty() {
            return Ok(len);
        }

        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(pos, _)| positions.binary_search(pos).is_err())
            .map(|(_, item)| item.clone())
            .collect();
        let mut selection = self.selection.clone();
        selection.remap_removed(&positions);
        self.commit(items, selection)?;

        tracing::debug!(target: targets::MODEL, count = positions.len(), "removed items");
        self.signals.removed.emit(positions);
        self.signals.changed.emit(ChangeKind::Remove);
        Ok(self.items.len())
    }

    /// Removes every item and deselects everything.
    ///
    /// Returns `false` if the before-clear hook vetoed.
    pub fn clear(&mut self) -> Result<bool> {
        if !self.hooks.before_clear(&self.view()) {
            tracing::trace!(target: targets::MODEL, "clear vetoed by hook");
            return Ok(false);
        }
        let selection = Selection::new(self.selection.mode());
        self.commit(Vec::new(), selection)?;

        tracing::debug!(target: targets::MODEL, "cleared list");
        self.signals.cleared.emit(());
        self.signals.changed.emit(ChangeKind::Clear);
        Ok(true)
    }

    /// Clears the list and restores the items it was built with.
    ///
    /// Returns `false` if the before-clear hook vetoed. The initial items are
    /// encoded first, so an encode failure also leaves the list untouched.
    pub fn reset(&mut self) -> Result<bool> {
        let encoded = self.codec.encode(&self.initial)?;
        if !self.clear()? {
            return Ok(false);
        }
        self.items = self.initial.clone();
        self.encoded = encoded;
        self.selection.clear();
        self.render();
        Ok(true)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects `position`. In single-selection mode any previous selection is
    /// dropped. Returns `false` if the position is out of range or already
    /// selected.
    pub fn select(&mut self, position: usize) -> bool {
        if !self.selection.select(position, self.items.len()) {
            return false;
        }
        self.render();
        true
    }

    /// Deselects `position`. Returns `false` if it was not selected.
    pub fn deselect(&mut self, position: usize) -> bool {
        if !self.selection.deselect(position) {
            return false;
        }
        self.render();
        true
    }

    /// Selects every item. Only effective with multiselect enabled.
    pub fn select_all(&mut self) -> bool {
        if !self.selection.select_all(self.items.len()) {
            return false;
        }
        self.render();
        true
    }

    /// Deselects everything.
    pub fn deselect_all(&mut self) {
        self.selection.clear();
        self.render();
    }

    /// Checks if `position` is selected.
    pub fn is_selected(&self, position: usize) -> bool {
        self.selection.is_selected(position)
    }

    /// Returns the selected positions in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        self.selection.positions()
    }

    /// Returns the selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the number of selected positions.
    pub fn count_selected(&self) -> usize {
        self.selection.len()
    }

    /// Returns copies of the selected items in position order.
    pub fn selected_items(&self) -> Vec<T> {
        self.selection
            .iter()
            .filter_map(|pos| self.items.get(pos).cloned())
            .collect()
    }

    /// Calls `f(item, position)` for every selected item.
    pub fn selected_walk<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for position in self.selection.iter() {
            if let Some(item) = self.items.get(position) {
                f(item, position);
            }
        }
    }

    /// Whether more than one position may be selected.
    pub fn is_multiselect(&self) -> bool {
        self.selection.mode().is_multi()
    }

    /// Enables or disables multiselect. Disabling keeps only the lowest
    /// selected position.
    pub fn set_multiselect(&mut self, multiselect: bool) {
        self.selection
            .set_mode(SelectionMode::from_multiselect(multiselect));
    }

    /// Whether [`click`](Self::click) toggles the selection.
    pub fn auto_select_on_click(&self) -> bool {
        self.auto_select_on_click
    }

    /// Enables or disables click-to-select.
    pub fn set_auto_select_on_click(&mut self, enabled: bool) {
        self.auto_select_on_click = enabled;
    }

    /// Handles a click on the item at `position`.
    ///
    /// With click-to-select enabled, toggles the position's selection and
    /// reports what happened. Returns `None` when disabled or out of range.
    pub fn click(&mut self, position: usize) -> Option<ClickAction> {
        if !self.auto_select_on_click || position >= self.items.len() {
            return None;
        }
        if self.selection.is_selected(position) {
            self.deselect(position);
            Some(ClickAction::Deselected)
        } else {
            self.select(position);
            Some(ClickAction::Selected)
        }
    }

    // =========================================================================
    // Render
    // =========================================================================

    /// Pushes the current state to the input source and the renderer.
    ///
    /// Returns `false` if the before-render hook vetoed. Hooks and slots run
    /// from here must not call back into this model.
    #[tracing::instrument(skip_all, target = "listbox::render", level = "trace")]
    pub fn render(&mut self) -> bool {
        let view = ListView::new(&self.items, &self.selection, &self.encoded);
        if !self.hooks.before_render(&view) {
            tracing::trace!(target: targets::RENDER, "render vetoed by hook");
            return false;
        }
        if let Some(input) = self.input.as_mut() {
            input.write(&self.encoded);
        }
        self.renderer.render(&view);
        self.signals.rendered.emit(());
        true
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Encodes `items`, then installs them with `selection` and renders.
    ///
    /// Nothing changes if encoding fails.
    pub(super) fn commit(&mut self, items: Vec<T>, selection: Selection) -> Result<()> {
        let encoded = self.codec.encode(&items)?;
        self.items = items;
        self.selection = selection;
        self.encoded = encoded;
        self.render();
        Ok(())
    }

    /// Replaces all items and drops the selection, without rendering.
    pub(super) fn replace_items(&mut self, items: Vec<T>) -> Result<()> {
        self.encoded = self.codec.encode(&items)?;
        self.items = items;
        self.selection.clear();
        Ok(())
    }
}
