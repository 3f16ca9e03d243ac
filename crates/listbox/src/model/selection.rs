//! Selection state for list models.
//!
//! [`Selection`] tracks which positions of a list are selected. Positions are
//! plain indices, so every structural change to the list (insertion, removal,
//! swapping, rotation) has to be mirrored here to keep the selection pointing
//! at the same items. The remapping helpers on this type do exactly that.
//!
//! # Example
//!
//! ```
//! use listbox::model::{Selection, SelectionMode};
//!
//! let mut selection = Selection::new(SelectionMode::Multi);
//! selection.select(1, 4);
//! selection.select(3, 4);
//!
//! // Item 1 is removed: position 3 now lives at 2.
//! selection.remap_removed(&[1]);
//! assert_eq!(selection.positions(), vec![2]);
//! ```

use std::collections::BTreeSet;

/// How many positions may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one position is selected.
    Single,
    /// Any number of positions may be selected (default).
    #[default]
    Multi,
}

impl SelectionMode {
    /// Maps the `multiselect` option onto a mode.
    pub fn from_multiselect(multiselect: bool) -> Self {
        if multiselect { Self::Multi } else { Self::Single }
    }

    /// Returns `true` for [`SelectionMode::Multi`].
    pub fn is_multi(self) -> bool {
        self == Self::Multi
    }
}

/// A sorted, duplicate-free set of selected positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    positions: BTreeSet<usize>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            positions: BTreeSet::new(),
        }
    }

    // =========================================================================
    // Mode
    // =========================================================================

    /// Gets the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the selection mode.
    ///
    /// Switching to [`SelectionMode::Single`] keeps only the lowest selected
    /// position.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::Single
            && let Some(first) = self.first()
        {
            self.positions.retain(|&pos| pos == first);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Checks if a position is selected.
    pub fn is_selected(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Returns the number of selected positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the lowest selected position.
    pub fn first(&self) -> Option<usize> {
        self.positions.first().copied()
    }

    /// Returns the highest selected position.
    pub fn last(&self) -> Option<usize> {
        self.positions.last().copied()
    }

    /// Iterates the selected positions in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    /// Returns the selected positions in ascending order.
    pub fn positions(&self) -> Vec<usize> {
        self.iter().collect()
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Selects `position` in a list of `len` items.
    ///
    /// Out-of-range or already selected positions are ignored. In single mode
    /// any previous selection is dropped first. Returns `true` if the
    /// selection changed.
    pub fn select(&mut self, position: usize, len: usize) -> bool {
        if position >= len || self.positions.contains(&position) {
            return false;
        }
        if self.mode == SelectionMode::Single {
            self.positions.clear();
        }
        self.positions.insert(position)
    }

    /// Deselects `position`. Returns `true` if it was selected.
    pub fn deselect(&mut self, position: usize) -> bool {
        self.positions.remove(&position)
    }

    /// Selects every position of a list of `len` items.
    ///
    /// Only effective in multi mode. Returns `true` if the call applied.
    pub fn select_all(&mut self, len: usize) -> bool {
        if !self.mode.is_multi() {
            return false;
        }
        self.positions = (0..len).collect();
        true
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    // =========================================================================
    // Remapping
    // =========================================================================

    /// Exchanges the selection membership of two positions.
    ///
    /// Used alongside swapping two items so that selection follows the item:
    /// a selected item stays selected at its new position and an unselected
    /// neighbour stays unselected.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let a_selected = self.positions.remove(&a);
        let b_selected = self.positions.remove(&b);
        if a_selected {
            self.positions.insert(b);
        }
        if b_selected {
            self.positions.insert(a);
        }
    }

    /// Follows a rotation of `len` items one slot towards the front
    /// (the first item moves to the end).
    pub fn rotate_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.positions = self
            .positions
            .iter()
            .map(|&pos| if pos == 0 { len - 1 } else { pos - 1 })
            .collect();
    }

    /// Follows a rotation of `len` items one slot towards the end
    /// (the last item moves to the front).
    pub fn rotate_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.positions = self
            .positions
            .iter()
            .map(|&pos| if pos + 1 >= len { 0 } else { pos + 1 })
            .collect();
    }

    /// Follows the insertion of `count` items at `at`.
    ///
    /// Positions at or after `at` move back by `count`.
    pub fn remap_inserted(&mut self, at: usize, count: usize) {
        if count == 0 {
            return;
        }
        self.positions = self
            .positions
            .iter()
            .map(|&pos| if pos >= at { pos + count } else { pos })
            .collect();
    }

    /// Follows the removal of the given positions.
    ///
    /// Removed positions leave the selection; every surviving selected
    /// position is renumbered to its index among the surviving items.
    /// `removed` need not be sorted.
    pub fn remap_removed(&mut self, removed: &[usize]) {
        let removed: BTreeSet<usize> = removed.iter().copied().collect();
        self.positions = self
            .positions
            .iter()
            .filter(|pos| !removed.contains(pos))
            .map(|&pos| pos - removed.range(..pos).count())
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(positions: &[usize], len: usize) -> Selection {
        let mut selection = Selection::new(SelectionMode::Multi);
        for &pos in positions {
            selection.select(pos, len);
        }
        selection
    }

    #[test]
    fn test_select_ignores_out_of_range_and_duplicates() {
        let mut selection = Selection::new(SelectionMode::Multi);
        assert!(selection.select(2, 3));
        assert!(!selection.select(2, 3));
        assert!(!selection.select(3, 3));
        assert_eq!(selection.positions(), vec![2]);
    }

    #[test]
    fn test_single_mode_keeps_one() {
        let mut selection = Selection::new(SelectionMode::Single);
        selection.select(0, 5);
        selection.select(4, 5);
        assert_eq!(selection.positions(), vec![4]);
        assert!(!selection.select_all(5));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_set_mode_single_trims_to_first() {
        let mut selection = multi(&[3, 1, 4], 5);
        selection.set_mode(SelectionMode::Single);
        assert_eq!(selection.positions(), vec![1]);
    }

    #[test]
    fn test_positions_are_sorted() {
        let selection = multi(&[4, 0, 2], 5);
        assert_eq!(selection.positions(), vec![0, 2, 4]);
        assert_eq!(selection.first(), Some(0));
        assert_eq!(selection.last(), Some(4));
    }

    #[test]
    fn test_swap_moves_membership() {
        let mut selection = multi(&[1], 3);
        selection.swap(1, 0);
        assert_eq!(selection.positions(), vec![0]);

        // Both selected: nothing observable changes.
        let mut both = multi(&[0, 1], 3);
        both.swap(0, 1);
        assert_eq!(both.positions(), vec![0, 1]);

        // Neither selected.
        let mut neither = multi(&[2], 3);
        neither.swap(0, 1);
        assert_eq!(neither.positions(), vec![2]);
    }

    #[test]
    fn test_rotate_up_wraps_front_to_back() {
        let mut selection = multi(&[0, 2], 4);
        selection.rotate_up(4);
        assert_eq!(selection.positions(), vec![1, 3]);
    }

    #[test]
    fn test_rotate_down_wraps_back_to_front() {
        let mut selection = multi(&[1, 3], 4);
        selection.rotate_down(4);
        assert_eq!(selection.positions(), vec![0, 2]);
    }

    #[test]
    fn test_remap_removed_compacts_survivors() {
        let mut selection = multi(&[0, 2, 5], 6);
        selection.remap_removed(&[4, 1, 2]);
        assert_eq!(selection.positions(), vec![0, 2]);
    }

    #[test]
    fn test_remap_removed_all_selected() {
        let mut selection = multi(&[1, 3], 4);
        selection.remap_removed(&[1, 3]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remap_inserted_shifts_tail() {
        let mut selection = multi(&[0, 2, 3], 4);
        selection.remap_inserted(2, 2);
        assert_eq!(selection.positions(), vec![0, 4, 5]);
    }
}
