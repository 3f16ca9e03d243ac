//! Moving items one slot towards the front or the back.
//!
//! Items move by swapping with their neighbour. When a moving item already
//! sits at the boundary the whole list rotates by one slot instead, so the
//! item wraps around to the other end. Selection membership travels with the
//! items in both cases.

use listbox_core::logging::targets;

use crate::error::Result;

use super::hooks::ChangeKind;
use super::list_box::ListBox;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn change_kind(self) -> ChangeKind {
        match self {
            Self::Up => ChangeKind::MoveUp,
            Self::Down => ChangeKind::MoveDown,
        }
    }
}

impl<T> ListBox<T>
where
    T: Clone + Send + 'static,
{
    /// Moves every selected item one slot towards the front.
    ///
    /// If the first item is selected, the list rotates instead: the first item
    /// goes to the end and everything else shifts up. Returns `false` when
    /// nothing is selected.
    pub fn move_up(&mut self) -> Result<bool> {
        let positions = self.selection.positions();
        self.shift(positions, Direction::Up)
    }

    /// Moves every selected item one slot towards the back.
    ///
    /// If the last item is selected, the list rotates instead: the last item
    /// goes to the front. Returns `false` when nothing is selected.
    pub fn move_down(&mut self) -> Result<bool> {
        let positions = self.selection.positions();
        self.shift(positions, Direction::Down)
    }

    /// Moves the item at `position` one slot towards the front, ignoring the
    /// selection. Position 0 rotates the list.
    pub fn move_up_by_index(&mut self, position: usize) -> Result<bool> {
        if position >= self.items.len() {
            return Ok(false);
        }
        self.shift(vec![position], Direction::Up)
    }

    /// Moves the item at `position` one slot towards the back, ignoring the
    /// selection. The last position rotates the list.
    pub fn move_down_by_index(&mut self, position: usize) -> Result<bool> {
        if position >= self.items.len() {
            return Ok(false);
        }
        self.shift(vec![position], Direction::Down)
    }

    /// `positions` must be ascending and in range.
    #[tracing::instrument(skip_all, target = "listbox::model", level = "trace")]
    fn shift(&mut self, positions: Vec<usize>, direction: Direction) -> Result<bool> {
        let len = self.items.len();
        let (Some(&front), Some(&back)) = (positions.first(), positions.last()) else {
            tracing::trace!(target: targets::MODEL, ?direction, "nothing to move");
            return Ok(false);
        };

        let mut items = self.items.clone();
        let mut selection = self.selection.clone();
        match direction {
            Direction::Up if front == 0 => {
                items.rotate_left(1);
                selection.rotate_up(len);
            }
            Direction::Down if back + 1 == len => {
                items.rotate_right(1);
                selection.rotate_down(len);
            }
            Direction::Up => {
                for &pos in &positions {
                    items.swap(pos, pos - 1);
                    selection.swap(pos, pos - 1);
                }
            }
            Direction::Down => {
                for &pos in positions.iter().rev() {
                    items.swap(pos, pos + 1);
                    selection.swap(pos, pos + 1);
                }
            }
        }
        self.commit(items, selection)?;

        tracing::debug!(target: targets::MODEL, ?direction, count = positions.len(), "moved items");
        self.signals.changed.emit(direction.change_kind());
        Ok(true)
    }
}
