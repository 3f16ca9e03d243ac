//! Handing items from one list to another.
//!
//! The receiving side only needs an [`InsertTarget`]; a transfer borrows it
//! mutably for the duration of the call and passes items by value. With
//! `copy == false` the items are then removed from the source through the
//! regular (hookable) removal path.
//!
//! Insertion into the target happens first, one item at a time. If the target
//! fails partway, the items it already accepted stay there and the source is
//! left untouched.

use listbox_core::logging::targets;

use crate::error::Result;

use super::list_box::ListBox;

/// Something items can be inserted into, one at a time.
pub trait InsertTarget<T> {
    /// Inserts `item`, returning the target's new length.
    fn insert(&mut self, item: T) -> Result<usize>;
}

impl<T> InsertTarget<T> for ListBox<T>
where
    T: Clone + Send + 'static,
{
    fn insert(&mut self, item: T) -> Result<usize> {
        ListBox::insert(self, item)
    }
}

impl<T> InsertTarget<T> for Vec<T> {
    fn insert(&mut self, item: T) -> Result<usize> {
        self.push(item);
        Ok(self.len())
    }
}

impl<T> ListBox<T>
where
    T: Clone + Send + 'static,
{
    /// Inserts every selected item into `other`, in position order.
    ///
    /// Unless `copy` is set, the selected items are then removed from this
    /// list with [`remove`](Self::remove). The removal runs even if `other`
    /// vetoed some insertions. Returns the number of items handed over.
    ///
    /// If `other` returns an error, the items inserted before it stay in
    /// `other` and this list is not modified.
    #[tracing::instrument(skip_all, target = "listbox::transfer", level = "debug")]
    pub fn transfer_selected_to<O>(&mut self, other: &mut O, copy: bool) -> Result<usize>
    where
        O: InsertTarget<T> + ?Sized,
    {
        let items = self.selected_items();
        if items.is_empty() {
            tracing::trace!(target: targets::TRANSFER, "no selection to transfer");
            return Ok(0);
        }

        let count = items.len();
        for item in items {
            other.insert(item)?;
        }
        if !copy {
            self.remove()?;
        }

        tracing::debug!(target: targets::TRANSFER, count, copy, "transferred selection");
        Ok(count)
    }

    /// Inserts the item at `position` into `other`.
    ///
    /// Unless `copy` is set, the item is then removed from this list with
    /// [`remove_by_index`](Self::remove_by_index). Returns 0 if the position
    /// is out of range, 1 otherwise.
    #[tracing::instrument(skip_all, target = "listbox::transfer", level = "debug")]
    pub fn transfer_by_index_to<O>(
        &mut self,
        other: &mut O,
        position: usize,
        copy: bool,
    ) -> Result<usize>
    where
        O: InsertTarget<T> + ?Sized,
    {
        let Some(item) = self.items.get(position).cloned() else {
            tracing::trace!(target: targets::TRANSFER, position, "transfer position out of range");
            return Ok(0);
        };

        other.insert(item)?;
        if !copy {
            self.remove_single(position)?;
        }

        tracing::debug!(target: targets::TRANSFER, position, copy, "transferred item");
        Ok(1)
    }

    /// Inserts the items at `positions` into `other`, in ascending position
    /// order.
    ///
    /// Duplicates and out-of-range positions are ignored. Positions refer to
    /// the list as it is before the call: when moving, each later position is
    /// adjusted for the items already removed. Returns the number of items
    /// handed over.
    #[tracing::instrument(skip_all, target = "listbox::transfer", level = "debug")]
    pub fn transfer_by_index_multi_to<O>(
        &mut self,
        other: &mut O,
        positions: &[usize],
        copy: bool,
    ) -> Result<usize>
    where
        O: InsertTarget<T> + ?Sized,
    {
        let len = self.items.len();
        let mut positions: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&pos| pos < len)
            .collect();
        positions.sort_unstable();
        positions.dedup();

        let mut removed = 0;
        for &position in &positions {
            let current = position - removed;
            let Some(item) = self.items.get(current).cloned() else {
                continue;
            };
            other.insert(item)?;
            if !copy {
                let before = self.items.len();
                self.remove_single(current)?;
                if self.items.len() < before {
                    removed += 1;
                }
            }
        }

        tracing::debug!(target: targets::TRANSFER, count = positions.len(), copy, "transferred items");
        Ok(positions.len())
    }
}
