//! Lifecycle hooks and change signals.
//!
//! Extension points come in two flavours:
//!
//! - **Before-hooks** ([`ListHooks`]) run before an operation is applied and
//!   may veto it or substitute its input. There is at most one per operation.
//! - **After-signals** ([`ListSignals`]) are emitted once the operation has
//!   been applied and rendered. Any number of slots may be connected.
//!
//! Every successful mutation ends with [`ListSignals::changed`] carrying the
//! [`ChangeKind`] of the operation.
//!
//! Hooks and slots run synchronously inside the triggering call. A panicking
//! hook unwinds through the caller of the mutating method.

use std::fmt;

use listbox_core::Signal;

use super::view::ListView;

/// Outcome of a before-hook.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HookDecision<V> {
    /// Apply the operation to its original input.
    #[default]
    Proceed,
    /// Apply the operation to this input instead. An empty replacement is a
    /// veto.
    Replace(V),
    /// Skip the operation.
    Veto,
}

impl<X> HookDecision<Vec<X>> {
    /// Resolves the decision against the original batch.
    ///
    /// Returns the batch to apply, or `None` if the operation is vetoed.
    pub fn resolve(self, original: Vec<X>) -> Option<Vec<X>> {
        match self {
            Self::Proceed => Some(original),
            Self::Replace(replacement) if replacement.is_empty() => None,
            Self::Replace(replacement) => Some(replacement),
            Self::Veto => None,
        }
    }
}

/// The kind of mutation reported by [`ListSignals::changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Insert,
    Update,
    Remove,
    Clear,
    MoveUp,
    MoveDown,
}

impl ChangeKind {
    /// The event name: `insert`, `update`, `remove`, `clear`, `moveup` or
    /// `movedown`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Remove => "remove",
            Self::Clear => "clear",
            Self::MoveUp => "moveup",
            Self::MoveDown => "movedown",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of [`ListSignals::updated`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEvent<T> {
    /// The positions that were overwritten, ascending.
    pub positions: Vec<usize>,
    /// The items at those positions before the update.
    pub previous: Vec<T>,
    /// The replacement batch that was applied.
    pub replacement: Vec<T>,
}

type InsertHook<T> = Box<dyn Fn(&[T], &ListView<'_, T>) -> HookDecision<Vec<T>> + Send + Sync>;
type UpdateHook<T> =
    Box<dyn Fn(&[T], &[T], &ListView<'_, T>) -> HookDecision<Vec<T>> + Send + Sync>;
type RemoveHook<T> =
    Box<dyn Fn(&[usize], &ListView<'_, T>) -> HookDecision<Vec<usize>> + Send + Sync>;
type GateHook<T> = Box<dyn Fn(&ListView<'_, T>) -> bool + Send + Sync>;

/// Veto-capable hooks run before each operation.
///
/// All hooks are optional; an unset hook behaves like
/// [`HookDecision::Proceed`].
pub struct ListHooks<T> {
    before_insert: Option<InsertHook<T>>,
    before_update: Option<UpdateHook<T>>,
    before_remove: Option<RemoveHook<T>>,
    before_clear: Option<GateHook<T>>,
    before_render: Option<GateHook<T>>,
}

impl<T> Default for ListHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ListHooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListHooks")
            .field("before_insert", &self.before_insert.is_some())
            .field("before_update", &self.before_update.is_some())
            .field("before_remove", &self.before_remove.is_some())
            .field("before_clear", &self.before_clear.is_some())
            .field("before_render", &self.before_render.is_some())
            .finish()
    }
}

impl<T> ListHooks<T> {
    /// Creates an empty hook set.
    pub fn new() -> Self {
        Self {
            before_insert: None,
            before_update: None,
            before_remove: None,
            before_clear: None,
            before_render: None,
        }
    }

    /// Sets the hook run before `insert*`. It receives the whole batch once.
    pub fn set_before_insert<F>(&mut self, hook: F)
    where
        F: Fn(&[T], &ListView<'_, T>) -> HookDecision<Vec<T>> + Send + Sync + 'static,
    {
        self.before_insert = Some(Box::new(hook));
    }

    /// Sets the hook run before `update*`. It receives the items about to be
    /// overwritten and the replacement batch.
    pub fn set_before_update<F>(&mut self, hook: F)
    where
        F: Fn(&[T], &[T], &ListView<'_, T>) -> HookDecision<Vec<T>> + Send + Sync + 'static,
    {
        self.before_update = Some(Box::new(hook));
    }

    /// Sets the hook run before `remove*`. It receives the positions about to
    /// be removed and may narrow them.
    pub fn set_before_remove<F>(&mut self, hook: F)
    where
        F: Fn(&[usize], &ListView<'_, T>) -> HookDecision<Vec<usize>> + Send + Sync + 'static,
    {
        self.before_remove = Some(Box::new(hook));
    }

    /// Sets the hook run before `clear`. Return `false` to veto.
    pub fn set_before_clear<F>(&mut self, hook: F)
    where
        F: Fn(&ListView<'_, T>) -> bool + Send + Sync + 'static,
    {
        self.before_clear = Some(Box::new(hook));
    }

    /// Sets the hook run before each render. Return `false` to skip the input
    /// write, the renderer and the `rendered` signal.
    pub fn set_before_render<F>(&mut self, hook: F)
    where
        F: Fn(&ListView<'_, T>) -> bool + Send + Sync + 'static,
    {
        self.before_render = Some(Box::new(hook));
    }

    /// Removes every hook.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn before_insert(&self, batch: &[T], view: &ListView<'_, T>) -> HookDecision<Vec<T>> {
        self.before_insert
            .as_ref()
            .map_or(HookDecision::Proceed, |hook| hook(batch, view))
    }

    pub(crate) fn before_update(
        &self,
        current: &[T],
        replacement: &[T],
        view: &ListView<'_, T>,
    ) -> HookDecision<Vec<T>> {
        self.before_update
            .as_ref()
            .map_or(HookDecision::Proceed, |hook| hook(current, replacement, view))
    }

    pub(crate) fn before_remove(
        &self,
        positions: &[usize],
        view: &ListView<'_, T>,
    ) -> HookDecision<Vec<usize>> {
        self.before_remove
            .as_ref()
            .map_or(HookDecision::Proceed, |hook| hook(positions, view))
    }

    pub(crate) fn before_clear(&self, view: &ListView<'_, T>) -> bool {
        self.before_clear.as_ref().is_none_or(|hook| hook(view))
    }

    pub(crate) fn before_render(&self, view: &ListView<'_, T>) -> bool {
        self.before_render.as_ref().is_none_or(|hook| hook(view))
    }
}

/// Signals emitted after an operation has been applied and rendered.
pub struct ListSignals<T> {
    /// Emitted after `insert*` with the inserted batch.
    pub inserted: Signal<Vec<T>>,
    /// Emitted after `update*`.
    pub updated: Signal<UpdateEvent<T>>,
    /// Emitted after `remove*` with the removed positions (pre-removal
    /// numbering, ascending).
    pub removed: Signal<Vec<usize>>,
    /// Emitted after `clear`.
    pub cleared: Signal<()>,
    /// Emitted after each completed render.
    pub rendered: Signal<()>,
    /// Emitted after every successful mutation.
    pub changed: Signal<ChangeKind>,
}

impl<T: 'static> Default for ListSignals<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for ListSignals<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSignals")
            .field("inserted", &self.inserted)
            .field("updated", &self.updated)
            .field("removed", &self.removed)
            .field("cleared", &self.cleared)
            .field("rendered", &self.rendered)
            .field("changed", &self.changed)
            .finish()
    }
}

impl<T: 'static> ListSignals<T> {
    /// Creates a signal set with no connections.
    pub fn new() -> Self {
        Self {
            inserted: Signal::new(),
            updated: Signal::new(),
            removed: Signal::new(),
            cleared: Signal::new(),
            rendered: Signal::new(),
            changed: Signal::new(),
        }
    }
}
