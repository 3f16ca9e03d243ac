//! Commonly used types.
//!
//! ```
//! use listbox::prelude::*;
//! ```

pub use crate::config::ListBoxOptions;
pub use crate::error::{CodecError, ListBoxError};
pub use crate::input::{InputRegistry, InputSource, SharedInput};
pub use crate::model::{
    ChangeKind, ClickAction, Codec, FnCodec, HookDecision, InsertTarget, JsonCodec, ListBox,
    ListBoxBuilder, ListHooks, ListSignals, ListView, Selection, SelectionMode, UpdateEvent,
};
pub use crate::render::{MarkupRenderer, NullRenderer, RenderedOutput, RenderedRow, Renderer};
pub use listbox_core::{ConnectionId, Signal};
