//! The list model and its building blocks.
//!
//! A [`ListBox`] keeps an ordered list of items together with a set of
//! selected positions, and mirrors the items into an encoded string (by
//! default a JSON array) that is written to an input source on every render.
//!
//! # Core Types
//!
//! - `ListBox`: the model; built with `ListBoxBuilder`
//! - `Selection`: sorted set of selected positions, with the remapping rules
//!   that keep it pointing at the same items across mutations
//! - `Codec`: converts the items to and from their encoded form
//! - `ListHooks`: veto-capable hooks run before each operation
//! - `ListSignals`: signals emitted after each operation
//! - `ListView`: read-only snapshot handed to hooks and renderers
//!
//! # Example
//!
//! ```
//! use listbox::model::{HookDecision, ListBox};
//!
//! let mut list = ListBox::<String>::builder()
//!     .initial_items(vec!["a".into(), "b".into()])
//!     .before_insert(|batch, _view| {
//!         if batch.iter().any(|item| item.is_empty()) {
//!             HookDecision::Veto
//!         } else {
//!             HookDecision::Proceed
//!         }
//!     })
//!     .build()
//!     .unwrap();
//!
//! list.signals().changed.connect(|kind| {
//!     println!("list changed: {kind}");
//! });
//!
//! assert_eq!(list.insert(String::new()).unwrap(), 2);
//! assert_eq!(list.insert("c".into()).unwrap(), 3);
//! ```

mod builder;
pub mod codec;
mod hooks;
mod list_box;
mod reorder;
pub mod selection;
mod transfer;
mod view;

pub use builder::ListBoxBuilder;
pub use codec::{Codec, FnCodec, JsonCodec};
pub use hooks::{ChangeKind, HookDecision, ListHooks, ListSignals, UpdateEvent};
pub use list_box::{ClickAction, ListBox};
pub use selection::{Selection, SelectionMode};
pub use transfer::InsertTarget;
pub use view::ListView;
