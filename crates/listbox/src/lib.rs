//! Listbox - a stateful list model with selection, reordering and transfer.
//!
//! The model keeps an ordered list of items and the set of selected
//! positions, and keeps an encoded mirror of the items in sync with an input
//! source (for example a hidden form field). Presentation is delegated to a
//! [`Renderer`](render::Renderer).
//!
//! # Example
//!
//! ```
//! use listbox::prelude::*;
//!
//! let field = SharedInput::default();
//! let mut source = ListBox::<String>::builder()
//!     .initial_items(vec!["Rust".into(), "Go".into(), "Zig".into()])
//!     .input(field.clone())
//!     .build()
//!     .unwrap();
//! let mut chosen = ListBox::<String>::builder().build().unwrap();
//!
//! source.select(0);
//! source.select(2);
//! source.transfer_selected_to(&mut chosen, false).unwrap();
//!
//! assert_eq!(source.items(), ["Go"]);
//! assert_eq!(chosen.items(), ["Rust", "Zig"]);
//! assert_eq!(field.value(), r#"["Go"]"#);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod prelude;
pub mod render;

pub use error::{CodecError, ListBoxError, Result};
pub use listbox_core::{ConnectionId, Signal};
