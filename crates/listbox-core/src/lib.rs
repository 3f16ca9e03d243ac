//! Core primitives for listbox.
//!
//! This crate provides the pieces the list model builds on:
//!
//! - **Signal/Slot System**: [`Signal`] for after-the-fact change notification
//! - **Logging**: `tracing` target constants
//!
//! # Signal/Slot Example
//!
//! ```
//! use listbox_core::Signal;
//!
//! let count_changed = Signal::<usize>::new();
//!
//! let conn_id = count_changed.connect(|count| {
//!     println!("now holding {} items", count);
//! });
//!
//! count_changed.emit(3);
//! count_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
