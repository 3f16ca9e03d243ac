//! Tracing targets used by listbox.
//!
//! Listbox uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("listbox=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "listbox_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "listbox_core::signal";
    /// List model mutations and selection.
    pub const MODEL: &str = "listbox::model";
    /// Render step and input source writes.
    pub const RENDER: &str = "listbox::render";
    /// Transfers between models.
    pub const TRANSFER: &str = "listbox::transfer";
    /// Options loading.
    pub const CONFIG: &str = "listbox::config";
}
