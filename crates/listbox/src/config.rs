//! Plain-data options for a list model.
//!
//! [`ListBoxOptions`] holds the serializable part of a listbox configuration
//! and can be loaded from TOML. Function-valued options (initial items, item
//! renderer, codec, hooks) are set on the
//! [`ListBoxBuilder`](crate::model::ListBoxBuilder).
//!
//! ```
//! use listbox::config::ListBoxOptions;
//!
//! let options = ListBoxOptions::from_toml_str(r##"
//! target_input = "#selected-tags"
//! multiselect = false
//! "##).unwrap();
//!
//! assert_eq!(options.target_input.as_deref(), Some("#selected-tags"));
//! assert!(!options.multiselect);
//! assert!(options.auto_select_on_click);
//! ```

use serde::{Deserialize, Serialize};

use listbox_core::logging::targets;

use crate::error::Result;

/// Serializable listbox options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListBoxOptions {
    /// Selector identifying item elements in the presentation layer.
    /// [`MarkupRenderer::from_options`](crate::render::MarkupRenderer::from_options)
    /// uses it as the element tag.
    pub item_selector: String,
    /// Locator of the input source the encoded value is mirrored into.
    /// `None` disables the input source.
    pub target_input: Option<String>,
    /// Encoded items to populate the list from, used when no literal initial
    /// items are given.
    pub initial_encoded_values: Option<String>,
    /// Marker attached to selected rows by the presentation layer.
    pub selected_marker: Option<String>,
    /// Whether [`ListBox::click`](crate::model::ListBox::click) toggles the
    /// selection.
    pub auto_select_on_click: bool,
    /// Whether more than one position may be selected.
    pub multiselect: bool,
}

impl Default for ListBoxOptions {
    fn default() -> Self {
        Self {
            item_selector: "li".to_string(),
            target_input: Some("#listbox-value".to_string()),
            initial_encoded_values: None,
            selected_marker: Some("selected".to_string()),
            auto_select_on_click: true,
            multiselect: true,
        }
    }
}

impl ListBoxOptions {
    /// Parses options from a TOML document. Missing keys take their default.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: Self = toml::from_str(source)?;
        tracing::debug!(target: targets::CONFIG, ?options, "loaded listbox options");
        Ok(options)
    }

    /// Serializes the options as TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Sets the input source locator.
    pub fn with_target_input(mut self, locator: Option<String>) -> Self {
        self.target_input = locator;
        self
    }

    /// Sets the initial encoded values.
    pub fn with_initial_encoded_values(mut self, encoded: impl Into<String>) -> Self {
        self.initial_encoded_values = Some(encoded.into());
        self
    }

    /// Sets the multiselect flag.
    pub fn with_multiselect(mut self, multiselect: bool) -> Self {
        self.multiselect = multiselect;
        self
    }

    /// Sets the auto-select-on-click flag.
    pub fn with_auto_select_on_click(mut self, enabled: bool) -> Self {
        self.auto_select_on_click = enabled;
        self
    }
}
