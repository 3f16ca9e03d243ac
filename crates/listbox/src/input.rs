//! The input source a list model mirrors its encoded value into.
//!
//! In a form, this is the hidden field submitted alongside the document. The
//! model reads it at most once (during construction, when no initial items
//! are given) and writes it on every render.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// A single string-valued slot.
pub trait InputSource: Send {
    /// Reads the current value, if the slot holds one.
    fn read(&self) -> Option<String>;

    /// Replaces the value.
    fn write(&mut self, value: &str);
}

/// An in-memory input slot that can be shared between a model and its host.
///
/// Clones refer to the same slot.
///
/// # Example
///
/// ```
/// use listbox::input::{InputSource, SharedInput};
///
/// let field = SharedInput::new(r#"["a"]"#);
/// let mut handle = field.clone();
/// handle.write(r#"["a","b"]"#);
/// assert_eq!(field.value(), r#"["a","b"]"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedInput {
    value: Arc<Mutex<String>>,
}

impl SharedInput {
    /// Creates a slot holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(value.into())),
        }
    }

    /// Returns a copy of the current value.
    pub fn value(&self) -> String {
        self.value.lock().clone()
    }

    /// Replaces the current value.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock() = value.into();
    }
}

impl InputSource for SharedInput {
    fn read(&self) -> Option<String> {
        Some(self.value())
    }

    fn write(&mut self, value: &str) {
        self.set_value(value);
    }
}

/// Resolves input locators (such as `#listbox-value`) to input slots.
///
/// Stands in for the host document: a model built with a `target_input`
/// locator looks the slot up here.
#[derive(Debug, Clone, Default)]
pub struct InputRegistry {
    inputs: HashMap<String, SharedInput>,
}

impl InputRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `input` under `locator`, replacing any previous slot.
    pub fn register(&mut self, locator: impl Into<String>, input: SharedInput) {
        self.inputs.insert(locator.into(), input);
    }

    /// Returns the slot registered under `locator`.
    pub fn resolve(&self, locator: &str) -> Option<SharedInput> {
        self.inputs.get(locator).cloned()
    }

    /// Returns the slot registered under `locator`, creating an empty one if
    /// none exists.
    pub fn get_or_create(&mut self, locator: &str) -> SharedInput {
        self.inputs.entry(locator.to_string()).or_default().clone()
    }

    /// Number of registered slots.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns `true` if no slot is registered.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_input_clones_share_value() {
        let input = SharedInput::new("a");
        let other = input.clone();
        other.set_value("b");
        assert_eq!(input.read().as_deref(), Some("b"));
    }

    #[test]
    fn test_registry_resolve() {
        let mut registry = InputRegistry::new();
        assert!(registry.resolve("#missing").is_none());

        let created = registry.get_or_create("#listbox-value");
        created.set_value("[]");
        assert_eq!(registry.resolve("#listbox-value").unwrap().value(), "[]");
        assert_eq!(registry.len(), 1);
    }
}
