//! Construction of list models.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use listbox_core::logging::targets;

use crate::config::ListBoxOptions;
use crate::error::Result;
use crate::input::{InputRegistry, InputSource};
use crate::render::{NullRenderer, Renderer};

use super::codec::{Codec, JsonCodec};
use super::hooks::{HookDecision, ListHooks, ListSignals};
use super::list_box::ListBox;
use super::selection::{Selection, SelectionMode};
use super::view::ListView;

type BeforeInitFn = Box<dyn FnOnce() + Send>;
type AfterInitFn<T> = Box<dyn FnOnce(&ListBox<T>) + Send>;

impl<T> ListBox<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + 'static,
{
    /// Starts building a list that encodes its items as JSON.
    pub fn builder() -> ListBoxBuilder<T> {
        ListBoxBuilder::new(JsonCodec::new())
    }
}

impl<T> ListBox<T>
where
    T: Clone + Send + 'static,
{
    /// Starts building a list with a custom codec.
    pub fn builder_with_codec(codec: impl Codec<T> + 'static) -> ListBoxBuilder<T> {
        ListBoxBuilder::new(codec)
    }
}

/// Builder for [`ListBox`].
///
/// The initial items come from the first available source:
///
/// 1. [`initial_items`](Self::initial_items),
/// 2. the `initial_encoded_values` option, decoded,
/// 3. the input source's current value, decoded,
/// 4. nothing (an empty list).
///
/// The input source is read at most once, here. Encoded values are always
/// handed to the codec; the default JSON codec decodes a blank value to an
/// empty list.
///
/// # Example
///
/// ```
/// use listbox::config::ListBoxOptions;
/// use listbox::input::{InputRegistry, SharedInput};
/// use listbox::model::ListBox;
///
/// let mut registry = InputRegistry::new();
/// let field = SharedInput::new(r#"["red","green"]"#);
/// registry.register("#colours", field.clone());
///
/// let list = ListBox::<String>::builder()
///     .options(ListBoxOptions::default().with_target_input(Some("#colours".into())))
///     .input_registry(registry)
///     .build()
///     .unwrap();
///
/// assert_eq!(list.items(), ["red", "green"]);
/// assert_eq!(field.value(), r#"["red","green"]"#);
/// ```
pub struct ListBoxBuilder<T> {
    options: ListBoxOptions,
    initial_items: Option<Vec<T>>,
    codec: Box<dyn Codec<T>>,
    renderer: Box<dyn Renderer<T>>,
    input: Option<Box<dyn InputSource>>,
    registry: Option<InputRegistry>,
    hooks: ListHooks<T>,
    before_init: Option<BeforeInitFn>,
    after_init: Option<AfterInitFn<T>>,
}

impl<T> fmt::Debug for ListBoxBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListBoxBuilder")
            .field("options", &self.options)
            .field("initial_items", &self.initial_items.as_ref().map(Vec::len))
            .field("has_input", &self.input.is_some())
            .field("registry", &self.registry)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

impl<T> ListBoxBuilder<T>
where
    T: Clone + Send + 'static,
{
    fn new(codec: impl Codec<T> + 'static) -> Self {
        Self {
            options: ListBoxOptions::default(),
            initial_items: None,
            codec: Box::new(codec),
            renderer: Box::new(NullRenderer),
            input: None,
            registry: None,
            hooks: ListHooks::new(),
            before_init: None,
            after_init: None,
        }
    }

    /// Replaces the plain-data options.
    pub fn options(mut self, options: ListBoxOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the literal initial items. They take precedence over any encoded
    /// source.
    pub fn initial_items(mut self, items: Vec<T>) -> Self {
        self.initial_items = Some(items);
        self
    }

    /// Sets the `initial_encoded_values` option.
    pub fn initial_encoded_values(mut self, encoded: impl Into<String>) -> Self {
        self.options.initial_encoded_values = Some(encoded.into());
        self
    }

    /// Sets the `multiselect` option.
    pub fn multiselect(mut self, multiselect: bool) -> Self {
        self.options.multiselect = multiselect;
        self
    }

    /// Sets the `auto_select_on_click` option.
    pub fn auto_select_on_click(mut self, enabled: bool) -> Self {
        self.options.auto_select_on_click = enabled;
        self
    }

    /// Replaces the codec.
    pub fn codec(mut self, codec: impl Codec<T> + 'static) -> Self {
        self.codec = Box::new(codec);
        self
    }

    /// Sets the presentation sink. Defaults to [`NullRenderer`].
    pub fn renderer(mut self, renderer: impl Renderer<T> + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Sets the input source directly. Takes precedence over
    /// [`input_registry`](Self::input_registry).
    pub fn input(mut self, input: impl InputSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    /// Looks the input source up in `registry` under the `target_input`
    /// option when building.
    pub fn input_registry(mut self, registry: InputRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replaces all before-hooks.
    pub fn hooks(mut self, hooks: ListHooks<T>) -> Self {
        self.hooks = hooks;
        self
    }

    /// See [`ListHooks::set_before_insert`].
    pub fn before_insert<F>(mut self, hook: F) -> Self
    where
        F: Fn(&[T], &ListView<'_, T>) -> HookDecision<Vec<T>> + Send + Sync + 'static,
    {
        self.hooks.set_before_insert(hook);
        self
    }

    /// See [`ListHooks::set_before_update`].
    pub fn before_update<F>(mut self, hook: F) -> Self
    where
        F: Fn(&[T], &[T], &ListView<'_, T>) -> HookDecision<Vec<T>> + Send + Sync + 'static,
    {
        self.hooks.set_before_update(hook);
        self
    }

    /// See [`ListHooks::set_before_remove`].
    pub fn before_remove<F>(mut self, hook: F) -> Self
    where
        F: Fn(&[usize], &ListView<'_, T>) -> HookDecision<Vec<usize>> + Send + Sync + 'static,
    {
        self.hooks.set_before_remove(hook);
        self
    }

    /// See [`ListHooks::set_before_clear`].
    pub fn before_clear<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ListView<'_, T>) -> bool + Send + Sync + 'static,
    {
        self.hooks.set_before_clear(hook);
        self
    }

    /// See [`ListHooks::set_before_render`].
    pub fn before_render<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ListView<'_, T>) -> bool + Send + Sync + 'static,
    {
        self.hooks.set_before_render(hook);
        self
    }

    /// Runs `f` at the start of [`build`](Self::build), before the list is
    /// populated.
    pub fn on_before_init<F>(mut self, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.before_init = Some(Box::new(f));
        self
    }

    /// Runs `f` with the finished list at the end of [`build`](Self::build),
    /// after the first render.
    pub fn on_after_init<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&ListBox<T>) + Send + 'static,
    {
        self.after_init = Some(Box::new(f));
        self
    }

    /// Populates, encodes and renders the list.
    ///
    /// Fails if an encoded initial value cannot be decoded or the initial
    /// items cannot be encoded.
    pub fn build(self) -> Result<ListBox<T>> {
        let Self {
            options,
            initial_items,
            codec,
            renderer,
            mut input,
            registry,
            hooks,
            before_init,
            after_init,
        } = self;

        if input.is_none()
            && let (Some(registry), Some(locator)) = (&registry, options.target_input.as_deref())
        {
            input = registry
                .resolve(locator)
                .map(|slot| Box::new(slot) as Box<dyn InputSource>);
            if input.is_none() {
                tracing::trace!(target: targets::MODEL, locator, "input locator not registered");
            }
        }

        if let Some(before_init) = before_init {
            before_init();
        }

        let items = match initial_items {
            Some(items) => items,
            None => {
                let encoded = options
                    .initial_encoded_values
                    .clone()
                    .or_else(|| input.as_ref().and_then(|input| input.read()));
                match encoded {
                    Some(encoded) => codec.decode(&encoded)?,
                    None => Vec::new(),
                }
            }
        };
        let encoded = codec.encode(&items)?;

        let mut list = ListBox {
            initial: items.clone(),
            items,
            selection: Selection::new(SelectionMode::from_multiselect(options.multiselect)),
            encoded,
            codec,
            renderer,
            input,
            hooks,
            signals: ListSignals::new(),
            auto_select_on_click: options.auto_select_on_click,
        };
        list.render();

        tracing::debug!(
            target: targets::MODEL,
            len = list.len(),
            multiselect = options.multiselect,
            "list initialized"
        );
        if let Some(after_init) = after_init {
            after_init(&list);
        }
        Ok(list)
    }
}
