//! Encoding the item list to and from its persisted string form.
//!
//! A list model mirrors its items into a single string (typically the value
//! of a hidden form field). The [`Codec`] trait defines that mapping. Any
//! codec must satisfy the round-trip law `decode(encode(x)) == x`.
//!
//! - [`JsonCodec`]: the default, a JSON array via `serde_json`
//! - [`FnCodec`]: wraps a pair of closures

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;

/// Converts an item sequence to and from a string.
pub trait Codec<T>: Send + Sync {
    /// Encodes the items.
    fn encode(&self, items: &[T]) -> Result<String, CodecError>;

    /// Decodes a previously encoded string.
    fn decode(&self, encoded: &str) -> Result<Vec<T>, CodecError>;
}

/// Encodes items as a JSON array.
///
/// Blank input decodes to an empty list.
pub struct JsonCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    /// Creates a JSON codec.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonCodec")
    }
}

impl<T> Codec<T> for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, items: &[T]) -> Result<String, CodecError> {
        Ok(serde_json::to_string(items)?)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<T>, CodecError> {
        if encoded.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(encoded)?)
    }
}

type EncodeFn<T> = Box<dyn Fn(&[T]) -> Result<String, CodecError> + Send + Sync>;
type DecodeFn<T> = Box<dyn Fn(&str) -> Result<Vec<T>, CodecError> + Send + Sync>;

/// A codec built from an encode and a decode closure.
///
/// # Example
///
/// ```
/// use listbox::model::{Codec, FnCodec};
///
/// let codec = FnCodec::new(
///     |items: &[String]| Ok(items.join(",")),
///     |encoded: &str| Ok(encoded.split(',').filter(|s| !s.is_empty()).map(String::from).collect()),
/// );
///
/// let items = vec!["a".to_string(), "b".to_string()];
/// let encoded = codec.encode(&items).unwrap();
/// assert_eq!(encoded, "a,b");
/// assert_eq!(codec.decode(&encoded).unwrap(), items);
/// ```
pub struct FnCodec<T> {
    encode: EncodeFn<T>,
    decode: DecodeFn<T>,
}

impl<T> FnCodec<T> {
    /// Creates a codec from the two closures.
    pub fn new<E, D>(encode: E, decode: D) -> Self
    where
        E: Fn(&[T]) -> Result<String, CodecError> + Send + Sync + 'static,
        D: Fn(&str) -> Result<Vec<T>, CodecError> + Send + Sync + 'static,
    {
        Self {
            encode: Box::new(encode),
            decode: Box::new(decode),
        }
    }
}

impl<T> fmt::Debug for FnCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCodec")
    }
}

impl<T> Codec<T> for FnCodec<T> {
    fn encode(&self, items: &[T]) -> Result<String, CodecError> {
        (self.encode)(items)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<T>, CodecError> {
        (self.decode)(encoded)
    }
}
