use crate::error::{EncodingError, Result};
use crate::traits::ByteSerializable;
use crate::util::{hex_to_bytes, is_hex_prefixed, strip_hex_prefix};
use bytes::Bytes;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

#[derive(Clone)]
pub enum Encodable {
    Empty,
    Integer(u64),
    Text(String),
    RawBytes(Bytes),
    Encapsulated(Arc<dyn ByteSerializable + Send + Sync>),
    List(Vec<Encodable>),
}

impl Encodable {
    pub fn encapsulated<T>(value: T) -> Self
    where
        T: ByteSerializable + Send + Sync + 'static,
    {
        Encodable::Encapsulated(Arc::new(value))
    }

    pub fn from_f64(value: f64) -> Result<Self> {
        if value == 0.0 {
            Ok(Encodable::Empty)
        } else if value.is_finite() && value.fract() == 0.0 && value > 0.0 && value < U64_LIMIT {
            Ok(Encodable::Integer(value as u64))
        } else {
            Err(EncodingError::unencodable(value))
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Encodable::List(_))
    }

    /// Normalizes a scalar into the byte string that gets framed. Hex text
    /// decodes up to the first invalid digit pair. Lists have no scalar payload.
    pub fn payload(&self) -> Result<Bytes> {
        match self {
            Encodable::Empty => Ok(Bytes::new()),
            Encodable::Integer(value) => Ok(integer_bytes(*value)),
            Encodable::Text(text) if is_hex_prefixed(text) => {
                Ok(Bytes::from(hex_to_bytes(&strip_hex_prefix(text))))
            }
            Encodable::Text(text) => Ok(Bytes::copy_from_slice(text.as_bytes())),
            Encodable::RawBytes(bytes) => Ok(bytes.clone()),
            Encodable::Encapsulated(object) => Ok(object.to_bytes()),
            Encodable::List(_) => Err(EncodingError::unencodable(self)),
        }
    }
}

fn integer_bytes(value: u64) -> Bytes {
    let bytes = value.to_be_bytes();
    match bytes.iter().position(|&b| b != 0) {
        Some(first_non_zero) => Bytes::copy_from_slice(&bytes[first_non_zero..]),
        None => Bytes::new(),
    }
}

// Nested lists are flattened before dropping so depth never reaches the stack.
impl Drop for Encodable {
    fn drop(&mut self) {
        if let Encodable::List(items) = self {
            let mut pending = std::mem::take(items);
            while let Some(mut item) = pending.pop() {
                if let Encodable::List(children) = &mut item {
                    pending.append(children);
                }
            }
        }
    }
}

impl Default for Encodable {
    fn default() -> Self {
        Encodable::Empty
    }
}

impl fmt::Display for Encodable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encodable::Empty => write!(f, "null"),
            Encodable::Integer(value) => write!(f, "{}", value),
            Encodable::Text(text) => write!(f, "{}", text),
            Encodable::RawBytes(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            Encodable::Encapsulated(_) => write!(f, "<encapsulated>"),
            Encodable::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Debug for Encodable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encodable::Empty => write!(f, "Empty"),
            Encodable::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Encodable::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Encodable::RawBytes(bytes) => f.debug_tuple("RawBytes").field(bytes).finish(),
            Encodable::Encapsulated(object) => f
                .debug_tuple("Encapsulated")
                .field(&object.to_bytes())
                .finish(),
            Encodable::List(items) => f.debug_tuple("List").field(items).finish(),
        }
    }
}

impl From<()> for Encodable {
    fn from(_: ()) -> Self {
        Encodable::Empty
    }
}

macro_rules! impl_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Encodable {
                fn from(value: $t) -> Self {
                    Encodable::Integer(value as u64)
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, usize);

impl From<&str> for Encodable {
    fn from(value: &str) -> Self {
        Encodable::Text(value.to_string())
    }
}

impl From<String> for Encodable {
    fn from(value: String) -> Self {
        Encodable::Text(value)
    }
}

impl From<Bytes> for Encodable {
    fn from(value: Bytes) -> Self {
        Encodable::RawBytes(value)
    }
}

impl From<Vec<u8>> for Encodable {
    fn from(value: Vec<u8>) -> Self {
        Encodable::RawBytes(Bytes::from(value))
    }
}

impl From<&[u8]> for Encodable {
    fn from(value: &[u8]) -> Self {
        Encodable::RawBytes(Bytes::copy_from_slice(value))
    }
}

impl<const N: usize> From<[u8; N]> for Encodable {
    fn from(value: [u8; N]) -> Self {
        Encodable::RawBytes(Bytes::copy_from_slice(&value))
    }
}

impl From<Vec<Encodable>> for Encodable {
    fn from(items: Vec<Encodable>) -> Self {
        Encodable::List(items)
    }
}

impl<T: Into<Encodable>> From<Option<T>> for Encodable {
    fn from(value: Option<T>) -> Self {
        value.map_or(Encodable::Empty, Into::into)
    }
}

impl TryFrom<f64> for Encodable {
    type Error = EncodingError;

    fn try_from(value: f64) -> Result<Self> {
        Encodable::from_f64(value)
    }
}

impl TryFrom<&Value> for Encodable {
    type Error = EncodingError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Encodable::Empty),
            Value::Number(number) => match number.as_u64() {
                Some(int) => Ok(Encodable::Integer(int)),
                None => number
                    .as_f64()
                    .ok_or_else(|| EncodingError::unencodable(number))
                    .and_then(Encodable::from_f64),
            },
            Value::String(text) => Ok(Encodable::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(Encodable::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Encodable::List),
            Value::Bool(_) | Value::Object(_) => Err(EncodingError::unencodable(value)),
        }
    }
}

impl TryFrom<Value> for Encodable {
    type Error = EncodingError;

    fn try_from(value: Value) -> Result<Self> {
        Encodable::try_from(&value)
    }
}

/// Builds an [`Encodable::List`] from values convertible into [`Encodable`].
///
/// ```
/// use rlp_encoder::{encode, rlp_list};
///
/// let encoded = encode(&rlp_list!["cat", "dog"]).unwrap();
/// assert_eq!(&encoded[..], &[0xc8, 0x83, b'c', b'a', b't', 0x83, b'd', b'o', b'g']);
/// ```
#[macro_export]
macro_rules! rlp_list {
    () => {
        $crate::Encodable::List(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Encodable::List(::std::vec![$($crate::Encodable::from($item)),+])
    };
}
