pub mod config;
pub mod encode;
pub mod error;
pub mod traits;
pub mod util;
pub mod value;

pub use bytes::Bytes;
pub use config::EncoderConfig;
pub use encode::{length_prefix, Encoder, LIST_OFFSET, STRING_OFFSET};
pub use error::{EncodingError, Result};
pub use traits::ByteSerializable;
pub use value::Encodable;

use tracing::{debug, trace};

pub fn encode(value: &Encodable) -> Result<Bytes> {
    encode_with(value, &EncoderConfig::default())
}

pub fn encode_with(value: &Encodable, config: &EncoderConfig) -> Result<Bytes> {
    let mut encoder = Encoder::with_config(config.clone());
    match encoder.append(value) {
        Ok(()) => {
            let encoded = encoder.finish();
            trace!(len = encoded.len(), "rlp encoded value");
            Ok(encoded)
        }
        Err(err) => {
            debug!(%err, "rlp encoding failed");
            Err(err)
        }
    }
}

/// Objects, booleans and numbers that are not whole and non-negative are rejected.
pub fn encode_json(value: &serde_json::Value) -> Result<Bytes> {
    let value = Encodable::try_from(value).map_err(|err| {
        debug!(%err, "rlp encoding failed");
        err
    })?;
    encode(&value)
}
