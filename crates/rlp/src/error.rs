use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unable to encode value: {0}")]
    Unencodable(String),
}

impl EncodingError {
    pub fn unencodable(value: impl fmt::Display) -> Self {
        EncodingError::Unencodable(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EncodingError>;
