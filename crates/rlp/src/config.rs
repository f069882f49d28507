use serde::{Deserialize, Serialize};

/// Encoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Bytes pre-allocated for the output buffer
    pub initial_capacity: usize,
    /// Maximum list nesting, a top-level list being depth 1. `None` is unlimited.
    pub max_depth: Option<usize>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            max_depth: None,
        }
    }
}

impl EncoderConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: EncoderConfig = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
        assert_eq!(config, EncoderConfig::default().with_max_depth(16));

        let config: EncoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EncoderConfig::default());
    }
}
