//! Parser configuration
//!
//! Plain settings with builder-style setters and explicit validation.

use thiserror::Error;

/// Default bound on nested filters, parentheses and function calls
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result type for configuration validation
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Settings applied while compiling queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of filter selectors, parenthesised expressions and
    /// function argument lists
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "max_nesting_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
