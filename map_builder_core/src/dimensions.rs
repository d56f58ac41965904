use std::num::ParseIntError;

use serde::{Deserialize, Serialize};

/// Grid size assumed when no dimensions have been configured.
pub const DEFAULT_DIMENSIONS: Dimensions = Dimensions {
    width: 20,
    height: 20,
};

/// The active width/height pair governing all boundary checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

/// Represents errors from configuring dimensions out of raw form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid width '{value}': {source}")]
    InvalidWidth {
        value: String,
        source: ParseIntError,
    },
    #[error("Invalid height '{value}': {source}")]
    InvalidHeight {
        value: String,
        source: ParseIntError,
    },
}

/// Holds the dimensions configured for one editing session.
///
/// The host owns scoping and persistence (one context per client session);
/// the type serializes so a session store can round-trip it. Nothing else
/// in the crate holds dimension state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionContext {
    dims: Option<Dimensions>,
}

impl DimensionContext {
    /// Creates a context with no dimensions configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a new width/height pair from raw form input.
    ///
    /// Both values must parse before either is stored, so a failure leaves
    /// any previously configured pair untouched.
    pub fn set(&mut self, width: &str, height: &str) -> Result<Dimensions, ConfigError> {
        let parsed_width = width
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidWidth {
                value: width.to_string(),
                source,
            })?;
        let parsed_height = height
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidHeight {
                value: height.to_string(),
                source,
            })?;
        let dims = Dimensions {
            width: parsed_width,
            height: parsed_height,
        };
        self.dims = Some(dims);
        Ok(dims)
    }

    /// Returns the configured dimensions, or the 20x20 default when unset.
    pub fn get(&self) -> Dimensions {
        self.dims.unwrap_or(DEFAULT_DIMENSIONS)
    }

    /// Returns the configured dimensions without masking absence.
    pub fn current(&self) -> Option<Dimensions> {
        self.dims
    }

    /// Checks whether dimensions have been explicitly configured.
    pub fn is_set(&self) -> bool {
        self.dims.is_some()
    }

    /// Removes any stored dimensions. Idempotent.
    pub fn clear(&mut self) {
        self.dims = None;
    }
}
