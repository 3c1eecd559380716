use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Batching
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Expected fill, strict, or ignore, got {0:?}")]
    UnknownPolicy(String),

    #[error("The fill policy needs a fill value")]
    MissingFillValue,

    #[error("grouper() ended early: expected {expected} items in the final group, found {found}")]
    ShortFinalGroup { expected: usize, found: usize },
}

// =============================================================================
// Tombola
// =============================================================================

/// Raised by `pick()` when the container has nothing left.
///
/// `inspect()` treats this as the end-of-items signal, so it is kept apart
/// from every other failure kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("pick from empty {container}")]
pub struct LookupError {
    pub container: &'static str,
}

impl LookupError {
    pub fn new(container: &'static str) -> Self {
        Self { container }
    }
}

// =============================================================================
// Abstract class registry
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbcError {
    #[error("{type_name} is registered with {abc} but inherits none of its methods")]
    NoInheritedImplementation {
        abc: &'static str,
        type_name: &'static str,
    },

    #[error("{type_name} is not a subclass of {abc}")]
    NotASubclass {
        abc: &'static str,
        type_name: &'static str,
    },
}

// =============================================================================
// Configuration
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
