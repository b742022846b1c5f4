//! Error types for snapmood.

use crate::notice::Notice;
use thiserror::Error;

/// A shared error type for the snapmood crates.
///
/// Preset lookups never produce this type: an unknown preset id is an
/// ordinary `None`. Errors only arise at the boundaries (parsing family
/// names, building requests, reading configuration and dev session files).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapmoodError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A family name that does not name any preset family
    #[error("Unknown preset family: '{0}'")]
    UnknownFamily(String),

    /// The preset needs a base image but none was supplied
    #[error("Preset '{preset_id}' requires a source image")]
    MissingSource { preset_id: String },

    /// The supplied source image is unusable
    #[error("Invalid source image: {0}")]
    InvalidSource(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SnapmoodError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Maps this error to the notice shown to the user.
    pub fn notice(&self) -> Notice {
        match self {
            Self::NotFound { .. } | Self::UnknownFamily(_) => Notice::PresetUnavailable,
            Self::MissingSource { .. } => Notice::NoImageSelected,
            Self::InvalidSource(_) => Notice::UnsupportedFormat,
            Self::Io { .. } | Self::Serialization { .. } | Self::Config(_) => Notice::Unknown,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SnapmoodError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SnapmoodError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SnapmoodError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SnapmoodError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SnapmoodError>`.
pub type Result<T> = std::result::Result<T, SnapmoodError>;
