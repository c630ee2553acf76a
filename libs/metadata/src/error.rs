//! # Metadata Error Types
//!
//! Absent keys are not errors: accessors report them through `Option`.
//! Everything here is either a decode fault on a structured field or a
//! programmer error at the call site.

use thiserror::Error;

/// Metadata envelope operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// Insert-only write hit a key that already holds a value
    #[error("Duplicate metadata key '{key}': bulk import and insert_unique never overwrite")]
    DuplicateKey { key: String },

    /// `claims` value is present but is not a JSON array of claim entries
    #[error("Malformed claims payload ({payload_len} bytes): {reason}")]
    MalformedClaims { reason: String, payload_len: usize },

    /// Claims could not be rendered to JSON
    #[error("Claims encoding failed: {0}")]
    ClaimsEncoding(String),

    /// String is not one of the well-known wire literals
    #[error("Unknown metadata key '{0}'")]
    UnknownKey(String),

    /// Configuration could not be read, parsed or validated
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl MetadataError {
    /// Create a duplicate key error
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        MetadataError::DuplicateKey { key: key.into() }
    }

    /// Create a malformed claims error from the decoder failure
    pub fn malformed_claims(reason: impl Into<String>, payload_len: usize) -> Self {
        MetadataError::MalformedClaims {
            reason: reason.into(),
            payload_len,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        MetadataError::Config(msg.into())
    }

    /// True for faults raised while decoding a value received from a peer
    pub fn is_decode_fault(&self) -> bool {
        matches!(self, MetadataError::MalformedClaims { .. })
    }

    /// True for faults caused by the calling code rather than the wire
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            MetadataError::DuplicateKey { .. } | MetadataError::UnknownKey(_)
        )
    }
}

impl From<toml::de::Error> for MetadataError {
    fn from(err: toml::de::Error) -> Self {
        MetadataError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        MetadataError::Config(format!("Failed to read config file: {}", err))
    }
}

/// Result type alias for metadata operations
pub type Result<T> = std::result::Result<T, MetadataError>;
