//! TOML configuration for envelope decoding.
//!
//! ```toml
//! [claims]
//! policy = "strict"            # or "lenient"
//! default_value_type = "http://www.w3.org/2001/XMLSchema#string"
//! ```
//!
//! Every field is optional; missing fields take the protocol defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::claims::{ClaimCodec, ClaimsDecodePolicy, DEFAULT_VALUE_TYPE};
use crate::error::{MetadataError, Result};

/// Top-level metadata configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct MetadataConfig {
    /// Claim codec settings
    #[serde(default)]
    pub claims: ClaimsConfigToml,
}

/// Claim codec settings in TOML format
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ClaimsConfigToml {
    /// Handling of malformed `claims` payloads
    pub policy: Option<ClaimsDecodePolicy>,

    /// Value type given to decoded claims that carry none
    pub default_value_type: Option<String>,
}

impl ClaimsConfigToml {
    /// Convert to a claim codec, filling defaults
    pub fn to_codec(&self) -> ClaimCodec {
        ClaimCodec::new(
            self.policy.unwrap_or_default(),
            self.default_value_type
                .clone()
                .unwrap_or_else(|| DEFAULT_VALUE_TYPE.to_string()),
        )
    }
}

impl MetadataConfig {
    /// Create from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Create from file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(
            path = %path.display(),
            policy = ?config.claims.policy.unwrap_or_default(),
            "Loaded metadata configuration"
        );
        Ok(config)
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| MetadataError::config(format!("Failed to serialize to TOML: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(value_type) = &self.claims.default_value_type {
            if value_type.trim().is_empty() {
                return Err(MetadataError::config(
                    "claims.default_value_type cannot be empty",
                ));
            }
        }
        Ok(())
    }

    /// Claim codec described by this configuration
    pub fn claim_codec(&self) -> ClaimCodec {
        self.claims.to_codec()
    }
}
