//! Claim codec for the `claims` metadata key.
//!
//! A [`Claim`] is the authentication assertion as the application sees it.
//! On the wire only the `{type, value, valueType}` triple travels, as a JSON
//! array of [`ClaimEntry`] objects. The issuer is dropped and restored to
//! [`DEFAULT_ISSUER`] on the receiving side.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MetadataError, Result};

/// Value type assigned when a claim does not name one
pub const DEFAULT_VALUE_TYPE: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Issuer assigned to claims reconstructed from the wire
pub const DEFAULT_ISSUER: &str = "LOCAL AUTHORITY";

/// Native authentication claim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Claim {
    pub claim_type: String,
    pub value: String,
    pub value_type: String,
    pub issuer: String,
}

impl Claim {
    /// Create a string-typed claim from the default issuer
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_type: DEFAULT_VALUE_TYPE.to_string(),
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    /// Set value type
    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = value_type.into();
        self
    }

    /// Set issuer
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }
}

/// Transportable projection of a [`Claim`]
///
/// Older peers emit PascalCase field names, so those are accepted on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEntry {
    #[serde(rename = "type", alias = "Type")]
    pub claim_type: String,

    #[serde(alias = "Value")]
    pub value: String,

    #[serde(rename = "valueType", alias = "ValueType", default)]
    pub value_type: Option<String>,
}

impl ClaimEntry {
    pub fn from_claim(claim: &Claim) -> Self {
        Self {
            claim_type: claim.claim_type.clone(),
            value: claim.value.clone(),
            value_type: Some(claim.value_type.clone()),
        }
    }

    /// Rebuild the native claim, filling defaults for what the wire omits
    pub fn to_claim(&self) -> Claim {
        self.to_claim_with_default(DEFAULT_VALUE_TYPE)
    }

    fn to_claim_with_default(&self, default_value_type: &str) -> Claim {
        Claim {
            claim_type: self.claim_type.clone(),
            value: self.value.clone(),
            value_type: self
                .value_type
                .clone()
                .unwrap_or_else(|| default_value_type.to_string()),
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }
}

impl From<&Claim> for ClaimEntry {
    fn from(claim: &Claim) -> Self {
        ClaimEntry::from_claim(claim)
    }
}

impl From<ClaimEntry> for Claim {
    fn from(entry: ClaimEntry) -> Self {
        entry.to_claim()
    }
}

/// What to do when a `claims` value is present but undecodable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimsDecodePolicy {
    /// Report a [`MetadataError::MalformedClaims`] fault
    #[default]
    Strict,
    /// Log a warning and report the claims as absent
    Lenient,
}

/// Encodes and decodes the JSON claim array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimCodec {
    policy: ClaimsDecodePolicy,
    default_value_type: String,
}

impl Default for ClaimCodec {
    fn default() -> Self {
        Self::new(ClaimsDecodePolicy::Strict, DEFAULT_VALUE_TYPE)
    }
}

impl ClaimCodec {
    pub fn new(policy: ClaimsDecodePolicy, default_value_type: impl Into<String>) -> Self {
        Self {
            policy,
            default_value_type: default_value_type.into(),
        }
    }

    /// Strict codec with the default value type
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient codec with the default value type
    pub fn lenient() -> Self {
        Self::new(ClaimsDecodePolicy::Lenient, DEFAULT_VALUE_TYPE)
    }

    pub fn policy(&self) -> ClaimsDecodePolicy {
        self.policy
    }

    pub fn default_value_type(&self) -> &str {
        &self.default_value_type
    }

    /// Serialize claims to the wire JSON array
    pub fn encode<'a, I>(&self, claims: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a Claim>,
    {
        let entries: Vec<ClaimEntry> = claims.into_iter().map(ClaimEntry::from_claim).collect();
        serde_json::to_string(&entries).map_err(|e| MetadataError::ClaimsEncoding(e.to_string()))
    }

    /// Decode a wire JSON array.
    ///
    /// `Ok(None)` is only returned by the lenient policy for a malformed
    /// payload; the strict policy returns the fault.
    pub fn decode(&self, payload: &str) -> Result<Option<Vec<Claim>>> {
        match serde_json::from_str::<Vec<ClaimEntry>>(payload) {
            Ok(entries) => Ok(Some(
                entries
                    .iter()
                    .map(|entry| entry.to_claim_with_default(&self.default_value_type))
                    .collect(),
            )),
            Err(e) => match self.policy {
                ClaimsDecodePolicy::Strict => {
                    Err(MetadataError::malformed_claims(e.to_string(), payload.len()))
                }
                ClaimsDecodePolicy::Lenient => {
                    warn!(
                        error = %e,
                        payload_len = payload.len(),
                        "Discarding malformed claims payload"
                    );
                    Ok(None)
                }
            },
        }
    }
}
