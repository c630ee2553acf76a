//! # Message Metadata Envelope
//!
//! Typed side channel carried next to a message payload between an
//! application server and the relay. Routing targets (connections, groups,
//! users, exclusions) and authentication claims travel as a flat
//! string-to-string map under a fixed set of well-known keys.
//!
//! ## Wire Format
//!
//! | Key | Value |
//! |---|---|
//! | `action`, `connId`, `groupName`, `userId` | verbatim string |
//! | `connIds`, `excludedIds`, `groupNames`, `userIds` | comma-joined, unescaped |
//! | `claims` | JSON array of `{type, value, valueType}` |
//!
//! ## Usage
//!
//! ```rust
//! use message_metadata::{Claim, MetadataEnvelope};
//!
//! let mut meta = MetadataEnvelope::new();
//! meta.add_action("broadcast")
//!     .add_groups_name(&["lobby", "ops"])
//!     .add_excluded_ids(&["conn-7"]);
//! meta.add_claims(&[Claim::new("role", "admin")]).unwrap();
//!
//! assert_eq!(meta.try_get_groups_name().unwrap(), ["lobby", "ops"]);
//! assert_eq!(meta.try_get_claims().unwrap().unwrap()[0].value, "admin");
//! assert!(meta.try_get_user_id().is_none());
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Transport or connection handling
//! - Validation of identifier semantics
//! - Token issuance

pub mod claims;
pub mod config;
pub mod envelope;
pub mod error;
pub mod keys;
pub mod list;

pub use claims::{
    Claim, ClaimCodec, ClaimEntry, ClaimsDecodePolicy, DEFAULT_ISSUER, DEFAULT_VALUE_TYPE,
};
pub use config::{ClaimsConfigToml, MetadataConfig};
pub use envelope::MetadataEnvelope;
pub use error::{MetadataError, Result};
pub use keys::{KeyEncoding, WellKnownKey};
pub use list::{decode_list, encode_list};
