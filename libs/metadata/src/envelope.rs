//! Metadata envelope attached to messages exchanged with the relay.
//!
//! The envelope wraps a private string map. Well-known fields are written
//! through typed builders that apply the key's encoding rule, and read back
//! through typed accessors that undo it. Two raw write primitives exist:
//! [`MetadataEnvelope::upsert`] (insert or overwrite, used by every builder)
//! and [`MetadataEnvelope::insert_unique`] (insert only, used by bulk import).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::claims::{Claim, ClaimCodec};
use crate::error::{MetadataError, Result};
use crate::keys::WellKnownKey;
use crate::list::{decode_list, encode_list};

/// String-keyed side channel carrying routing and identity data
///
/// Entries are unordered. Once the envelope is handed to the transport it
/// should be treated as frozen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataEnvelope {
    entries: HashMap<String, String>,
}

impl MetadataEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value
    pub fn upsert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        trace!(key = %key, value_len = value.len(), "metadata upsert");
        self.entries.insert(key, value);
        self
    }

    /// Insert a value, failing if the key is already present.
    ///
    /// On failure the existing value is left untouched.
    pub fn insert_unique(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            debug!(key = %key, "rejecting duplicate metadata key");
            return Err(MetadataError::duplicate_key(key));
        }
        self.entries.insert(key, value.into());
        Ok(self)
    }

    /// Insert or overwrite an arbitrary (not necessarily well-known) key
    pub fn add_or_update_metadata(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.upsert(key, value)
    }

    fn set(&mut self, key: WellKnownKey, value: impl Into<String>) -> &mut Self {
        self.upsert(key.as_str(), value)
    }

    pub fn add_action(&mut self, action_name: impl Into<String>) -> &mut Self {
        self.set(WellKnownKey::Action, action_name)
    }

    pub fn add_connection_id(&mut self, connection_id: impl Into<String>) -> &mut Self {
        self.set(WellKnownKey::ConnectionId, connection_id)
    }

    pub fn add_connection_ids<S: AsRef<str>>(&mut self, connection_ids: &[S]) -> &mut Self {
        self.set(WellKnownKey::ConnectionIdList, encode_list(connection_ids))
    }

    /// Connections that must not receive the message
    pub fn add_excluded_ids<S: AsRef<str>>(&mut self, excluded_ids: &[S]) -> &mut Self {
        self.set(WellKnownKey::ExcludedIdList, encode_list(excluded_ids))
    }

    pub fn add_group_name(&mut self, group_name: impl Into<String>) -> &mut Self {
        self.set(WellKnownKey::GroupName, group_name)
    }

    pub fn add_groups_name<S: AsRef<str>>(&mut self, group_names: &[S]) -> &mut Self {
        self.set(WellKnownKey::GroupNameList, encode_list(group_names))
    }

    pub fn add_user_id(&mut self, user_id: impl Into<String>) -> &mut Self {
        self.set(WellKnownKey::UserId, user_id)
    }

    pub fn add_user_ids<S: AsRef<str>>(&mut self, user_ids: &[S]) -> &mut Self {
        self.set(WellKnownKey::UserIdList, encode_list(user_ids))
    }

    /// Encode claims as a JSON array under `claims`
    pub fn add_claims<'a, I>(&mut self, claims: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Claim>,
    {
        self.add_claims_with(&ClaimCodec::default(), claims)
    }

    pub fn add_claims_with<'a, I>(&mut self, codec: &ClaimCodec, claims: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Claim>,
    {
        let encoded = codec.encode(claims)?;
        Ok(self.set(WellKnownKey::ClaimsList, encoded))
    }

    /// Copy every entry of another envelope into this one.
    ///
    /// `None` or an empty source is a no-op. Import stops at the first key
    /// that already exists here; entries copied before it stay in place.
    pub fn add_metadata(&mut self, source: Option<&MetadataEnvelope>) -> Result<&mut Self> {
        match source {
            Some(meta) => self.add_metadata_map(meta.iter()),
            None => Ok(self),
        }
    }

    /// Copy entries from any key/value source with the same collision rule
    /// as [`MetadataEnvelope::add_metadata`]
    pub fn add_metadata_map<I, K, V>(&mut self, source: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut copied = 0usize;
        for (key, value) in source {
            self.insert_unique(key, value)?;
            copied += 1;
        }
        if copied > 0 {
            debug!(copied, total = self.entries.len(), "imported metadata entries");
        }
        Ok(self)
    }

    pub fn try_get_action(&self) -> Option<&str> {
        self.get(WellKnownKey::Action)
    }

    pub fn try_get_connection_id(&self) -> Option<&str> {
        self.get(WellKnownKey::ConnectionId)
    }

    pub fn try_get_connection_ids(&self) -> Option<Vec<String>> {
        self.get_list(WellKnownKey::ConnectionIdList)
    }

    pub fn try_get_excluded_ids(&self) -> Option<Vec<String>> {
        self.get_list(WellKnownKey::ExcludedIdList)
    }

    pub fn try_get_group_name(&self) -> Option<&str> {
        self.get(WellKnownKey::GroupName)
    }

    pub fn try_get_groups_name(&self) -> Option<Vec<String>> {
        self.get_list(WellKnownKey::GroupNameList)
    }

    pub fn try_get_user_id(&self) -> Option<&str> {
        self.get(WellKnownKey::UserId)
    }

    pub fn try_get_user_ids(&self) -> Option<Vec<String>> {
        self.get_list(WellKnownKey::UserIdList)
    }

    /// Decode the claims array.
    ///
    /// `Ok(None)` when the key is absent. A present but malformed payload is
    /// a [`MetadataError::MalformedClaims`] fault, never "absent".
    pub fn try_get_claims(&self) -> Result<Option<Vec<Claim>>> {
        self.try_get_claims_with(&ClaimCodec::default())
    }

    /// Decode the claims array with an explicit codec and its decode policy
    pub fn try_get_claims_with(&self, codec: &ClaimCodec) -> Result<Option<Vec<Claim>>> {
        match self.get(WellKnownKey::ClaimsList) {
            Some(payload) => codec.decode(payload),
            None => Ok(None),
        }
    }

    /// Raw value for any key
    pub fn try_get_metadata(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Raw value for a well-known key
    pub fn get(&self, key: WellKnownKey) -> Option<&str> {
        self.try_get_metadata(key.as_str())
    }

    fn get_list(&self, key: WellKnownKey) -> Option<Vec<String>> {
        self.get(key).map(decode_list)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Hand the entries over to the transport
    pub fn into_map(self) -> HashMap<String, String> {
        self.entries
    }
}

impl From<HashMap<String, String>> for MetadataEnvelope {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl From<MetadataEnvelope> for HashMap<String, String> {
    fn from(envelope: MetadataEnvelope) -> Self {
        envelope.into_map()
    }
}

impl FromIterator<(String, String)> for MetadataEnvelope {
    /// Later duplicates overwrite earlier ones, as with a received map
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
