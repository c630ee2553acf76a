//! Well-known metadata keys and their wire literals.
//!
//! Producers and consumers must agree on these literals byte for byte; they
//! are the only part of the envelope a relay inspects.

use std::fmt;
use std::str::FromStr;

use crate::error::MetadataError;

pub const ACTION_KEY: &str = "action";
pub const CONNECTION_ID_KEY: &str = "connId";
pub const CONNECTION_IDS_KEY: &str = "connIds";
pub const EXCLUDED_IDS_KEY: &str = "excludedIds";
pub const GROUP_NAME_KEY: &str = "groupName";
pub const GROUP_NAMES_KEY: &str = "groupNames";
pub const USER_ID_KEY: &str = "userId";
pub const USER_IDS_KEY: &str = "userIds";
pub const CLAIMS_KEY: &str = "claims";

/// How a key's value is represented on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEncoding {
    /// Stored as given
    Verbatim,
    /// Elements joined with `,`, no escaping
    CommaList,
    /// JSON array of claim entries
    ClaimsJson,
}

/// Closed vocabulary of addressing and identity fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WellKnownKey {
    Action,
    ConnectionId,
    ConnectionIdList,
    ExcludedIdList,
    GroupName,
    GroupNameList,
    UserId,
    UserIdList,
    ClaimsList,
}

impl WellKnownKey {
    /// Every key, in declaration order
    pub const ALL: [WellKnownKey; 9] = [
        WellKnownKey::Action,
        WellKnownKey::ConnectionId,
        WellKnownKey::ConnectionIdList,
        WellKnownKey::ExcludedIdList,
        WellKnownKey::GroupName,
        WellKnownKey::GroupNameList,
        WellKnownKey::UserId,
        WellKnownKey::UserIdList,
        WellKnownKey::ClaimsList,
    ];

    /// Wire literal for this key
    pub const fn as_str(self) -> &'static str {
        match self {
            WellKnownKey::Action => ACTION_KEY,
            WellKnownKey::ConnectionId => CONNECTION_ID_KEY,
            WellKnownKey::ConnectionIdList => CONNECTION_IDS_KEY,
            WellKnownKey::ExcludedIdList => EXCLUDED_IDS_KEY,
            WellKnownKey::GroupName => GROUP_NAME_KEY,
            WellKnownKey::GroupNameList => GROUP_NAMES_KEY,
            WellKnownKey::UserId => USER_ID_KEY,
            WellKnownKey::UserIdList => USER_IDS_KEY,
            WellKnownKey::ClaimsList => CLAIMS_KEY,
        }
    }

    pub const fn encoding(self) -> KeyEncoding {
        match self {
            WellKnownKey::Action
            | WellKnownKey::ConnectionId
            | WellKnownKey::GroupName
            | WellKnownKey::UserId => KeyEncoding::Verbatim,
            WellKnownKey::ConnectionIdList
            | WellKnownKey::ExcludedIdList
            | WellKnownKey::GroupNameList
            | WellKnownKey::UserIdList => KeyEncoding::CommaList,
            WellKnownKey::ClaimsList => KeyEncoding::ClaimsJson,
        }
    }

    /// Look up a key by wire literal (case-sensitive)
    pub fn from_wire(literal: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == literal)
    }
}

impl fmt::Display for WellKnownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WellKnownKey {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| MetadataError::UnknownKey(s.to_string()))
    }
}

impl AsRef<str> for WellKnownKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_literals() {
        assert_eq!(WellKnownKey::Action.as_str(), "action");
        assert_eq!(WellKnownKey::ConnectionId.as_str(), "connId");
        assert_eq!(WellKnownKey::ConnectionIdList.as_str(), "connIds");
        assert_eq!(WellKnownKey::ExcludedIdList.as_str(), "excludedIds");
        assert_eq!(WellKnownKey::GroupName.as_str(), "groupName");
        assert_eq!(WellKnownKey::GroupNameList.as_str(), "groupNames");
        assert_eq!(WellKnownKey::UserId.as_str(), "userId");
        assert_eq!(WellKnownKey::UserIdList.as_str(), "userIds");
        assert_eq!(WellKnownKey::ClaimsList.as_str(), "claims");
    }

    #[test]
    fn test_parse_and_display_agree() {
        for key in WellKnownKey::ALL {
            let parsed: WellKnownKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn test_unknown_literal_rejected() {
        let err = "UserId".parse::<WellKnownKey>().unwrap_err();
        assert_eq!(err, MetadataError::UnknownKey("UserId".to_string()));
        assert!(WellKnownKey::from_wire("").is_none());
    }

    #[test]
    fn test_encoding_rules() {
        assert_eq!(WellKnownKey::UserId.encoding(), KeyEncoding::Verbatim);
        assert_eq!(WellKnownKey::GroupNameList.encoding(), KeyEncoding::CommaList);
        assert_eq!(WellKnownKey::ClaimsList.encoding(), KeyEncoding::ClaimsJson);

        let lists = WellKnownKey::ALL
            .iter()
            .filter(|k| k.encoding() == KeyEncoding::CommaList)
            .count();
        assert_eq!(lists, 4);
    }
}
