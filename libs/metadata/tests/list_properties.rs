//! Property tests for list-valued and claim-valued keys.
//!
//! These hold for any input that avoids the list separator.

use message_metadata::{Claim, MetadataEnvelope};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_:.@-]{1,24}"
}

proptest! {
    #[test]
    fn prop_connection_ids_round_trip(ids in prop::collection::vec(identifier(), 1..16)) {
        let mut meta = MetadataEnvelope::new();
        meta.add_connection_ids(&ids);
        prop_assert_eq!(meta.try_get_connection_ids(), Some(ids));
    }

    #[test]
    fn prop_group_and_user_lists_round_trip(
        groups in prop::collection::vec(identifier(), 1..8),
        users in prop::collection::vec(identifier(), 1..8),
    ) {
        let mut meta = MetadataEnvelope::new();
        meta.add_groups_name(&groups).add_user_ids(&users);
        prop_assert_eq!(meta.try_get_groups_name(), Some(groups));
        prop_assert_eq!(meta.try_get_user_ids(), Some(users));
    }

    #[test]
    fn prop_last_write_wins(first in identifier(), second in identifier()) {
        let mut meta = MetadataEnvelope::new();
        meta.add_group_name(first).add_group_name(second.clone());
        prop_assert_eq!(meta.len(), 1);
        prop_assert_eq!(meta.try_get_group_name(), Some(second.as_str()));
    }

    #[test]
    fn prop_claims_round_trip(pairs in prop::collection::vec((identifier(), ".*"), 0..6)) {
        let claims: Vec<Claim> = pairs
            .into_iter()
            .map(|(claim_type, value)| Claim::new(claim_type, value))
            .collect();

        let mut meta = MetadataEnvelope::new();
        meta.add_claims(&claims).unwrap();
        prop_assert_eq!(meta.try_get_claims().unwrap(), Some(claims));
    }
}
