//! Friendship edges between users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Profile;

/// A friendship edge resolved to the counterpart's profile.
///
/// Friendships are undirected: the store holds a single row per unordered
/// pair, so lookups must match the user against either endpoint. Adapters
/// perform that symmetric match and return the *other* endpoint's profile
/// here, together with the edge metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendProfile {
    /// Primary key of the friendship row.
    pub friendship_id: Uuid,
    /// When the friendship was created.
    pub since: DateTime<Utc>,
    /// Profile of the friend on the other end of the edge.
    pub profile: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    fn sample_profile(name: &str) -> Profile {
        Profile {
            profile_id: Uuid::new_v4(),
            user_id: UserId::random(),
            name: name.to_owned(),
            studiengang: Some("Informatik".to_owned()),
            university: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn friend_profile_serializes_edge_metadata_and_profile() {
        let friend = FriendProfile {
            friendship_id: Uuid::new_v4(),
            since: Utc::now(),
            profile: sample_profile("Jonas"),
        };
        let value = serde_json::to_value(&friend).expect("serialize friend profile");
        assert!(value.get("friendshipId").is_some());
        assert_eq!(value["profile"]["name"], "Jonas");
        assert_eq!(value["profile"]["studiengang"], "Informatik");
    }
}
