//! Read-side row types mapped from the Diesel schema.

use chrono::{DateTime, Utc};
use diesel::prelude::{Queryable, Selectable};
use uuid::Uuid;

use crate::domain::{Place, Profile, UserId};
use crate::outbound::persistence::schema::{activities, friendships, places, profiles};

/// A row from the `profiles` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProfileRow {
    pub(crate) profile_id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) name: String,
    pub(crate) studiengang: Option<String>,
    pub(crate) university: Option<String>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            profile_id: row.profile_id,
            user_id: UserId::from_uuid(row.user_id),
            name: row.name,
            studiengang: row.studiengang,
            university: row.university,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A row from the `friendships` table.
///
/// Friendship edges are undirected; either column may hold the caller.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = friendships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FriendshipRow {
    pub(crate) friendship_id: Uuid,
    pub(crate) user1_id: Uuid,
    pub(crate) user2_id: Uuid,
    pub(crate) created_at: DateTime<Utc>,
}

impl FriendshipRow {
    /// The user on the other end of the edge from `user_id`.
    pub(crate) fn counterpart_of(&self, user_id: Uuid) -> Uuid {
        if self.user1_id == user_id {
            self.user2_id
        } else {
            self.user1_id
        }
    }
}

/// A row from the `activities` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ActivityRow {
    pub(crate) activity_id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) place_id: Uuid,
    pub(crate) time: DateTime<Utc>,
    pub(crate) picture: Option<String>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

/// A row from the `places` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = places)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlaceRow {
    pub(crate) place_id: Uuid,
    pub(crate) name: String,
    pub(crate) location: Option<String>,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        Self {
            place_id: row.place_id,
            name: row.name,
            location: row.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart_resolves_either_orientation() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let row = FriendshipRow {
            friendship_id: Uuid::new_v4(),
            user1_id: a,
            user2_id: b,
            created_at: Utc::now(),
        };

        assert_eq!(row.counterpart_of(a), b);
        assert_eq!(row.counterpart_of(b), a);
    }
}
