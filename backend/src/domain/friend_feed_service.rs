//! Friend feed aggregation service.
//!
//! Joins the caller's friendships with each friend's most recent check-in.
//! Per-friend activity lookups run concurrently with fire-and-await-all
//! semantics; one friend's failure degrades that friend to "no last place"
//! instead of failing the batch.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::warn;

use crate::domain::ports::{ActivityRepository, FriendFeedQuery, FriendshipRepository};
use crate::domain::{Error, FriendWithLastPlace, UserId};

/// Friend feed service implementing the driving port.
#[derive(Clone)]
pub struct FriendFeedService<F, A> {
    friendship_repo: Arc<F>,
    activity_repo: Arc<A>,
}

impl<F, A> FriendFeedService<F, A> {
    /// Create a new service with the given repositories.
    pub fn new(friendship_repo: Arc<F>, activity_repo: Arc<A>) -> Self {
        Self {
            friendship_repo,
            activity_repo,
        }
    }
}

#[async_trait]
impl<F, A> FriendFeedQuery for FriendFeedService<F, A>
where
    F: FriendshipRepository,
    A: ActivityRepository,
{
    async fn friends_with_last_places(
        &self,
        caller: &UserId,
    ) -> Result<Vec<FriendWithLastPlace>, Error> {
        let friends = self
            .friendship_repo
            .find_friend_profiles(caller)
            .await
            .map_err(|error| {
                warn!(%caller, %error, "friendship lookup failed");
                Error::service_unavailable("Could not load friends")
            })?;

        let lookups = friends
            .iter()
            .map(|friend| self.activity_repo.find_latest_for_user(&friend.profile.user_id));
        let latest_places = join_all(lookups).await;

        Ok(friends
            .into_iter()
            .zip(latest_places)
            .map(|(friend, lookup)| {
                let last_place = match lookup {
                    Ok(last_place) => last_place,
                    Err(error) => {
                        // Isolated degradation: the feed still renders this
                        // friend, just without a location.
                        warn!(
                            friend = %friend.profile.user_id,
                            %error,
                            "activity lookup failed; treating friend as unlocated"
                        );
                        None
                    }
                };
                FriendWithLastPlace {
                    profile: friend.profile,
                    last_place,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        ActivityRepositoryError, FriendshipRepositoryError, MockActivityRepository,
        MockFriendshipRepository,
    };
    use crate::domain::{ErrorCode, FriendProfile, LastPlace, Place, Profile};
    use chrono::Utc;
    use uuid::Uuid;

    fn profile_for(user_id: &UserId, name: &str) -> Profile {
        Profile {
            profile_id: Uuid::new_v4(),
            user_id: user_id.clone(),
            name: name.to_owned(),
            studiengang: None,
            university: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn friend_of(user_id: &UserId, name: &str) -> FriendProfile {
        FriendProfile {
            friendship_id: Uuid::new_v4(),
            since: Utc::now(),
            profile: profile_for(user_id, name),
        }
    }

    fn last_place_at_mensa() -> LastPlace {
        LastPlace {
            activity_id: Uuid::new_v4(),
            time: Utc::now(),
            places: vec![Place {
                place_id: Uuid::new_v4(),
                name: "Mensa".to_owned(),
                location: None,
            }],
        }
    }

    fn make_service(
        friendships: MockFriendshipRepository,
        activities: MockActivityRepository,
    ) -> FriendFeedService<MockFriendshipRepository, MockActivityRepository> {
        FriendFeedService::new(Arc::new(friendships), Arc::new(activities))
    }

    #[tokio::test]
    async fn issues_one_activity_lookup_per_friend() {
        let caller = UserId::random();
        let friend_ids: Vec<UserId> = (0..3).map(|_| UserId::random()).collect();
        let friends: Vec<FriendProfile> = friend_ids
            .iter()
            .enumerate()
            .map(|(i, id)| friend_of(id, &format!("friend-{i}")))
            .collect();

        let mut friendships = MockFriendshipRepository::new();
        friendships
            .expect_find_friend_profiles()
            .times(1)
            .return_once(move |_| Ok(friends));

        let mut activities = MockActivityRepository::new();
        activities
            .expect_find_latest_for_user()
            .times(3)
            .returning(|_| Ok(None));

        let feed = make_service(friendships, activities)
            .friends_with_last_places(&caller)
            .await
            .expect("aggregation succeeds");
        assert_eq!(feed.len(), 3);
    }

    #[tokio::test]
    async fn empty_friend_list_issues_no_activity_lookups() {
        let mut friendships = MockFriendshipRepository::new();
        friendships
            .expect_find_friend_profiles()
            .times(1)
            .return_once(|_| Ok(Vec::new()));

        let mut activities = MockActivityRepository::new();
        activities.expect_find_latest_for_user().times(0);

        let feed = make_service(friendships, activities)
            .friends_with_last_places(&UserId::random())
            .await
            .expect("aggregation succeeds");
        assert!(feed.is_empty());
    }

    #[tokio::test]
    async fn friendship_failure_fails_the_call_without_activity_lookups() {
        let mut friendships = MockFriendshipRepository::new();
        friendships
            .expect_find_friend_profiles()
            .times(1)
            .return_once(|_| Err(FriendshipRepositoryError::query("relation missing")));

        let mut activities = MockActivityRepository::new();
        activities.expect_find_latest_for_user().times(0);

        let error = make_service(friendships, activities)
            .friends_with_last_places(&UserId::random())
            .await
            .expect_err("aggregation fails");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(error.message(), "Could not load friends");
    }

    #[tokio::test]
    async fn activity_failure_degrades_to_no_last_place_for_that_friend_only() {
        let caller = UserId::random();
        let failing_id = UserId::random();
        let healthy_id = UserId::random();
        let friends = vec![
            friend_of(&failing_id, "flaky"),
            friend_of(&healthy_id, "steady"),
        ];

        let mut friendships = MockFriendshipRepository::new();
        friendships
            .expect_find_friend_profiles()
            .times(1)
            .return_once(move |_| Ok(friends));

        let mut activities = MockActivityRepository::new();
        let failing = failing_id.clone();
        activities
            .expect_find_latest_for_user()
            .withf(move |id| *id == failing)
            .times(1)
            .return_once(|_| Err(ActivityRepositoryError::connection("pool exhausted")));
        let healthy = healthy_id.clone();
        activities
            .expect_find_latest_for_user()
            .withf(move |id| *id == healthy)
            .times(1)
            .return_once(|_| Ok(Some(last_place_at_mensa())));

        let feed = make_service(friendships, activities)
            .friends_with_last_places(&caller)
            .await
            .expect("one failing friend must not fail the batch");

        assert_eq!(feed.len(), 2);
        let flaky = feed
            .iter()
            .find(|friend| friend.profile.user_id == failing_id)
            .expect("flaky friend present");
        assert!(flaky.last_place.is_none());
        let steady = feed
            .iter()
            .find(|friend| friend.profile.user_id == healthy_id)
            .expect("steady friend present");
        assert!(steady.last_place.is_some());
    }

    #[tokio::test]
    async fn friend_without_activity_yields_none_not_an_error() {
        let friend_id = UserId::random();
        let friends = vec![friend_of(&friend_id, "quiet")];

        let mut friendships = MockFriendshipRepository::new();
        friendships
            .expect_find_friend_profiles()
            .times(1)
            .return_once(move |_| Ok(friends));

        let mut activities = MockActivityRepository::new();
        activities
            .expect_find_latest_for_user()
            .times(1)
            .return_once(|_| Ok(None));

        let feed = make_service(friendships, activities)
            .friends_with_last_places(&UserId::random())
            .await
            .expect("aggregation succeeds");
        assert_eq!(feed.len(), 1);
        assert!(feed[0].last_place.is_none());
    }
}
