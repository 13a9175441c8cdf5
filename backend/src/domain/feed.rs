//! Friend feed projection: ordering, grouping, and relative-time labels.
//!
//! Everything in this module is pure. The aggregation service returns
//! friends in storage order; presentation order, the located/unlocated
//! split, and time labels are computed here so they stay trivially
//! testable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{LastPlace, Profile};

/// A friend's profile merged with their most recent check-in, if any.
///
/// Constructed per request and discarded after rendering; never cached
/// beyond a single aggregation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendWithLastPlace {
    /// The friend's profile.
    pub profile: Profile,
    /// The friend's most recent check-in; `None` when the friend has never
    /// checked in or their activity lookup failed.
    pub last_place: Option<LastPlace>,
}

/// The friend feed split into friends with and without a known last place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartitionedFriends {
    /// Friends with a recent check-in, most recent first.
    pub located: Vec<FriendWithLastPlace>,
    /// Friends without any known check-in, in the same relative order they
    /// arrived in.
    pub unlocated: Vec<FriendWithLastPlace>,
}

fn recency_epoch(friend: &FriendWithLastPlace) -> i64 {
    friend
        .last_place
        .as_ref()
        .map_or(0, |last_place| last_place.time.timestamp())
}

/// Sort friends by recency of their last place, most recent first.
///
/// A missing last place sorts as epoch 0, so friends without activity land
/// after everyone with one. The sort is stable: ties keep their input order.
pub fn sort_by_recency(friends: &mut [FriendWithLastPlace]) {
    friends.sort_by_key(|friend| std::cmp::Reverse(recency_epoch(friend)));
}

/// Sort and split the feed into located and unlocated groups.
///
/// Both groups are internally ordered by the same descending recency key.
pub fn partition_by_presence(mut friends: Vec<FriendWithLastPlace>) -> PartitionedFriends {
    sort_by_recency(&mut friends);
    let (located, unlocated) = friends
        .into_iter()
        .partition(|friend| friend.last_place.is_some());
    PartitionedFriends { located, unlocated }
}

/// Seconds of clock skew tolerated before a timestamp counts as future.
const FUTURE_SKEW_SECONDS: i64 = 10;

/// Render a relative-time label for a check-in timestamp.
///
/// Rules, evaluated against `now`:
/// - more than 10 seconds ahead of `now` renders `"In the future"` (small
///   forward skew is treated as just-now to absorb clock drift);
/// - under one minute ago renders `"Just now"`;
/// - under one hour ago renders `"{minutes} min ago"`;
/// - the same calendar day renders the check-in's wall-clock `"HH:MM"`;
/// - any earlier day renders `"{Mon} {D}"`, e.g. `"Jan 15"`.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use unimap_backend::domain::feed::format_relative_time;
///
/// let now = Utc::now();
/// assert_eq!(format_relative_time(now - Duration::seconds(30), now), "Just now");
/// assert_eq!(format_relative_time(now - Duration::minutes(45), now), "45 min ago");
/// ```
pub fn format_relative_time(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(time);
    let seconds = elapsed.num_seconds();

    if seconds < -FUTURE_SKEW_SECONDS {
        return "In the future".to_owned();
    }
    if seconds < 60 {
        return "Just now".to_owned();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes} min ago");
    }

    if time.date_naive() == now.date_naive() {
        return time.format("%H:%M").to_string();
    }

    time.format("%b %-d").to_string()
}
