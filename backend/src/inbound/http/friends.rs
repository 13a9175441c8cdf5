//! Friends API handlers.
//!
//! ```text
//! GET  /api/v1/friends
//! POST /api/v1/friends/{user_id}/ping
//! ```
//!
//! The handlers resolve the caller from the session, call the driving
//! ports, and render the `{success, message, data?}` envelope. Presentation
//! order, grouping, and relative-time labels come from the pure
//! [`crate::domain::feed`] functions.

use actix_web::{get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::feed::{format_relative_time, partition_by_presence};
use crate::domain::{Error, FriendWithLastPlace, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// A friend's most recent check-in, rendered for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LastPlaceCard {
    /// Primary key of the activity row.
    pub activity_id: Uuid,
    /// When the check-in happened.
    pub time: DateTime<Utc>,
    /// Joined place names, or `"location unknown"`.
    pub place_names: String,
    /// Relative-time label, e.g. `"Just now"` or `"45 min ago"`.
    pub last_seen: String,
}

/// One friend entry of the feed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendCard {
    /// Primary key of the friend's profile.
    pub profile_id: Uuid,
    /// The friend's user id, the ping target.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Degree programme, if filled in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studiengang: Option<String>,
    /// University, if filled in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    /// Most recent check-in, absent for unlocated friends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_place: Option<LastPlaceCard>,
}

impl FriendCard {
    fn from_friend(friend: FriendWithLastPlace, now: DateTime<Utc>) -> Self {
        let FriendWithLastPlace {
            profile,
            last_place,
        } = friend;
        Self {
            profile_id: profile.profile_id,
            user_id: profile.user_id,
            name: profile.name,
            studiengang: profile.studiengang,
            university: profile.university,
            last_place: last_place.map(|last_place| LastPlaceCard {
                activity_id: last_place.activity_id,
                time: last_place.time,
                place_names: last_place.place_names(),
                last_seen: format_relative_time(last_place.time, now),
            }),
        }
    }
}

/// Feed payload: friends split by whether a last place is known.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendFeedData {
    /// Friends with a known last place, most recent first.
    pub located: Vec<FriendCard>,
    /// Friends without a known last place.
    pub unlocated: Vec<FriendCard>,
}

/// Response envelope for `GET /api/v1/friends`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendFeedResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// User-facing status message.
    pub message: String,
    /// The partitioned feed.
    pub data: FriendFeedData,
}

impl FriendFeedResponse {
    fn from_feed(feed: Vec<FriendWithLastPlace>, now: DateTime<Utc>) -> Self {
        let partitioned = partition_by_presence(feed);
        let into_cards = |friends: Vec<FriendWithLastPlace>| {
            friends
                .into_iter()
                .map(|friend| FriendCard::from_friend(friend, now))
                .collect()
        };
        Self {
            success: true,
            message: "Friends loaded".to_owned(),
            data: FriendFeedData {
                located: into_cards(partitioned.located),
                unlocated: into_cards(partitioned.unlocated),
            },
        }
    }
}

/// Response envelope for a ping.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Confirmation message, e.g. `"Pinged Jonas!"`.
    pub message: String,
}

/// Return the caller's friends with their last known places.
#[utoipa::path(
    get,
    path = "/api/v1/friends",
    responses(
        (status = 200, description = "Aggregated friend feed", body = FriendFeedResponse),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 503, description = "Friend data unavailable", body = Error)
    ),
    tags = ["friends"],
    operation_id = "listFriends"
)]
#[get("/friends")]
pub async fn list_friends(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<FriendFeedResponse>> {
    let caller = session.require_user_id()?;
    let feed = state.friend_feed.friends_with_last_places(&caller).await?;
    Ok(web::Json(FriendFeedResponse::from_feed(feed, Utc::now())))
}

/// Ping a friend.
#[utoipa::path(
    post,
    path = "/api/v1/friends/{user_id}/ping",
    params(
        ("user_id" = String, Path, description = "Target user id")
    ),
    responses(
        (status = 200, description = "Ping sent", body = PingResponse),
        (status = 400, description = "Malformed target id", body = Error),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Self-ping or non-friend target", body = Error),
        (status = 404, description = "Profile missing", body = Error),
        (status = 500, description = "Unexpected failure", body = Error),
        (status = 503, description = "Friendship verification unavailable", body = Error)
    ),
    tags = ["friends"],
    operation_id = "pingFriend"
)]
#[post("/friends/{user_id}/ping")]
pub async fn ping_friend(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PingResponse>> {
    let caller = session.require_user_id()?;
    let target = UserId::new(path.into_inner())
        .map_err(|err| Error::invalid_request(format!("invalid target user id: {err}")))?;
    let receipt = state.ping.ping_friend(&caller, &target).await?;
    Ok(web::Json(PingResponse {
        success: true,
        message: receipt.message,
    }))
}
