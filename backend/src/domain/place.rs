//! Places and the "last place" projection of a check-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A named location users can check in at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Primary key of the place row.
    pub place_id: Uuid,
    /// Human-readable place name.
    pub name: String,
    /// Free-form location hint (building, campus area), if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A user's most recent check-in joined with its place data.
///
/// The store's join can yield one or many place rows per activity; adapters
/// normalize that cardinality artifact into `places` always being a list, so
/// downstream code never branches on record-versus-list shapes. An empty
/// list means the place reference did not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LastPlace {
    /// Primary key of the activity row.
    pub activity_id: Uuid,
    /// When the check-in happened; the recency key.
    pub time: DateTime<Utc>,
    /// Place rows joined to the activity, normalized to a list.
    pub places: Vec<Place>,
}

impl LastPlace {
    /// Render the joined place names for display.
    ///
    /// Multiple joined places are joined with `", "`; an unresolved place
    /// reference renders as `"location unknown"`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use unimap_backend::domain::{LastPlace, Place};
    /// use uuid::Uuid;
    ///
    /// let last_place = LastPlace {
    ///     activity_id: Uuid::new_v4(),
    ///     time: Utc::now(),
    ///     places: vec![],
    /// };
    /// assert_eq!(last_place.place_names(), "location unknown");
    /// ```
    pub fn place_names(&self) -> String {
        if self.places.is_empty() {
            return "location unknown".to_owned();
        }
        self.places
            .iter()
            .map(|place| place.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
