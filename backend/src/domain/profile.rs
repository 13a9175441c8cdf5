//! User identity and profile data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdValidationError {
    /// The identifier was empty.
    EmptyId,
    /// The identifier was not a canonical UUID.
    InvalidId,
}

impl fmt::Display for UserIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
        }
    }
}

impl std::error::Error for UserIdValidationError {}

/// Stable user identifier stored as a UUID.
///
/// The raw string form is kept alongside the parsed UUID so serialisation
/// round-trips exactly the input that validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")] Uuid,
    String,
);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserIdValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    /// Wrap an already-parsed UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserIdValidationError> {
        if id.is_empty() {
            return Err(UserIdValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserIdValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserIdValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Identity-linked user profile record.
///
/// One profile exists per authenticated identity; the store enforces that
/// invariant. `studiengang` and `university` are optional self-reported
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Primary key of the profile row.
    pub profile_id: Uuid,
    /// Identity this profile belongs to.
    pub user_id: UserId,
    /// Display name shown to friends.
    pub name: String,
    /// Degree programme, if the user filled it in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studiengang: Option<String>,
    /// University, if the user filled it in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}
