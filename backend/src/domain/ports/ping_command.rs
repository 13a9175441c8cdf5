//! Driving port for the friend ping action.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, UserId};

/// Success payload of a ping.
///
/// A ping currently produces only a structured log event; there is no
/// persisted notification row. The receipt carries the user-facing
/// confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PingReceipt {
    /// Confirmation shown to the caller, e.g. `"Pinged Jonas!"`.
    pub message: String,
}

impl PingReceipt {
    /// Build the receipt for a successfully pinged friend.
    pub fn for_friend(name: &str) -> Self {
        Self {
            message: format!("Pinged {name}!"),
        }
    }
}

/// Domain use-case port for pinging a friend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PingCommand: Send + Sync {
    /// Notify `target` that `caller` pinged them.
    ///
    /// Fails with a fixed user-facing message when the target is the caller,
    /// not a friend, or cannot be resolved; see the service for the exact
    /// sequence of checks.
    async fn ping_friend(&self, caller: &UserId, target: &UserId) -> Result<PingReceipt, Error>;
}

/// Fixture ping command used until persistence is wired.
///
/// With no friendship data behind it, every ping fails the friendship
/// check, which is the behaviour an empty fixture feed implies.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePingCommand;

#[async_trait]
impl PingCommand for FixturePingCommand {
    async fn ping_friend(&self, caller: &UserId, target: &UserId) -> Result<PingReceipt, Error> {
        if caller == target {
            return Err(Error::forbidden("You cannot ping yourself"));
        }
        Err(Error::forbidden("You can only ping friends"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_formats_the_confirmation_message() {
        let receipt = PingReceipt::for_friend("Jonas");
        assert_eq!(receipt.message, "Pinged Jonas!");
    }

    #[tokio::test]
    async fn fixture_rejects_self_ping() {
        let caller = UserId::random();
        let error = FixturePingCommand
            .ping_friend(&caller, &caller)
            .await
            .expect_err("self ping fails");
        assert_eq!(error.message(), "You cannot ping yourself");
    }

    #[tokio::test]
    async fn fixture_rejects_everyone_else_as_non_friend() {
        let error = FixturePingCommand
            .ping_friend(&UserId::random(), &UserId::random())
            .await
            .expect_err("fixture has no friends");
        assert_eq!(error.message(), "You can only ping friends");
    }
}
