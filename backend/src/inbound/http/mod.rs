//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod friends;
pub mod health;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
