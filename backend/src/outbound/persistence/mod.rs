//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Implements the domain's repository ports against the application schema.
//! Each adapter owns its error mapping into the port's error type; connection
//! management lives in [`pool`].

mod diesel_activity_repository;
mod diesel_friendship_repository;
mod diesel_profile_repository;
mod error_mapping;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_activity_repository::DieselActivityRepository;
pub use diesel_friendship_repository::DieselFriendshipRepository;
pub use diesel_profile_repository::DieselProfileRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
