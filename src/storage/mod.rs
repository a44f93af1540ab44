//! Storage layer for award records
//!
//! This module provides a small abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Get/put operations, seeding defaults on first read
//! - `defaults`: The seeded award sets
//! - `validation`: Payload checks that run before any write

pub mod defaults;
pub mod models;
pub mod queries;
pub mod schema;
pub mod validation;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::AwardDatabase;
pub use validation::{validate_awards, validate_weekly_bonuses};
