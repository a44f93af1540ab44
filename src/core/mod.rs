//! Core utilities shared across the crate
//!
//! - `cache`: read-through TTL cache with memory and durable tiers
//! - `http`: request headers and bearer-token authorization

pub mod cache;
pub mod http;

pub use cache::{cache_root, try_read_to_string, write_string, DurableCache, TtlCache};
pub use http::authorize_bearer;
