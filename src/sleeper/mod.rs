//! Sleeper API access: payload types, the provider seam, the HTTP client, a
//! caching decorator and an in-memory provider for tests.

pub mod cached;
pub mod http;
pub mod mock;
pub mod provider;
pub mod types;

pub use cached::CachedProvider;
pub use http::SleeperClient;
pub use mock::MockProvider;
pub use provider::LeagueDataProvider;
