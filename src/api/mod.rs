//! API clients for external services
//!
//! - TMDB: movie/series/episode metadata, behind the TTL response cache

pub mod tmdb;

pub use tmdb::{TmdbClient, TmdbError};
