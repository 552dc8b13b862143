//! API client library for movmgr.
//!
//! Provides a client for the TMDB v3 API and the trailer
//! selection logic built on top of its videos endpoint.

/// TMDB API client.
pub mod tmdb;

/// Trailer selection over fetched video metadata.
pub mod trailer;
