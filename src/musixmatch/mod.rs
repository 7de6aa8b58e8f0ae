//! Musixmatch API integration.
//!
//! Retrieves an artist's lyrics corpus from the Musixmatch web service.

/// API client for Musixmatch requests
pub mod api;
/// Data types representing Musixmatch resources
pub mod types;

// Re-export key components
pub use api::MusixmatchClient;
