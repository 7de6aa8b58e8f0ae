//! `Parrot` - pseudo-lyrics from an artist's back catalogue.
//!
//! This crate retrieves an artist's lyrics from `Musixmatch` and generates a
//! new song from them with an order-2 Markov chain.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod lyrics;
pub mod markov;
pub mod musixmatch;

pub use markov::{generate_song, GenerationError};
