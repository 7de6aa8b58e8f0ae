//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Lyric encoding constants.
pub mod lyrics {
    /// Final line Musixmatch appends to the free-tier license footer.
    pub const LICENSE_SENTINEL: &str = "(1409616144139)";

    /// Number of trailing lines occupied by the license footer.
    pub const LICENSE_FOOTER_LINES: usize = 4;
}

/// Song generation constants.
pub mod generation {
    /// Default number of tokens to generate.
    pub const DEFAULT_WORD_COUNT: usize = 50;

    /// Smallest word count accepted.
    pub const MIN_WORD_COUNT: usize = 1;
}

/// Musixmatch API constants.
pub mod musixmatch {
    /// Base URL for version 1.1 of the Musixmatch web service.
    pub const DEFAULT_BASE_URL: &str = "http://api.musixmatch.com/ws/1.1/";

    /// Default number of tracks sampled for the corpus.
    pub const DEFAULT_SAMPLE_SIZE: u32 = 25;

    /// Smallest sample size accepted.
    pub const MIN_SAMPLE_SIZE: u32 = 5;

    /// Largest sample size accepted; Musixmatch caps a search page at 100 tracks.
    pub const MAX_SAMPLE_SIZE: u32 = 100;

    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Async task constants.
pub mod async_tasks {
    /// Default number of lyric requests in flight at once.
    pub const DEFAULT_CONCURRENCY: usize = 4;
}
