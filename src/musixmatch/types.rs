//! Musixmatch data types.
//!
//! These types represent the data structures from the Musixmatch API.

/// Musixmatch track identifier
pub type TrackId = u64;

/// A track returned by `track.search`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Track identifier used for lyric lookups
    pub id: TrackId,
    /// Track title, if the response carried one
    pub name: Option<String>,
}

/// Endpoints used by the corpus loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Search tracks by artist
    TrackSearch,
    /// Fetch lyrics for a track
    TrackLyricsGet,
}

impl Method {
    /// Method name as it appears in the request path
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrackSearch => "track.search",
            Self::TrackLyricsGet => "track.lyrics.get",
        }
    }
}
