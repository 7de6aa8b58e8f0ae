//! Corpus loading.
//!
//! A corpus is the ordered list of raw lyric texts for one artist. Loaders
//! hide where the texts come from; generation only ever sees the strings.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::markov::{self, Chooser};

/// Raw lyric text of a single track, exactly as the source returned it.
pub type RawLyricText = String;

/// Source of raw lyric texts for an artist.
#[async_trait]
pub trait CorpusLoader: Send + Sync {
    /// Load up to `sample_size` lyric texts for `artist`, in source order.
    async fn load_corpus(&self, artist: &str, sample_size: u32) -> Result<Vec<RawLyricText>>;

    /// Get the name of this loader (for debugging/logging).
    fn name(&self) -> &'static str;
}

/// Loader over texts already held in memory, keyed by artist.
#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
    artists: Vec<(String, Vec<RawLyricText>)>,
}

impl StaticCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add lyric texts for `artist`, extending any texts already present.
    #[must_use]
    pub fn with_artist<I, S>(mut self, artist: &str, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RawLyricText>,
    {
        let texts = texts.into_iter().map(Into::into);
        match self.artists.iter_mut().find(|(name, _)| name.eq_ignore_ascii_case(artist)) {
            Some((_, existing)) => existing.extend(texts),
            None => self.artists.push((artist.to_string(), texts.collect())),
        }
        self
    }
}

#[async_trait]
impl CorpusLoader for StaticCorpus {
    async fn load_corpus(&self, artist: &str, sample_size: u32) -> Result<Vec<RawLyricText>> {
        let (_, texts) = self
            .artists
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(artist))
            .ok_or_else(|| Error::api_status(format!("static://{artist}"), 404))?;

        let limit = usize::try_from(sample_size).unwrap_or(usize::MAX);
        Ok(texts.iter().take(limit).cloned().collect())
    }

    fn name(&self) -> &'static str {
        "StaticCorpus"
    }
}

/// Load a corpus for `artist` and generate a song of about `word_count` tokens.
///
/// Loader failures pass through unchanged; generation failures arrive as
/// [`Error::Generation`].
pub async fn generate_for_artist<L, C>(
    loader: &L,
    artist: &str,
    sample_size: u32,
    word_count: usize,
    chooser: &mut C,
) -> Result<String>
where
    L: CorpusLoader + ?Sized,
    C: Chooser + ?Sized,
{
    let corpus = loader.load_corpus(artist, sample_size).await?;
    tracing::info!("Loaded {} songs via {}", corpus.len(), loader.name());

    Ok(markov::generate_song(&corpus, word_count, chooser)?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::markov::GenerationError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_static_corpus_respects_sample_size_and_order() {
        let loader = StaticCorpus::new().with_artist("Band", ["one", "two", "three"]);

        let corpus = loader.load_corpus("band", 2).await.unwrap();
        assert_eq!(corpus, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_static_corpus_unknown_artist() {
        let loader = StaticCorpus::new().with_artist("Band", ["one"]);

        let err = loader.load_corpus("Other", 5).await.unwrap_err();
        assert!(matches!(err, Error::ApiStatus { status_code: 404, .. }));
    }

    #[tokio::test]
    async fn test_static_corpus_extends_existing_artist() {
        let loader = StaticCorpus::new()
            .with_artist("Band", ["one"])
            .with_artist("BAND", ["two"]);

        assert_eq!(loader.load_corpus("Band", 10).await.unwrap(), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_generate_for_artist() {
        let loader = StaticCorpus::new().with_artist("Band", ["we sing all night\nwe sing all day"]);
        let mut rng = StdRng::seed_from_u64(5);

        let song = generate_for_artist(&loader, "Band", 25, 6, &mut rng).await.unwrap();
        assert!(!song.is_empty());
        for word in song.split_whitespace() {
            assert!(["we", "sing", "all", "night", "day"].contains(&word), "unexpected word {word:?}");
        }
    }

    #[tokio::test]
    async fn test_generate_for_artist_reports_generation_error() {
        let loader = StaticCorpus::new().with_artist("Band", ["oh no", "la"]);
        let mut rng = StdRng::seed_from_u64(5);

        let err = generate_for_artist(&loader, "Band", 25, 10, &mut rng).await.unwrap_err();
        assert!(matches!(err, Error::Generation(GenerationError::EmptyDistribution)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_generate_for_artist_passes_loader_error_through() {
        let loader = StaticCorpus::new();
        let mut rng = StdRng::seed_from_u64(5);

        let err = generate_for_artist(&loader, "Nobody", 25, 10, &mut rng).await.unwrap_err();
        assert!(matches!(err, Error::ApiStatus { status_code: 404, .. }), "got {err:?}");
    }
}
