//! Order-2 Markov chain text generation.
//!
//! Turns a corpus of raw lyric texts into a new pseudo-lyric by recording
//! which token followed every pair of tokens, then walking those records at
//! random.

/// Pair-to-successor distribution builder
pub mod distribution;
/// Randomized chain walk
pub mod walker;

pub use distribution::{Distribution, PairKey};
pub use walker::{ChainWalker, Chooser, Walk};

use thiserror::Error;

use crate::lyrics;

/// Failures of song generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No token pair with a successor exists in the corpus.
    #[error("corpus has no song with at least three tokens")]
    EmptyDistribution,

    /// A walk of zero tokens was requested.
    #[error("token count must be at least 1")]
    ZeroTokenCount,

    /// A [`Chooser`] returned an index outside the range it was given.
    #[error("chooser picked index {index} from a range of {len}")]
    ChoiceOutOfRange {
        /// Index the chooser returned.
        index: usize,
        /// Length of the range it was asked to pick from.
        len: usize,
    },
}

/// Generate a song of roughly `word_count` tokens from `corpus`.
///
/// Each dead end met during the walk lengthens the song by one token.
pub fn generate_song<S, C>(
    corpus: &[S],
    word_count: usize,
    chooser: &mut C,
) -> Result<String, GenerationError>
where
    S: AsRef<str>,
    C: Chooser + ?Sized,
{
    let songs: Vec<Vec<String>> = corpus.iter().map(|raw| lyrics::encode(raw.as_ref())).collect();
    let distribution = Distribution::build(&songs);
    let walk = ChainWalker::new(&distribution).walk(word_count, chooser)?;
    Ok(lyrics::decode(&walk.tokens))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_song_restores_line_breaks() {
        // Only one pair is recorded, so the walk is fully determined.
        let corpus = ["alpha beta\ngamma"];
        let mut rng = StdRng::seed_from_u64(1);

        let song = generate_song(&corpus, 3, &mut rng).unwrap();
        assert_eq!(song, "alpha beta\ngamma gamma");
    }

    #[test]
    fn test_generate_song_empty_corpus() {
        let corpus: [&str; 0] = [];
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            generate_song(&corpus, 10, &mut rng),
            Err(GenerationError::EmptyDistribution)
        );
    }

    #[test]
    fn test_generate_song_short_songs_only() {
        let corpus = ["hi", "two words", ""];
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            generate_song(&corpus, 10, &mut rng),
            Err(GenerationError::EmptyDistribution)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GenerationError::EmptyDistribution.to_string(),
            "corpus has no song with at least three tokens"
        );
    }
}
