//! End-to-end tests for corpus-to-song generation.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use parrot::corpus::{CorpusLoader, StaticCorpus};
use parrot::lyrics;
use parrot::markov::{ChainWalker, Distribution};
use parrot::{generate_song, GenerationError};
use rand::rngs::StdRng;
use rand::SeedableRng;

const VERSE: &str = "I walked along the river\nI walked along the shore\n\
                     the river took my shadow\nthe shore took nothing more";
const CHORUS: &str = "sing it to the river\nsing it to the sea\n\
                      the river never answers\nthe sea just sings to me";
const FOOTER: &str = "sing it to the sea\n...\n\n\
                      ******* This Lyrics is NOT for Commercial use *******\n\
                      (1409616144139)";

fn corpus() -> Vec<String> {
    vec![VERSE.to_string(), CHORUS.to_string(), format!("{CHORUS}\n{FOOTER}")]
}

fn encoded(corpus: &[String]) -> Vec<Vec<String>> {
    corpus.iter().map(|raw| lyrics::encode(raw)).collect()
}

#[tokio::test]
async fn test_static_corpus_generates_song() {
    let loader = StaticCorpus::new().with_artist("River Band", corpus());
    let corpus = loader.load_corpus("River Band", 25).await.unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    let song = generate_song(&corpus, 40, &mut rng).unwrap();

    assert!(!song.is_empty());
    assert!(!song.contains("\n "), "line encoding leaked into output: {song:?}");
    assert!(!song.contains("Commercial"), "license footer leaked into output");
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let corpus = corpus();

    let a = generate_song(&corpus, 60, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = generate_song(&corpus, 60, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_output_length_exceeds_request_by_dead_ends() {
    let songs = encoded(&corpus());
    let dist = Distribution::build(&songs);
    let walker = ChainWalker::new(&dist);

    for seed in 0..100 {
        let walk = walker.walk(50, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert!(walk.tokens.len() >= 50);
        assert_eq!(walk.tokens.len() - 50, walk.dead_ends);
    }
}

#[test]
fn test_walk_tokens_come_from_corpus() {
    let songs = encoded(&corpus());
    let dist = Distribution::build(&songs);
    let vocabulary: Vec<&str> = songs.iter().flatten().map(String::as_str).collect();

    let walk = ChainWalker::new(&dist).walk(80, &mut StdRng::seed_from_u64(3)).unwrap();
    for token in &walk.tokens {
        assert!(vocabulary.contains(token), "unexpected token {token:?}");
    }
}

#[test]
fn test_non_empty_corpus_builds_non_empty_distribution() {
    let songs = encoded(&corpus());
    let dist = Distribution::build(&songs);

    assert!(!dist.is_empty());
    for key in dist.keys() {
        assert!(!dist.successors(&key.first, &key.second).unwrap().is_empty());
    }
}

#[test]
fn test_short_songs_cannot_generate() {
    let corpus = vec!["la la".to_string(), "oh".to_string()];
    let err = generate_song(&corpus, 10, &mut StdRng::seed_from_u64(1)).unwrap_err();

    assert_eq!(err, GenerationError::EmptyDistribution);
}

#[test]
fn test_empty_corpus_cannot_generate() {
    let corpus: Vec<String> = Vec::new();
    let err = generate_song(&corpus, 10, &mut StdRng::seed_from_u64(1)).unwrap_err();

    assert_eq!(err, GenerationError::EmptyDistribution);
}

#[test]
fn test_round_trip_preserves_lines() {
    assert_eq!(lyrics::decode(&lyrics::encode(VERSE)), VERSE);
    assert_eq!(lyrics::decode(&lyrics::encode(CHORUS)), CHORUS);
}
