//! `Parrot` - generate a song in the style of an artist.
//!
//! Usage: parrot -k <API key> -a <artist> [-s <sample size>] [-w <word count>]

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parrot::config::Config;
use parrot::corpus::generate_for_artist;
use parrot::error::Error;
use parrot::musixmatch::MusixmatchClient;

/// Command-line arguments for parrot
#[derive(Parser, Debug)]
#[command(name = "parrot")]
#[command(about = "Generate pseudo-lyrics from an artist's songs")]
#[command(version)]
struct Args {
    /// Musixmatch API key (or MUSIXMATCH_API_KEY)
    #[arg(short = 'k', long = "apikey")]
    api_key: Option<String>,

    /// Artist whose lyrics seed the generator
    #[arg(short, long)]
    artist: Option<String>,

    /// Number of tracks to sample, clamped to 5..=100 (or PARROT_SAMPLE_SIZE)
    #[arg(short, long = "samplesize", allow_negative_numbers = true)]
    sample_size: Option<i64>,

    /// Number of words to generate, at least 1 (or PARROT_WORD_COUNT)
    #[arg(short, long = "wordcount", allow_negative_numbers = true)]
    word_count: Option<i64>,
}

impl Args {
    /// Apply flags on top of the environment configuration
    fn apply(&self, config: &mut Config) {
        if let Some(api_key) = &self.api_key {
            config.api_key.clone_from(api_key);
        }
        if let Some(sample_size) = self.sample_size {
            config.set_sample_size(sample_size);
        }
        if let Some(word_count) = self.word_count {
            config.set_word_count(word_count);
        }
    }
}

fn print_usage() {
    let program = std::env::args().next().unwrap_or_else(|| "parrot".to_string());
    println!("Usage: {program} -k <API key> -a <artist>");
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the song
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parrot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    args.apply(&mut config);

    let Some(artist) = args.artist.as_deref().filter(|a| !a.trim().is_empty()) else {
        print_usage();
        return ExitCode::SUCCESS;
    };
    if !config.has_api_key() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    tracing::debug!(
        "{} {}: sample size {}, word count {}",
        config.app_name(),
        config.app_version(),
        config.sample_size(),
        config.word_count()
    );

    let client = MusixmatchClient::new(&config);
    let mut rng = rand::thread_rng();
    let song = match generate_for_artist(
        &client,
        artist,
        config.sample_size(),
        config.word_count(),
        &mut rng,
    )
    .await
    {
        Ok(song) => song,
        Err(Error::Generation(e)) => {
            eprintln!("Unable to generate song: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Unable to retrieve lyrics: {e}");
            return ExitCode::from(255);
        }
    };

    println!("Done");
    println!();
    println!("Song");
    println!("====");
    println!("{song}");

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn apply(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(argv).unwrap();
        let mut config = Config::default();
        args.apply(&mut config);
        config
    }

    #[test]
    fn test_negative_sample_size_is_clamped() {
        let config = apply(&["parrot", "-a", "Band", "-s", "-3"]);
        assert_eq!(config.sample_size(), 5);
    }

    #[test]
    fn test_large_sample_size_is_clamped() {
        let config = apply(&["parrot", "--samplesize", "250"]);
        assert_eq!(config.sample_size(), 100);
    }

    #[test]
    fn test_negative_word_count_is_raised() {
        let config = apply(&["parrot", "-w", "-10"]);
        assert_eq!(config.word_count(), 1);
    }

    #[test]
    fn test_flags_override_api_key() {
        let config = apply(&["parrot", "-k", "secret", "-w", "12"]);
        assert!(config.has_api_key());
        assert_eq!(config.word_count(), 12);
    }
}
