use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::corpus::{CorpusLoader, RawLyricText};
use crate::error::{Error, Result};
use crate::musixmatch::types::{Method, Track, TrackId};

/// Client for accessing the Musixmatch API
///
/// Lyrics for the sampled tracks are fetched with bounded concurrency; the
/// corpus keeps the order of the search results.
#[derive(Clone)]
pub struct MusixmatchClient {
    api_key: String,
    base_url: String,
    concurrency: usize,
    client: Client,
}

impl MusixmatchClient {
    /// Create a new Musixmatch client from config
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            concurrency: config.concurrency.max(1),
            client: Client::builder()
                .timeout(config.request_timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Check if credentials are configured
    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Call an API method and return the envelope body
    async fn call(&self, method: Method, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, method.as_str());
        let resp = self.client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str()), ("format", "json")])
            .query(query)
            .send()
            .await
            .map_err(|e| Error::from_request(&url, &e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::http_status(&url, status));
        }

        let json: Value = resp.json().await
            .map_err(|e| Error::Parse(format!("{} returned {}", url, e)))?;

        into_body(&url, json)
    }

    /// Search tracks by artist, returning at most `page_size` results
    pub async fn search_tracks(&self, artist: &str, page_size: u32) -> Result<Vec<Track>> {
        let body = self.call(Method::TrackSearch, &[
            ("q_artist", artist.to_string()),
            ("page_size", page_size.to_string()),
        ]).await?;

        parse_track_list(&body)
    }

    /// Fetch the lyric text of a single track
    pub async fn track_lyrics(&self, track_id: TrackId) -> Result<RawLyricText> {
        let body = self.call(Method::TrackLyricsGet, &[
            ("track_id", track_id.to_string()),
        ]).await?;

        parse_lyrics_body(&body)
    }
}

#[async_trait]
impl CorpusLoader for MusixmatchClient {
    async fn load_corpus(&self, artist: &str, sample_size: u32) -> Result<Vec<RawLyricText>> {
        if !self.is_configured() {
            return Err(Error::config(
                "Musixmatch client not configured",
                "Pass --apikey or set MUSIXMATCH_API_KEY",
            ));
        }

        tracing::info!("Retrieving track IDs for '{}'", artist);
        let tracks = self.search_tracks(artist, sample_size).await?;
        if tracks.is_empty() {
            tracing::warn!("No tracks found for '{}'", artist);
        }

        stream::iter(tracks)
            .map(|track| async move {
                match &track.name {
                    Some(name) => tracing::info!("Retrieving lyrics for track {} ({})", track.id, name),
                    None => tracing::info!("Retrieving lyrics for track {}", track.id),
                }
                self.track_lyrics(track.id).await
            })
            .buffered(self.concurrency)
            .try_collect()
            .await
    }

    fn name(&self) -> &'static str {
        "Musixmatch"
    }
}

/// Validate the response envelope and return its body
///
/// Musixmatch answers HTTP 200 even for failed calls; the real outcome is
/// `message.header.status_code`.
fn into_body(url: &str, mut json: Value) -> Result<Value> {
    let status_code = json["message"]["header"]["status_code"].as_i64()
        .ok_or_else(|| Error::Parse(format!("Missing status code in response from {}", url)))?;

    if !(200..300).contains(&status_code) {
        return Err(Error::api_status(url, status_code));
    }

    Ok(json.pointer_mut("/message/body").map(Value::take).unwrap_or_default())
}

/// Extract tracks from a `track.search` body
fn parse_track_list(body: &Value) -> Result<Vec<Track>> {
    let list = body["track_list"].as_array()
        .ok_or_else(|| Error::Parse("Missing 'track_list' array in search response".into()))?;

    Ok(list.iter().filter_map(|entry| {
        let track = &entry["track"];
        let Some(id) = track["track_id"].as_u64() else {
            tracing::warn!("Skipping search result without a track_id");
            return None;
        };
        let name = track["track_name"].as_str().map(String::from);
        Some(Track { id, name })
    }).collect())
}

/// Extract the lyric text from a `track.lyrics.get` body
fn parse_lyrics_body(body: &Value) -> Result<RawLyricText> {
    body["lyrics"]["lyrics_body"].as_str()
        .map(String::from)
        .ok_or_else(|| Error::Parse("Missing 'lyrics_body' in lyrics response".into()))
}
