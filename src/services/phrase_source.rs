//! Phrase sources for Keyhaven.
//!
//! The passphrase acceptor treats phrase generation as an external
//! capability: ask for a phrase of N words, receive text. Two providers
//! ship: an offline bundled-wordlist source and an HTTP adapter for a
//! hosted generation backend.

use std::time::Duration;

use ring::rand::{SecureRandom, SystemRandom};
use serde_json::{json, Value};

use crate::types::errors::PhraseSourceError;

/// Seconds before an HTTP phrase request is abandoned.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Word list for the offline source.
const BUNDLED_WORDS: [&str; 72] = [
    "acorn", "amber", "anchor", "apple", "arrow", "aspen", "autumn", "badge",
    "bamboo", "basil", "beacon", "birch", "blossom", "breeze", "brook",
    "canyon", "cedar", "cliff", "clover", "cobalt", "comet", "copper",
    "coral", "crane", "crystal", "dawn", "delta", "drift", "ember", "falcon",
    "fern", "flint", "galaxy", "garnet", "glacier", "grove", "harbor",
    "hazel", "heron", "horizon", "ivory", "jasper", "juniper", "lagoon",
    "lantern", "lark", "lilac", "lunar", "maple", "marble", "meadow", "mesa",
    "mosaic", "moss", "nectar", "nimbus", "oasis", "ocean", "onyx", "orchid",
    "osprey", "otter", "pebble", "pine", "plume", "prairie", "quartz",
    "raven", "reef", "ridge", "river", "rowan",
];

/// Trait defining a passphrase provider.
pub trait PhraseSource {
    /// Produces one candidate passphrase of `num_words` space-separated
    /// words. Candidates are unscreened; the acceptor applies the denylist.
    fn generate_phrase(&self, num_words: u32) -> Result<String, PhraseSourceError>;
}

/// Offline source drawing words from a fixed list via the system CSPRNG.
pub struct WordlistPhraseSource {
    words: Vec<String>,
    rng: SystemRandom,
}

impl WordlistPhraseSource {
    /// Source over the built-in word list.
    pub fn bundled() -> Self {
        Self {
            words: BUNDLED_WORDS.iter().map(|w| (*w).to_string()).collect(),
            rng: SystemRandom::new(),
        }
    }

    /// Source over a caller-supplied word list.
    pub fn new(words: Vec<String>) -> Result<Self, PhraseSourceError> {
        if words.is_empty() {
            return Err(PhraseSourceError::EmptyWordlist);
        }
        Ok(Self {
            words,
            rng: SystemRandom::new(),
        })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl PhraseSource for WordlistPhraseSource {
    fn generate_phrase(&self, num_words: u32) -> Result<String, PhraseSourceError> {
        let mut bytes = vec![0u8; num_words as usize * 4];
        self.rng
            .fill(&mut bytes)
            .expect("Failed to generate random bytes");

        let phrase = bytes
            .chunks_exact(4)
            .map(|chunk| {
                let draw = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                self.words[draw as usize % self.words.len()].as_str()
            })
            .collect::<Vec<&str>>()
            .join(" ");
        Ok(phrase)
    }
}

/// HTTP adapter for a hosted phrase-generation backend.
///
/// Sends `POST {"numWords": n}` and expects `{"passphrase": "..."}` back.
pub struct RemotePhraseSource {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl RemotePhraseSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, PhraseSourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PhraseSourceError::NetworkError(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Extracts the passphrase field from a generation response body.
pub fn parse_phrase_response(body: &Value) -> Result<String, PhraseSourceError> {
    match body.get("passphrase").and_then(Value::as_str) {
        Some(phrase) if !phrase.is_empty() => Ok(phrase.to_string()),
        Some(_) => Err(PhraseSourceError::MalformedResponse(
            "empty passphrase".to_string(),
        )),
        None => Err(PhraseSourceError::MalformedResponse(
            "missing passphrase field".to_string(),
        )),
    }
}

impl PhraseSource for RemotePhraseSource {
    fn generate_phrase(&self, num_words: u32) -> Result<String, PhraseSourceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "numWords": num_words }))
            .send()
            .map_err(|e| PhraseSourceError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PhraseSourceError::NetworkError(format!(
                "backend returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .map_err(|e| PhraseSourceError::MalformedResponse(e.to_string()))?;
        parse_phrase_response(&body)
    }
}
