use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use na_core::{Error, Result, SpeechSynthesizer, Translator};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::chunk_text;

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const TTS_URL: &str = "https://translate.google.com/translate_tts";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; NewsAnalyzer/0.1)";
const TRANSLATE_CHUNK_CHARS: usize = 4500;
const TTS_CHUNK_CHARS: usize = 200;

fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(20))
        .user_agent(USER_AGENT)
        .build()?)
}

/// Pull the translated segments out of a `translate_a/single` response:
/// `[[["segment", "source", ...], ...], ...]`.
fn parse_translation(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Translation("unexpected response shape".to_string()))?;
    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();
    if translated.trim().is_empty() {
        return Err(Error::Translation("empty translation".to_string()));
    }
    Ok(translated)
}

pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: TRANSLATE_URL.to_string(),
        })
    }

    async fn translate_chunk(&self, chunk: &str, target_language: &str) -> Result<String> {
        let url = Url::parse_with_params(
            &self.base_url,
            &[("client", "gtx"), ("sl", "auto"), ("tl", target_language), ("dt", "t"), ("q", chunk)],
        )
        .map_err(|e| Error::Translation(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Translation(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Error::Translation(format!("translate returned status {}", response.status())));
        }
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Translation(e.to_string()))?;
        parse_translation(&body)
    }
}

impl fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTranslator")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "Google Translate"
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let chunks = chunk_text(text, TRANSLATE_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(Error::Translation("nothing to translate".to_string()));
        }
        let mut out = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            out.push(self.translate_chunk(chunk, target_language).await?);
        }
        debug!("🌐 Translated {} chunk(s) to '{}'", chunks.len(), target_language);
        Ok(out.join(" "))
    }
}

pub struct GoogleSpeech {
    client: Client,
    base_url: String,
}

impl GoogleSpeech {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: TTS_URL.to_string(),
        })
    }

    async fn synthesize_chunk(&self, chunk: &str, language: &str, index: usize, total: usize) -> Result<Vec<u8>> {
        let (idx, total, len) = (index.to_string(), total.to_string(), chunk.chars().count().to_string());
        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", chunk),
                ("idx", idx.as_str()),
                ("total", total.as_str()),
                ("textlen", len.as_str()),
            ],
        )
        .map_err(|e| Error::Synthesis(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Synthesis(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Error::Synthesis(format!("speech service returned status {}", response.status())));
        }
        let bytes = response.bytes().await.map_err(|e| Error::Synthesis(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl fmt::Debug for GoogleSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSpeech")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeech {
    fn name(&self) -> &str {
        "Google TTS"
    }

    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        let chunks = chunk_text(text, TTS_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(Error::Synthesis("nothing to synthesize".to_string()));
        }
        // MP3 frames concatenate cleanly, so the pieces are simply appended
        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            audio.extend(self.synthesize_chunk(chunk, language, index, chunks.len()).await?);
        }
        if audio.is_empty() {
            return Err(Error::Synthesis("speech service returned no audio".to_string()));
        }
        debug!("🔊 Synthesized {} bytes of '{}' audio", audio.len(), language);
        Ok(audio)
    }
}
