use std::fmt;

use na_core::{Error, Result, SpeechSynthesizer, Translator};

/// Offline translator that hands the text back unchanged.
pub struct DummyTranslator;

impl fmt::Debug for DummyTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyTranslator").finish()
    }
}

#[async_trait::async_trait]
impl Translator for DummyTranslator {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn translate(&self, text: &str, _target_language: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

/// Offline synthesizer; always reports that speech is unavailable.
pub struct DummySpeech;

impl fmt::Debug for DummySpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummySpeech").finish()
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for DummySpeech {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn synthesize(&self, _text: &str, _language: &str) -> Result<Vec<u8>> {
        Err(Error::Synthesis("speech synthesis disabled".to_string()))
    }
}
