//! Lexicon-based language and emotion classification.
//!
//! Both detectors are total: they never fail and fall back to [`Language::DEFAULT`] or
//! [`Emotion::Neutral`] when the text carries no signal. All tables are immutable statics,
//! so the detectors can be called from any task without locking.

pub mod emotion;
mod emotion_lexicon;
pub mod language;
pub mod scoring;

use thiserror::Error;

pub use emotion::{detect_emotion, Emotion};
pub use language::{detect_language, Language};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTagError {
    #[error("unsupported language code: {0}")]
    UnknownLanguage(String),
    #[error("unknown emotion: {0}")]
    UnknownEmotion(String),
}

/// Runs both detectors in order: language first, then emotion in that language.
pub fn classify(text: &str) -> (Language, Emotion) {
    let language = detect_language(text);
    (language, detect_emotion(text, language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_spanish_message() {
        assert_eq!(
            classify("Estoy muy feliz hoy, ¡qué alegría!"),
            (Language::Spanish, Emotion::Happy)
        );
    }

    #[test]
    fn empty_message_uses_fallbacks() {
        assert_eq!(classify(""), (Language::English, Emotion::Neutral));
    }
}
