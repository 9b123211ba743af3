use std::env;

use anyhow::Result;
use once_cell::sync::Lazy;
use tracing::warn;

use crate::classify::{Language, ParseTagError};

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub log_level: String,
    pub log_file_prefix: String,
    pub default_language: Language,
    /// Raw `DEFAULT_LANGUAGE` value when it could not be parsed.
    pub rejected_default_language: Option<String>,
    pub auto_detect_language: bool,
    pub reply_delay_min_ms: u64,
    pub reply_delay_jitter_ms: u64,
    pub show_emotion_indicator: bool,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_language_setting(value: &str) -> Result<Language, ParseTagError> {
    if value.trim().is_empty() {
        return Ok(Language::DEFAULT);
    }
    value.parse::<Language>()
}

/// Resolved language plus the raw value when it had to be replaced by the default.
fn default_language_setting(raw: &str) -> (Language, Option<String>) {
    match parse_language_setting(raw) {
        Ok(language) => (language, None),
        Err(_) => (Language::DEFAULT, Some(raw.trim().to_string())),
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let (default_language, rejected_default_language) =
            default_language_setting(&env_string("DEFAULT_LANGUAGE", "en"));

        Ok(Config {
            bot_token: env_string("BOT_TOKEN", ""),
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            log_file_prefix: env_string("LOG_FILE_PREFIX", "bot"),
            default_language,
            rejected_default_language,
            auto_detect_language: env_bool("AUTO_DETECT_LANGUAGE", true),
            reply_delay_min_ms: env_u64("REPLY_DELAY_MIN_MS", 1000),
            reply_delay_jitter_ms: env_u64("REPLY_DELAY_JITTER_MS", 500),
            show_emotion_indicator: env_bool("SHOW_EMOTION_INDICATOR", true),
        })
    }

    /// Reports settings that were replaced by defaults. Call once logging is installed.
    pub fn log_fallbacks(&self) {
        if let Some(value) = &self.rejected_default_language {
            warn!(
                "DEFAULT_LANGUAGE: unsupported language code: {value}; falling back to {}",
                self.default_language.code()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_language_setting() {
        assert_eq!(parse_language_setting(" "), Ok(Language::English));
        assert_eq!(parse_language_setting("ja"), Ok(Language::Japanese));
        assert_eq!(
            parse_language_setting("de"),
            Err(ParseTagError::UnknownLanguage("de".to_string()))
        );
    }

    #[test]
    fn unknown_default_language_is_kept_for_the_warning() {
        assert_eq!(
            default_language_setting(" de "),
            (Language::English, Some("de".to_string()))
        );
        assert_eq!(default_language_setting("fr-CA"), (Language::French, None));
    }
}
