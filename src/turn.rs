use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::{classify, detect_emotion, Emotion, Language};
use crate::replies::{greeting, select_response};
use crate::state::ChatPreferences;

/// One message in a conversation, from the user or from the bot.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub text: String,
    pub is_user: bool,
    pub emotion: Option<Emotion>,
    pub language: Language,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    pub fn greeting(language: Language) -> Self {
        ChatTurn {
            text: greeting(language).to_string(),
            is_user: false,
            emotion: Some(Emotion::Neutral),
            language,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub user: ChatTurn,
    pub reply: ChatTurn,
    /// Set when auto-detection moved the chat to a different language.
    pub switched_language: Option<Language>,
}

/// Classifies `text` and drafts the bot's answer.
///
/// With auto-detection on, the language comes from the text; otherwise the chat's
/// selected language is used for both the emotion lexicon and the reply.
pub fn respond_to(text: &str, prefs: ChatPreferences) -> TurnOutcome {
    let (language, emotion) = if prefs.auto_detect {
        classify(text)
    } else {
        (prefs.language, detect_emotion(text, prefs.language))
    };
    let switched_language = (prefs.auto_detect && language != prefs.language).then_some(language);

    let user = ChatTurn {
        text: text.to_string(),
        is_user: true,
        emotion: None,
        language,
        timestamp: Utc::now(),
    };
    let reply = ChatTurn {
        text: select_response(emotion, language).to_string(),
        is_user: false,
        emotion: Some(emotion),
        language,
        timestamp: Utc::now(),
    };

    TurnOutcome {
        user,
        reply,
        switched_language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replies::ResponseTable;

    #[test]
    fn auto_detect_switches_language() {
        let prefs = ChatPreferences::new(Language::English, true);
        let outcome = respond_to("私はとても嬉しいです", prefs);
        assert_eq!(outcome.switched_language, Some(Language::Japanese));
        assert_eq!(outcome.reply.language, Language::Japanese);
        assert_eq!(outcome.reply.emotion, Some(Emotion::Happy));
        assert!(ResponseTable::for_language(Language::Japanese)
            .happy
            .contains(&outcome.reply.text.as_str()));
    }

    #[test]
    fn fixed_language_skips_detection() {
        let prefs = ChatPreferences::new(Language::Spanish, false);
        let outcome = respond_to("I am so happy and excited today!", prefs);
        assert_eq!(outcome.switched_language, None);
        assert_eq!(outcome.user.language, Language::Spanish);
        // English markers are not in the Spanish lexicon.
        assert_eq!(outcome.reply.emotion, Some(Emotion::Neutral));
    }

    #[test]
    fn turns_carry_author_flags() {
        let outcome = respond_to("Hello", ChatPreferences::new(Language::English, true));
        assert!(outcome.user.is_user);
        assert_eq!(outcome.user.emotion, None);
        assert!(!outcome.reply.is_user);
        assert!(outcome.reply.timestamp >= outcome.user.timestamp);
    }

    #[test]
    fn greeting_turn_is_neutral() {
        let turn = ChatTurn::greeting(Language::French);
        assert_eq!(turn.emotion, Some(Emotion::Neutral));
        assert_eq!(turn.text, greeting(Language::French));
    }

    #[test]
    fn turns_serialize_with_language_codes() {
        let outcome = respond_to("Je suis en colère", ChatPreferences::new(Language::French, false));
        let value = serde_json::to_value(&outcome).expect("outcome serializes");
        assert_eq!(value["user"]["language"], "fr");
        assert_eq!(value["user"]["is_user"], true);
        assert!(value["user"]["emotion"].is_null());
        assert_eq!(value["reply"]["emotion"], "angry");
        assert!(value["reply"]["timestamp"].is_string());
        assert!(value["switched_language"].is_null());
    }
}
