use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::classify::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatPreferences {
    pub language: Language,
    pub auto_detect: bool,
}

impl ChatPreferences {
    pub fn new(language: Language, auto_detect: bool) -> Self {
        ChatPreferences {
            language,
            auto_detect,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    defaults: ChatPreferences,
    chat_preferences: Arc<Mutex<HashMap<i64, ChatPreferences>>>,
}

impl AppState {
    pub fn new(defaults: ChatPreferences) -> Self {
        AppState {
            defaults,
            chat_preferences: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn preferences(&self, chat_id: i64) -> ChatPreferences {
        self.chat_preferences
            .lock()
            .get(&chat_id)
            .copied()
            .unwrap_or(self.defaults)
    }

    pub fn set_language(&self, chat_id: i64, language: Language) -> ChatPreferences {
        let mut prefs = self.chat_preferences.lock();
        let entry = prefs.entry(chat_id).or_insert(self.defaults);
        entry.language = language;
        *entry
    }

    pub fn toggle_auto_detect(&self, chat_id: i64) -> ChatPreferences {
        let mut prefs = self.chat_preferences.lock();
        let entry = prefs.entry(chat_id).or_insert(self.defaults);
        entry.auto_detect = !entry.auto_detect;
        *entry
    }

    pub fn reset(&self, chat_id: i64) -> ChatPreferences {
        self.chat_preferences.lock().remove(&chat_id);
        self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_chat_uses_defaults() {
        let state = AppState::new(ChatPreferences::new(Language::French, true));
        assert_eq!(
            state.preferences(42),
            ChatPreferences::new(Language::French, true)
        );
    }

    #[test]
    fn updates_are_per_chat() {
        let state = AppState::new(ChatPreferences::new(Language::English, true));
        state.set_language(1, Language::Japanese);
        state.toggle_auto_detect(1);
        assert_eq!(
            state.preferences(1),
            ChatPreferences::new(Language::Japanese, false)
        );
        assert_eq!(state.preferences(2).language, Language::English);

        assert_eq!(state.reset(1), ChatPreferences::new(Language::English, true));
        assert!(state.preferences(1).auto_detect);
    }
}
