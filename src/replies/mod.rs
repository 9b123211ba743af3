//! Canned reply selection for a classified message.

mod templates;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::classify::{Emotion, Language};

/// Reply candidates for one language.
pub struct ResponseTable {
    pub greeting: &'static str,
    pub happy: &'static [&'static str],
    pub sad: &'static [&'static str],
    pub angry: &'static [&'static str],
    pub neutral: &'static [&'static str],
    pub surprised: &'static [&'static str],
}

impl ResponseTable {
    pub fn for_language(language: Language) -> &'static ResponseTable {
        match language {
            Language::English => &templates::ENGLISH,
            Language::Spanish => &templates::SPANISH,
            Language::Japanese => &templates::JAPANESE,
            Language::French => &templates::FRENCH,
        }
    }

    /// Candidates for `emotion`, or the neutral ones when that entry is empty.
    pub fn candidates(&self, emotion: Emotion) -> &'static [&'static str] {
        let candidates = match emotion {
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Angry => self.angry,
            Emotion::Neutral => self.neutral,
            Emotion::Surprised => self.surprised,
        };
        if candidates.is_empty() {
            self.neutral
        } else {
            candidates
        }
    }
}

pub fn greeting(language: Language) -> &'static str {
    ResponseTable::for_language(language).greeting
}

/// Picks one reply uniformly at random from the candidates for (emotion, language).
pub fn select_response(emotion: Emotion, language: Language) -> &'static str {
    select_response_with(&mut rand::thread_rng(), emotion, language)
}

pub fn select_response_with<R: Rng + ?Sized>(
    rng: &mut R,
    emotion: Emotion,
    language: Language,
) -> &'static str {
    let table = ResponseTable::for_language(language);
    table
        .candidates(emotion)
        .choose(rng)
        .copied()
        .unwrap_or(table.greeting)
}

/// Reply text as shown in chat, optionally led by the emotion indicator.
pub fn format_reply(emotion: Emotion, response: &str, show_indicator: bool) -> String {
    if show_indicator {
        format!("{} {}\n\n{}", emotion.indicator(), emotion.label(), response)
    } else {
        response.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::classify::scoring::Tag;

    #[test]
    fn every_pair_has_candidates() {
        for &language in Language::ALL {
            let table = ResponseTable::for_language(language);
            assert!(!table.greeting.is_empty());
            for &emotion in Emotion::ALL {
                assert!(!table.candidates(emotion).is_empty());
            }
        }
    }

    #[test]
    fn selected_response_belongs_to_the_pair() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let response = select_response_with(&mut rng, Emotion::Sad, Language::French);
            assert!(ResponseTable::for_language(Language::French)
                .sad
                .contains(&response));
        }
    }

    #[test]
    fn greeting_is_localised() {
        assert_eq!(greeting(Language::English), "Hello! How can I help you today?");
        assert_eq!(greeting(Language::Spanish), "¡Hola! ¿Cómo puedo ayudarte hoy?");
    }

    #[test]
    fn formats_indicator_line() {
        let text = format_reply(Emotion::Happy, "Great!", true);
        assert_eq!(text, "😊 Happy\n\nGreat!");
        assert_eq!(format_reply(Emotion::Happy, "Great!", false), "Great!");
    }
}
