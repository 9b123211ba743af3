use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::emotion_lexicon;
use super::language::Language;
use super::scoring::{ScoreVector, Tag};
use super::ParseTagError;

/// Emotional state read from a message.
///
/// Declaration order is the tie-break order of [`detect_emotion`]. `Neutral` carries no
/// markers, so its position only matters as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Neutral,
    Surprised,
}

impl Tag for Emotion {
    const ALL: &'static [Self] = &[
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Neutral,
        Emotion::Surprised,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl Emotion {
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Neutral => "neutral",
            Emotion::Surprised => "surprised",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Neutral => "Neutral",
            Emotion::Surprised => "Surprised",
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Sad => "😔",
            Emotion::Angry => "😡",
            Emotion::Neutral => "😐",
            Emotion::Surprised => "😮",
        }
    }
}

impl Default for Emotion {
    fn default() -> Self {
        Emotion::Neutral
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .iter()
            .copied()
            .find(|emotion| value.trim().eq_ignore_ascii_case(emotion.as_str()))
            .ok_or_else(|| ParseTagError::UnknownEmotion(value.trim().to_string()))
    }
}

/// Lower-case markers for each emotion in one language.
#[derive(Debug)]
pub struct EmotionLexicon {
    pub happy: &'static [&'static str],
    pub sad: &'static [&'static str],
    pub angry: &'static [&'static str],
    pub neutral: &'static [&'static str],
    pub surprised: &'static [&'static str],
}

impl EmotionLexicon {
    pub fn for_language(language: Language) -> &'static EmotionLexicon {
        match language {
            Language::English => &emotion_lexicon::ENGLISH,
            Language::Spanish => &emotion_lexicon::SPANISH,
            Language::Japanese => &emotion_lexicon::JAPANESE,
            Language::French => &emotion_lexicon::FRENCH,
        }
    }

    pub fn markers(&self, emotion: Emotion) -> &'static [&'static str] {
        match emotion {
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Angry => self.angry,
            Emotion::Neutral => self.neutral,
            Emotion::Surprised => self.surprised,
        }
    }
}

/// Minimum score an emotion needs before it beats `Neutral`.
pub const MIN_EMOTION_SCORE: u32 = 1;

/// Raw per-emotion votes: one point for every lexicon entry contained in the text.
pub fn emotion_scores(text: &str, language: Language) -> ScoreVector<Emotion> {
    let lowered = text.to_lowercase();
    let lexicon = EmotionLexicon::for_language(language);
    let mut scores = ScoreVector::new();
    for &emotion in Emotion::ALL {
        let hits = lexicon
            .markers(emotion)
            .iter()
            .filter(|marker| lowered.contains(**marker))
            .count();
        scores.add(emotion, hits as u32);
    }
    scores
}

/// Reads the emotional state of `text` using the markers of `language`.
///
/// Every lexicon entry found adds a vote, so denser messages win more decisively.
/// Without any vote the result is [`Emotion::Neutral`].
pub fn detect_emotion(text: &str, language: Language) -> Emotion {
    emotion_scores(text, language).pick(MIN_EMOTION_SCORE, Emotion::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral_in_every_language() {
        for &language in Language::ALL {
            assert_eq!(detect_emotion("", language), Emotion::Neutral);
        }
    }

    #[test]
    fn detects_happy_english() {
        assert_eq!(
            detect_emotion("I am so happy and excited today!", Language::English),
            Emotion::Happy
        );
    }

    #[test]
    fn text_without_markers_is_neutral() {
        assert_eq!(detect_emotion("This is fine.", Language::English), Emotion::Neutral);
    }

    #[test]
    fn detects_happy_japanese() {
        assert_eq!(
            detect_emotion("私はとても嬉しいです", Language::Japanese),
            Emotion::Happy
        );
    }

    #[test]
    fn detects_other_emotions() {
        assert_eq!(
            detect_emotion("I hate this, I'm so angry and fed up", Language::English),
            Emotion::Angry
        );
        assert_eq!(
            detect_emotion("Wow, that is unbelievable!", Language::English),
            Emotion::Surprised
        );
        assert_eq!(
            detect_emotion("Estoy muy triste y deprimido", Language::Spanish),
            Emotion::Sad
        );
        assert_eq!(
            detect_emotion("Je suis en colère", Language::French),
            Emotion::Angry
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(detect_emotion("HAPPY", Language::English), Emotion::Happy);
    }

    #[test]
    fn emoji_markers_vote() {
        assert_eq!(detect_emotion("😡", Language::English), Emotion::Angry);
        assert_eq!(detect_emotion("😢", Language::Japanese), Emotion::Sad);
    }

    #[test]
    fn markers_accumulate() {
        let scores = emotion_scores("I hate this, I'm so angry and fed up", Language::English);
        assert_eq!(scores.get(Emotion::Angry), 3);
    }

    #[test]
    fn denser_emotion_beats_single_marker() {
        // One sad marker against two happy ones.
        let text = "sad but still happy and excited";
        let scores = emotion_scores(text, Language::English);
        assert_eq!(scores.get(Emotion::Sad), 1);
        assert_eq!(scores.get(Emotion::Happy), 2);
        assert_eq!(detect_emotion(text, Language::English), Emotion::Happy);
    }

    #[test]
    fn ties_resolve_in_declaration_order() {
        // "unhappy" is a sad marker that also contains the happy marker "happy".
        let scores = emotion_scores("unhappy", Language::English);
        assert_eq!(scores.get(Emotion::Happy), 1);
        assert_eq!(scores.get(Emotion::Sad), 1);
        assert_eq!(detect_emotion("unhappy", Language::English), Emotion::Happy);
    }

    #[test]
    fn lexicon_is_chosen_by_language() {
        assert_eq!(detect_emotion("feliz", Language::Spanish), Emotion::Happy);
        assert_eq!(detect_emotion("feliz", Language::English), Emotion::Neutral);
    }

    #[test]
    fn every_marker_votes_for_its_own_emotion() {
        for &language in Language::ALL {
            let lexicon = EmotionLexicon::for_language(language);
            for &emotion in Emotion::ALL {
                for marker in lexicon.markers(emotion) {
                    let scores = emotion_scores(marker, language);
                    let own = scores.get(emotion);
                    assert!(own >= 1, "{language}/{emotion}: {marker:?} did not match itself");

                    let detected = detect_emotion(marker, language);
                    if detected != emotion {
                        let winner = scores.get(detected);
                        assert!(
                            winner > own || (winner == own && detected.index() < emotion.index()),
                            "{language}/{emotion}: {marker:?} detected as {detected}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn lexicons_are_lower_case() {
        for &language in Language::ALL {
            let lexicon = EmotionLexicon::for_language(language);
            assert!(lexicon.neutral.is_empty());
            for &emotion in Emotion::ALL {
                for marker in lexicon.markers(emotion) {
                    assert_eq!(marker.to_lowercase(), *marker);
                }
            }
        }
    }

    #[test]
    fn repeated_lexicon_entry_votes_twice() {
        // "furious" appears twice in the English angry list.
        let scores = emotion_scores("I'm furious and happy", Language::English);
        assert_eq!(scores.get(Emotion::Angry), 2);
        assert_eq!(scores.get(Emotion::Happy), 1);
        assert_eq!(
            detect_emotion("I'm furious and happy", Language::English),
            Emotion::Angry
        );
    }

    #[test]
    fn tag_order_matches_declaration() {
        for (position, emotion) in Emotion::ALL.iter().enumerate() {
            assert_eq!(emotion.index(), position);
        }
        assert_eq!(Emotion::ALL.len(), 5);
    }

    #[test]
    fn detection_is_deterministic() {
        let text = "Estoy muy feliz hoy, ¡qué alegría!";
        assert_eq!(
            detect_emotion(text, Language::Spanish),
            detect_emotion(text, Language::Spanish)
        );
    }

    #[test]
    fn parses_emotion_names() {
        assert_eq!("Happy".parse::<Emotion>().ok(), Some(Emotion::Happy));
        assert!("bored".parse::<Emotion>().is_err());
    }
}
