use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::scoring::{ScoreVector, Tag};
use super::ParseTagError;

/// Languages the bot can recognise and answer in.
///
/// Declaration order is the tie-break order of [`detect_language`]: when two languages
/// score the same, the one listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "fr")]
    French,
}

impl Tag for Language {
    const ALL: &'static [Self] = &[
        Language::English,
        Language::Spanish,
        Language::Japanese,
        Language::French,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl Language {
    pub const DEFAULT: Language = Language::English;

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Japanese => "ja",
            Language::French => "fr",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Japanese => "日本語",
            Language::French => "Français",
        }
    }

    /// Whether the orthography separates words with spaces.
    fn has_word_boundaries(self) -> bool {
        !matches!(self, Language::Japanese)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let primary = value
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        match primary.as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" => Ok(Language::Spanish),
            "ja" | "japanese" | "日本語" => Ok(Language::Japanese),
            "fr" | "french" | "français" => Ok(Language::French),
            _ => Err(ParseTagError::UnknownLanguage(value.trim().to_string())),
        }
    }
}

const SCRIPT_BONUS: u32 = 10;
const DIACRITIC_BONUS: u32 = 5;

/// Character-class rule that votes for a language independent of vocabulary.
struct ScriptRule {
    language: Language,
    bonus: u32,
    matches: fn(char) -> bool,
}

fn is_japanese_script(ch: char) -> bool {
    matches!(
        ch,
        '\u{3000}'..='\u{303f}'
            | '\u{3040}'..='\u{309f}'
            | '\u{30a0}'..='\u{30ff}'
            | '\u{ff00}'..='\u{ff9f}'
            | '\u{4e00}'..='\u{9faf}'
            | '\u{3400}'..='\u{4dbf}'
    )
}

fn is_french_mark(ch: char) -> bool {
    "àâäæçéèêëîïôœùûüÿÀÂÄÆÇÉÈÊËÎÏÔŒÙÛÜŸ".contains(ch)
}

fn is_spanish_mark(ch: char) -> bool {
    "áéíóúüñ¿¡ÁÉÍÓÚÜÑ".contains(ch)
}

// Applied in this order; each rule fires at most once per text.
const SCRIPT_RULES: &[ScriptRule] = &[
    ScriptRule {
        language: Language::Japanese,
        bonus: SCRIPT_BONUS,
        matches: is_japanese_script,
    },
    ScriptRule {
        language: Language::French,
        bonus: DIACRITIC_BONUS,
        matches: is_french_mark,
    },
    ScriptRule {
        language: Language::Spanish,
        bonus: DIACRITIC_BONUS,
        matches: is_spanish_mark,
    },
];

fn language_markers(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "the", "and", "is", "in", "to", "a", "of", "for", "that", "you", "hello", "hi", "how",
            "what", "why", "when", "who",
        ],
        Language::Spanish => &[
            "el", "la", "los", "las", "y", "es", "en", "a", "de", "para", "que", "hola", "como",
            "qué", "por qué", "cuándo", "quién",
        ],
        Language::Japanese => &[
            "は", "が", "の", "に", "を", "で", "と", "も", "から", "まで", "こんにちは",
            "こんばんは", "おはよう", "何", "なぜ", "いつ", "誰",
        ],
        Language::French => &[
            "le", "la", "les", "un", "une", "des", "et", "est", "dans", "pour", "que", "qui",
            "bonjour", "salut", "comment", "pourquoi", "quand", "où",
        ],
    }
}

enum MarkerMatcher {
    WholeWord(Regex),
    Substring(&'static str),
}

impl MarkerMatcher {
    fn is_match(&self, lowered: &str) -> bool {
        match self {
            MarkerMatcher::WholeWord(regex) => regex.is_match(lowered),
            MarkerMatcher::Substring(marker) => lowered.contains(marker),
        }
    }
}

static MARKER_MATCHERS: Lazy<Vec<(Language, Vec<MarkerMatcher>)>> = Lazy::new(|| {
    Language::ALL
        .iter()
        .map(|&language| {
            let matchers = language_markers(language)
                .iter()
                .map(|&marker| {
                    if language.has_word_boundaries() {
                        let pattern = format!(r"(?i)\b{}\b", regex::escape(marker));
                        MarkerMatcher::WholeWord(
                            Regex::new(&pattern).expect("valid language marker regex"),
                        )
                    } else {
                        MarkerMatcher::Substring(marker)
                    }
                })
                .collect();
            (language, matchers)
        })
        .collect()
});

/// Raw per-language votes for `text`. An empty text scores zero everywhere.
pub fn language_scores(text: &str) -> ScoreVector<Language> {
    let mut scores = ScoreVector::new();
    if text.is_empty() {
        return scores;
    }

    for rule in SCRIPT_RULES {
        if text.chars().any(rule.matches) {
            scores.add(rule.language, rule.bonus);
        }
    }

    let lowered = text.to_lowercase();
    for (language, matchers) in MARKER_MATCHERS.iter() {
        let hits = matchers
            .iter()
            .filter(|matcher| matcher.is_match(&lowered))
            .count();
        scores.add(*language, hits as u32);
    }

    scores
}

/// Guesses the language of a chat message.
///
/// Script and diacritic rules vote first, then every language's marker words. The
/// strictly highest total wins; no votes at all means [`Language::DEFAULT`].
pub fn detect_language(text: &str) -> Language {
    if text.is_empty() {
        return Language::DEFAULT;
    }
    language_scores(text).pick(1, Language::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_default_language() {
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn text_without_signal_is_default_language() {
        assert_eq!(detect_language("12345 !!!"), Language::English);
    }

    #[test]
    fn detects_english_greeting() {
        assert_eq!(detect_language("Hello, how are you today?"), Language::English);
    }

    #[test]
    fn diacritics_and_markers_pick_spanish() {
        let scores = language_scores("Estoy muy feliz hoy, ¡qué alegría!");
        assert_eq!(scores.get(Language::Spanish), 6);
        assert_eq!(scores.get(Language::French), 5);
        assert_eq!(
            detect_language("Estoy muy feliz hoy, ¡qué alegría!"),
            Language::Spanish
        );
    }

    #[test]
    fn detects_french_without_accents() {
        assert_eq!(
            detect_language("Bonjour, comment allez-vous ?"),
            Language::French
        );
    }

    #[test]
    fn detects_japanese() {
        assert_eq!(detect_language("私はとても嬉しいです"), Language::Japanese);
    }

    #[test]
    fn script_bonus_outweighs_a_latin_marker() {
        let scores = language_scores("こんにちは hello");
        assert_eq!(scores.get(Language::English), 1);
        assert_eq!(detect_language("こんにちは hello"), Language::Japanese);
    }

    #[test]
    fn script_rule_counts_once_per_text() {
        let scores = language_scores("カタカナカタカナ");
        assert_eq!(scores.get(Language::Japanese), SCRIPT_BONUS);
    }

    #[test]
    fn latin_markers_need_whole_words() {
        // "hint" and "theory" contain "hi" and "the" but are not those words.
        let scores = language_scores("hint theory");
        assert_eq!(scores.get(Language::English), 0);
    }

    #[test]
    fn repeated_marker_counts_once() {
        let scores = language_scores("the the the");
        assert_eq!(scores.get(Language::English), 1);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(language_scores("HELLO").get(Language::English), 1);
    }

    #[test]
    fn ties_resolve_in_declaration_order() {
        // "la" is a marker for both Spanish and French.
        let scores = language_scores("la");
        assert_eq!(scores.get(Language::Spanish), 1);
        assert_eq!(scores.get(Language::French), 1);
        assert_eq!(detect_language("la"), Language::Spanish);
    }

    #[test]
    fn detection_is_deterministic() {
        let text = "Je suis très heureux, c'est génial";
        assert_eq!(detect_language(text), detect_language(text));
    }

    #[test]
    fn parses_language_codes() {
        assert_eq!("es-MX".parse::<Language>().ok(), Some(Language::Spanish));
        assert_eq!("JA".parse::<Language>().ok(), Some(Language::Japanese));
        assert_eq!("fr_CA".parse::<Language>().ok(), Some(Language::French));
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn tag_order_matches_declaration() {
        for (position, language) in Language::ALL.iter().enumerate() {
            assert_eq!(language.index(), position);
        }
        assert_eq!(Language::ALL.len(), 4);
    }

    #[test]
    fn code_round_trips_through_display() {
        for &language in Language::ALL {
            assert_eq!(language.to_string().parse::<Language>().ok(), Some(language));
        }
    }
}
