use std::time::Instant;

use chrono::{DateTime, Utc};
use teloxide::types::Message;
use tracing::info;

use crate::classify::{Emotion, Language};
use crate::utils::logging::TIMING_TARGET;

const MAX_LOGGED_TEXT_CHARS: usize = 300;

fn truncate_for_log(text: &str) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() > MAX_LOGGED_TEXT_CHARS {
        single_line.chars().take(MAX_LOGGED_TEXT_CHARS).collect()
    } else {
        single_line
    }
}

/// Timing record for one chat turn, from receipt to reply.
#[derive(Debug)]
pub struct TurnTimer {
    kind: String,
    chat_id: i64,
    user_id: Option<i64>,
    message_id: i64,
    text: Option<String>,
    started_at: DateTime<Utc>,
    started_perf: Instant,
    language: Option<Language>,
    emotion: Option<Emotion>,
    status: String,
    completed: bool,
}

impl TurnTimer {
    pub fn from_message(kind: &str, message: &Message) -> Self {
        let user = message.from.as_ref();
        TurnTimer {
            kind: kind.to_string(),
            chat_id: message.chat.id.0,
            user_id: user.and_then(|u| i64::try_from(u.id.0).ok()),
            message_id: message.id.0 as i64,
            text: message.text().map(truncate_for_log),
            started_at: Utc::now(),
            started_perf: Instant::now(),
            language: None,
            emotion: None,
            status: "success".to_string(),
            completed: false,
        }
    }

    pub fn log_received(&self) {
        info!(
            target: TIMING_TARGET,
            "event=turn_received kind={} chat_id={} user_id={:?} message_id={} received_at={} text={:?}",
            self.kind,
            self.chat_id,
            self.user_id,
            self.message_id,
            self.started_at.to_rfc3339(),
            self.text
        );
    }

    pub fn record_classification(&mut self, language: Language, emotion: Emotion) {
        self.language = Some(language);
        self.emotion = Some(emotion);
    }

    pub fn mark_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    pub fn log_completed(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        let completed_at = Utc::now();
        let duration = self.started_perf.elapsed().as_secs_f64();
        info!(
            target: TIMING_TARGET,
            "event=turn_completed kind={} chat_id={} message_id={} started_at={} response_sent_at={} duration_s={:.3} language={} emotion={} status={}",
            self.kind,
            self.chat_id,
            self.message_id,
            self.started_at.to_rfc3339(),
            completed_at.to_rfc3339(),
            duration,
            self.language.map(Language::code).unwrap_or("-"),
            self.emotion.map(Emotion::as_str).unwrap_or("-"),
            self.status
        );
    }
}

pub fn start_turn_timer(kind: &str, message: &Message) -> TurnTimer {
    let timer = TurnTimer::from_message(kind, message);
    timer.log_received();
    timer
}

pub fn complete_turn_timer(timer: &mut TurnTimer, status: &str) {
    timer.mark_status(status);
    timer.log_completed();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_text_on_char_boundaries() {
        let text = "嬉".repeat(MAX_LOGGED_TEXT_CHARS + 10);
        assert_eq!(truncate_for_log(&text).chars().count(), MAX_LOGGED_TEXT_CHARS);
        assert_eq!(truncate_for_log("a\nb"), "a b");
    }
}
