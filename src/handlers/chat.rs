use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ReplyParameters};
use tracing::{debug, info};

use crate::config::CONFIG;
use crate::replies::format_reply;
use crate::state::AppState;
use crate::turn::respond_to;
use crate::utils::telegram::{reply_delay, start_chat_action_heartbeat};
use crate::utils::timing::{complete_turn_timer, start_turn_timer};

pub async fn chat_turn_handler(bot: Bot, state: AppState, message: Message) -> Result<()> {
    let Some(text) = message.text() else {
        return Ok(());
    };
    if text.trim().is_empty() {
        return Ok(());
    }

    let chat_id = message.chat.id;
    let mut timer = start_turn_timer("chat", &message);

    let prefs = state.preferences(chat_id.0);
    let outcome = respond_to(text, prefs);
    if let Some(language) = outcome.switched_language {
        state.set_language(chat_id.0, language);
        info!(
            "Chat {} auto-switched language {} -> {}",
            chat_id.0,
            prefs.language.code(),
            language.code()
        );
    }

    let emotion = outcome.reply.emotion.unwrap_or_default();
    timer.record_classification(outcome.reply.language, emotion);
    debug!(
        "Classified message {} in chat {}: language={} emotion={}",
        message.id.0, chat_id.0, outcome.reply.language, emotion
    );

    let typing = start_chat_action_heartbeat(bot.clone(), chat_id, ChatAction::Typing);
    tokio::time::sleep(reply_delay(
        CONFIG.reply_delay_min_ms,
        CONFIG.reply_delay_jitter_ms,
    ))
    .await;
    drop(typing);

    let text = format_reply(emotion, &outcome.reply.text, CONFIG.show_emotion_indicator);
    let sent = bot
        .send_message(chat_id, text)
        .reply_parameters(ReplyParameters::new(message.id))
        .await;

    match sent {
        Ok(_) => {
            complete_turn_timer(&mut timer, "success");
            Ok(())
        }
        Err(err) => {
            complete_turn_timer(&mut timer, "error");
            Err(err.into())
        }
    }
}
