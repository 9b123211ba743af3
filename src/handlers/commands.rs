use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ReplyParameters;
use tracing::info;

use crate::classify::scoring::Tag;
use crate::classify::Language;
use crate::state::{AppState, ChatPreferences};
use crate::turn::ChatTurn;

const HELP_TEXT: &str = "Talk to me in English, Spanish, Japanese or French and I will answer in kind.\n\n\
/language - list languages or switch with /language <code>\n\
/autodetect - toggle automatic language detection\n\
/reset - restore default settings\n\
/help - show this message";

async fn reply(bot: &Bot, message: &Message, text: impl Into<String>) -> Result<()> {
    bot.send_message(message.chat.id, text.into())
        .reply_parameters(ReplyParameters::new(message.id))
        .await?;
    Ok(())
}

fn describe_preferences(prefs: ChatPreferences) -> String {
    format!(
        "Language: {} ({}), auto-detect: {}",
        prefs.language.native_name(),
        prefs.language.code(),
        if prefs.auto_detect { "on" } else { "off" }
    )
}

fn language_list(current: Language) -> String {
    let mut lines = vec!["Available languages:".to_string()];
    for &language in Language::ALL {
        let marker = if language == current { "✓" } else { " " };
        lines.push(format!("{marker} {} - {}", language.code(), language.native_name()));
    }
    lines.push("Switch with /language <code>".to_string());
    lines.join("\n")
}

pub async fn start_handler(bot: Bot, state: AppState, message: Message) -> Result<()> {
    let prefs = state.preferences(message.chat.id.0);
    reply(&bot, &message, ChatTurn::greeting(prefs.language).text).await
}

pub async fn help_handler(bot: Bot, state: AppState, message: Message) -> Result<()> {
    let prefs = state.preferences(message.chat.id.0);
    reply(
        &bot,
        &message,
        format!("{HELP_TEXT}\n\n{}", describe_preferences(prefs)),
    )
    .await
}

pub async fn language_handler(
    bot: Bot,
    state: AppState,
    message: Message,
    arg: Option<String>,
) -> Result<()> {
    let chat_id = message.chat.id.0;
    let Some(code) = arg else {
        let prefs = state.preferences(chat_id);
        return reply(&bot, &message, language_list(prefs.language)).await;
    };

    match code.parse::<Language>() {
        Ok(language) => {
            state.set_language(chat_id, language);
            info!("Chat {} switched language to {}", chat_id, language.code());
            reply(&bot, &message, ChatTurn::greeting(language).text).await
        }
        Err(err) => {
            let prefs = state.preferences(chat_id);
            reply(
                &bot,
                &message,
                format!("{err}\n\n{}", language_list(prefs.language)),
            )
            .await
        }
    }
}

pub async fn autodetect_handler(bot: Bot, state: AppState, message: Message) -> Result<()> {
    let prefs = state.toggle_auto_detect(message.chat.id.0);
    reply(&bot, &message, describe_preferences(prefs)).await
}

pub async fn reset_handler(bot: Bot, state: AppState, message: Message) -> Result<()> {
    let prefs = state.reset(message.chat.id.0);
    reply(&bot, &message, ChatTurn::greeting(prefs.language).text).await
}
