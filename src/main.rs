use std::error::Error;

use anyhow::anyhow;
use dotenvy::dotenv;
use serde_json::json;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

mod classify;
mod config;
mod handlers;
mod replies;
mod state;
mod turn;
mod utils;

use classify::emotion::emotion_scores;
use classify::language::language_scores;
use classify::Language;
use config::CONFIG;
use handlers::{chat, commands};
use state::{AppState, ChatPreferences};
use turn::respond_to;
use utils::logging::{init_cli_logging, init_logging};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    Start,
    Help,
    Language(String),
    Autodetect,
    Reset,
}

type HandlerResult = Result<(), Box<dyn Error + Send + Sync>>;

#[derive(Debug, PartialEq)]
struct ClassifyArgs {
    text: String,
    language: Option<Language>,
    json: bool,
}

fn classify_usage() -> &'static str {
    "Usage: cargo run -- classify [--language <en|es|ja|fr>] [--json] <text...>"
}

fn parse_classify_args(args: &[String]) -> anyhow::Result<Option<ClassifyArgs>> {
    if args.get(1).map(|value| value.as_str()) != Some("classify") {
        return Ok(None);
    }

    let mut language = None;
    let mut json = false;
    let mut words = Vec::new();

    let mut index = 2;
    while index < args.len() {
        match args[index].as_str() {
            "--language" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| anyhow!("Missing value for --language"))?;
                language = Some(value.parse::<Language>()?);
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                return Err(anyhow!(classify_usage()));
            }
            other => words.push(other.to_string()),
        }
        index += 1;
    }

    if words.is_empty() {
        return Err(anyhow!("Text is required\n{}", classify_usage()));
    }

    Ok(Some(ClassifyArgs {
        text: words.join(" "),
        language,
        json,
    }))
}

fn classify_preferences(args: &ClassifyArgs, default_language: Language) -> ChatPreferences {
    match args.language {
        Some(language) => ChatPreferences::new(language, false),
        None => ChatPreferences::new(default_language, true),
    }
}

fn run_classify(args: &ClassifyArgs) {
    let outcome = respond_to(&args.text, classify_preferences(args, CONFIG.default_language));
    let language = outcome.reply.language;
    let emotion = outcome.reply.emotion.unwrap_or_default();
    info!(
        "Classified {:?} as language={} emotion={}",
        args.text, language, emotion
    );

    if args.json {
        let languages = language_scores(&args.text)
            .iter()
            .map(|(tag, score)| (tag.code().to_string(), json!(score)))
            .collect::<serde_json::Map<_, _>>();
        let emotions = emotion_scores(&args.text, language)
            .iter()
            .map(|(tag, score)| (tag.as_str().to_string(), json!(score)))
            .collect::<serde_json::Map<_, _>>();
        let report = json!({
            "language": language,
            "emotion": emotion,
            "language_scores": languages,
            "emotion_scores": emotions,
            "response": outcome.reply.text,
            "turns": [outcome.user, outcome.reply],
        });
        println!("{report}");
        return;
    }

    println!("language: {} ({})", language.code(), language.native_name());
    println!("emotion:  {} {}", emotion.indicator(), emotion);
    println!("response: {}", outcome.reply.text);
}

#[tokio::main]
async fn main() -> HandlerResult {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if let Some(classify_args) = parse_classify_args(&args)? {
        init_cli_logging(&CONFIG.log_level);
        CONFIG.log_fallbacks();
        run_classify(&classify_args);
        return Ok(());
    }

    let _guards = init_logging(&CONFIG.log_level, &CONFIG.log_file_prefix);
    CONFIG.log_fallbacks();

    if CONFIG.bot_token.trim().is_empty() {
        return Err("BOT_TOKEN is required unless running classify".into());
    }

    let bot = Bot::new(CONFIG.bot_token.clone());
    info!(
        "Starting emotion chat bot (default_language={} auto_detect={})",
        CONFIG.default_language, CONFIG.auto_detect_language
    );

    let state = AppState::new(ChatPreferences::new(
        CONFIG.default_language,
        CONFIG.auto_detect_language,
    ));

    let command_handler = dptree::entry()
        .filter_command::<Command>()
        .endpoint(handle_command);

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(dptree::filter(|msg: Message| msg.text().is_some()).endpoint(handle_chat_turn))
        .endpoint(ignore_message);

    Dispatcher::builder(bot, message_handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_command(
    bot: Bot,
    state: AppState,
    message: Message,
    command: Command,
) -> HandlerResult {
    fn optional_arg(arg: String) -> Option<String> {
        if arg.trim().is_empty() {
            None
        } else {
            Some(arg.trim().to_string())
        }
    }

    let result = match command {
        Command::Start => commands::start_handler(bot, state, message).await,
        Command::Help => commands::help_handler(bot, state, message).await,
        Command::Language(arg) => {
            commands::language_handler(bot, state, message, optional_arg(arg)).await
        }
        Command::Autodetect => commands::autodetect_handler(bot, state, message).await,
        Command::Reset => commands::reset_handler(bot, state, message).await,
    };
    if let Err(err) = result {
        error!("command handler failed: {err}");
    }
    Ok(())
}

async fn handle_chat_turn(bot: Bot, state: AppState, message: Message) -> HandlerResult {
    if let Some(text) = message.text() {
        if text.trim_start().starts_with('/') {
            return Ok(());
        }
    }
    tokio::spawn(async move {
        if let Err(err) = chat::chat_turn_handler(bot, state, message).await {
            error!("chat turn handler failed: {err}");
        }
    });
    Ok(())
}

async fn ignore_message(_message: Message) -> HandlerResult {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn ignores_non_classify_invocations() {
        assert_eq!(parse_classify_args(&args(&["bot"])).ok(), Some(None));
    }

    #[test]
    fn parses_classify_flags_and_text() {
        let parsed = parse_classify_args(&args(&[
            "bot",
            "classify",
            "--language",
            "ja",
            "--json",
            "私は",
            "嬉しい",
        ]))
        .ok()
        .flatten();
        assert_eq!(
            parsed,
            Some(ClassifyArgs {
                text: "私は 嬉しい".to_string(),
                language: Some(Language::Japanese),
                json: true,
            })
        );
    }

    #[test]
    fn rejects_missing_text_and_unknown_language() {
        assert!(parse_classify_args(&args(&["bot", "classify"])).is_err());
        assert!(parse_classify_args(&args(&["bot", "classify", "--language", "de", "hi"])).is_err());
    }

    #[test]
    fn explicit_language_disables_detection() {
        let parsed = ClassifyArgs {
            text: "hola".to_string(),
            language: Some(Language::French),
            json: false,
        };
        let prefs = classify_preferences(&parsed, Language::English);
        assert_eq!(prefs.language, Language::French);
        assert!(!prefs.auto_detect);

        let detected = ClassifyArgs {
            language: None,
            ..parsed
        };
        assert!(classify_preferences(&detected, Language::English).auto_detect);
    }
}
