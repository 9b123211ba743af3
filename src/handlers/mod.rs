pub mod chat;
pub mod commands;
