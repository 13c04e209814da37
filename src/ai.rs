pub mod common;
pub mod config;
pub mod gpt;
pub mod prompts;
