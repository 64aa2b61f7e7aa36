pub mod slack_text;
pub mod slack_block;
pub mod slack_message;
