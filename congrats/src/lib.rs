mod generate;
mod llm;
mod prompt;
mod recipient;

pub use generate::{
    CONGRATS_MAX_NEW_TOKENS, STYLE_MAX_NEW_TOKENS, WORD_LIMIT, congratulation, style_example,
};
pub use llm::{LLM, Message, Role, gemini};
pub use prompt::{congratulation_messages, style_messages};
pub use recipient::Recipient;
