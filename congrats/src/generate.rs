use crate::{llm::LLM, prompt, recipient::Recipient};

pub const STYLE_MAX_NEW_TOKENS: u32 = 128;
pub const CONGRATS_MAX_NEW_TOKENS: u32 = 512;
pub const WORD_LIMIT: usize = 100;

/// Generate a short example text in the requested style.
pub async fn style_example(style_name: &str, llm: &impl LLM) -> anyhow::Result<String> {
    let messages = prompt::style_messages(style_name);
    let candidates = llm.generate(&messages, STYLE_MAX_NEW_TOKENS).await?;

    Ok(first_candidate(candidates))
}

/// Generate a personalized congratulation imitating `style_text`.
pub async fn congratulation(
    recipient: &Recipient,
    style_text: &str,
    llm: &impl LLM,
) -> anyhow::Result<String> {
    let messages = prompt::congratulation_messages(recipient, style_text)?;
    let candidates = llm.generate(&messages, CONGRATS_MAX_NEW_TOKENS).await?;
    let text = first_candidate(candidates);

    let words = text.split_whitespace().count();
    if words > WORD_LIMIT {
        log::warn!("The congratulation contains {words} words (limit {WORD_LIMIT}).");
    }

    Ok(text)
}

fn first_candidate(candidates: Vec<String>) -> String {
    candidates
        .into_iter()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
