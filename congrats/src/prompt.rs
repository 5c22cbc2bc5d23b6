use std::collections::HashMap;

use dynfmt::Format;

use crate::{llm::Message, recipient::Recipient};

const STYLE_SYSTEM_PROMPT: &str = "You are an assistant that demonstrates a requested writing style. \
     You are given the name of a style (for example 'warm', 'humorous', 'formal'). \
     Your task is to write a short example of one or two sentences reflecting that style.";

const CONGRATS_SYSTEM_PROMPT: &str = "You are a kind author of personal congratulations. \
     Write a sincere and original congratulation of at most 100 words, \
     using the recipient's name, age and interests. \
     Keep to the style of the text I give you.";

// placeholders: {name}, {age}, {interests}, {style_example}
const CONGRATS_USER_TEMPLATE: &str = "Name: {name}\nAge: {age}\nInterests: {interests}\n\n\
     Style example:\n{style_example}\n\n\
     Write a warm congratulation in this style:";

pub fn style_messages(style_name: &str) -> Vec<Message> {
    vec![
        Message::system(STYLE_SYSTEM_PROMPT),
        Message::user(format!("Style: {style_name}")),
    ]
}

pub fn congratulation_messages(
    recipient: &Recipient,
    style_example: &str,
) -> Result<Vec<Message>, anyhow::Error> {
    let mut map: HashMap<&str, String> = HashMap::new();
    map.insert("name", recipient.name.clone());
    map.insert("age", recipient.age.to_string());
    map.insert("interests", recipient.interests_line());
    map.insert("style_example", style_example.to_string());

    let user_content = dynfmt::SimpleCurlyFormat
        .format(CONGRATS_USER_TEMPLATE, &map)
        .map(|s| s.into_owned())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(vec![
        Message::system(CONGRATS_SYSTEM_PROMPT),
        Message::user(user_content),
    ])
}
