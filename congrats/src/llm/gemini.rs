use crate::llm::{LLM, Message};
use async_trait::async_trait;

pub struct Gemini {
    api_key: String,
    model: String,
    client: reqwest::Client,
    generation_config: GenerationConfig,
}

pub struct GenerationConfig {
    temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { temperature: 1.0 }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Missing Gemini API key")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Gemini API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, GeminiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            model: model.into(),
            client: reqwest::Client::builder().build()?,
            generation_config: GenerationConfig::default(),
        })
    }

    pub fn set_temperature(&mut self, temperature: f32) {
        self.generation_config.temperature = temperature;
    }
}

#[async_trait]
impl LLM for Gemini {
    type Error = GeminiError;

    async fn generate(
        &self,
        messages: &[Message],
        max_new_tokens: u32,
    ) -> Result<Vec<String>, Self::Error> {
        use json_model::*;

        let req_body = to_request(messages, &self.generation_config, max_new_tokens);

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let resp = self.client.post(&url).json(&req_body).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Api { status, body });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        Ok(candidate_texts(parsed))
    }
}

mod json_model {
    use serde::{Deserialize, Serialize};

    use crate::llm::{Message, Role};

    use super::GenerationConfig;

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub struct Part {
        pub text: String,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub struct Content {
        // role: "user" | "model"
        #[serde(skip_serializing_if = "Option::is_none")]
        pub role: Option<String>,
        pub parts: Vec<Part>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub struct GenerationConfigPayload {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub temperature: Option<f32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_output_tokens: Option<u32>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub struct GenerateContentRequest {
        pub contents: Vec<Content>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub system_instruction: Option<Content>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub generation_config: Option<GenerationConfigPayload>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub struct GenerateContentResponse {
        pub candidates: Option<Vec<Candidate>>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub struct Candidate {
        pub content: Option<ContentResp>,
        // finish_reason / safety_ratings ...
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub struct ContentResp {
        pub parts: Option<Vec<PartResp>>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub struct PartResp {
        pub text: Option<String>,
    }

    pub fn to_request(
        messages: &[Message],
        config: &GenerationConfig,
        max_new_tokens: u32,
    ) -> GenerateContentRequest {
        let system_text = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let system_instruction = (!system_text.is_empty()).then(|| Content {
            role: None,
            parts: vec![Part { text: system_text }],
        });

        let contents = messages
            .iter()
            .filter(|m| m.role == Role::User)
            .map(|m| Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: m.content.clone(),
                }],
            })
            .collect();

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config: Some(GenerationConfigPayload {
                temperature: Some(config.temperature),
                max_output_tokens: Some(max_new_tokens),
            }),
        }
    }

    pub fn candidate_texts(resp: GenerateContentResponse) -> Vec<String> {
        resp.candidates
            .unwrap_or_default()
            .into_iter()
            .map(|c| {
                c.content
                    .and_then(|content| content.parts)
                    .map(|parts| {
                        parts
                            .into_iter()
                            .filter_map(|p| p.text)
                            .collect::<Vec<_>>()
                            .join("")
                    })
                    .unwrap_or_default()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::json_model::{GenerateContentResponse, candidate_texts, to_request};
    use super::{Gemini, GeminiError, GenerationConfig};
    use crate::llm::Message;

    #[test]
    fn blank_api_key_is_rejected() {
        let err = Gemini::new("  ", "gemini-2.5-flash").err().unwrap();
        assert!(matches!(err, GeminiError::MissingApiKey));
    }

    #[test]
    fn request_maps_roles_and_token_budget() {
        let messages = vec![
            Message::system("You write examples."),
            Message::user("Style: warm"),
        ];
        let req = to_request(&messages, &GenerationConfig::default(), 128);

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json["system_instruction"]["parts"][0]["text"],
            "You write examples."
        );
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Style: warm");
        assert_eq!(json["generation_config"]["max_output_tokens"], 128);
    }

    #[test]
    fn temperature_override_reaches_the_request() {
        let mut gemini = Gemini::new("key", "gemini-2.5-flash").unwrap();
        gemini.set_temperature(0.5);

        let req = to_request(&[Message::user("hi")], &gemini.generation_config, 16);

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["generation_config"]["temperature"], 0.5);
    }

    #[test]
    fn candidate_parts_are_joined_per_candidate() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"Hello"},{"text":", world"}]}},
                {"content":{"parts":[{"text":"second"}]}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(candidate_texts(resp), vec!["Hello, world", "second"]);
    }

    #[test]
    fn missing_candidates_yield_no_texts() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(candidate_texts(resp).is_empty());
    }
}
