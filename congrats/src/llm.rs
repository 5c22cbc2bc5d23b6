use async_trait::async_trait;

pub mod gemini;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[async_trait]
pub trait LLM {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run one generation request and return the candidate texts in engine order.
    async fn generate(
        &self,
        messages: &[Message],
        max_new_tokens: u32,
    ) -> Result<Vec<String>, Self::Error>;
}
