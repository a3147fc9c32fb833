use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::prompt::SYSTEM_INSTRUCTION;

const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 700;

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

/// The external model call producing the veracity verdict. Its failure is
/// the only one surfaced to the caller.
#[async_trait]
pub trait ModelJudge: Send + Sync {
    async fn judge(&self, prompt: &str) -> Result<String>;
}

pub struct OpenAiJudge {
    client: Client,
    api_key: String,
}

impl OpenAiJudge {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl ModelJudge for OpenAiJudge {
    async fn judge(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: MODEL.into(),
            messages: vec![
                Message {
                    role: "system".into(),
                    content: SYSTEM_INSTRUCTION.into(),
                },
                Message {
                    role: "user".into(),
                    content: prompt.into(),
                },
            ],
            max_tokens: MAX_TOKENS,
        };

        let res = self
            .client
            .post(OPENAI_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?;

        let status = res.status();
        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?;

        if !status.is_success() {
            let detail = json["error"]["message"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(AppError::ModelError(detail));
        }

        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AppError::ModelError("Invalid response format from model".to_string()))?
            .to_string();

        Ok(reply)
    }
}
