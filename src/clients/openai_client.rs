use crate::config::settings::AppSettings;
use crate::error::AppError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const COMPLETION_MODEL: &str = "gpt-3.5-turbo";
const MAX_COMPLETION_TOKENS: u32 = 300;
const COMPLETION_TEMPERATURE: f32 = 0.7;

// The original backend relied on the platform default (no timeout at all);
// a bounded timeout keeps a stuck upstream from pinning requests forever.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

// OpenAI Chat Completion Request Structs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

// Response structs only keep the fields we read; everything else upstream
// sends is ignored.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(app_settings: &AppSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: app_settings.api_keys.openai_api_key.clone(),
            base_url: app_settings.api_keys.openai_base_url.clone(),
        })
    }

    /// Sends the prompt as a single user message and returns the first
    /// choice's content.
    pub async fn explain(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: COMPLETION_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: COMPLETION_TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("OpenAI API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Upstream(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse OpenAI response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Internal("OpenAI response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{ApiKeysConfig, AppConfig, ServerConfig};
    use pretty_assertions::assert_eq;

    fn test_settings(base_url: &str) -> AppSettings {
        AppSettings {
            app: AppConfig {
                name: "oneclicktoknow".to_string(),
                environment: "test".to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            api_keys: ApiKeysConfig {
                openai_api_key: "test-key".to_string(),
                openai_base_url: base_url.to_string(),
            },
        }
    }

    #[actix_web::test]
    async fn explain_returns_first_choice_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"Une explication."}}]}"#,
            )
            .create_async()
            .await;

        let client = OpenAiClient::new(&test_settings(&server.url())).unwrap();
        let explanation = client.explain("Expliquez ceci").await.unwrap();

        assert_eq!(explanation, "Une explication.");
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn explain_sends_fixed_model_and_sampling_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 300,
                "temperature": 0.7,
                "messages": [{"role": "user", "content": "Expliquez ceci"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create_async()
            .await;

        let client = OpenAiClient::new(&test_settings(&server.url())).unwrap();
        client.explain("Expliquez ceci").await.unwrap();

        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn non_success_status_maps_to_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let client = OpenAiClient::new(&test_settings(&server.url())).unwrap();
        let error = client.explain("Expliquez ceci").await.unwrap_err();

        match error {
            AppError::Upstream(message) => {
                assert!(message.contains("429"), "message was: {}", message);
            }
            other => panic!("expected Upstream error, got: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn connection_failure_maps_to_upstream_error() {
        // Port 9 (discard) refuses connections; no mock server involved.
        let client = OpenAiClient::new(&test_settings("http://127.0.0.1:9")).unwrap();
        let error = client.explain("Expliquez ceci").await.unwrap_err();

        assert!(matches!(error, AppError::Upstream(_)), "got: {:?}", error);
    }

    #[actix_web::test]
    async fn empty_choices_maps_to_internal_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = OpenAiClient::new(&test_settings(&server.url())).unwrap();
        let error = client.explain("Expliquez ceci").await.unwrap_err();

        assert!(matches!(error, AppError::Internal(_)), "got: {:?}", error);
    }

    #[actix_web::test]
    async fn malformed_body_maps_to_internal_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let client = OpenAiClient::new(&test_settings(&server.url())).unwrap();
        let error = client.explain("Expliquez ceci").await.unwrap_err();

        assert!(matches!(error, AppError::Internal(_)), "got: {:?}", error);
    }
}
