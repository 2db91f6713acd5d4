use async_trait::async_trait;
use voca_generator::{GenerateError, Generator, ProviderMetadata};

/// Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
        }
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::Authentication);
        }

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(GenerateError::RateLimited);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(GenerateError::Authentication);
        }

        if !response.status().is_success() {
            return Err(GenerateError::Api(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GenerateError::Api(format!("Failed to parse response: {}", e)))?;

        let text = json["candidates"]
            .get(0)
            .and_then(|candidate| candidate["content"]["parts"].get(0))
            .and_then(|part| part["text"].as_str())
            .ok_or(GenerateError::EmptyResponse)?;

        Ok(text.to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            requires_api_key: true,
        }
    }
}
