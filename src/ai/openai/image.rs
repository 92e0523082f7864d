use super::client::OpenAiHttpClient;
use super::types::{ImageGenerationRequest, ImageGenerationResponse};
use crate::ai::ImageGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

const IMAGE_SIZE: &str = "1024x1024";
const IMAGE_QUALITY: &str = "standard";

pub struct OpenAiImageClient {
    http: OpenAiHttpClient,
    model: String,
}

impl OpenAiImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: OpenAiHttpClient::new_with_client(api_key, Duration::from_secs(120), client),
            model,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl ImageGenerationService for OpenAiImageClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Sending image generation request to OpenAI");

        let request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: IMAGE_SIZE.to_string(),
            quality: IMAGE_QUALITY.to_string(),
        };

        let response: ImageGenerationResponse =
            self.http.post("/v1/images/generations", &request).await?;

        response
            .data
            .first()
            .and_then(|image| image.url.clone())
            .ok_or_else(|| Error::AiProvider("No image URL in OpenAI response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(server: &MockServer, api_key: &str) -> OpenAiImageClient {
        OpenAiImageClient::new(api_key.to_string(), "dall-e-3".to_string())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_generate_returns_hosted_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "url": "https://images.example.com/generated.png" }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key");

        let url = client.generate("An image of a dog beagle").await.unwrap();
        assert_eq!(url, "https://images.example.com/generated.png");
    }

    #[tokio::test]
    async fn test_generate_sends_fixed_size_and_quality() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(body_string_contains("\"size\":\"1024x1024\""))
            .and(body_string_contains("\"quality\":\"standard\""))
            .and(body_string_contains("\"n\":1"))
            .and(body_string_contains("\"model\":\"dall-e-3\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "url": "https://images.example.com/one.png" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "key");

        client.generate("An image of a cat persian").await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .mount(&server)
            .await;

        let client = make_client(&server, "key");

        let err = client.generate("An image of a dog beagle").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_generate_rejects_response_without_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{}]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "key");

        let err = client.generate("An image of a dog beagle").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }
}
