use super::types::*;
use crate::{Error, Result, config::GenAiConfig};
use async_trait::async_trait;
use base64::Engine;
use tracing::{debug, warn};

/// Text generation seam. One prompt in, the model's text out.
#[async_trait]
pub trait TextClient: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

/// Image generation seam. One prompt plus output configuration in, raw
/// decodable image bytes out. Single request/response, no retries.
#[async_trait]
pub trait ImageClient: Send + Sync {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        image_size: &str,
    ) -> Result<GeneratedImage>;
}

/// Client for the Gemini-style `generateContent` REST surface. Holds no
/// state across calls beyond the credential and the reqwest connection
/// pool, so a single instance is safe to share across concurrent runs.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    image_model: String,
    text_model: String,
}

impl GeminiClient {
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            image_model: config.image_model,
            text_model: config.text_model,
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the structured upstream message; fall back to the raw
            // body for proxies that answer with plain text.
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Model {} rejected request with {}: {}", model, status, message);
            return Err(Error::upstream(format!("{model} returned {status}: {message}")));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TextClient for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        debug!("Requesting text generation from model {}", self.text_model);

        let request = GenerateContentRequest::text(prompt);
        let response = self.generate_content(&self.text_model, &request).await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| Error::upstream("response carried no text part"))
    }
}

#[async_trait]
impl ImageClient for GeminiClient {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        image_size: &str,
    ) -> Result<GeneratedImage> {
        debug!(
            "Requesting {} {} image from model {}",
            aspect_ratio, image_size, self.image_model
        );

        let request = GenerateContentRequest::image(prompt, aspect_ratio, image_size);
        let response = self.generate_content(&self.image_model, &request).await?;

        let inline = response.first_inline_data().ok_or(Error::NoImageReturned)?;
        let bytes = base64::engine::general_purpose::STANDARD.decode(&inline.data)?;

        // The contract downstream is "decodable by a standard image
        // library". Decode once to verify, but hand back the original
        // bytes untouched.
        image::load_from_memory(&bytes)?;
        debug!(
            "Received decodable {} image ({} bytes)",
            inline.mime_type,
            bytes.len()
        );

        Ok(GeneratedImage {
            bytes,
            mime_type: inline.mime_type.clone(),
        })
    }
}
