use crate::deck::{DeckOutput, GenerationRequest, MindMapRequest, SlideResult};
use crate::genai::GeneratedImage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct DeckApiRequest {
    #[serde(flatten)]
    pub request: GenerationRequest,
    /// Per-request credential override; falls back to the configured key.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MindMapApiRequest {
    #[serde(flatten)]
    pub request: MindMapRequest,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Base64 of the upstream bytes, exactly as generated.
    pub data: String,
}

impl From<&GeneratedImage> for ImagePayload {
    fn from(image: &GeneratedImage) -> Self {
        Self {
            mime_type: image.mime_type.clone(),
            data: image.to_base64(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SlidePayload {
    pub slide_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImagePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl From<&SlideResult> for SlidePayload {
    fn from(slide: &SlideResult) -> Self {
        Self {
            slide_index: slide.slide_index,
            image: slide.image.as_ref().map(ImagePayload::from),
            failure_reason: slide.failure_reason.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeckApiResponse {
    pub run_id: Uuid,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub requested: usize,
    pub generated: usize,
    pub failed_indices: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    pub slides: Vec<SlidePayload>,
    /// Base64-encoded ZIP of the successful slides.
    pub archive: String,
}

impl From<&DeckOutput> for DeckApiResponse {
    fn from(output: &DeckOutput) -> Self {
        use base64::Engine;

        Self {
            run_id: output.run_id,
            topic: output.topic.clone(),
            created_at: output.created_at,
            requested: output.slides.len(),
            generated: output.generated_count(),
            failed_indices: output.failed_indices(),
            outline: output.outline_text.clone(),
            slides: output.slides.iter().map(SlidePayload::from).collect(),
            archive: base64::engine::general_purpose::STANDARD.encode(&output.archive),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MindMapApiResponse {
    pub topic: String,
    pub image: ImagePayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
