use super::types::{
    DeckApiRequest, DeckApiResponse, ErrorResponse, ImagePayload, MindMapApiRequest,
    MindMapApiResponse,
};
use crate::deck::{MindMapPipeline, SlideDeckPipeline};
use crate::genai::{ClientPool, ImageClient, TextClient};
use crate::Error;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientPool>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn reject(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn map_pipeline_error(e: Error) -> ApiError {
    match e {
        Error::InvalidRequest(_) => reject(StatusCode::BAD_REQUEST, e.to_string()),
        _ => {
            error!("Pipeline failure: {}", e);
            reject(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn generate_deck(
    State(state): State<AppState>,
    Json(body): Json<DeckApiRequest>,
) -> Result<Json<DeckApiResponse>, ApiError> {
    info!(
        "Received deck request for topic '{}' ({} slides)",
        body.request.topic, body.request.slide_count
    );

    let client = state.clients.client_for(body.api_key.as_deref());
    let text_client: Arc<dyn TextClient> = client.clone();
    let image_client: Arc<dyn ImageClient> = client;
    let pipeline = SlideDeckPipeline::new(text_client, image_client);

    let progress = |current: usize, total: usize| {
        info!("Deck progress: slide {}/{} attempted", current, total);
    };

    let output = pipeline
        .run(&body.request, &progress)
        .await
        .map_err(map_pipeline_error)?;

    Ok(Json(DeckApiResponse::from(&output)))
}

pub async fn generate_mindmap(
    State(state): State<AppState>,
    Json(body): Json<MindMapApiRequest>,
) -> Result<Json<MindMapApiResponse>, ApiError> {
    info!(
        "Received mind-map request for topic '{}'",
        body.request.topic
    );

    let client = state.clients.client_for(body.api_key.as_deref());
    let image_client: Arc<dyn ImageClient> = client;
    let pipeline = MindMapPipeline::new(image_client);

    let result = pipeline
        .run(&body.request)
        .await
        .map_err(map_pipeline_error)?;

    match result.image {
        Some(ref image) => Ok(Json(MindMapApiResponse {
            topic: body.request.topic,
            image: ImagePayload::from(image),
        })),
        None => {
            // Single image, no batch: nothing to degrade to.
            let reason = result
                .failure_reason
                .unwrap_or_else(|| "mind-map generation failed".to_string());
            Err(reject(StatusCode::BAD_GATEWAY, reason))
        }
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
