use super::archive;
use super::fsm::{RunEvent, RunStateMachine};
use super::types::{DeckOutput, GenerationRequest, MindMapRequest, MindMapResult, SlideResult};
use crate::genai::{ImageClient, TextClient};
use crate::outline::{OutlineEntry, parse_outline};
use crate::{Result, prompt};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Progress signal after each slide attempt. `current` is monotonically
/// non-decreasing and ends at `total`.
pub trait ProgressObserver: Send + Sync {
    fn slide_attempted(&self, current: usize, total: usize);
}

impl<F> ProgressObserver for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn slide_attempted(&self, current: usize, total: usize) {
        self(current, total)
    }
}

/// Observer for callers that don't track progress.
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {
    fn slide_attempted(&self, _current: usize, _total: usize) {}
}

/// End-to-end orchestration for the multi-slide flow: outline request,
/// tolerant parse, strictly sequential per-slide generation with per-slot
/// failure capture, then packaging. Processes one request at a time; share
/// the clients, not the pipeline, across concurrent runs.
pub struct SlideDeckPipeline {
    text_client: Arc<dyn TextClient>,
    image_client: Arc<dyn ImageClient>,
}

impl SlideDeckPipeline {
    pub fn new(text_client: Arc<dyn TextClient>, image_client: Arc<dyn ImageClient>) -> Self {
        Self {
            text_client,
            image_client,
        }
    }

    pub async fn run(
        &self,
        request: &GenerationRequest,
        progress: &dyn ProgressObserver,
    ) -> Result<DeckOutput> {
        request.validate()?;

        let run_id = Uuid::new_v4();
        let started = std::time::Instant::now();
        let total = request.slide_count;
        let mut fsm = RunStateMachine::new(total);

        info!(
            "🚀 Starting deck run {} ({} slides, theme '{}', style '{}')",
            run_id, total, request.theme, request.style
        );

        fsm.transition(RunEvent::OutlineRequested)?;
        let outline_text = self.request_outline(request).await;

        fsm.transition(RunEvent::OutlineParsed)?;
        let entries = parse_outline(outline_text.as_deref().unwrap_or(""), total);

        let theme = request.theme.to_string();
        let style = request.style.to_string();
        let mut slides = Vec::with_capacity(total);

        for entry in &entries {
            let index = entry.slide_index;
            fsm.transition(RunEvent::SlideStarted(index))?;

            let content = slide_content(request, entry);
            let slide_prompt =
                prompt::slide_prompt(&request.topic, index, total, &content, &theme, &style);

            let attempt_started = std::time::Instant::now();
            let result = self
                .image_client
                .generate_image(
                    &slide_prompt,
                    request.aspect_ratio.as_str(),
                    request.image_quality.as_str(),
                )
                .await;

            match result {
                Ok(image) => {
                    debug!(
                        "Slide {}/{} generated in {:?}",
                        index,
                        total,
                        attempt_started.elapsed()
                    );
                    slides.push(SlideResult::ok(index, image));
                }
                Err(e) => {
                    // One slide failing never aborts the rest of the deck.
                    error!("Slide {}/{} generation failed: {}", index, total, e);
                    slides.push(SlideResult::failed(index, e.to_string()));
                }
            }

            progress.slide_attempted(index, total);
        }

        let archive = archive::bundle_slides(&slides)?;
        fsm.transition(RunEvent::ResultsPackaged)?;

        let output = DeckOutput {
            run_id,
            topic: request.topic.clone(),
            created_at: Utc::now(),
            outline_text,
            slides,
            archive,
        };

        fsm.transition(RunEvent::RunCompleted)?;

        let failed = output.failed_indices();
        info!(
            "🏁 Deck run {} generated {} of {} slides in {:?}",
            run_id,
            output.generated_count(),
            total,
            started.elapsed()
        );
        if !failed.is_empty() {
            warn!("Deck run {} failed slide indices: {:?}", run_id, failed);
        }

        Ok(output)
    }

    /// The outline is an enrichment step: a failure here degrades quality
    /// (generic slide content) but never availability.
    async fn request_outline(&self, request: &GenerationRequest) -> Option<String> {
        let outline_prompt = prompt::outline_prompt(&request.topic, request.slide_count);

        match self.text_client.generate_text(&outline_prompt).await {
            Ok(text) => {
                debug!("Outline received ({} chars)", text.len());
                Some(text)
            }
            Err(e) => {
                warn!("Outline generation failed, continuing without one: {}", e);
                None
            }
        }
    }
}

fn slide_content(request: &GenerationRequest, entry: &OutlineEntry) -> String {
    let mut content = entry.render_content();
    if content.is_empty() {
        content = format!("Slide {} about {}", entry.slide_index, request.topic);
    }
    if let Some(extra) = request.custom_instructions.as_deref().map(str::trim) {
        if !extra.is_empty() {
            content.push_str(". Additional requirements: ");
            content.push_str(extra);
        }
    }
    content
}

/// Single-image mind-map flow. No outline, no packaging; an upstream
/// failure is surfaced directly on the result.
pub struct MindMapPipeline {
    image_client: Arc<dyn ImageClient>,
}

impl MindMapPipeline {
    pub fn new(image_client: Arc<dyn ImageClient>) -> Self {
        Self { image_client }
    }

    pub async fn run(&self, request: &MindMapRequest) -> Result<MindMapResult> {
        request.validate()?;

        let theme = request.theme.to_string();
        let style = request.style.to_string();
        let map_prompt = prompt::mindmap_prompt(
            &request.topic,
            &theme,
            &style,
            &request.complexity_text(),
        );

        info!("Starting mind-map generation for topic '{}'", request.topic);

        match self
            .image_client
            .generate_image(
                &map_prompt,
                request.aspect_ratio.as_str(),
                request.image_quality.as_str(),
            )
            .await
        {
            Ok(image) => Ok(MindMapResult {
                image: Some(image),
                failure_reason: None,
            }),
            Err(e) => {
                error!("Mind-map generation failed: {}", e);
                Ok(MindMapResult {
                    image: None,
                    failure_reason: Some(e.to_string()),
                })
            }
        }
    }
}
