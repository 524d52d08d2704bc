use crate::genai::GeneratedImage;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Hard cap on slides per deck, matching the bounded choice offered to the
/// caller.
pub const MAX_SLIDES: usize = 10;

/// Color themes offered by both product flows. The serialized form is the
/// exact wording embedded into prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "Modern Purple & Blue")]
    ModernPurpleBlue,
    #[serde(rename = "Professional Blue & Gray")]
    ProfessionalBlueGray,
    #[serde(rename = "Vibrant Rainbow")]
    VibrantRainbow,
    #[serde(rename = "Nature Green & Earth Tones")]
    NatureGreenEarth,
    #[serde(rename = "Warm Sunset (Orange & Pink)")]
    WarmSunset,
    #[serde(rename = "Minimal Black & White")]
    MinimalBlackWhite,
    #[serde(rename = "Ocean Blues")]
    OceanBlues,
    #[serde(rename = "Forest Greens")]
    ForestGreens,
    #[serde(rename = "Pastel Dream")]
    PastelDream,
    #[serde(rename = "Dark Mode (Dark Background)")]
    DarkMode,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ModernPurpleBlue => "Modern Purple & Blue",
            Self::ProfessionalBlueGray => "Professional Blue & Gray",
            Self::VibrantRainbow => "Vibrant Rainbow",
            Self::NatureGreenEarth => "Nature Green & Earth Tones",
            Self::WarmSunset => "Warm Sunset (Orange & Pink)",
            Self::MinimalBlackWhite => "Minimal Black & White",
            Self::OceanBlues => "Ocean Blues",
            Self::ForestGreens => "Forest Greens",
            Self::PastelDream => "Pastel Dream",
            Self::DarkMode => "Dark Mode (Dark Background)",
        };
        f.write_str(s)
    }
}

/// Visual styles across both flows (the mind-map form offers a few the deck
/// form does not, and vice versa; one enum covers the union).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "Modern & Clean")]
    ModernClean,
    #[serde(rename = "Hand-drawn / Sketch")]
    HandDrawn,
    #[serde(rename = "Minimalist")]
    Minimalist,
    #[serde(rename = "Corporate / Professional")]
    Corporate,
    #[serde(rename = "Creative & Artistic")]
    CreativeArtistic,
    #[serde(rename = "Infographic Style")]
    Infographic,
    #[serde(rename = "Whiteboard Style")]
    Whiteboard,
    #[serde(rename = "Organic / Flowing")]
    OrganicFlowing,
    #[serde(rename = "Bold & Impactful")]
    BoldImpactful,
    #[serde(rename = "Elegant & Sophisticated")]
    ElegantSophisticated,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ModernClean => "Modern & Clean",
            Self::HandDrawn => "Hand-drawn / Sketch",
            Self::Minimalist => "Minimalist",
            Self::Corporate => "Corporate / Professional",
            Self::CreativeArtistic => "Creative & Artistic",
            Self::Infographic => "Infographic Style",
            Self::Whiteboard => "Whiteboard Style",
            Self::OrganicFlowing => "Organic / Flowing",
            Self::BoldImpactful => "Bold & Impactful",
            Self::ElegantSophisticated => "Elegant & Sophisticated",
        };
        f.write_str(s)
    }
}

/// Mind-map density levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Complexity {
    #[serde(rename = "Simple (3-5 main branches)")]
    Simple,
    #[default]
    #[serde(rename = "Moderate (5-7 main branches)")]
    Moderate,
    #[serde(rename = "Detailed (7-10 main branches)")]
    Detailed,
    #[serde(rename = "Comprehensive (10+ branches)")]
    Comprehensive,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Simple => "Simple (3-5 main branches)",
            Self::Moderate => "Moderate (5-7 main branches)",
            Self::Detailed => "Detailed (7-10 main branches)",
            Self::Comprehensive => "Comprehensive (10+ branches)",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Widescreen => "16:9",
            Self::Standard => "4:3",
            Self::Square => "1:1",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ImageQuality {
    #[serde(rename = "2K")]
    TwoK,
    #[default]
    #[serde(rename = "4K")]
    FourK,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slide-deck generation request. Immutable once submitted; the pipeline
/// only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    #[serde(default = "default_slide_count")]
    pub slide_count: usize,
    pub theme: Theme,
    pub style: Style,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub image_quality: ImageQuality,
    #[serde(default)]
    pub custom_instructions: Option<String>,
}

fn default_slide_count() -> usize {
    3
}

impl GenerationRequest {
    /// Reject out-of-range input before any network call is made.
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(Error::invalid_request("topic must not be empty"));
        }
        if !(1..=MAX_SLIDES).contains(&self.slide_count) {
            return Err(Error::invalid_request(format!(
                "slide count must be between 1 and {MAX_SLIDES}, got {}",
                self.slide_count
            )));
        }
        Ok(())
    }
}

/// A mind-map generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindMapRequest {
    pub topic: String,
    pub theme: Theme,
    pub style: Style,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub image_quality: ImageQuality,
    #[serde(default)]
    pub custom_instructions: Option<String>,
}

impl MindMapRequest {
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(Error::invalid_request("topic must not be empty"));
        }
        Ok(())
    }

    /// Complexity wording handed to the prompt, with any custom
    /// instructions appended as an additional constraint.
    pub fn complexity_text(&self) -> String {
        match self.custom_instructions.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => {
                format!("{}. Additional instructions: {extra}", self.complexity)
            }
            _ => self.complexity.to_string(),
        }
    }
}

/// Outcome of one slide attempt. Every requested index gets exactly one of
/// these, populated or not.
#[derive(Debug, Clone)]
pub struct SlideResult {
    pub slide_index: usize,
    pub image: Option<GeneratedImage>,
    pub failure_reason: Option<String>,
}

impl SlideResult {
    pub fn ok(slide_index: usize, image: GeneratedImage) -> Self {
        Self {
            slide_index,
            image: Some(image),
            failure_reason: None,
        }
    }

    pub fn failed(slide_index: usize, reason: impl Into<String>) -> Self {
        Self {
            slide_index,
            image: None,
            failure_reason: Some(reason.into()),
        }
    }
}

/// Outcome of the single-image mind-map flow.
#[derive(Debug, Clone)]
pub struct MindMapResult {
    pub image: Option<GeneratedImage>,
    pub failure_reason: Option<String>,
}

/// Everything a deck run hands back to the caller: per-slide results in
/// request order, the pass-through outline text, and a ZIP archive of the
/// successful slides.
#[derive(Debug, Clone)]
pub struct DeckOutput {
    pub run_id: Uuid,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub outline_text: Option<String>,
    pub slides: Vec<SlideResult>,
    pub archive: Vec<u8>,
}

impl DeckOutput {
    pub fn generated_count(&self) -> usize {
        self.slides.iter().filter(|s| s.image.is_some()).count()
    }

    pub fn failed_indices(&self) -> Vec<usize> {
        self.slides
            .iter()
            .filter(|s| s.image.is_none())
            .map(|s| s.slide_index)
            .collect()
    }
}
