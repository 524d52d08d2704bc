mod archive;
pub mod fsm;
mod pipeline;
mod types;

pub use archive::bundle_slides;
pub use fsm::{RunEvent, RunState, RunStateMachine};
pub use pipeline::{MindMapPipeline, NoopProgress, ProgressObserver, SlideDeckPipeline};
pub use types::{
    AspectRatio, Complexity, DeckOutput, GenerationRequest, ImageQuality, MAX_SLIDES,
    MindMapRequest, MindMapResult, SlideResult, Style, Theme,
};
