mod client;
mod pool;
mod types;

pub use client::{GeminiClient, ImageClient, TextClient};
pub use pool::ClientPool;
pub use types::{
    ApiErrorResponse, Candidate, Content, GenerateContentRequest, GenerateContentResponse,
    GeneratedImage, GenerationConfig, ImageConfig, InlineData, Part,
};
