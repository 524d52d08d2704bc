use async_trait::async_trait;
use slidesmith::{
    Error, Result,
    genai::{GeneratedImage, ImageClient, TextClient},
};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

/// Encode a real 1x1 PNG so anything downstream that decodes image bytes
/// keeps working.
pub fn test_png_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    let pixel = image::RgbaImage::from_pixel(1, 1, image::Rgba([200, 30, 30, 255]));
    image::DynamicImage::ImageRgba8(pixel)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encoding a 1x1 PNG cannot fail");
    bytes
}

/// Mock text client for testing
pub struct MockTextClient {
    outline: Option<String>,
    error: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextClient {
    pub fn new(outline: impl Into<String>) -> Self {
        Self {
            outline: Some(outline.into()),
            error: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outline: None,
            error: Some(message.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextClient for MockTextClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.error {
            Some(message) => Err(Error::upstream(message.clone())),
            None => Ok(self.outline.clone().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedImageCall {
    pub prompt: String,
    pub aspect_ratio: String,
    pub image_size: String,
}

/// Mock image client for testing. Calls are recorded in order; selected
/// call numbers (1-based, which for the sequential pipeline equals the
/// slide index) can be made to fail.
pub struct MockImageClient {
    bytes: Vec<u8>,
    fail_on: Vec<usize>,
    fail_all: Option<String>,
    calls: Arc<Mutex<Vec<RecordedImageCall>>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            bytes: test_png_bytes(),
            fail_on: Vec::new(),
            fail_all: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make the Nth call return `Error::NoImageReturned`.
    pub fn with_failure_at(mut self, call_number: usize) -> Self {
        self.fail_on.push(call_number);
        self
    }

    pub fn failing_all(message: impl Into<String>) -> Self {
        Self {
            fail_all: Some(message.into()),
            ..Self::new()
        }
    }

    pub fn recorded_calls(&self) -> Vec<RecordedImageCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageClient for MockImageClient {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        image_size: &str,
    ) -> Result<GeneratedImage> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedImageCall {
                prompt: prompt.to_string(),
                aspect_ratio: aspect_ratio.to_string(),
                image_size: image_size.to_string(),
            });
            calls.len()
        };

        if let Some(message) = &self.fail_all {
            return Err(Error::upstream(message.clone()));
        }
        if self.fail_on.contains(&call_number) {
            return Err(Error::NoImageReturned);
        }

        Ok(GeneratedImage {
            bytes: self.bytes.clone(),
            mime_type: "image/png".to_string(),
        })
    }
}
