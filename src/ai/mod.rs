//! AI provider integration for image understanding and image generation
//!
//! Provides interfaces to Gemini's generateContent API for describing
//! uploaded pet photos and to OpenAI's Image API for breed image generation.

pub mod gemini;
pub mod mime;
pub mod mock;
pub mod openai;

pub use gemini::GeminiVisionClient;
pub use mock::{MockImageGenerationClient, MockVisionClient};
pub use openai::OpenAiImageClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VisionService: Send + Sync {
    /// Ask the vision model one question about an uploaded pet photo.
    ///
    /// The answer is free text and is rendered as received.
    async fn describe(&self, prompt: &str, image_bytes: &[u8], mime_type: &str) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate one image for the prompt and return its hosted URL.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
