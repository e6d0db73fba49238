//! Generative content service
//!
//! Text analysis, image generation and editing, and video generation backed
//! by the Gemini family of models.

pub mod client;
pub mod types;

pub use client::{GeminiClient, GenerativeService};
pub use types::{
    decode_data_uri, guess_mime, AspectRatio, Attachment, ImageSize, VideoAsset, VideoResolution,
};
