//! Minimal configuration module for Vedanco core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{
    ContactConfig, Easing, GenAiConfig, GenAiModels, SiteConfig, UiConfig, DEFAULT_GENAI_BASE_URL,
    SCROLL_THRESHOLD,
};
