//! Configuration types for Vedanco core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in the CLI layer.

use serde::{Deserialize, Serialize};

/// Default Generative Language API endpoint
pub const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Scroll offset (in rows/pixels) past which the navbar switches to solid mode
pub const SCROLL_THRESHOLD: u32 = 50;

/// Easing options for smooth scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Parse an easing name, accepting the common spellings
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "ease_in_out_cubic" | "easeinoutcubic" | "ease-in-out-cubic" => {
                Some(Easing::EaseInOutCubic)
            }
            "ease_out_cubic" | "easeoutcubic" | "ease-out-cubic" => Some(Easing::EaseOutCubic),
            _ => None,
        }
    }

    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Contact form endpoint configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Form-processing endpoint that receives the form-encoded submission
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Model identifiers used by the generative content service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenAiModels {
    pub analysis: String,
    pub image: String,
    pub image_edit: String,
    pub video: String,
}

impl Default for GenAiModels {
    fn default() -> Self {
        Self {
            analysis: "gemini-3-pro-preview".to_string(),
            image: "gemini-3-pro-image-preview".to_string(),
            image_edit: "gemini-2.5-flash-image".to_string(),
            video: "veo-3.1-fast-generate-preview".to_string(),
        }
    }
}

/// Generative content service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenAiConfig {
    /// Credential for the service. Absence only fails the calls that need it.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL for the API
    #[serde(default = "default_genai_base_url")]
    pub base_url: String,
    /// Interval between video operation polls
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Model identifiers
    #[serde(default)]
    pub models: GenAiModels,
}

fn default_genai_base_url() -> String {
    DEFAULT_GENAI_BASE_URL.to_string()
}

fn default_poll_interval_ms() -> u64 {
    5000
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_genai_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            models: GenAiModels::default(),
        }
    }
}

/// Terminal UI timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the intro splash stays up before the chrome appears
    #[serde(default = "default_intro_ms")]
    pub intro_ms: u64,
    /// Frame interval of the UI tick
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Duration of one smooth-scroll animation
    #[serde(default = "default_scroll_duration_ms")]
    pub scroll_duration_ms: u64,
    /// Easing curve of smooth scrolling
    #[serde(default)]
    pub easing: Easing,
}

fn default_intro_ms() -> u64 {
    1500
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_scroll_duration_ms() -> u64 {
    400
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            intro_ms: default_intro_ms(),
            frame_interval_ms: default_frame_interval_ms(),
            scroll_duration_ms: default_scroll_duration_ms(),
            easing: Easing::default(),
        }
    }
}

/// A fully resolved site configuration ready for use by core
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub genai: GenAiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl SiteConfig {
    /// Set the contact endpoint
    pub fn with_contact_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.contact.endpoint = Some(endpoint.into());
        self
    }

    /// Set the generative service credential
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.genai.api_key = Some(api_key.into());
        self
    }

    /// Validate the configuration
    ///
    /// Missing endpoint or credential is not an error here: both surface at
    /// the call that needs them.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(endpoint) = &self.contact.endpoint {
            if !endpoint.is_empty()
                && !endpoint.starts_with("http://")
                && !endpoint.starts_with("https://")
            {
                return Err("Contact endpoint must start with http:// or https://".to_string());
            }
        }

        if self.genai.base_url.is_empty() {
            return Err("Generative service base URL cannot be empty".to_string());
        }

        if !self.genai.base_url.starts_with("http://")
            && !self.genai.base_url.starts_with("https://")
        {
            return Err("Base URL must start with http:// or https://".to_string());
        }

        if self.genai.poll_interval_ms == 0 {
            return Err("Poll interval must be greater than zero".to_string());
        }

        if self.ui.frame_interval_ms == 0 {
            return Err("Frame interval must be greater than zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.contact.endpoint.is_none());
        assert!(config.genai.api_key.is_none());
        assert_eq!(config.genai.poll_interval_ms, 5000);
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let config = SiteConfig::default().with_contact_endpoint("ftp://forms.example.com");
        assert!(config.validate().is_err());

        let config = SiteConfig::default().with_contact_endpoint("https://forms.example.com/exec");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"contact": {"endpoint": "https://x.test/exec"}}"#).unwrap();
        assert_eq!(config.contact.endpoint.as_deref(), Some("https://x.test/exec"));
        assert_eq!(config.genai.base_url, DEFAULT_GENAI_BASE_URL);
        assert_eq!(config.ui.easing, Easing::EaseOutCubic);
    }

    #[test]
    fn test_easing_bounds() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < f64::EPSILON);
            assert_eq!(easing.apply(2.0), easing.apply(1.0));
        }
        assert_eq!(Easing::parse("ease-in-out-cubic"), Some(Easing::EaseInOutCubic));
        assert_eq!(Easing::parse("bounce"), None);
    }
}
