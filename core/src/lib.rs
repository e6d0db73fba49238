//! # Vedanco Core
//!
//! Core library for the Vedanco Group site.
//!
//! The heart of it is the view router: a single navigation target that the
//! menus, footer and page CTAs write, and that pages observe to deep-link
//! into their sections. Around it sit the contact form submission and a
//! client for the generative content service.

pub mod config;
pub mod contact;
pub mod error;
pub mod genai;
pub mod site;

// Re-export commonly used types
pub use config::SiteConfig;
pub use contact::{ContactController, ContactForm, FormStatus, HttpFormTransport, Subject};
pub use error::{ContactError, Error, GenAiError, Result, TransportError};
pub use genai::{GeminiClient, GenerativeService};
pub use site::{resolve, NavigationTarget, RouterHandle, View, ViewRouter, Viewport};

/// Current version of the vedanco-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library, filtered by `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
///
/// Logs go to stderr so a full-screen terminal UI on stdout stays intact.
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
