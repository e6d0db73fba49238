//! Full-screen terminal site browser

pub mod app;
pub mod browser;
pub mod components;
pub mod document;
pub mod text_utils;
pub mod viewport;
