//! CLI command implementations

pub mod browse;
pub mod contact;
pub mod genai;
pub mod menu;
pub mod resolve;

pub use browse::browse_command;
pub use contact::{contact_command, ContactArgs};
pub use genai::{genai_command, GenAiCommand};
pub use menu::menu_command;
pub use resolve::resolve_command;
