//! Fable - a minimal file-backed wiki server
//!
//! Pages are plain text files in a flat data directory, one per title.
//! Clients view, create and edit them through `/view/<Title>`,
//! `/edit/<Title>` and `/save/<Title>`, with the index at `/`.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod templates;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::WikiError;
pub use handlers::router;
pub use routes::{match_path, Operation};
pub use services::PageStore;
pub use templates::TemplateSet;
pub use types::{AppState, Page};

// Re-export utility functions
pub use utils::{escape_attr, escape_html, form_value};
