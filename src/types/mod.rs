use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub data_dir: Arc<PathBuf>,
    pub templates_dir: Arc<PathBuf>,
}

/// A wiki page: the title is its identity, the body is raw text bytes.
///
/// Pages exist only on disk between requests; every handler re-loads
/// them through the store rather than holding them in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: Vec<u8>) -> Self {
        Self { title: title.into(), body }
    }

    /// A page with the given title and no content yet, as shown by the
    /// edit form before the first save.
    pub fn blank(title: impl Into<String>) -> Self {
        Self { title: title.into(), body: Vec::new() }
    }

    /// Body as text for rendering; invalid UTF-8 is replaced, not rejected.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
