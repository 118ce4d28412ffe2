//! Error types for template loading and document export.

/// A template could not be loaded. The previous template stays in effect.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("request for {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("invalid template JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("a template needs at least 3 radar labels, found {count}")]
    TooFewAxes { count: usize },
}

/// The document could not be produced at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("no template loaded")]
    NoTemplate,
}
