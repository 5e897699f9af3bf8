// Core structs: scraped records, join groups, error taxonomy
use serde::Serialize;
use thiserror::Error;

/// One entry scraped from the partner directory listing.
#[derive(Debug, Clone)]
pub struct PartnerRecord {
    pub partner_name: String,
}

/// One entry scraped from the solutions catalog. `partner_name` is the
/// best-effort attribution recovered from surrounding markup and may be
/// empty when no attribution container was found.
#[derive(Debug, Clone)]
pub struct SolutionRecord {
    pub solution_title: String,
    pub partner_name: String,
}

/// Join unit, keyed internally by normalized name. `display_name` is fixed
/// at first creation and never overwritten by later records sharing the
/// same key.
#[derive(Debug, Clone)]
pub struct PartnerGroup {
    pub display_name: String,
    pub solutions: Vec<String>,
}

/// Serialized output shape. Only groups with at least one solution are
/// ever emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "partnerName")]
    pub partner_name: String,
    pub solutions: Vec<String>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("browser launch failed: {0}")]
    Launch(String),
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },
    #[error("selector `{0}` did not appear within the wait policy")]
    SelectorTimeout(String),
    #[error("script evaluation failed: {0}")]
    Evaluate(String),
    #[error("browser did not shut down cleanly: {0}")]
    Close(String),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("listing markup did not parse: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("output serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
