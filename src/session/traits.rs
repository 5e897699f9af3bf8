use crate::model::SessionError;
use serde_json::Value;

/// Injectable page-automation capability. Extraction and the scroll loop
/// depend only on this trait, so they can run against canned markup in
/// tests with no browser process.
#[async_trait::async_trait]
pub trait PageSession: Send + Sync {
    /// Navigate the single shared page to `url` and wait for it to load.
    async fn navigate(&self, url: &str) -> Result<(), SessionError>;

    /// Suspend until `selector` is present in the rendered document, or
    /// fail with `SessionError::SelectorTimeout` per the wait policy.
    async fn wait_for_selector(&self, selector: &str) -> Result<(), SessionError>;

    /// Run a read-only script against the rendered page and return its
    /// result as JSON. A script with no value yields `Value::Null`.
    async fn evaluate(&self, js: &str) -> Result<Value, SessionError>;

    /// Rendered HTML of the current document.
    async fn content(&self) -> Result<String, SessionError>;

    /// Release the underlying page/browser handle.
    async fn close(&mut self) -> Result<(), SessionError>;
}
