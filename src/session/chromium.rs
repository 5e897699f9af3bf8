use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use serde_json::Value;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::config::ScrapeConfig;
use crate::model::SessionError;
use crate::session::PageSession;

/// One headless Chromium browser with a single page, shared sequentially
/// between the two extraction steps.
pub struct ChromiumSession {
    browser: Browser,
    page: Page,
    events: JoinHandle<()>,
    selector_timeout: Duration,
    selector_poll: Duration,
}

impl ChromiumSession {
    pub async fn launch(config: &ScrapeConfig) -> Result<Self, SessionError> {
        let browser_config = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .build()
            .map_err(SessionError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| SessionError::Launch(e.to_string()))?;

        // CDP event loop; the session is unusable once this stops.
        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| SessionError::Launch(e.to_string()))?;

        Ok(Self {
            browser,
            page,
            events,
            selector_timeout: config.selector_timeout,
            selector_poll: config.selector_poll,
        })
    }
}

#[async_trait::async_trait]
impl PageSession for ChromiumSession {
    async fn navigate(&self, url: &str) -> Result<(), SessionError> {
        let nav_err = |e: chromiumoxide::error::CdpError| SessionError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        };
        self.page.goto(url).await.map_err(nav_err)?;
        self.page.wait_for_navigation().await.map_err(nav_err)?;
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str) -> Result<(), SessionError> {
        let deadline = Instant::now() + self.selector_timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SessionError::SelectorTimeout(selector.to_string()));
            }
            sleep(self.selector_poll).await;
        }
    }

    async fn evaluate(&self, js: &str) -> Result<Value, SessionError> {
        let result = self
            .page
            .evaluate(js)
            .await
            .map_err(|e| SessionError::Evaluate(e.to_string()))?;
        Ok(result.value().cloned().unwrap_or(Value::Null))
    }

    async fn content(&self) -> Result<String, SessionError> {
        self.page
            .content()
            .await
            .map_err(|e| SessionError::Evaluate(e.to_string()))
    }

    async fn close(&mut self) -> Result<(), SessionError> {
        self.browser
            .close()
            .await
            .map_err(|e| SessionError::Close(e.to_string()))?;
        self.browser
            .wait()
            .await
            .map_err(|e| SessionError::Close(e.to_string()))?;
        self.events.abort();
        debug!("Browser session closed");
        Ok(())
    }
}
