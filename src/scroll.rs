use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::ScrapeConfig;
use crate::model::SessionError;
use crate::session::PageSession;

pub(crate) const SCROLL_TO_BOTTOM_JS: &str = "window.scrollTo(0, document.body.scrollHeight)";
pub(crate) const CONTENT_HEIGHT_JS: &str = "document.body.scrollHeight";

/// Outcome of driving a lazily-rendered listing to the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Two consecutive height measurements were equal.
    Stabilized,
    /// Content was still growing after `max_scroll_rounds`; the page holds
    /// partial content only.
    TimedOut,
}

/// Scrolls to the bottom of the page until its content height stops
/// growing. Bounded by `config.max_scroll_rounds` so a perpetually
/// changing page reports `Settle::TimedOut` instead of looping forever.
pub async fn settle(
    session: &dyn PageSession,
    config: &ScrapeConfig,
) -> Result<Settle, SessionError> {
    let mut last_height = content_height(session).await?;

    for round in 1..=config.max_scroll_rounds {
        session.evaluate(SCROLL_TO_BOTTOM_JS).await?;
        sleep(config.settle_delay).await;

        let height = content_height(session).await?;
        if height == last_height {
            debug!("Content stabilized after {} scroll round(s)", round);
            return Ok(Settle::Stabilized);
        }
        last_height = height;
    }

    warn!(
        "Content did not stabilize after {} scroll rounds, extracting partial listing",
        config.max_scroll_rounds
    );
    Ok(Settle::TimedOut)
}

async fn content_height(session: &dyn PageSession) -> Result<i64, SessionError> {
    let value = session.evaluate(CONTENT_HEIGHT_JS).await?;
    value
        .as_f64()
        .map(|h| h as i64)
        .ok_or_else(|| SessionError::Evaluate(format!("scrollHeight was not a number: {value}")))
}
