// Listing extraction: drive a loaded page to full height, then read the
// rendered markup into typed records.

pub mod attribution;
pub mod partners;
pub mod solutions;

pub use partners::extract_partners;
pub use solutions::extract_solutions;

use scraper::ElementRef;
use tracing::info;

use crate::config::ScrapeConfig;
use crate::model::ExtractError;
use crate::scroll;
use crate::session::PageSession;

/// Navigate to a listing page, wait for its entry marker, drive lazy
/// rendering to completion, and return the rendered HTML.
pub(crate) async fn load_listing(
    session: &dyn PageSession,
    url: &str,
    config: &ScrapeConfig,
) -> Result<String, ExtractError> {
    info!("Navigating to {}", url);
    session.navigate(url).await?;
    session.wait_for_selector(&config.listing_selector).await?;
    scroll::settle(session, config).await?;
    Ok(session.content().await?)
}

pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
