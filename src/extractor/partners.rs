use scraper::{Html, Selector};
use tracing::info;

use crate::config::ScrapeConfig;
use crate::extractor::{element_text, load_listing};
use crate::model::{ExtractError, PartnerRecord};
use crate::session::PageSession;

/// Scrapes the partner directory: one record per listing marker, in
/// document order. Duplicate names are legal here; the join engine
/// merges them by key.
pub async fn extract_partners(
    session: &dyn PageSession,
    config: &ScrapeConfig,
) -> Result<Vec<PartnerRecord>, ExtractError> {
    let html = load_listing(session, &config.partner_directory_url, config).await?;
    let partners = parse_partners(&html, &config.listing_selector)?;
    info!("Extracted {} partner entries", partners.len());
    Ok(partners)
}

pub fn parse_partners(html: &str, listing_selector: &str) -> Result<Vec<PartnerRecord>, ExtractError> {
    let document = Html::parse_document(html);
    let marker = Selector::parse(listing_selector).map_err(|e| ExtractError::Parse(e.to_string()))?;

    Ok(document
        .select(&marker)
        .map(|entry| PartnerRecord {
            partner_name: element_text(entry),
        })
        .collect())
}
