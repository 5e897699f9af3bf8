use std::time::Duration;

/// Fixed parameters of a scrape run. There is no external configuration
/// surface; the struct exists so extractors and the scroll loop can be
/// exercised in tests with altered selectors and bounds.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub partner_directory_url: String,
    pub solutions_catalog_url: String,
    /// Marker element identifying one listing entry on both pages.
    pub listing_selector: String,
    /// Class of the preferred enclosing card container for a listing entry.
    pub container_class: String,
    /// Ordered candidate selectors for recovering a solution's owning
    /// partner name. First candidate with a match wins.
    pub attribution_selectors: Vec<String>,
    /// Pause between scroll steps allowing lazily rendered content to appear.
    pub settle_delay: Duration,
    /// Upper bound on scroll rounds before giving up on stabilization.
    pub max_scroll_rounds: u32,
    pub selector_timeout: Duration,
    pub selector_poll: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            partner_directory_url: "https://www.opentext.com/partners/partner-directory".to_string(),
            solutions_catalog_url:
                "https://www.opentext.com/products-and-solutions/partners-and-alliances/partner-solutions-catalog"
                    .to_string(),
            listing_selector: "h3.text-lg.mb-1 a.more".to_string(),
            container_class: "card".to_string(),
            attribution_selectors: vec![
                ".partner".to_string(),
                ".eyebrow".to_string(),
                ".subtitle".to_string(),
            ],
            settle_delay: Duration::from_millis(500),
            max_scroll_rounds: 60,
            selector_timeout: Duration::from_secs(15),
            selector_poll: Duration::from_millis(250),
        }
    }
}
