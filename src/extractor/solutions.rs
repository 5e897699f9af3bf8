use scraper::{Html, Selector};
use tracing::info;

use crate::config::ScrapeConfig;
use crate::extractor::attribution::AttributionResolver;
use crate::extractor::{element_text, load_listing};
use crate::model::{ExtractError, SolutionRecord};
use crate::session::PageSession;

/// Scrapes the solutions catalog: one record per listing marker, in
/// document order, with the owning partner name recovered from the
/// marker's enclosing card. Records without a recoverable attribution
/// carry an empty `partner_name`; the join engine drops them.
pub async fn extract_solutions(
    session: &dyn PageSession,
    config: &ScrapeConfig,
) -> Result<Vec<SolutionRecord>, ExtractError> {
    let html = load_listing(session, &config.solutions_catalog_url, config).await?;
    let solutions = parse_solutions(&html, config)?;
    info!("Extracted {} solution entries", solutions.len());
    Ok(solutions)
}

pub fn parse_solutions(html: &str, config: &ScrapeConfig) -> Result<Vec<SolutionRecord>, ExtractError> {
    let document = Html::parse_document(html);
    let marker =
        Selector::parse(&config.listing_selector).map_err(|e| ExtractError::Parse(e.to_string()))?;
    let resolver = AttributionResolver::new(&config.container_class, &config.attribution_selectors)?;

    Ok(document
        .select(&marker)
        .map(|entry| SolutionRecord {
            solution_title: element_text(entry),
            partner_name: resolver.resolve(entry).unwrap_or_default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::parse_solutions;
    use crate::config::ScrapeConfig;

    #[test]
    fn pairs_titles_with_recovered_partners() {
        let html = r#"
            <div class="card">
              <span class="partner">Acme Inc.</span>
              <h3 class="text-lg mb-1"><a class="more">Suite X</a></h3>
            </div>
            <div class="card">
              <span class="eyebrow">Beta LLC</span>
              <h3 class="text-lg mb-1"><a class="more">Suite Y</a></h3>
            </div>
        "#;
        let solutions = parse_solutions(html, &ScrapeConfig::default()).unwrap();
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].solution_title, "Suite X");
        assert_eq!(solutions[0].partner_name, "Acme Inc.");
        assert_eq!(solutions[1].solution_title, "Suite Y");
        assert_eq!(solutions[1].partner_name, "Beta LLC");
    }

    #[test]
    fn missing_attribution_yields_empty_partner_name() {
        let html = r#"
            <div class="card">
              <h3 class="text-lg mb-1"><a class="more">Orphan Suite</a></h3>
            </div>
        "#;
        let solutions = parse_solutions(html, &ScrapeConfig::default()).unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].solution_title, "Orphan Suite");
        assert_eq!(solutions[0].partner_name, "");
    }
}
