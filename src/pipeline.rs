use tracing::info;

use crate::config::ScrapeConfig;
use crate::extractor::{extract_partners, extract_solutions};
use crate::join;
use crate::model::PipelineError;
use crate::session::PageSession;

/// Runs the whole scrape-normalize-join sequence over one page session
/// and returns the serialized JSON document.
///
/// The two extractions share the session and run strictly one after the
/// other; output order depends on that sequencing. Any navigation or
/// selector failure aborts the run with no output.
pub async fn run(session: &dyn PageSession, config: &ScrapeConfig) -> Result<String, PipelineError> {
    info!("Scraping partner directory...");
    let partners = extract_partners(session, config).await?;

    info!("Scraping solutions catalog...");
    let solutions = extract_solutions(session, config).await?;

    let joined = join::join(&partners, &solutions);
    info!("Joined into {} partner group(s) with solutions", joined.len());

    Ok(serde_json::to_string_pretty(&joined)?)
}
