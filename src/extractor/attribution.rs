use scraper::{ElementRef, Selector};

use crate::extractor::element_text;
use crate::model::ExtractError;

/// Recovers the owning partner name for a catalog entry from its
/// surrounding markup.
///
/// The search container is the nearest ancestor carrying the card class,
/// falling back to the nearest `div` ancestor. Within the container the
/// candidate selectors are tried in their configured order and the first
/// candidate with a match wins; later candidates are not consulted even
/// if their match would be textually richer. This precedence is
/// deliberate, markup-dependent, and covered by tests here.
pub struct AttributionResolver {
    container_class: String,
    candidates: Vec<Selector>,
}

impl AttributionResolver {
    pub fn new(container_class: &str, candidates: &[String]) -> Result<Self, ExtractError> {
        let candidates = candidates
            .iter()
            .map(|raw| Selector::parse(raw).map_err(|e| ExtractError::Parse(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            container_class: container_class.to_string(),
            candidates,
        })
    }

    /// Trimmed text of the first matching candidate, or `None` when no
    /// container or no candidate matches.
    pub fn resolve(&self, marker: ElementRef<'_>) -> Option<String> {
        let container = self.owning_container(marker)?;
        for candidate in &self.candidates {
            if let Some(found) = container.select(candidate).next() {
                return Some(element_text(found));
            }
        }
        None
    }

    fn owning_container<'a>(&self, marker: ElementRef<'a>) -> Option<ElementRef<'a>> {
        let mut nearest_div = None;
        for node in marker.ancestors() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };
            if element.value().classes().any(|c| c == self.container_class) {
                return Some(element);
            }
            if nearest_div.is_none() && element.value().name() == "div" {
                nearest_div = Some(element);
            }
        }
        nearest_div
    }
}
