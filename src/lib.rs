// Scrapes a partner directory and a partner-solutions catalog from one
// browser session, joins the two listings by normalized partner name,
// and emits the grouped result as JSON.

pub mod config;
pub mod extractor;
pub mod join;
pub mod model;
pub mod normalizer;
pub mod pipeline;
pub mod scroll;
pub mod session;
