//! Search-engine dork composition.
//!
//! Two pure builders over static tables:
//! - the manual builder joins six operator fields into one query
//! - the generator fills a catalogue category's templates with a target

mod catalogue;
mod fields;

use strum::IntoEnumIterator;

use crate::config::SEARCH_ENGINE_URL;

// Re-export public API
pub use catalogue::{
    categories, generate, generate_from_category, DorkCategory, DorkTemplate, CATALOGUE,
    TARGET_TOKEN,
};
pub use fields::{compose_preview, DorkField, DorkFields};

/// Operator reference: `(operator, description)` in builder order.
pub fn operators() -> Vec<(&'static str, &'static str)> {
    DorkField::iter()
        .map(|field| (field.reference_label(), field.description()))
        .collect()
}

/// Search URL that runs `query` on the search engine.
pub fn search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{SEARCH_ENGINE_URL}?q={encoded}")
}
