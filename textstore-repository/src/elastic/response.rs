//! Search response envelope.
//!
//! The search service answers every query with the same envelope:
//! `{"hits": {"total": {"value": n}, "hits": [{"_source": ..., "highlight":
//! {field: [fragment, ...]}}]}}`. The types here decode it generically over
//! the stored record type.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope<E> {
    pub hits: HitsEnvelope<E>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HitsEnvelope<E> {
    pub total: TotalHits,
    #[serde(default = "Vec::new")]
    pub hits: Vec<HitEnvelope<E>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TotalHits {
    pub value: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HitEnvelope<E> {
    #[serde(rename = "_source")]
    pub source: E,
    #[serde(default)]
    pub highlight: Option<HashMap<String, Vec<String>>>,
}

impl<E> HitEnvelope<E> {
    /// Highlight fragments for the given field, verbatim and in response
    /// order. Empty when the hit carries no highlights for that field.
    pub fn highlights_for(&self, field: &str) -> Vec<String> {
        self.highlight
            .as_ref()
            .and_then(|highlight| highlight.get(field))
            .cloned()
            .unwrap_or_default()
    }
}
