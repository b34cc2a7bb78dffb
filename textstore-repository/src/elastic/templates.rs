//! Query template store.
//!
//! Templates are opaque text with positional `%s` placeholders, resolved at
//! startup and immutable afterwards. The raw text templates ship with the
//! crate and are embedded at compile time.

/// The three query templates a search index client needs, plus the name of
/// the field the fuzzy-search template requests highlights for.
#[derive(Debug, Clone)]
pub struct QueryTemplates {
    /// Index-creation body. No placeholders.
    pub create_index: String,
    /// Lookup-by-id body. One placeholder: the id.
    pub search_by_id: String,
    /// Fuzzy-search body. Eight positional placeholders, in order:
    /// start index, page size, search string, fuzziness, start/end create
    /// bound, start/end update bound.
    pub fuzzy_search: String,
    /// Field whose highlight fragments are extracted from each hit.
    pub highlight_field: String,
}

impl QueryTemplates {
    pub fn new(
        create_index: impl Into<String>,
        search_by_id: impl Into<String>,
        fuzzy_search: impl Into<String>,
        highlight_field: impl Into<String>,
    ) -> Self {
        Self {
            create_index: create_index.into(),
            search_by_id: search_by_id.into(),
            fuzzy_search: fuzzy_search.into(),
            highlight_field: highlight_field.into(),
        }
    }

    /// Templates for the raw text index.
    pub fn raw_text() -> Self {
        Self::new(
            include_str!("../../queries/raw_text_create_index.json"),
            include_str!("../../queries/raw_text_search_by_id.json"),
            include_str!("../../queries/raw_text_fuzzy_search.json"),
            "textContent",
        )
    }
}
