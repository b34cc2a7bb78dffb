//! Search query builders.
//!
//! Queries are produced by substituting values positionally into externally
//! supplied templates. The builder performs no escaping of the search string
//! beyond quoting date literals; the template owner is responsible for the
//! template's own string-injection safety.

use chrono::NaiveDateTime;

use crate::errors::RepositoryError;
use textstore_shared::time::format_timestamp;
use textstore_shared::PageRequest;

/// Optional bounds on the create and update timestamps of matching records.
/// An absent bound leaves that side of the range open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRangeFilter {
    pub start_create: Option<NaiveDateTime>,
    pub end_create: Option<NaiveDateTime>,
    pub start_update: Option<NaiveDateTime>,
    pub end_update: Option<NaiveDateTime>,
}

/// Build the lookup-by-id query from its template.
pub fn build_id_query(template: &str, id: &str) -> String {
    render_positional(template, &[id])
}

/// Build the paged fuzzy-search query from its template.
///
/// Substitutes, in order: start index (`page * size`), page size, search
/// string, fuzziness, and the four date bounds. Each bound becomes a quoted
/// timestamp literal or the bare literal `null` when absent.
pub fn build_fuzzy_search_query(
    template: &str,
    search_string: &str,
    fuzziness: u32,
    dates: &DateRangeFilter,
    page: PageRequest,
) -> Result<String, RepositoryError> {
    if search_string.is_empty() {
        return Err(RepositoryError::invalid_query(
            "search string cannot be empty",
        ));
    }

    let start_index = page.offset().to_string();
    let size = page.size.to_string();
    let fuzziness = fuzziness.to_string();
    let start_create = format_bound(dates.start_create.as_ref());
    let end_create = format_bound(dates.end_create.as_ref());
    let start_update = format_bound(dates.start_update.as_ref());
    let end_update = format_bound(dates.end_update.as_ref());

    Ok(render_positional(
        template,
        &[
            &start_index,
            &size,
            search_string,
            &fuzziness,
            &start_create,
            &end_create,
            &start_update,
            &end_update,
        ],
    ))
}

/// Render a date bound as a quoted timestamp literal, or the bare literal
/// `null` when the bound is absent.
fn format_bound(bound: Option<&NaiveDateTime>) -> String {
    match bound {
        Some(at) => format!("\"{}\"", format_timestamp(at)),
        None => "null".to_string(),
    }
}

/// Replace successive `%s` markers in the template with the given arguments.
///
/// Markers beyond the argument list are left in place so a template/argument
/// mismatch stays visible in the produced query.
fn render_positional(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(idx) = rest.find("%s") {
        out.push_str(&rest[..idx]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("%s"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}
