//! Entity and DTO contracts.
//!
//! Every persisted record carries an id and two tracking timestamps. The
//! traits here expose just that surface so repositories, converters, and the
//! data service stay generic over the concrete record type.

use chrono::NaiveDateTime;

/// A persisted record as stored by a backend.
///
/// The id is assigned upstream (by the caller or the converter), never by
/// the data service. The two timestamps are assigned exclusively by the data
/// service; once both are set, `update_date_time >= create_date_time` holds.
pub trait Entity: Clone + Send + Sync {
    /// Type name used to derive backend resource names (e.g. the search
    /// index name, lower-cased).
    const NAME: &'static str;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    fn create_date_time(&self) -> Option<NaiveDateTime>;

    fn set_create_date_time(&mut self, at: NaiveDateTime);

    fn update_date_time(&self) -> Option<NaiveDateTime>;

    fn set_update_date_time(&mut self, at: NaiveDateTime);
}

/// The caller-facing shape of a persisted record.
///
/// Timestamps on a DTO are read-only bookkeeping copied back from the
/// entity; values a caller sets here are never written to a backend.
pub trait Dto: Clone + Send + Sync {
    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    fn create_date_time(&self) -> Option<NaiveDateTime>;

    fn set_create_date_time(&mut self, at: NaiveDateTime);

    fn update_date_time(&self) -> Option<NaiveDateTime>;

    fn set_update_date_time(&mut self, at: NaiveDateTime);
}
