//! The raw text record.
//!
//! Raw text is the smallest entity in the system: free text plus tracking
//! information. One document type serves both the document store and the
//! search index; the DTO is what controllers and callers see.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entity::{Dto, Entity};
use crate::time;

/// A raw text record as persisted by a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTextDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(
        default,
        with = "time::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_date_time: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "time::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_date_time: Option<NaiveDateTime>,
}

impl RawTextDocument {
    pub fn new(id: impl Into<String>, text_content: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text_content: Some(text_content.into()),
            create_date_time: None,
            update_date_time: None,
        }
    }
}

impl Entity for RawTextDocument {
    const NAME: &'static str = "RawText";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn create_date_time(&self) -> Option<NaiveDateTime> {
        self.create_date_time
    }

    fn set_create_date_time(&mut self, at: NaiveDateTime) {
        self.create_date_time = Some(at);
    }

    fn update_date_time(&self) -> Option<NaiveDateTime> {
        self.update_date_time
    }

    fn set_update_date_time(&mut self, at: NaiveDateTime) {
        self.update_date_time = Some(at);
    }
}

/// The caller-facing raw text shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTextDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(
        default,
        with = "time::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_date_time: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "time::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_date_time: Option<NaiveDateTime>,
}

impl RawTextDto {
    pub fn new(id: impl Into<String>, text_content: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text_content: Some(text_content.into()),
            create_date_time: None,
            update_date_time: None,
        }
    }
}

impl Dto for RawTextDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn create_date_time(&self) -> Option<NaiveDateTime> {
        self.create_date_time
    }

    fn set_create_date_time(&mut self, at: NaiveDateTime) {
        self.create_date_time = Some(at);
    }

    fn update_date_time(&self) -> Option<NaiveDateTime> {
        self.update_date_time
    }

    fn set_update_date_time(&mut self, at: NaiveDateTime) {
        self.update_date_time = Some(at);
    }
}
