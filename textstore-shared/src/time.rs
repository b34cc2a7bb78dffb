//! Timestamp wire format.
//!
//! All backends exchange timestamps as local datetimes rendered with
//! millisecond precision, e.g. `2024-05-01T13:45:30.123`. This module owns
//! the format string and the serde adapters for optional timestamp fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// The millisecond-precision datetime pattern shared by documents and
/// query bodies.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Render a timestamp in the shared wire format.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter for `Option<NaiveDateTime>` fields using the shared format.
pub mod option_timestamp {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_str(&format_timestamp(at)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            Some(text) => NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_with_millisecond_precision() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_milli_opt(13, 45, 30, 123)
            .unwrap();

        assert_eq!(format_timestamp(&at), "2024-05-01T13:45:30.123");
    }

    #[test]
    fn formats_zero_millis_explicitly() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(13, 45, 30)
            .unwrap();

        assert_eq!(format_timestamp(&at), "2024-05-01T13:45:30.000");
    }
}
