//! Date helpers for Nager.Date wire payloads.
//!
//! Every date the service sends or accepts is a plain "YYYY-MM-DD" string;
//! a handful of fields (long weekend bounds, holiday dates) may also arrive
//! as null or as an empty string, which both mean "no date".

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Date format used by every Nager.Date endpoint
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format an optional date, rendering an absent date as an empty string
pub(crate) fn format_opt(date: &Option<NaiveDate>) -> String {
    date.map_or(String::new(), |d| format_date(&d))
}

/// Deserialize an optional wire date; null and "" both map to None
pub(crate) fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
