//! Long weekend runs around public holidays.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::dates;
use crate::error::Result;

/// Wire record for one entry of the `LongWeekend` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LongWeekendRecord {
    #[serde(default, deserialize_with = "dates::opt_date")]
    pub(crate) start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "dates::opt_date")]
    pub(crate) end_date: Option<NaiveDate>,
    pub(crate) day_count: u32,
    pub(crate) need_bridge_day: bool,
}

/// A long weekend: a run of consecutive days off around a public holiday.
///
/// The bounds are inclusive. A weekend that "needs a bridge day" only reaches
/// its day count if one working day in the middle is taken off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weekend {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    day_count: u32,
    need_bridge_day: bool,
}

impl Weekend {
    pub(crate) fn from_record(record: LongWeekendRecord) -> Weekend {
        Weekend {
            start_date: record.start_date,
            end_date: record.end_date,
            day_count: record.day_count,
            need_bridge_day: record.need_bridge_day,
        }
    }

    /// First day off, inclusive
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Last day off, inclusive
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Total days off in the run
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Whether a bridge day must be taken to connect the run
    pub fn need_bridge_day(&self) -> bool {
        self.need_bridge_day
    }
}

impl fmt::Display for Weekend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --> {}",
            dates::format_opt(&self.start_date),
            dates::format_opt(&self.end_date)
        )
    }
}

/// Map a `LongWeekend` response body onto [`Weekend`]s
pub(crate) fn response_to_weekends(value: Value) -> Result<Vec<Weekend>> {
    let records: Vec<LongWeekendRecord> = serde_json::from_value(value)?;
    Ok(records.into_iter().map(Weekend::from_record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_years_weekend() -> Value {
        json!({
            "startDate": "2025-01-01",
            "endDate": "2025-01-05",
            "dayCount": 5,
            "needBridgeDay": true
        })
    }

    #[test]
    fn test_record_maps_onto_weekend() {
        let record: LongWeekendRecord = serde_json::from_value(new_years_weekend()).unwrap();
        let weekend = Weekend::from_record(record);
        assert_eq!(weekend.start_date(), NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(weekend.end_date(), NaiveDate::from_ymd_opt(2025, 1, 5));
        assert_eq!(weekend.day_count(), 5);
        assert!(weekend.need_bridge_day());
    }

    #[test]
    fn test_display_is_start_arrow_end() {
        let record: LongWeekendRecord = serde_json::from_value(new_years_weekend()).unwrap();
        let weekend = Weekend::from_record(record);
        assert_eq!(weekend.to_string(), "2025-01-01 --> 2025-01-05");
    }

    #[test]
    fn test_display_with_absent_dates() {
        let record: LongWeekendRecord = serde_json::from_value(json!({
            "startDate": null,
            "endDate": "",
            "dayCount": 3,
            "needBridgeDay": false
        }))
        .unwrap();
        let weekend = Weekend::from_record(record);
        assert_eq!(weekend.start_date(), None);
        assert_eq!(weekend.end_date(), None);
        assert_eq!(weekend.to_string(), " --> ");
    }

    #[test]
    fn test_response_to_weekends() {
        let weekends = response_to_weekends(json!([new_years_weekend()])).unwrap();
        assert_eq!(weekends.len(), 1);
        assert_eq!(weekends[0].day_count(), 5);
    }

    #[test]
    fn test_response_to_weekends_rejects_wrong_shape() {
        assert!(response_to_weekends(json!({"not": "a list"})).is_err());
    }
}
