//! Public holidays and their type flags.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::client::Fetcher;
use crate::country::Country;
use crate::dates;
use crate::error::Result;

/// Wire record for one holiday, shared by the `PublicHolidays`,
/// `NextPublicHolidays`, and `NextPublicHolidaysWorldwide` endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HolidayRecord {
    pub(crate) name: String,
    pub(crate) local_name: String,
    #[serde(default, deserialize_with = "dates::opt_date")]
    pub(crate) date: Option<NaiveDate>,
    pub(crate) country_code: String,
    pub(crate) fixed: bool,
    pub(crate) global: bool,
    #[serde(default)]
    pub(crate) counties: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) launch_year: Option<i32>,
    #[serde(default)]
    pub(crate) types: Option<Vec<String>>,
}

/// A public holiday on a specific date in a specific country.
///
/// The service tags each holiday with zero or more type strings ("Public",
/// "Bank", ...); the `is_*` accessors answer membership in that set, so a
/// holiday the service sent with null types answers false to all of them.
#[derive(Debug, Clone)]
pub struct Holiday {
    name: String,
    local_name: String,
    date: Option<NaiveDate>,
    country_code: String,
    country: Country,
    fixed: bool,
    global: bool,
    counties: Option<Vec<String>>,
    launch_year: Option<i32>,
    types: Vec<String>,
}

impl Holiday {
    pub(crate) async fn from_record(record: HolidayRecord, fetcher: &Arc<Fetcher>) -> Result<Holiday> {
        let country = Fetcher::resolve_code(fetcher, &record.country_code).await?;
        Ok(Holiday {
            name: record.name,
            local_name: record.local_name,
            date: record.date,
            country_code: record.country_code,
            country,
            fixed: record.fixed,
            global: record.global,
            counties: record.counties,
            launch_year: record.launch_year,
            types: record.types.unwrap_or_default(),
        })
    }

    /// English holiday name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Holiday name in the local language
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Date the holiday falls on
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// ISO 3166-1 alpha-2 code of the observing country
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The observing country, in summary state
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// Whether the holiday falls on the same date every year
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Whether the whole country observes it
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Observing counties, when the holiday is not global
    pub fn counties(&self) -> Option<&[String]> {
        self.counties.as_deref()
    }

    /// Year the holiday was first observed
    pub fn launch_year(&self) -> Option<i32> {
        self.launch_year
    }

    /// Raw type tags as sent by the service
    pub fn types(&self) -> &[String] {
        &self.types
    }

    fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Tagged "Public"
    pub fn is_public(&self) -> bool {
        self.has_type("Public")
    }

    /// Tagged "Bank": banks and offices closed
    pub fn is_bank(&self) -> bool {
        self.has_type("Bank")
    }

    /// Tagged "School": schools closed
    pub fn is_school(&self) -> bool {
        self.has_type("School")
    }

    /// Tagged "Authorities": government offices closed
    pub fn is_authorities(&self) -> bool {
        self.has_type("Authorities")
    }

    /// Tagged "Optional": majority of people take the day off
    pub fn is_optional(&self) -> bool {
        self.has_type("Optional")
    }

    /// Tagged "Observance": no paid day off
    pub fn is_observance(&self) -> bool {
        self.has_type("Observance")
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, dates::format_opt(&self.date))
    }
}

/// Map a holiday-list response body onto [`Holiday`]s. Each record gets a
/// summary [`Country`] resolved from the cached available-country list.
pub(crate) async fn response_to_holidays(value: Value, fetcher: &Arc<Fetcher>) -> Result<Vec<Holiday>> {
    let records: Vec<HolidayRecord> = serde_json::from_value(value)?;
    let mut holidays = Vec::with_capacity(records.len());
    for record in records {
        holidays.push(Holiday::from_record(record, fetcher).await?);
    }
    Ok(holidays)
}
