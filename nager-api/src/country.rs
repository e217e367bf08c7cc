//! Countries known to the holiday service.
//!
//! A [`Country`] starts out in a summary state carrying only its ISO code and
//! common name, which is all the `AvailableCountries` endpoint provides. The
//! rest (official name, region, borders) is fetched from `CountryInfo` the
//! first time it is asked for and kept for the lifetime of the value.

use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::client::Fetcher;
use crate::error::{NagerError, Result};
use crate::holiday::{self, Holiday};
use crate::weekend::{self, Weekend};

/// Wire record for one entry of the `AvailableCountries` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountrySummaryRecord {
    pub(crate) country_code: String,
    pub(crate) name: String,
}

/// Wire record for the `CountryInfo` endpoint. Border entries reuse the same
/// shape with `borders` set to null.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountryInfoRecord {
    pub(crate) common_name: String,
    pub(crate) official_name: String,
    pub(crate) country_code: String,
    pub(crate) region: String,
    #[serde(default)]
    pub(crate) borders: Option<Vec<CountryInfoRecord>>,
}

/// A country known to the holiday service.
///
/// The code and common name are always present. Everything else loads on
/// first access through [`Country::details`] or one of the field accessors,
/// with exactly one `CountryInfo` request per value no matter how many
/// accessors are called.
///
/// Values are read-only once built; the only state change a country ever
/// undergoes is the one-shot detail load. Field writes from outside do not
/// compile:
///
/// ```compile_fail
/// fn rename(country: &mut nager_api::Country) {
///     country.name = String::from("Atlantis");
/// }
/// ```
pub struct Country {
    code: String,
    name: String,
    detail: OnceCell<CountryDetail>,
    fetcher: Arc<Fetcher>,
}

/// The full-detail portion of a country, present after the first load
#[derive(Debug, Clone)]
pub struct CountryDetail {
    official_name: String,
    region: String,
    borders: Vec<Country>,
}

impl CountryDetail {
    pub(crate) fn from_record(record: CountryInfoRecord, fetcher: &Arc<Fetcher>) -> CountryDetail {
        let borders = record
            .borders
            .unwrap_or_default()
            .into_iter()
            .map(|border| Country::summary(Arc::clone(fetcher), border.country_code, border.common_name))
            .collect();
        CountryDetail {
            official_name: record.official_name,
            region: record.region,
            borders,
        }
    }

    /// Official (long-form) country name
    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    /// World region the country belongs to
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Neighbouring countries, in summary state
    pub fn borders(&self) -> &[Country] {
        &self.borders
    }
}

impl Country {
    pub(crate) fn summary(
        fetcher: Arc<Fetcher>,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Country {
        Country {
            code: code.into(),
            name: name.into(),
            detail: OnceCell::new(),
            fetcher,
        }
    }

    /// ISO 3166-1 alpha-2 code, e.g. "US"
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Common (short-form) country name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether full details have been loaded yet
    pub fn is_full(&self) -> bool {
        self.detail.initialized()
    }

    /// Case-insensitive comparison against a country code
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }

    /// Full details, fetched from `CountryInfo` on first call and cached
    pub async fn details(&self) -> Result<&CountryDetail> {
        self.detail
            .get_or_try_init(|| async {
                let value = self.fetcher.raw().country_info(&self.code).await?;
                let record: CountryInfoRecord = serde_json::from_value(value)?;
                Ok::<_, NagerError>(CountryDetail::from_record(record, &self.fetcher))
            })
            .await
    }

    /// Force the detail load without reading any field
    pub async fn load_details(&self) -> Result<()> {
        self.details().await.map(|_| ())
    }

    /// Official name, loading details if needed
    pub async fn official_name(&self) -> Result<&str> {
        Ok(self.details().await?.official_name())
    }

    /// Region, loading details if needed
    pub async fn region(&self) -> Result<&str> {
        Ok(self.details().await?.region())
    }

    /// Bordering countries, loading details if needed
    pub async fn borders(&self) -> Result<&[Country]> {
        Ok(self.details().await?.borders())
    }

    /// Long weekends in this country for the given year
    pub async fn long_weekends(&self, year: i32) -> Result<Vec<Weekend>> {
        let value = self.fetcher.raw().long_weekend(year, &self.code).await?;
        weekend::response_to_weekends(value)
    }

    /// Public holidays in this country for the given year
    pub async fn public_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        let value = self.fetcher.raw().public_holidays(year, &self.code).await?;
        holiday::response_to_holidays(value, &self.fetcher).await
    }

    /// Whether today is a public holiday here, optionally shifted by a UTC
    /// offset in hours
    pub async fn is_today_public_holiday(&self, utc_offset: Option<i32>) -> Result<bool> {
        self.fetcher
            .raw()
            .is_today_public_holiday(&self.code, utc_offset)
            .await
    }

    /// Public holidays here over the next 365 days
    pub async fn next_public_holidays(&self) -> Result<Vec<Holiday>> {
        let value = self.fetcher.raw().next_public_holidays(&self.code).await?;
        holiday::response_to_holidays(value, &self.fetcher).await
    }
}

impl Clone for Country {
    fn clone(&self) -> Self {
        Country {
            code: self.code.clone(),
            name: self.name.clone(),
            detail: OnceCell::new_with(self.detail.get().cloned()),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.name == other.name
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Country")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("full", &self.is_full())
            .finish()
    }
}
