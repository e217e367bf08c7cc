//! High-level client: country resolution plus typed convenience calls.

use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::country::{Country, CountrySummaryRecord};
use crate::error::{NagerError, Result};
use crate::holiday::{self, Holiday};
use crate::raw::{RawApi, BASE_URL};
use crate::weekend::Weekend;

/// Shared fetch handle behind every domain object.
///
/// Owns the raw API plus the memoized available-country list, which is
/// fetched at most once per client and backs all code resolution.
#[derive(Debug)]
pub(crate) struct Fetcher {
    raw: RawApi,
    countries: OnceCell<Vec<CountrySummaryRecord>>,
}

impl Fetcher {
    pub(crate) fn new(raw: RawApi) -> Arc<Fetcher> {
        Arc::new(Fetcher {
            raw,
            countries: OnceCell::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn seeded(raw: RawApi, summaries: Vec<CountrySummaryRecord>) -> Arc<Fetcher> {
        Arc::new(Fetcher {
            raw,
            countries: OnceCell::new_with(Some(summaries)),
        })
    }

    pub(crate) fn raw(&self) -> &RawApi {
        &self.raw
    }

    /// The available-country list, fetched on first use and kept
    pub(crate) async fn summaries(&self) -> Result<&[CountrySummaryRecord]> {
        let list = self
            .countries
            .get_or_try_init(|| async {
                let value = self.raw.available_countries().await?;
                let records: Vec<CountrySummaryRecord> = serde_json::from_value(value)?;
                Ok::<_, NagerError>(records)
            })
            .await?;
        Ok(list.as_slice())
    }

    /// Resolve a country code against the available-country list.
    /// Matching is case-insensitive; an unknown code is rejected without
    /// touching the service beyond the (cached) list itself.
    pub(crate) async fn resolve_code(fetcher: &Arc<Fetcher>, code: &str) -> Result<Country> {
        let code = code.to_uppercase();
        let summaries = fetcher.summaries().await?;
        match summaries.iter().find(|summary| summary.country_code == code) {
            Some(summary) => Ok(Country::summary(
                Arc::clone(fetcher),
                summary.country_code.clone(),
                summary.name.clone(),
            )),
            None => Err(NagerError::InvalidCountryCode {
                code,
                options: summaries
                    .iter()
                    .map(|summary| summary.country_code.clone())
                    .collect(),
            }),
        }
    }
}

/// Wire record for the `Version` endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VersionRecord {
    pub(crate) name: String,
    pub(crate) version: String,
}

/// The country argument accepted by every convenience method.
///
/// Most callers pass a code (`"US"`) or an existing [`Country`] and rely on
/// the `From` impls; [`CountryArg::Default`] falls back to the client's
/// default country.
#[derive(Debug, Clone, Copy, Default)]
pub enum CountryArg<'a> {
    /// Use the client's default country
    #[default]
    Default,
    /// Resolve this ISO 3166-1 alpha-2 code, case-insensitively
    Code(&'a str),
    /// Use this country as-is
    Country(&'a Country),
}

impl<'a> From<&'a str> for CountryArg<'a> {
    fn from(code: &'a str) -> Self {
        CountryArg::Code(code)
    }
}

impl<'a> From<&'a String> for CountryArg<'a> {
    fn from(code: &'a String) -> Self {
        CountryArg::Code(code)
    }
}

impl<'a> From<&'a Country> for CountryArg<'a> {
    fn from(country: &'a Country) -> Self {
        CountryArg::Country(country)
    }
}

impl<'a> From<Option<&'a str>> for CountryArg<'a> {
    fn from(code: Option<&'a str>) -> Self {
        match code {
            Some(code) => CountryArg::Code(code),
            None => CountryArg::Default,
        }
    }
}

/// Typed client for the Nager.Date service.
///
/// Connecting verifies the service is reachable by fetching its name and
/// version. An optional default country, resolved and fully loaded up front,
/// backs every convenience call made with [`CountryArg::Default`].
#[derive(Debug)]
pub struct NagerClient {
    inner: Arc<Fetcher>,
    name: String,
    version: String,
    default_country: Option<Country>,
}

impl NagerClient {
    /// Connect to the hosted service at [`BASE_URL`]
    pub async fn connect(default_country: Option<&str>) -> Result<NagerClient> {
        Self::connect_with(reqwest::Client::new(), BASE_URL, default_country).await
    }

    /// Connect to a service instance at `base_url` with a caller-supplied
    /// reqwest Client
    pub async fn connect_with(
        http: reqwest::Client,
        base_url: &str,
        default_country: Option<&str>,
    ) -> Result<NagerClient> {
        let inner = Fetcher::new(RawApi::with_client(http, base_url));
        let value = inner.raw().version().await?;
        let service: VersionRecord = serde_json::from_value(value)?;
        let default_country = match default_country {
            Some(code) => {
                let country = Fetcher::resolve_code(&inner, code).await?;
                country.load_details().await?;
                Some(country)
            }
            None => None,
        };
        Ok(NagerClient {
            inner,
            name: service.name,
            version: service.version,
            default_country,
        })
    }

    /// Service name reported at connect time
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Service version reported at connect time
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The configured default country, if any
    pub fn default_country(&self) -> Option<&Country> {
        self.default_country.as_ref()
    }

    /// The underlying raw endpoint wrapper
    pub fn raw(&self) -> &RawApi {
        self.inner.raw()
    }

    /// All countries the service knows, in summary state
    pub async fn available_countries(&self) -> Result<Vec<Country>> {
        let summaries = self.inner.summaries().await?;
        Ok(summaries
            .iter()
            .map(|summary| {
                Country::summary(
                    Arc::clone(&self.inner),
                    summary.country_code.clone(),
                    summary.name.clone(),
                )
            })
            .collect())
    }

    /// Resolve a country argument and load its full details
    pub async fn resolve<'a>(&self, country: impl Into<CountryArg<'a>>) -> Result<Country> {
        let country = self.lookup(country.into()).await?;
        country.load_details().await?;
        Ok(country)
    }

    /// Resolve a country argument without loading details
    pub async fn resolve_summary<'a>(&self, country: impl Into<CountryArg<'a>>) -> Result<Country> {
        self.lookup(country.into()).await
    }

    async fn lookup(&self, arg: CountryArg<'_>) -> Result<Country> {
        match arg {
            CountryArg::Default => match &self.default_country {
                Some(country) => Ok(country.clone()),
                None => Err(NagerError::NoDefaultCountry),
            },
            CountryArg::Country(country) => Ok(country.clone()),
            CountryArg::Code(code) => Fetcher::resolve_code(&self.inner, code).await,
        }
    }

    /// Long weekends for a year and country
    pub async fn long_weekends<'a>(
        &self,
        year: i32,
        country: impl Into<CountryArg<'a>>,
    ) -> Result<Vec<Weekend>> {
        self.resolve_summary(country).await?.long_weekends(year).await
    }

    /// Public holidays for a year and country
    pub async fn public_holidays<'a>(
        &self,
        year: i32,
        country: impl Into<CountryArg<'a>>,
    ) -> Result<Vec<Holiday>> {
        self.resolve_summary(country).await?.public_holidays(year).await
    }

    /// Whether today is a public holiday in the given country, optionally
    /// shifted by a UTC offset in hours
    pub async fn is_today_public_holiday<'a>(
        &self,
        country: impl Into<CountryArg<'a>>,
        utc_offset: Option<i32>,
    ) -> Result<bool> {
        self.resolve_summary(country)
            .await?
            .is_today_public_holiday(utc_offset)
            .await
    }

    /// Public holidays in the given country over the next 365 days
    pub async fn next_public_holidays<'a>(
        &self,
        country: impl Into<CountryArg<'a>>,
    ) -> Result<Vec<Holiday>> {
        self.resolve_summary(country).await?.next_public_holidays().await
    }

    /// Public holidays worldwide over the next 7 days. No country argument
    /// and no resolution step.
    pub async fn next_public_holidays_worldwide(&self) -> Result<Vec<Holiday>> {
        let value = self.inner.raw().next_public_holidays_worldwide().await?;
        holiday::response_to_holidays(value, &self.inner).await
    }
}
