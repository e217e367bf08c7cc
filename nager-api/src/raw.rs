//! Thin wrapper over the Nager.Date HTTP endpoints.
//!
//! [`RawApi`] mirrors the service one method per endpoint and hands back the
//! decoded JSON as-is. It does no country resolution and builds no domain
//! objects; that is the job of [`crate::client::NagerClient`]. Reach for this
//! layer directly when you want the raw payloads.

use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::{NagerError, Result};

/// Base URL of the hosted Nager.Date v3 API
pub const BASE_URL: &str = "https://date.nager.at/api/v3/";

/// Direct, untyped access to the Nager.Date endpoints.
///
/// Every method issues a single GET request and returns the decoded JSON
/// body, or a boolean for the status-coded `IsTodayPublicHoliday` endpoint.
#[derive(Debug, Clone)]
pub struct RawApi {
    client: Client,
    base_url: String,
}

impl RawApi {
    /// Client against the hosted service at [`BASE_URL`]
    pub fn new() -> Self {
        Self::with_client(Client::new(), BASE_URL)
    }

    /// Client with a caller-supplied reqwest Client and base URL.
    /// A missing trailing slash on the base URL is tolerated.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        RawApi {
            client,
            base_url: normalize_base(base_url),
        }
    }

    /// All countries the service has holiday data for
    pub async fn available_countries(&self) -> Result<Value> {
        self.request_json(&format!("{}AvailableCountries", self.base_url), &[])
            .await
    }

    /// Full detail for one country: official name, region, borders
    pub async fn country_info(&self, country_code: &str) -> Result<Value> {
        self.request_json(
            &format!("{}CountryInfo/{}", self.base_url, country_code),
            &[],
        )
        .await
    }

    /// Long weekends for a year and country
    pub async fn long_weekend(&self, year: i32, country_code: &str) -> Result<Value> {
        self.request_json(
            &format!("{}LongWeekend/{}/{}", self.base_url, year, country_code),
            &[],
        )
        .await
    }

    /// Public holidays for a year and country
    pub async fn public_holidays(&self, year: i32, country_code: &str) -> Result<Value> {
        self.request_json(
            &format!("{}PublicHolidays/{}/{}", self.base_url, year, country_code),
            &[],
        )
        .await
    }

    /// Whether today is a public holiday in the given country, optionally
    /// shifted by a UTC offset in hours. Answered by status code alone.
    pub async fn is_today_public_holiday(
        &self,
        country_code: &str,
        utc_offset: Option<i32>,
    ) -> Result<bool> {
        self.request_bool(
            &format!("{}IsTodayPublicHoliday/{}", self.base_url, country_code),
            &[("offset", utc_offset.map(|offset| offset.to_string()))],
        )
        .await
    }

    /// Public holidays in the given country over the next 365 days
    pub async fn next_public_holidays(&self, country_code: &str) -> Result<Value> {
        self.request_json(
            &format!("{}NextPublicHolidays/{}", self.base_url, country_code),
            &[],
        )
        .await
    }

    /// Public holidays worldwide over the next 7 days
    pub async fn next_public_holidays_worldwide(&self) -> Result<Value> {
        self.request_json(&format!("{}NextPublicHolidaysWorldwide", self.base_url), &[])
            .await
    }

    /// Service name and version
    pub async fn version(&self) -> Result<Value> {
        self.request_json(&format!("{}Version", self.base_url), &[])
            .await
    }

    /// Issue a GET with the present query parameters; absent ones are dropped
    /// from the request entirely rather than sent empty.
    async fn get(&self, url: &str, query: &[(&str, Option<String>)]) -> Result<reqwest::Response> {
        let params = present_params(query);
        debug!("Request URL: {}", url);
        if !params.is_empty() {
            debug!("Request Params: {:?}", params);
        }
        let mut request = self.client.get(url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        request.send().await.map_err(|source| NagerError::Connection {
            url: url.to_string(),
            source,
        })
    }

    async fn request_json(&self, url: &str, query: &[(&str, Option<String>)]) -> Result<Value> {
        let response = self.get(url, query).await?;
        self.decode(url, response).await
    }

    /// Boolean endpoints answer 200 for yes and 204 for no; anything else
    /// goes through the common decode-and-map path.
    async fn request_bool(&self, url: &str, query: &[(&str, Option<String>)]) -> Result<bool> {
        let response = self.get(url, query).await?;
        let status = response.status();
        match status {
            StatusCode::OK => Ok(true),
            StatusCode::NO_CONTENT => Ok(false),
            _ => {
                let reason = reason_of(status);
                let body = self.decode(url, response).await?;
                Err(NagerError::Request {
                    status: status.as_u16(),
                    reason,
                    body,
                })
            }
        }
    }

    /// Decode a response body as JSON, then map error statuses.
    /// Order matters: an unparseable body is reported as a decode failure
    /// even when the status already signals an error.
    async fn decode(&self, url: &str, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let reason = reason_of(status);
        let body = response
            .text()
            .await
            .map_err(|source| NagerError::Connection {
                url: url.to_string(),
                source,
            })?;
        let value: Value =
            serde_json::from_str(&body).map_err(|source| NagerError::Decode {
                url: url.to_string(),
                body,
                source,
            })?;
        debug!("Response ({} [{}]): {}", status.as_u16(), reason, value);
        if status == StatusCode::NOT_FOUND {
            return Err(NagerError::NotFound {
                status: status.as_u16(),
                reason,
            });
        }
        if status.as_u16() >= 400 {
            return Err(NagerError::Request {
                status: status.as_u16(),
                reason,
                body: value,
            });
        }
        Ok(value)
    }
}

impl Default for RawApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep only the query parameters that actually have a value
fn present_params<'a>(query: &'a [(&'a str, Option<String>)]) -> Vec<(&'a str, String)> {
    query
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (*key, v.clone())))
        .collect()
}

fn normalize_base(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    }
}

fn reason_of(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_has_trailing_slash() {
        assert!(BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://127.0.0.1:5000"), "http://127.0.0.1:5000/");
        assert_eq!(normalize_base("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/");
    }

    #[test]
    fn test_present_params_drops_absent_values() {
        let query = [
            ("offset", Some("-5".to_string())),
            ("verbose", None),
        ];
        let params = present_params(&query);
        assert_eq!(params, vec![("offset", "-5".to_string())]);
    }

    #[test]
    fn test_present_params_empty_when_all_absent() {
        let query = [("offset", None::<String>)];
        assert!(present_params(&query).is_empty());
    }

    #[test]
    fn test_reason_of_known_status() {
        assert_eq!(reason_of(StatusCode::NOT_FOUND), "Not Found");
    }
}
