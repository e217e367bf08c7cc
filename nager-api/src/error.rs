//! Error types for the Nager.Date client library.

use thiserror::Error;

/// Main error type for Nager.Date operations
#[derive(Error, Debug)]
pub enum NagerError {
    /// Request never produced a usable response (DNS, connect, timeout, body read)
    #[error("Failed to Connect to {url}: {source}")]
    Connection { url: String, source: reqwest::Error },

    /// Response body was not valid JSON
    #[error("Failed to Decode Response JSON {url}: {source} Content: {body}")]
    Decode {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    /// Service answered 404, which Nager.Date uses for unknown country codes
    #[error("({status} [{reason}]) Country Code Invalid")]
    NotFound { status: u16, reason: String },

    /// Service answered with any other error status; the decoded body is kept
    #[error("({status} [{reason}]) {body}")]
    Request {
        status: u16,
        reason: String,
        body: serde_json::Value,
    },

    /// Response JSON decoded but did not match the expected record shape
    #[error("Failed to Convert Response JSON: {0}")]
    Conversion(#[from] serde_json::Error),

    /// A convenience method was called without a country on a client that has
    /// no default country configured
    #[error("No Country Provided")]
    NoDefaultCountry,

    /// A country code did not match any entry in the available-country list
    #[error("Invalid Country Code: {code}. Options: {options:?}")]
    InvalidCountryCode { code: String, options: Vec<String> },
}

/// Type alias for Results using NagerError
pub type Result<T> = std::result::Result<T, NagerError>;
