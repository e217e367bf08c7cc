//! Client library for the [Nager.Date](https://date.nager.at) public
//! holiday web service.
//!
//! Two layers are exposed. [`RawApi`] wraps the HTTP endpoints one method
//! each and returns decoded JSON. [`NagerClient`] sits on top of it with
//! typed domain objects, country-code resolution against the service's own
//! country list, and an optional default country.
//!
//! ```no_run
//! use nager_api::{CountryArg, NagerClient};
//!
//! # async fn run() -> nager_api::Result<()> {
//! let nager = NagerClient::connect(Some("US")).await?;
//! for holiday in nager.public_holidays(2025, CountryArg::Default).await? {
//!     println!("{}", holiday);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod country;
pub mod dates;
pub mod error;
pub mod holiday;
pub mod raw;
pub mod weekend;

pub use client::{CountryArg, NagerClient};
pub use country::{Country, CountryDetail};
pub use error::{NagerError, Result};
pub use holiday::Holiday;
pub use raw::{RawApi, BASE_URL};
pub use weekend::Weekend;
