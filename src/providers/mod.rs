//! HTTP providers for the country and exchange-rate services.

mod exchange;
mod restcountries;

pub use exchange::{ExchangeQuote, RateClient};
pub use restcountries::{CountryClient, CountryRecord, CurrencyInfo, DialingInfo};

use std::time::Duration;

use crate::config::Config;
use crate::flags::FlagFetcher;

const USER_AGENT: &str = concat!("country-explorer/", env!("CARGO_PKG_VERSION"));

/// Error type for the primary country lookup.
///
/// Cloneable so it can travel inside an iced `Message`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("No country matched the query")]
    NotFound,

    #[error("Country service request failed: {0}")]
    Transport(String),

    #[error("Country service returned an unexpected body: {0}")]
    Malformed(String),
}

/// The three outbound services used by a search, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct Services {
    pub countries: CountryClient,
    pub rates: RateClient,
    pub flags: FlagFetcher,
}

impl Services {
    /// Build all clients from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            countries: CountryClient::new(
                http.clone(),
                &config.country_api_url,
                Duration::from_secs(config.lookup_timeout_secs),
            ),
            rates: RateClient::new(
                http.clone(),
                &config.rates_api_url,
                &config.base_currency,
                Duration::from_secs(config.rates_timeout_secs),
            ),
            flags: FlagFetcher::new(http, Duration::from_secs(config.flag_timeout_secs)),
        })
    }
}
