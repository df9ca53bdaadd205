//! Exchange-rate lookup against an `exchangerate.host`-style API.
//!
//! Failures never reach the user as errors: every problem collapses into
//! [`ExchangeQuote::Unavailable`], which renders as `N/A`.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Number;
use tracing::{debug, info, warn};

/// Rate of one currency against the base currency, or the `N/A` sentinel.
///
/// The rate stays the number the service sent, so it prints the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeQuote {
    Rate {
        base: String,
        code: String,
        rate: Number,
    },
    Unavailable,
}

impl fmt::Display for ExchangeQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeQuote::Rate { base, code, rate } => write!(f, "1 {base} = {rate} {code}"),
            ExchangeQuote::Unavailable => f.write_str("N/A"),
        }
    }
}

#[derive(Deserialize)]
struct RatesResponse {
    #[serde(default)]
    rates: HashMap<String, Number>,
}

/// Client for the currency-rate service.
#[derive(Debug, Clone)]
pub struct RateClient {
    http: reqwest::Client,
    base_url: String,
    base_currency: String,
    timeout: Duration,
}

impl RateClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        base_currency: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            base_currency: base_currency.to_string(),
            timeout,
        }
    }

    /// Quote `code` against the base currency.
    ///
    /// An absent or empty code short-circuits without touching the network.
    pub async fn quote(&self, code: Option<&str>) -> ExchangeQuote {
        let Some(code) = code.filter(|c| !c.is_empty()) else {
            debug!("No currency code, skipping rate lookup");
            return ExchangeQuote::Unavailable;
        };

        match self.fetch_rates().await {
            Ok(mut rates) => match rates.remove(code) {
                Some(rate) => {
                    info!(%code, %rate, "Exchange rate resolved");
                    ExchangeQuote::Rate {
                        base: self.base_currency.clone(),
                        code: code.to_string(),
                        rate,
                    }
                }
                None => {
                    info!(%code, "Currency missing from rate table");
                    ExchangeQuote::Unavailable
                }
            },
            Err(e) => {
                warn!(error = %e, %code, "Exchange rate lookup failed");
                ExchangeQuote::Unavailable
            }
        }
    }

    async fn fetch_rates(&self) -> Result<HashMap<String, Number>, reqwest::Error> {
        let url = format!("{}/latest", self.base_url);
        let response: RatesResponse = self
            .http
            .get(&url)
            .query(&[("base", self.base_currency.as_str())])
            .timeout(self.timeout)
            .send()
            .await?
            .json()
            .await?;
        debug!(count = response.rates.len(), "Rate table received");
        Ok(response.rates)
    }
}
