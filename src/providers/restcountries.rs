//! Country metadata lookup against the REST Countries v3.1 API.
//!
//! One request per search: `GET /v3.1/name/{name}?fullText=true`. The
//! service answers with a JSON array of matches on success and an error
//! object otherwise; only element 0 of a successful answer is used.

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::LookupError;

/// A currency entry as returned under `currencies.<CODE>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrencyInfo {
    pub name: Option<String>,
}

/// International dialing prefix (`idd`): a root like `+8` and suffixes like `["1"]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialingInfo {
    pub root: String,
    pub suffixes: Vec<String>,
}

/// The subset of a country object the explorer displays.
///
/// `currencies` and `languages` keep the order the service sent them in,
/// so the first currency entry is the one the exchange lookup uses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountryRecord {
    pub common_name: Option<String>,
    pub capital: Option<Vec<String>>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub population: Option<u64>,
    pub currencies: Vec<(String, CurrencyInfo)>,
    pub languages: Vec<(String, String)>,
    pub dialing: Option<DialingInfo>,
    pub flag_png: Option<String>,
}

impl CountryRecord {
    /// The primary currency code: the first key of `currencies` in response order.
    pub fn primary_currency(&self) -> Option<&str> {
        self.currencies.first().map(|(code, _)| code.as_str())
    }

    /// Parse one element of the lookup response.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<WireCountry>(value).map(Self::from)
    }
}

/// JSON object read as an ordered list of entries. `null` maps to empty.
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(OrderedMap(Vec::new()))
            }
        }

        deserializer.deserialize_any(EntriesVisitor(PhantomData))
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap(Vec::new())
    }
}

#[derive(Deserialize)]
struct WireName {
    common: Option<String>,
}

#[derive(Deserialize)]
struct WireIdd {
    root: Option<String>,
    suffixes: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct WireFlags {
    png: Option<String>,
}

#[derive(Deserialize)]
struct WireCountry {
    name: Option<WireName>,
    capital: Option<Vec<String>>,
    region: Option<String>,
    subregion: Option<String>,
    population: Option<u64>,
    #[serde(default)]
    currencies: OrderedMap<CurrencyInfo>,
    #[serde(default)]
    languages: OrderedMap<String>,
    idd: Option<WireIdd>,
    flags: Option<WireFlags>,
}

impl From<WireCountry> for CountryRecord {
    fn from(wire: WireCountry) -> Self {
        // An empty `idd` object counts as absent.
        let dialing = wire.idd.and_then(|idd| match (idd.root, idd.suffixes) {
            (None, None) => None,
            (root, suffixes) => Some(DialingInfo {
                root: root.unwrap_or_default(),
                suffixes: suffixes.unwrap_or_default(),
            }),
        });

        Self {
            common_name: wire.name.and_then(|n| n.common),
            capital: wire.capital,
            region: wire.region,
            subregion: wire.subregion,
            population: wire.population,
            currencies: wire.currencies.0,
            languages: wire.languages.0,
            dialing,
            flag_png: wire.flags.and_then(|f| f.png),
        }
    }
}

/// Client for the country-information service.
#[derive(Debug, Clone)]
pub struct CountryClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl CountryClient {
    pub fn new(http: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            timeout,
        }
    }

    /// Build `{base}/v3.1/name/{name}?fullText=true` with `name` as one encoded segment.
    fn lookup_url(&self, name: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::Transport(format!("invalid country service URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Transport("country service URL cannot take a path".into()))?
            .pop_if_empty()
            .extend(["v3.1", "name", name]);
        url.query_pairs_mut().append_pair("fullText", "true");
        Ok(url)
    }

    /// Look up a country by its exact full name.
    ///
    /// `name` must already be trimmed and non-empty.
    pub async fn lookup(&self, name: &str) -> Result<CountryRecord, LookupError> {
        let url = self.lookup_url(name)?;
        info!(country = %name, "Looking up country");

        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Country service request failed");
                LookupError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            info!(?status, country = %name, "Country service reported no match");
            return Err(LookupError::NotFound);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(format!("failed to read body: {e}")))?;

        let data: Value = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Country service body is not JSON");
            LookupError::Malformed(e.to_string())
        })?;

        let Value::Array(matches) = data else {
            info!(country = %name, "Country service answered without a match list");
            return Err(LookupError::NotFound);
        };

        debug!(matches = matches.len(), "Country service returned matches");
        let first = matches
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::Malformed("empty match list".into()))?;

        CountryRecord::from_json(first).map_err(|e| {
            warn!(error = %e, "Country record has an unexpected shape");
            LookupError::Malformed(e.to_string())
        })
    }
}
