//! The one worker flow: country lookup, then rate quote and flag fetch.

use tracing::info;

use crate::flags::FlagOutcome;
use crate::format::DisplayFields;
use crate::providers::{LookupError, Services};

/// Everything a successful search puts on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub fields: DisplayFields,
    pub flag: FlagOutcome,
}

/// Run a search for a trimmed, non-empty country name.
///
/// Only the lookup can fail. The rate quote and the flag degrade to
/// placeholders inside the result.
pub async fn run(services: Services, name: String) -> Result<SearchResult, LookupError> {
    let record = services.countries.lookup(&name).await?;

    let quote = services.rates.quote(record.primary_currency()).await;
    let fields = DisplayFields::from_record(&record, &quote);

    let flag_url = record.flag_png.as_deref().unwrap_or("");
    let flag = services.flags.fetch(flag_url).await;

    info!(country = %name, flag_loaded = flag.placeholder().is_none(), "Search completed");
    Ok(SearchResult { fields, flag })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use image::{ImageFormat, Rgba, RgbaImage};
    use serde_json::json;
    use std::io::Cursor;
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn services(server: &MockServer) -> Services {
        let config = Config {
            country_api_url: server.uri(),
            rates_api_url: server.uri(),
            ..Config::default()
        };
        Services::new(&config).unwrap()
    }

    fn png() -> Vec<u8> {
        let img = RgbaImage::from_pixel(320, 213, Rgba([255, 255, 255, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[tokio::test]
    async fn japan_end_to_end() {
        let server = MockServer::start().await;
        let flag_url = format!("{}/flags/jp.png", server.uri());
        Mock::given(method("GET"))
            .and(path("/v3.1/name/Japan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "name": { "common": "Japan" },
                "capital": ["Tokyo"],
                "region": "Asia",
                "population": 125800000,
                "currencies": { "JPY": { "name": "Japanese yen" } },
                "languages": { "jpn": "Japanese" },
                "flags": { "png": flag_url }
            }])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "rates": { "JPY": 149.5 } })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/flags/jp.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png()))
            .expect(1)
            .mount(&server)
            .await;

        let result = run(services(&server), "Japan".into()).await.unwrap();
        assert_eq!(result.fields.country, "Country: Japan");
        assert_eq!(result.fields.capital, "Capital: Tokyo");
        assert_eq!(result.fields.subregion, "Subregion: N/A");
        assert_eq!(result.fields.currency, "Currency: Japanese yen (JPY)");
        assert_eq!(result.fields.exchange_rate, "Exchange Rate: 1 USD = 149.5 JPY");
        assert_eq!(result.fields.calling_code, "Calling Code: N/A");
        assert!(matches!(result.flag, FlagOutcome::Loaded(_)));
    }

    #[tokio::test]
    async fn no_currency_and_no_flag_skip_their_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/v3.1/name/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([
                        { "name": { "common": "Antarctica" }, "region": "Antarctic" }
                    ])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rates": {} })))
            .expect(0)
            .mount(&server)
            .await;

        let result = run(services(&server), "Antarctica".into()).await.unwrap();
        assert_eq!(result.fields.exchange_rate, "Exchange Rate: N/A");
        assert_eq!(result.flag, FlagOutcome::NoFlag);
    }

    #[tokio::test]
    async fn failed_rate_and_flag_still_succeed() {
        let server = MockServer::start().await;
        let flag_url = format!("{}/flags/missing.png", server.uri());
        Mock::given(method("GET"))
            .and(path_regex("^/v3.1/name/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "name": { "common": "Japan" },
                "currencies": { "JPY": { "name": "Japanese yen" } },
                "flags": { "png": flag_url }
            }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/flags/missing.png"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = run(services(&server), "Japan".into()).await.unwrap();
        assert_eq!(result.fields.exchange_rate, "Exchange Rate: N/A");
        assert_eq!(result.flag, FlagOutcome::Failed);
    }

    #[tokio::test]
    async fn lookup_failure_fetches_nothing_else() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/v3.1/name/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "status": 404 })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = run(services(&server), "Atlantis".into()).await.unwrap_err();
        assert_eq!(err, LookupError::NotFound);
    }
}
