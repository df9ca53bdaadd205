//! Display strings for the nine result fields.

use crate::providers::{CountryRecord, DialingInfo, ExchangeQuote};

/// Placeholder for any absent value.
pub const NOT_AVAILABLE: &str = "N/A";

/// One formatted, labelled line per result field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayFields {
    pub country: String,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: String,
    pub currency: String,
    pub exchange_rate: String,
    pub languages: String,
    pub calling_code: String,
}

impl DisplayFields {
    pub fn from_record(record: &CountryRecord, quote: &ExchangeQuote) -> Self {
        Self {
            country: labelled("Country", record.common_name.clone()),
            capital: labelled("Capital", record.capital.as_ref().map(|c| c.join(", "))),
            region: labelled("Region", record.region.clone()),
            subregion: labelled("Subregion", record.subregion.clone()),
            population: labelled("Population", record.population.map(group_thousands)),
            currency: labelled("Currency", currencies(record)),
            exchange_rate: format!("Exchange Rate: {quote}"),
            languages: labelled("Languages", languages(record)),
            calling_code: labelled("Calling Code", record.dialing.as_ref().map(calling_code)),
        }
    }

    /// Fields in on-screen order.
    pub fn lines(&self) -> [&str; 9] {
        [
            self.country.as_str(),
            self.capital.as_str(),
            self.region.as_str(),
            self.subregion.as_str(),
            self.population.as_str(),
            self.currency.as_str(),
            self.exchange_rate.as_str(),
            self.languages.as_str(),
            self.calling_code.as_str(),
        ]
    }
}

fn labelled(label: &str, value: Option<String>) -> String {
    format!("{label}: {}", value.as_deref().unwrap_or(NOT_AVAILABLE))
}

fn currencies(record: &CountryRecord) -> Option<String> {
    if record.currencies.is_empty() {
        return None;
    }
    let parts: Vec<String> = record
        .currencies
        .iter()
        .map(|(code, info)| format!("{} ({code})", info.name.as_deref().unwrap_or(NOT_AVAILABLE)))
        .collect();
    Some(parts.join(", "))
}

fn languages(record: &CountryRecord) -> Option<String> {
    if record.languages.is_empty() {
        return None;
    }
    let names: Vec<&str> = record.languages.iter().map(|(_, name)| name.as_str()).collect();
    Some(names.join(", "))
}

/// `+` followed by the root and only the first suffix.
///
/// Roots already start with `+`, so Japan reads `++81`. Countries with many
/// suffixes (`+1` with every area code) show only the first one.
fn calling_code(dialing: &DialingInfo) -> String {
    let first_suffix = dialing.suffixes.first().map(String::as_str).unwrap_or("");
    format!("+{}{first_suffix}", dialing.root)
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
