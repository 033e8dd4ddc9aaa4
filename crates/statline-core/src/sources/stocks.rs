//! Quote feed for the stock horizontal-bar stat.
//!
//! One read query against a YQL-style quote endpoint; the response arrives
//! as a nested record structure keyed by `query.results.quote`. Output
//! order matches the feed's order, with no client-side sorting.

use std::sync::Arc;

use serde::Deserialize;

use crate::dashboard::ApiError;
use crate::domain::{BarColor, BarItem, StatValue};
use crate::http::{HttpClient, HttpRequest};

/// Tickers quoted when the caller does not override them.
pub const DEFAULT_SYMBOLS: [&str; 3] = ["AAPL", "AMZN", "GOOGL"];

/// Default quote service endpoint.
pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://query.yahooapis.com/v1/public/yql";

const DATA_TABLES_ENV: &str = "store://datatables.org/alltableswithkeys";

/// Every bar is rendered in the same color; the feed's ordering alone
/// carries the ranking.
const BAR_COLOR: BarColor = BarColor::Green;

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    query: QueryNode,
}

#[derive(Debug, Deserialize)]
struct QueryNode {
    results: ResultsNode,
}

#[derive(Debug, Deserialize)]
struct ResultsNode {
    quote: Vec<QuoteRecord>,
}

#[derive(Debug, Deserialize)]
struct QuoteRecord {
    symbol: String,
    #[serde(rename = "Ask")]
    ask: String,
}

/// Client for the external quote service.
pub struct QuoteFeed {
    http: Arc<dyn HttpClient>,
    endpoint: String,
    timeout_ms: u64,
}

impl QuoteFeed {
    pub fn new(http: Arc<dyn HttpClient>, endpoint: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            timeout_ms,
        }
    }

    pub fn with_defaults(http: Arc<dyn HttpClient>) -> Self {
        Self::new(http, DEFAULT_QUOTE_ENDPOINT, 30_000)
    }

    /// Fetch ask prices for `symbols` as horizontal-bar items, one per
    /// returned quote record, in response order.
    pub async fn bar_items(&self, symbols: &[String]) -> Result<Vec<BarItem>, ApiError> {
        if symbols.is_empty() {
            return Err(ApiError::invalid_request(
                "quote query requires at least one symbol",
            ));
        }

        let quoted = symbols
            .iter()
            .map(|symbol| format!("\"{symbol}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!("select * from yahoo.finance.quotes where symbol in ({quoted})");
        let url = format!(
            "{}?q={}&format=json&env={}",
            self.endpoint,
            urlencoding::encode(&query),
            urlencoding::encode(DATA_TABLES_ENV)
        );

        let request = HttpRequest::get(url)
            .with_header("content-type", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| ApiError::transport(error.message()))?;

        if !response.is_success() {
            return Err(ApiError::service(response.status, false));
        }

        parse_quote_items(&response.body)
    }

    /// Convenience wrapper producing the full stat payload.
    pub async fn stat_value(&self, symbols: &[String]) -> Result<StatValue, ApiError> {
        Ok(StatValue::horizontal_bars(self.bar_items(symbols).await?))
    }
}

/// Decode the nested quote structure into bar items.
pub fn parse_quote_items(body: &str) -> Result<Vec<BarItem>, ApiError> {
    let envelope: QuoteEnvelope = serde_json::from_str(body)
        .map_err(|error| ApiError::shape(format!("unexpected quote response shape: {error}")))?;

    envelope
        .query
        .results
        .quote
        .into_iter()
        .map(|record| {
            BarItem::new(record.symbol, record.ask, BAR_COLOR).map_err(ApiError::from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_QUOTES: &str = r#"{
        "query": {
            "results": {
                "quote": [
                    {"symbol": "AAPL", "Ask": "187.20"},
                    {"symbol": "AMZN", "Ask": "131.50"},
                    {"symbol": "GOOGL", "Ask": "142.10"}
                ]
            }
        }
    }"#;

    #[test]
    fn preserves_feed_order_and_fields() {
        let items = parse_quote_items(THREE_QUOTES).expect("must parse");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "AAPL");
        assert_eq!(items[0].value, "187.20");
        assert_eq!(items[1].name, "AMZN");
        assert_eq!(items[2].name, "GOOGL");
        assert!(items.iter().all(|item| item.color == BarColor::Green));
    }

    #[test]
    fn unexpected_shape_is_a_shape_error() {
        let err = parse_quote_items(r#"{"query":{}}"#).expect_err("must fail");
        assert_eq!(err.kind(), crate::dashboard::ApiErrorKind::Shape);
    }
}
