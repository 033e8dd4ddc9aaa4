//! Behavior tests for the countdown, quote, and season value sources.

use std::sync::Arc;

use statline_core::sources::countdown::{countdown_value, days_remaining, parse_target_date};
use statline_core::sources::season::{percent_of_season, season_title};
use statline_core::{ApiErrorKind, BarColor, Hemisphere, QuoteFeed, StatValue, VisualType};
use statline_tests::ScriptedHttpClient;
use time::{Date, Month};

fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).expect("valid month"), day)
        .expect("valid date")
}

// =============================================================================
// Countdown
// =============================================================================

#[test]
fn countdown_matches_the_day_boundary_contract() {
    let today = date(2026, 8, 7);

    assert_eq!(countdown_value(today, today), StatValue::number("0"));
    assert_eq!(countdown_value(date(2026, 8, 8), today), StatValue::number("1"));
    assert_eq!(countdown_value(date(2026, 8, 6), today), StatValue::number("-1"));
}

#[test]
fn countdown_accepts_prompted_date_forms() {
    let parsed = parse_target_date("12/31/2026").expect("must parse");
    assert_eq!(days_remaining(parsed, date(2026, 12, 24)), 7);
}

#[test]
fn countdown_rejects_malformed_dates() {
    assert!(parse_target_date("31/12/2026").is_err());
    assert!(parse_target_date("someday").is_err());
}

// =============================================================================
// Stock quotes
// =============================================================================

const THREE_QUOTES: &str = r#"{
    "query": {
        "results": {
            "quote": [
                {"symbol": "AAPL", "Ask": "187.20", "Bid": "187.10"},
                {"symbol": "AMZN", "Ask": "131.50"},
                {"symbol": "GOOGL", "Ask": "142.10"}
            ]
        }
    }
}"#;

fn symbols(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| String::from(*s)).collect()
}

#[tokio::test]
async fn quote_feed_maps_records_to_bars_in_feed_order() {
    // Given: a three-record response
    let http = Arc::new(ScriptedHttpClient::replying_ok(&[THREE_QUOTES]));
    let feed = QuoteFeed::new(http.clone(), "https://quotes.test/v1/yql", 1_000);

    // When
    let value = feed
        .stat_value(&symbols(&["AAPL", "AMZN", "GOOGL"]))
        .await
        .expect("must parse");

    // Then: one bar per record, order preserved, fixed color
    assert_eq!(value.visual_type(), VisualType::HorizontalBars);
    let StatValue::HorizontalBars { items } = value else {
        panic!("expected a bar payload");
    };
    assert_eq!(items.len(), 3);
    assert_eq!(
        items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
        ["AAPL", "AMZN", "GOOGL"]
    );
    assert_eq!(items[0].value, "187.20");
    assert!(items.iter().all(|i| i.color == BarColor::Green));

    // And the request asked the YQL endpoint for exactly those symbols.
    let request = &http.recorded()[0];
    assert!(request.url.starts_with("https://quotes.test/v1/yql?q="));
    assert!(request.url.contains("format=json"));
    assert!(request.url.contains("%22AAPL%22"));
}

#[tokio::test]
async fn quote_feed_flags_unexpected_shapes() {
    let http = Arc::new(ScriptedHttpClient::replying_ok(&[
        r#"{"query": {"results": null}}"#,
    ]));
    let feed = QuoteFeed::new(http, "https://quotes.test/v1/yql", 1_000);

    let error = feed
        .stat_value(&symbols(&["AAPL"]))
        .await
        .expect_err("shape must be rejected");

    assert_eq!(error.kind(), ApiErrorKind::Shape);
}

#[tokio::test]
async fn quote_feed_requires_symbols() {
    let http = Arc::new(ScriptedHttpClient::replying_ok(&[THREE_QUOTES]));
    let feed = QuoteFeed::new(http.clone(), "https://quotes.test/v1/yql", 1_000);

    let error = feed.stat_value(&[]).await.expect_err("must refuse");
    assert_eq!(error.kind(), ApiErrorKind::InvalidRequest);
    assert_eq!(http.calls(), 0);
}

// =============================================================================
// Season
// =============================================================================

#[test]
fn season_progress_starts_at_zero_and_tracks_titles() {
    let spring_start = date(2026, 3, 21);
    assert_eq!(percent_of_season(spring_start), 0);
    assert_eq!(
        season_title(spring_start, Hemisphere::Northern),
        "Percent of spring days"
    );
    assert_eq!(
        season_title(spring_start, Hemisphere::Southern),
        "Percent of fall days"
    );
}
