//! Display formatting and parsing for event fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Date portion of an ISO-8601 timestamp, as used for display and for
/// `<input type="date">` values. Timestamps without a time component
/// pass through unchanged.
#[must_use]
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split_once('T').map_or(timestamp, |(date, _)| date)
}

/// Ticket price label: "Free" for zero, dollars otherwise.
#[must_use]
pub fn price_label(price: f64) -> String {
    if price > 0.0 {
        format!("${price:.2}")
    } else {
        "Free".to_owned()
    }
}

/// Price rendered for a numeric form input: whole dollars drop the
/// fraction, anything else keeps its natural representation.
#[must_use]
pub fn price_input_value(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}

/// Parse a route parameter as an event id.
#[must_use]
pub fn parse_event_id(raw: Option<String>) -> Option<i64> {
    raw?.parse().ok()
}
