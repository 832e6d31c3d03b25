use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// UTC timestamp exchanged with the API and rendered directly in views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.0.format("%Y-%m-%d %H:%M").to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_formatting() {
        let dt = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap();
        let timestamp = Timestamp(dt);
        assert_eq!(timestamp.to_html(), html! { "2026-02-14 09:30" });
    }

    #[test]
    fn timestamp_serialization() {
        let dt = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap();
        let serialized = serde_json::to_string(&Timestamp(dt)).unwrap();
        assert_eq!(serialized, "\"2026-02-14T09:30:00Z\"");
    }

    #[test]
    fn timestamp_deserialization() {
        let deserialized: Timestamp = serde_json::from_str("\"2026-02-14T09:30:00Z\"").unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap();
        assert_eq!(deserialized.0, expected);
    }
}
