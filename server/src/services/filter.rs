use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::models::Event;

/// Criteria accepted by the event listing.
///
/// Only `category` narrows the result. `location` and the date bounds are
/// parsed and carried so callers can echo them, but they do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub category: Option<String>,
    pub location: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

impl EventFilter {
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self.category.as_deref() {
            Some(category) => event.category == category || event.has_tag(category),
            None => true,
        }
    }

    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        if self.location.is_some() || self.date_from.is_some() || self.date_to.is_some() {
            debug!(filter = ?self, "Location and date criteria are accepted but not applied");
        }

        events.iter().filter(|event| self.matches(event)).collect()
    }
}

/// Lenient date parsing for filter bounds: RFC 3339 instants or plain
/// `YYYY-MM-DD` dates (midnight UTC). Anything else is treated as absent.
pub fn parse_date_bound(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        Err(_) => {
            debug!(value = raw, "Ignoring unparseable date bound");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::fixtures::event;

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_no_criteria_returns_everything_in_order() {
        let events = vec![event("1", "music", &[]), event("2", "tech", &[])];
        let filtered = EventFilter::default().apply(&events);
        assert_eq!(ids(&filtered), ["1", "2"]);
    }

    #[test]
    fn test_category_matches_primary_category() {
        let events = vec![event("1", "music", &[]), event("2", "tech", &[])];
        let filtered = EventFilter::with_category("tech").apply(&events);
        assert_eq!(ids(&filtered), ["2"]);
    }

    #[test]
    fn test_category_matches_tag() {
        let events = vec![
            event("1", "music", &["festival"]),
            event("2", "music", &["jazz"]),
        ];
        let filtered = EventFilter::with_category("festival").apply(&events);
        assert_eq!(ids(&filtered), ["1"]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let events = vec![event("1", "music", &[])];
        assert!(EventFilter::with_category("Music").apply(&events).is_empty());
    }

    #[test]
    fn test_location_and_dates_do_not_narrow() {
        let events = vec![event("1", "music", &[]), event("2", "tech", &[])];
        let filter = EventFilter {
            category: None,
            location: Some("Nowhere".to_string()),
            date_from: parse_date_bound(Some("2030-01-01")),
            date_to: parse_date_bound(Some("2030-01-02")),
        };
        assert_eq!(filter.apply(&events).len(), 2);
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let events = vec![event("1", "music", &[]), event("2", "tech", &[])];
        let _ = EventFilter::with_category("tech").apply(&events);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "1");
    }

    #[test]
    fn test_parse_date_bound_formats() {
        assert!(parse_date_bound(Some("2026-06-15T12:00:00Z")).is_some());
        assert!(parse_date_bound(Some("2026-06-15")).is_some());
        assert!(parse_date_bound(Some("next tuesday")).is_none());
        assert!(parse_date_bound(Some("")).is_none());
        assert!(parse_date_bound(None).is_none());
    }
}
