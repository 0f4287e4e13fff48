//! The singleton event configuration record

use serde::{Deserialize, Serialize};

/// Event configuration edited by the planner and shown to guests
///
/// A single record, initialized with defaults on first load and fully
/// replaceable field-by-field. Never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDetails {
    /// Event date (ISO `YYYY-MM-DD`)
    pub date: String,

    /// Start time (`HH:MM`)
    pub time: String,

    /// Venue name
    pub location_name: String,

    /// Full street address
    pub address: String,

    /// Free-text narrative shown on the details screen
    pub our_story: String,

    /// Gift registry link
    pub registry_url: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            date: "2025-06-21".to_string(),
            time: "16:00".to_string(),
            location_name: "The Grand Garden Estate".to_string(),
            address: "123 Rose Lane, Beverly Hills, CA".to_string(),
            our_story: String::new(),
            registry_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let details = EventDetails::default();
        assert_eq!(details.date, "2025-06-21");
        assert_eq!(details.time, "16:00");
        assert_eq!(details.location_name, "The Grand Garden Estate");
        assert!(details.our_story.is_empty());
        assert!(details.registry_url.is_empty());
    }

    #[test]
    fn test_serde_round_trip_camel_case() {
        let mut details = EventDetails::default();
        details.our_story = "We met at a coffee shop.".to_string();
        details.registry_url = "https://example.com/registry".to_string();

        let json = serde_json::to_string(&details).unwrap();
        assert!(json.contains("\"locationName\""));
        assert!(json.contains("\"ourStory\""));
        assert!(json.contains("\"registryUrl\""));

        let back: EventDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(back, details);
    }

    #[test]
    fn test_partial_decode_fills_defaults() {
        let back: EventDetails = serde_json::from_str(r#"{"date":"2026-01-01"}"#).unwrap();
        assert_eq!(back.date, "2026-01-01");
        assert_eq!(back.time, "16:00");
    }
}
