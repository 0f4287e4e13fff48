//! Guest RSVP records
//!
//! RSVPs are append-only: a guest submits exactly once and the planner
//! reads the roster without any edit or delete path.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Largest party size a single RSVP can claim
pub const MAX_PARTY_SIZE: u32 = 5;

/// Attendance answer on the RSVP form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    #[default]
    Yes,
    No,
    Maybe,
}

impl Attendance {
    /// Cycle to the next answer (form carousel order)
    pub fn next(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Maybe,
            Self::Maybe => Self::Yes,
        }
    }

    /// Cycle to the previous answer
    pub fn prev(self) -> Self {
        match self {
            Self::Yes => Self::Maybe,
            Self::No => Self::Yes,
            Self::Maybe => Self::No,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Maybe => "maybe",
        }
    }
}

impl std::fmt::Display for Attendance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One guest response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    /// Unique identifier, generated at submission
    pub id: String,

    /// Guest name (required)
    pub name: String,

    /// Contact email (required)
    pub email: String,

    /// Attendance answer
    pub attending: Attendance,

    /// Party size; meaningful only when attending is Yes
    #[serde(default = "default_party_size")]
    pub guests_count: u32,

    /// Optional dietary notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,

    /// Optional song request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_request: Option<String>,
}

fn default_party_size() -> u32 {
    1
}

impl Rsvp {
    /// Create a response with a fresh ID
    ///
    /// The party size is clamped to `1..=MAX_PARTY_SIZE` when attending,
    /// and pinned to 1 otherwise (the count carries no meaning for a
    /// declined or undecided response).
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        attending: Attendance,
        guests_count: u32,
    ) -> Self {
        let name = name.into();
        let email = email.into();
        debug!(%name, %attending, guests_count, "Rsvp::new: called");

        let guests_count = match attending {
            Attendance::Yes => guests_count.clamp(1, MAX_PARTY_SIZE),
            _ => 1,
        };

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            attending,
            guests_count,
            dietary_restrictions: None,
            song_request: None,
        }
    }

    /// Party size when the guest is attending; None otherwise
    ///
    /// Roster displays show a count only for accepted responses.
    pub fn confirmed_party_size(&self) -> Option<u32> {
        match self.attending {
            Attendance::Yes => Some(self.guests_count),
            _ => None,
        }
    }

    /// Builder-style dietary notes; blanks become None
    pub fn with_dietary(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.dietary_restrictions = if notes.trim().is_empty() { None } else { Some(notes) };
        self
    }

    /// Builder-style song request; blanks become None
    pub fn with_song(mut self, song: impl Into<String>) -> Self {
        let song = song.into();
        self.song_request = if song.trim().is_empty() { None } else { Some(song) };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_size_clamped_when_attending() {
        let rsvp = Rsvp::new("A", "a@example.com", Attendance::Yes, 12);
        assert_eq!(rsvp.guests_count, MAX_PARTY_SIZE);

        let rsvp = Rsvp::new("A", "a@example.com", Attendance::Yes, 0);
        assert_eq!(rsvp.guests_count, 1);
    }

    #[test]
    fn test_party_size_pinned_when_not_attending() {
        let rsvp = Rsvp::new("B", "b@example.com", Attendance::No, 4);
        assert_eq!(rsvp.guests_count, 1);

        let rsvp = Rsvp::new("B", "b@example.com", Attendance::Maybe, 4);
        assert_eq!(rsvp.guests_count, 1);
    }

    #[test]
    fn test_confirmed_party_size_only_for_accepted() {
        let yes = Rsvp::new("A", "a@example.com", Attendance::Yes, 3);
        assert_eq!(yes.confirmed_party_size(), Some(3));

        let no = Rsvp::new("B", "b@example.com", Attendance::No, 3);
        assert_eq!(no.confirmed_party_size(), None);

        let maybe = Rsvp::new("C", "c@example.com", Attendance::Maybe, 3);
        assert_eq!(maybe.confirmed_party_size(), None);
    }

    #[test]
    fn test_attendance_serializes_lowercase() {
        let rsvp = Rsvp::new("C", "c@example.com", Attendance::Maybe, 1);
        let json = serde_json::to_string(&rsvp).unwrap();
        assert!(json.contains("\"attending\":\"maybe\""));
        assert!(json.contains("\"guestsCount\""));
    }

    #[test]
    fn test_serde_round_trip() {
        let rsvp = Rsvp::new("Jane Doe", "jane@example.com", Attendance::Yes, 2)
            .with_dietary("vegetarian")
            .with_song("September - EWF");

        let json = serde_json::to_string(&rsvp).unwrap();
        let back: Rsvp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rsvp);
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let rsvp = Rsvp::new("D", "d@example.com", Attendance::Yes, 1)
            .with_dietary("  ")
            .with_song("");
        assert!(rsvp.dietary_restrictions.is_none());
        assert!(rsvp.song_request.is_none());
    }

    #[test]
    fn test_attendance_cycle_round_trips() {
        for a in [Attendance::Yes, Attendance::No, Attendance::Maybe] {
            assert_eq!(a.next().prev(), a);
        }
    }
}
