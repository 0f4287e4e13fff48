//! Integration tests for wedplan
//!
//! These tests verify end-to-end behavior across the store, the domain
//! records, and the content assistant.

use std::sync::Arc;

use slotstore::SlotStore;
use tempfile::TempDir;
use wedplan::assistant::{Assistant, NOTE_FALLBACK, VOWS_FALLBACK};
use wedplan::domain::{Attendance, EventDetails, Rsvp, Task, TaskCategory};
use wedplan::store::PlannerStore;

fn open_store(dir: &TempDir) -> PlannerStore {
    let slots = SlotStore::open(dir.path()).expect("Failed to open slot store");
    PlannerStore::open(slots)
}

// =============================================================================
// First-run defaults
// =============================================================================

#[test]
fn test_fresh_store_has_default_event_details() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&dir);

    let details = store.details();
    assert_eq!(details.date, "2025-06-21");
    assert_eq!(details.time, "16:00");
    assert_eq!(details.location_name, "The Grand Garden Estate");
    assert_eq!(details.address, "123 Rose Lane, Beverly Hills, CA");

    assert!(store.tasks().is_empty());
    assert!(store.rsvps().is_empty());
    let summary = store.rsvp_summary();
    assert_eq!(summary.responses, 0);
    assert_eq!(summary.confirmed_guests, 0);
}

// =============================================================================
// Guest scenario: Jane Doe RSVPs
// =============================================================================

#[test]
fn test_guest_rsvp_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let mut store = open_store(&dir);
        let rsvp = Rsvp::new("Jane Doe", "jane@example.com", Attendance::Yes, 2)
            .with_dietary("vegetarian")
            .with_song("At Last");
        store.add_rsvp(rsvp).expect("Failed to record RSVP");

        let summary = store.rsvp_summary();
        assert_eq!(summary.responses, 1);
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.confirmed_guests, 2);
    }

    // Restart: the response survives
    let store = open_store(&dir);
    assert_eq!(store.rsvps().len(), 1);
    let rsvp = &store.rsvps()[0];
    assert_eq!(rsvp.name, "Jane Doe");
    assert_eq!(rsvp.email, "jane@example.com");
    assert_eq!(rsvp.attending, Attendance::Yes);
    assert_eq!(rsvp.guests_count, 2);
    assert_eq!(rsvp.dietary_restrictions.as_deref(), Some("vegetarian"));
    assert_eq!(rsvp.song_request.as_deref(), Some("At Last"));
}

#[test]
fn test_party_size_is_clamped_and_ignored_when_declining() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut store = open_store(&dir);

    // Over the cap: clamped to the maximum
    store
        .add_rsvp(Rsvp::new("Big Family", "family@example.com", Attendance::Yes, 12))
        .expect("Failed to record RSVP");
    assert_eq!(store.rsvps()[0].guests_count, 5);

    // Declining: party size pinned to 1 regardless of input
    store
        .add_rsvp(Rsvp::new("Solo", "solo@example.com", Attendance::No, 4))
        .expect("Failed to record RSVP");
    assert_eq!(store.rsvps()[1].guests_count, 1);

    let summary = store.rsvp_summary();
    assert_eq!(summary.confirmed_guests, 5);
}

// =============================================================================
// Planner scenario: tasks and configuration
// =============================================================================

#[test]
fn test_planner_task_lifecycle_persists() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let venue_id;
    {
        let mut store = open_store(&dir);
        let venue = Task::new("Book venue").with_category(TaskCategory::Planning);
        venue_id = venue.id.clone();
        store.add_task(venue).expect("Failed to add task");
        let music = Task::new("Choose music").with_category(TaskCategory::Reception);
        let music_id = music.id.clone();
        store.add_task(music).expect("Failed to add task");

        assert!(store.toggle_task(&venue_id).expect("Failed to toggle"));
        assert!(store.delete_task(&music_id).expect("Failed to delete"));
    }

    let store = open_store(&dir);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, venue_id);
    assert!(store.tasks()[0].is_completed);
}

#[test]
fn test_details_replace_is_write_through() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let mut store = open_store(&dir);
        let mut details = store.details().clone();
        details.location_name = "Lakeside Pavilion".to_string();
        details.our_story = "We met at a cooking class.".to_string();
        store.update_details(details).expect("Failed to update details");
    }

    let store = open_store(&dir);
    assert_eq!(store.details().location_name, "Lakeside Pavilion");
    assert_eq!(store.details().our_story, "We met at a cooking class.");
    // Untouched fields keep their values
    assert_eq!(store.details().date, "2025-06-21");
}

#[test]
fn test_corrupt_slot_degrades_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let mut store = open_store(&dir);
        store.add_task(Task::new("will be lost")).expect("Failed to add task");
    }

    std::fs::write(dir.path().join("tasks.json"), "{ not json")
        .expect("Failed to corrupt slot");

    let store = open_store(&dir);
    assert!(store.tasks().is_empty());
    // Other slots are unaffected
    assert_eq!(store.details(), &EventDetails::default());
}

// =============================================================================
// Roster JSON output
// =============================================================================

#[test]
fn test_roster_json_payload_shape() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut store = open_store(&dir);

    store
        .add_rsvp(
            Rsvp::new("Jane Doe", "jane@example.com", Attendance::Yes, 2).with_dietary("vegetarian"),
        )
        .expect("Failed to record RSVP");
    store
        .add_rsvp(Rsvp::new("Solo", "solo@example.com", Attendance::No, 1))
        .expect("Failed to record RSVP");

    // The payload `wp rsvps --format json` prints
    let payload = serde_json::json!({
        "summary": store.rsvp_summary(),
        "responses": store.rsvps(),
    });

    let summary = &payload["summary"];
    assert_eq!(summary["accepted"], 1);
    assert_eq!(summary["declined"], 1);
    assert_eq!(summary["maybe"], 0);
    assert_eq!(summary["responses"], 2);
    assert_eq!(summary["confirmedGuests"], 2);

    let responses = payload["responses"].as_array().expect("responses is an array");
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["name"], "Jane Doe");
    assert_eq!(responses[0]["attending"], "yes");
    assert_eq!(responses[0]["guestsCount"], 2);
    assert_eq!(responses[0]["dietaryRestrictions"], "vegetarian");
    assert_eq!(responses[1]["attending"], "no");
}

// =============================================================================
// Assistant fallbacks
// =============================================================================

#[tokio::test]
async fn test_assistant_without_client_uses_fallbacks() {
    let assistant = Assistant::new(None);

    assert!(assistant.generate_tasks("6 months").await.is_empty());
    assert_eq!(
        assistant.generate_vows("Romantic & Emotional", "our first dance", "Sam").await,
        VOWS_FALLBACK
    );
    assert_eq!(
        assistant.generate_thank_you_note("Uncle Joe", "a toaster").await,
        NOTE_FALLBACK
    );
}

#[tokio::test]
async fn test_assistant_is_shareable_across_tasks() {
    // The runner hands the assistant to background tasks behind an Arc
    let assistant = Arc::new(Assistant::new(None));
    let cloned = Arc::clone(&assistant);

    let handle = tokio::spawn(async move { cloned.generate_tasks("1 week").await });
    let tasks = handle.await.expect("Generation task panicked");
    assert!(tasks.is_empty());
}
