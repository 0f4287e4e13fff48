//! PlannerStore - the shared application state and its persistence
//!
//! Owns the three persisted slots (tasks, rsvps, details) as in-memory
//! values backed by a SlotStore. The root controller constructs one
//! instance and the workflows reach it only through these methods; no
//! component holds an independent copy of the data.
//!
//! Every mutation funnels through `commit`, a full re-encode write-through
//! of the affected slot. Swapping in batched or debounced persistence
//! would touch only that one method.

use eyre::Result;
use serde::Serialize;
use slotstore::SlotStore;
use tracing::{debug, info};

use crate::domain::{Attendance, EventDetails, Rsvp, Task};

/// Slot names on disk
const SLOT_TASKS: &str = "tasks";
const SLOT_RSVPS: &str = "rsvps";
const SLOT_DETAILS: &str = "details";

/// Read-only aggregation over the response roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSummary {
    /// Responses with attending = yes
    pub accepted: usize,
    /// Responses with attending = no
    pub declined: usize,
    /// Responses with attending = maybe
    pub maybe: usize,
    /// Total responses received
    pub responses: usize,
    /// Sum of party sizes among accepted responses
    pub confirmed_guests: u32,
}

/// Shared store over the three persisted record slots
pub struct PlannerStore {
    slots: SlotStore,
    tasks: Vec<Task>,
    rsvps: Vec<Rsvp>,
    details: EventDetails,
}

impl PlannerStore {
    /// Load all three slots, defaulting anything missing or undecodable
    pub fn open(slots: SlotStore) -> Self {
        debug!(dir = ?slots.dir(), "PlannerStore::open: called");
        let tasks: Vec<Task> = slots.load(SLOT_TASKS);
        let rsvps: Vec<Rsvp> = slots.load(SLOT_RSVPS);
        let details: EventDetails = slots.load(SLOT_DETAILS);
        info!(
            tasks = tasks.len(),
            rsvps = rsvps.len(),
            "PlannerStore::open: slots loaded"
        );
        Self {
            slots,
            tasks,
            rsvps,
            details,
        }
    }

    // === Read access ===

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn rsvps(&self) -> &[Rsvp] {
        &self.rsvps
    }

    pub fn details(&self) -> &EventDetails {
        &self.details
    }

    /// Aggregate the roster: accept/decline counts and confirmed guests
    pub fn rsvp_summary(&self) -> RsvpSummary {
        let mut summary = RsvpSummary::default();
        for rsvp in &self.rsvps {
            summary.responses += 1;
            match rsvp.attending {
                Attendance::Yes => {
                    summary.accepted += 1;
                    summary.confirmed_guests += rsvp.guests_count;
                }
                Attendance::No => summary.declined += 1,
                Attendance::Maybe => summary.maybe += 1,
            }
        }
        summary
    }

    // === Task mutations ===

    /// Create a task at the head of the list
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        debug!(id = %task.id, title = %task.title, "add_task: called");
        self.tasks.insert(0, task);
        self.commit_tasks()
    }

    /// Flip a task's completion flag; returns false if the id is unknown
    pub fn toggle_task(&mut self, id: &str) -> Result<bool> {
        debug!(%id, "toggle_task: called");
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "toggle_task: no such task");
            return Ok(false);
        };
        task.is_completed = !task.is_completed;
        self.commit_tasks()?;
        Ok(true)
    }

    /// Remove a task by id; returns false if the id is unknown
    pub fn delete_task(&mut self, id: &str) -> Result<bool> {
        debug!(%id, "delete_task: called");
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.commit_tasks()?;
        Ok(true)
    }

    /// Insert a generated batch at the head, preserving batch order
    pub fn prepend_tasks(&mut self, batch: Vec<Task>) -> Result<()> {
        debug!(count = batch.len(), "prepend_tasks: called");
        if batch.is_empty() {
            return Ok(());
        }
        self.tasks.splice(0..0, batch);
        self.commit_tasks()
    }

    // === RSVP mutations ===

    /// Append one guest response
    ///
    /// This is the only write path for responses; there is no edit or
    /// delete. The roster is read-only from the planner's side.
    pub fn add_rsvp(&mut self, rsvp: Rsvp) -> Result<()> {
        info!(name = %rsvp.name, attending = %rsvp.attending, "add_rsvp: recording response");
        self.rsvps.push(rsvp);
        self.slots.save(SLOT_RSVPS, &self.rsvps)?;
        Ok(())
    }

    // === Details mutations ===

    /// Replace the whole configuration record and write it through
    ///
    /// Called on every edit keystroke; there is no separate save action.
    pub fn update_details(&mut self, details: EventDetails) -> Result<()> {
        debug!("update_details: called");
        self.details = details;
        self.slots.save(SLOT_DETAILS, &self.details)?;
        Ok(())
    }

    fn commit_tasks(&mut self) -> Result<()> {
        self.slots.save(SLOT_TASKS, &self.tasks)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskCategory;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> PlannerStore {
        PlannerStore::open(SlotStore::open(dir.path()).unwrap())
    }

    #[test]
    fn test_add_toggle_delete_net_effect() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let a = Task::new("a");
        let b = Task::new("b");
        let a_id = a.id.clone();
        let b_id = b.id.clone();

        store.add_task(a).unwrap();
        store.add_task(b).unwrap();
        // Most recently added first
        assert_eq!(store.tasks()[0].id, b_id);

        assert!(store.toggle_task(&a_id).unwrap());
        assert!(store.tasks().iter().find(|t| t.id == a_id).unwrap().is_completed);

        // Toggling twice returns the original state
        assert!(store.toggle_task(&a_id).unwrap());
        assert!(!store.tasks().iter().find(|t| t.id == a_id).unwrap().is_completed);

        assert!(store.delete_task(&b_id).unwrap());
        assert!(!store.delete_task(&b_id).unwrap());
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, a_id);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert!(!store.toggle_task("nope").unwrap());
    }

    #[test]
    fn test_prepend_batch_lands_at_head_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.add_task(Task::new("existing")).unwrap();
        let batch = vec![Task::new("first"), Task::new("second")];
        store.prepend_tasks(batch).unwrap();

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "existing"]);
    }

    #[test]
    fn test_rsvp_summary_aggregation() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store
            .add_rsvp(Rsvp::new("A", "a@example.com", Attendance::Yes, 2))
            .unwrap();
        store
            .add_rsvp(Rsvp::new("B", "b@example.com", Attendance::Yes, 1))
            .unwrap();
        store
            .add_rsvp(Rsvp::new("C", "c@example.com", Attendance::No, 1))
            .unwrap();
        store
            .add_rsvp(Rsvp::new("D", "d@example.com", Attendance::Maybe, 1))
            .unwrap();

        let summary = store.rsvp_summary();
        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.declined, 1);
        assert_eq!(summary.maybe, 1);
        assert_eq!(summary.responses, 4);
        assert_eq!(summary.confirmed_guests, 3);
    }

    #[test]
    fn test_mutations_persist_across_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let mut store = open_store(&dir);
            store
                .add_task(Task::new("Book venue").with_category(TaskCategory::Ceremony))
                .unwrap();
            store
                .add_rsvp(Rsvp::new("Jane Doe", "jane@example.com", Attendance::Yes, 2))
                .unwrap();
            let mut details = store.details().clone();
            details.our_story = "Met hiking.".to_string();
            store.update_details(details).unwrap();
        }

        let store = open_store(&dir);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].category, TaskCategory::Ceremony);
        assert_eq!(store.rsvps().len(), 1);
        assert_eq!(store.rsvps()[0].name, "Jane Doe");
        assert_eq!(store.details().our_story, "Met hiking.");
    }

    #[test]
    fn test_first_open_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert!(store.tasks().is_empty());
        assert!(store.rsvps().is_empty());
        assert_eq!(store.details(), &EventDetails::default());
    }
}
