//! Task records for the planner checklist

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Fixed category enumeration for tasks
///
/// Externally generated data can carry anything in its category field, so
/// the enum has a lenient parser that coerces unknown values to the
/// default instead of rejecting the record. That normalization happens
/// once at the provider boundary, not in UI code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskCategory {
    #[default]
    Planning,
    Ceremony,
    Reception,
    Other,
}

impl TaskCategory {
    /// All categories, in display order
    pub const ALL: [TaskCategory; 4] = [
        TaskCategory::Planning,
        TaskCategory::Ceremony,
        TaskCategory::Reception,
        TaskCategory::Other,
    ];

    /// Parse a category string, coercing anything unknown to Planning
    pub fn parse_lenient(s: &str) -> Self {
        debug!(%s, "TaskCategory::parse_lenient: called");
        match s.trim().to_lowercase().as_str() {
            "planning" => Self::Planning,
            "ceremony" => Self::Ceremony,
            "reception" => Self::Reception,
            "other" => Self::Other,
            _ => {
                debug!(%s, "TaskCategory::parse_lenient: unknown category, defaulting to Planning");
                Self::default()
            }
        }
    }

    /// Display name (matches the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Ceremony => "Ceremony",
            Self::Reception => "Reception",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single checklist task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, generated at creation
    pub id: String,

    /// Short title (required)
    pub title: String,

    /// Optional longer explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category from the fixed enumeration
    #[serde(default)]
    pub category: TaskCategory,

    /// Completion flag, toggled by the planner
    #[serde(default)]
    pub is_completed: bool,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Create a new incomplete task with a generated ID
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        debug!(%title, "Task::new: called");
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description: None,
            category: TaskCategory::default(),
            is_completed: false,
            due_date: None,
        }
    }

    /// Builder-style category override
    pub fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }

    /// Builder-style description override; empty strings become None
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Book venue");
        assert_eq!(task.title, "Book venue");
        assert_eq!(task.category, TaskCategory::Planning);
        assert!(!task.is_completed);
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new("a");
        let b = Task::new("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_parse_lenient_known_categories() {
        assert_eq!(TaskCategory::parse_lenient("Planning"), TaskCategory::Planning);
        assert_eq!(TaskCategory::parse_lenient("ceremony"), TaskCategory::Ceremony);
        assert_eq!(TaskCategory::parse_lenient("RECEPTION"), TaskCategory::Reception);
        assert_eq!(TaskCategory::parse_lenient(" other "), TaskCategory::Other);
    }

    #[test]
    fn test_parse_lenient_coerces_unknown_to_planning() {
        assert_eq!(TaskCategory::parse_lenient("Catering"), TaskCategory::Planning);
        assert_eq!(TaskCategory::parse_lenient(""), TaskCategory::Planning);
    }

    #[test]
    fn test_serde_round_trip_camel_case() {
        let task = Task::new("Order flowers")
            .with_category(TaskCategory::Reception)
            .with_description("Peonies if in season");

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"isCompleted\""));
        assert!(json.contains("\"Reception\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_with_description_drops_blank() {
        let task = Task::new("x").with_description("   ");
        assert!(task.description.is_none());
    }
}
