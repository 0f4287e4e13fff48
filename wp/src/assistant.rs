//! AI planning assistant
//!
//! The three content operations the planner dashboard offers: task
//! suggestions, vow drafting, thank-you notes. Every provider failure is
//! absorbed here - tasks degrade to an empty batch, prose degrades to a
//! fixed fallback string - so callers never see an error.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::domain::{Task, TaskCategory};
use crate::llm::{self, LlmClient};

/// How many task suggestions a generation request asks for
const SUGGESTION_COUNT: usize = 5;

/// Fallback shown when vow generation fails
pub const VOWS_FALLBACK: &str = "An error occurred while generating vows.";

/// Fallback shown when thank-you note generation fails
pub const NOTE_FALLBACK: &str = "Error generating note.";

/// One suggestion as the provider returns it, before normalization
#[derive(Debug, Deserialize)]
struct TaskSuggestion {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// Content generation facade over an optional LLM client
///
/// Holds no client when the API key is unavailable; every operation then
/// resolves immediately to its fallback instead of crashing.
pub struct Assistant {
    client: Option<Arc<dyn LlmClient>>,
}

impl Assistant {
    /// Wrap an existing client (tests use this with the mock)
    pub fn new(client: Option<Arc<dyn LlmClient>>) -> Self {
        debug!(has_client = client.is_some(), "Assistant::new: called");
        Self { client }
    }

    /// Build from config, degrading to fallback-only mode on any failure
    pub fn from_config(config: &LlmConfig) -> Self {
        match llm::create_client(config) {
            Ok(client) => Self::new(Some(client)),
            Err(e) => {
                warn!(error = %e, "Assistant::from_config: no client available, generation will use fallbacks");
                Self::new(None)
            }
        }
    }

    /// Whether a real client is wired up
    pub fn is_live(&self) -> bool {
        self.client.is_some()
    }

    /// Generate a batch of task suggestions for a planning timeframe
    ///
    /// Returns an empty list on any failure: network, malformed output,
    /// missing client. Categories outside the fixed enumeration are
    /// coerced to the default here, at the provider boundary.
    pub async fn generate_tasks(&self, timeframe: &str) -> Vec<Task> {
        debug!(%timeframe, "generate_tasks: called");
        let Some(client) = &self.client else {
            warn!("generate_tasks: no client, returning empty batch");
            return Vec::new();
        };

        let prompt = format!(
            "Generate a list of {} essential wedding planning tasks for a couple who are {} away \
             from their wedding. Focus on practical, high-priority items.",
            SUGGESTION_COUNT, timeframe
        );

        let value = match client.generate_json(&prompt, task_schema()).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "generate_tasks: provider call failed");
                return Vec::new();
            }
        };

        let suggestions: Vec<TaskSuggestion> = match serde_json::from_value(value) {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!(error = %e, "generate_tasks: malformed suggestion payload");
                return Vec::new();
            }
        };

        debug!(count = suggestions.len(), "generate_tasks: parsed suggestions");
        suggestions
            .into_iter()
            .filter(|s| !s.title.trim().is_empty())
            .map(|s| {
                let category = s
                    .category
                    .as_deref()
                    .map(TaskCategory::parse_lenient)
                    .unwrap_or_default();
                Task::new(s.title)
                    .with_category(category)
                    .with_description(s.description.unwrap_or_default())
            })
            .collect()
    }

    /// Draft wedding vows; falls back to a fixed apology string
    pub async fn generate_vows(&self, tone: &str, memories: &str, partner_name: &str) -> String {
        debug!(%tone, %partner_name, "generate_vows: called");
        let Some(client) = &self.client else {
            warn!("generate_vows: no client, returning fallback");
            return VOWS_FALLBACK.to_string();
        };

        let prompt = format!(
            "Write wedding vows for my partner {}.\nTone: {}.\nKey memories/traits to include: {}.\n\
             Keep it under 200 words and make it emotional but structured.",
            partner_name, tone, memories
        );

        match client.generate_text(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "generate_vows: provider call failed");
                VOWS_FALLBACK.to_string()
            }
        }
    }

    /// Draft a thank-you note; falls back to a fixed apology string
    pub async fn generate_thank_you_note(&self, guest_name: &str, gift: &str) -> String {
        debug!(%guest_name, "generate_thank_you_note: called");
        let Some(client) = &self.client else {
            warn!("generate_thank_you_note: no client, returning fallback");
            return NOTE_FALLBACK.to_string();
        };

        let prompt = format!(
            "Write a short, sincere thank you note for a wedding guest named {} who gave a gift of: {}.",
            guest_name, gift
        );

        match client.generate_text(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "generate_thank_you_note: provider call failed");
                NOTE_FALLBACK.to_string()
            }
        }
    }
}

/// Response schema constraining suggestions to the category enumeration
fn task_schema() -> Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "Short title of the task" },
                "description": { "type": "STRING", "description": "Brief explanation of what needs to be done" },
                "category": {
                    "type": "STRING",
                    "enum": ["Planning", "Ceremony", "Reception", "Other"],
                },
            },
            "required": ["title", "category"],
        },
    })
}
