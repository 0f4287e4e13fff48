//! TUI Runner - main loop that owns terminal and store
//!
//! The TuiRunner is responsible for:
//! - Initializing and restoring the terminal
//! - Draining pending actions from AppState and applying them to the store
//! - Running content generation on a background task
//! - Rendering at ~30 FPS

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use eyre::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::assistant::Assistant;
use crate::domain::Task;
use crate::store::PlannerStore;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::{GenerateRequest, PendingAction};
use super::views;

/// Result of a background generation task
#[derive(Debug)]
enum GenerationOutcome {
    Tasks(Vec<Task>),
    Vows(String),
    ThankYou(String),
}

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Persisted planner data
    store: PlannerStore,
    /// Content generation, shared with background tasks
    assistant: Arc<Assistant>,
    /// Event handler
    event_handler: EventHandler,
    /// Receiver for the in-flight generation, if any
    gen_rx: Option<mpsc::Receiver<GenerationOutcome>>,
    /// Handle of the in-flight generation task
    gen_task: Option<JoinHandle<()>>,
}

impl TuiRunner {
    /// Create a new TuiRunner over an opened store
    pub fn new(terminal: Tui, store: PlannerStore, assistant: Assistant, password: String) -> Self {
        debug!("TuiRunner::new: called");
        let mut runner = Self {
            app: App::new(password),
            terminal,
            store,
            assistant: Arc::new(assistant),
            event_handler: EventHandler::new(Duration::from_millis(33)), // ~30 FPS
            gen_rx: None,
            gen_task: None,
        };
        runner.refresh_snapshot();
        runner
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        debug!("TuiRunner::run: entering main loop");
        loop {
            // Draw the UI
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            // Handle events
            match self.event_handler.next().await? {
                Event::Tick => {
                    self.handle_tick();
                }
                Event::Key(key_event) => {
                    if self.app.handle_key(key_event) {
                        break;
                    }
                    // Apply immediately so the next draw reflects the keystroke
                    self.drain_pending();
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "TuiRunner::run: terminal resized");
                }
            }

            if self.app.state().should_quit {
                break;
            }
        }

        // Abort any generation still running; its result has nowhere to go
        if let Some(task) = self.gen_task.take() {
            task.abort();
        }

        Ok(())
    }

    /// Handle tick event - periodic updates
    fn handle_tick(&mut self) {
        self.drain_pending();
        self.poll_generation();
    }

    /// Apply queued actions in the order the user triggered them
    fn drain_pending(&mut self) {
        while let Some(action) = self.app.state_mut().pending.pop_front() {
            debug!(?action, "TuiRunner::drain_pending: applying");
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: PendingAction) {
        let result = match action {
            PendingAction::AddTask(title) => self.store.add_task(Task::new(title)).map(|_| true),
            PendingAction::ToggleTask(id) => self.store.toggle_task(&id),
            PendingAction::DeleteTask(id) => self.store.delete_task(&id),
            PendingAction::SubmitRsvp(rsvp) => self.store.add_rsvp(rsvp).map(|_| true),
            PendingAction::ReplaceDetails(details) => {
                self.store.update_details(details).map(|_| true)
            }
            PendingAction::Generate(request) => {
                self.spawn_generation(request);
                Ok(true)
            }
            PendingAction::CopyToClipboard(text) => {
                self.copy_to_clipboard(&text);
                Ok(true)
            }
        };

        if let Err(e) = result {
            warn!(error = %e, "apply_action: store operation failed");
            self.app.state_mut().set_error(format!("Save failed: {}", e));
        }

        self.refresh_snapshot();
    }

    /// Run one generation request off the event loop
    ///
    /// The App refuses overlapping requests, so at most one task and one
    /// channel exist at a time.
    fn spawn_generation(&mut self, request: GenerateRequest) {
        debug!(?request, "spawn_generation: called");
        let assistant = Arc::clone(&self.assistant);
        let (tx, rx) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            let outcome = match request {
                GenerateRequest::Tasks { timeframe } => {
                    GenerationOutcome::Tasks(assistant.generate_tasks(&timeframe).await)
                }
                GenerateRequest::Vows {
                    tone,
                    memories,
                    partner,
                } => GenerationOutcome::Vows(assistant.generate_vows(&tone, &memories, &partner).await),
                GenerateRequest::ThankYou { guest, gift } => GenerationOutcome::ThankYou(
                    assistant.generate_thank_you_note(&guest, &gift).await,
                ),
            };
            if tx.send(outcome).await.is_err() {
                debug!("spawn_generation: receiver dropped, discarding outcome");
            }
        });

        self.gen_rx = Some(rx);
        self.gen_task = Some(task);
    }

    /// Pick up a finished generation, if one landed since the last tick
    fn poll_generation(&mut self) {
        let Some(rx) = &mut self.gen_rx else {
            return;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::error::TryRecvError::Empty) => return,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                warn!("poll_generation: generation task vanished without a result");
                self.gen_rx = None;
                self.gen_task = None;
                self.app.state_mut().generating = false;
                self.app.state_mut().set_error("Generation failed.");
                return;
            }
        };

        debug!("poll_generation: outcome received");
        self.gen_rx = None;
        self.gen_task = None;
        self.app.state_mut().generating = false;

        match outcome {
            GenerationOutcome::Tasks(tasks) => {
                if tasks.is_empty() {
                    self.app
                        .state_mut()
                        .set_error("No suggestions were generated. Try again.");
                } else {
                    let count = tasks.len();
                    if let Err(e) = self.store.prepend_tasks(tasks) {
                        warn!(error = %e, "poll_generation: failed to save suggestions");
                        self.app.state_mut().set_error(format!("Save failed: {}", e));
                    } else {
                        self.app
                            .state_mut()
                            .set_notice(format!("Added {} suggested tasks.", count));
                    }
                    self.refresh_snapshot();
                }
            }
            GenerationOutcome::Vows(text) => {
                self.app.state_mut().generated_vow = Some(text);
            }
            GenerationOutcome::ThankYou(text) => {
                self.app.state_mut().generated_note = Some(text);
            }
        }
    }

    /// Copy text to the system clipboard via OSC 52
    ///
    /// Works over SSH and in most modern terminal emulators; silently does
    /// nothing in terminals that ignore the sequence.
    fn copy_to_clipboard(&mut self, text: &str) {
        debug!(len = text.len(), "copy_to_clipboard: called");
        let encoded = BASE64.encode(text.as_bytes());
        let mut stdout = std::io::stdout();
        if write!(stdout, "\x1b]52;c;{}\x07", encoded)
            .and_then(|_| stdout.flush())
            .is_err()
        {
            warn!("copy_to_clipboard: failed to write escape sequence");
            self.app.state_mut().set_error("Copy failed.");
            return;
        }
        self.app.state_mut().set_notice("Copied to clipboard.");
    }

    /// Mirror the store into the rendering snapshot
    fn refresh_snapshot(&mut self) {
        let tasks = self.store.tasks().to_vec();
        let rsvps = self.store.rsvps().to_vec();
        let summary = self.store.rsvp_summary();
        let details = self.store.details().clone();

        let state = self.app.state_mut();
        state.tasks = tasks;
        state.rsvps = rsvps;
        state.summary = summary;
        // Safe mid-edit: pending replaces are drained before this runs, so
        // the store already matches what the configuration tab shows
        state.details = details;
        state.clamp_selection();
    }
}
