//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module -
//! and it never touches the store directly: mutations are queued as
//! pending actions for the runner.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use super::state::{
    AdminTab, AiField, AppState, GenerateRequest, PendingAction, RsvpField, TIMEFRAMES, View,
};

/// TUI application
#[derive(Debug)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance gated by the planner password
    pub fn new(planner_password: impl Into<String>) -> Self {
        debug!("App::new: called");
        Self {
            state: AppState::new(planner_password),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        trace!("App::state: called");
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        trace!("App::state_mut: called");
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_key: called");
        // Clear any transient message on key press
        self.state.clear_transients();

        // Ctrl+C force-quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            debug!("App::handle_key: Ctrl+C force quit");
            return true;
        }

        match self.state.view {
            View::Landing => self.handle_landing_key(key),
            View::Details => self.handle_details_key(key),
            View::Rsvp => self.handle_rsvp_key(key),
            View::AdminLogin => self.handle_login_key(key),
            View::AdminDashboard => self.handle_dashboard_key(key),
        }

        self.state.should_quit
    }

    // === Guest: landing ===

    fn handle_landing_key(&mut self, key: KeyEvent) {
        debug!(?key.code, "App::handle_landing_key: called");
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('r') => self.state.go_to(View::Rsvp),
            KeyCode::Char('d') => self.state.go_to(View::Details),
            KeyCode::Char('a') => {
                self.state.login_input.clear();
                self.state.login_error = false;
                self.state.go_to(View::AdminLogin);
            }
            _ => {}
        }
    }

    // === Guest: details ===

    fn handle_details_key(&mut self, key: KeyEvent) {
        debug!(?key.code, "App::handle_details_key: called");
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => self.state.go_to(View::Landing),
            KeyCode::Char('r') => self.state.go_to(View::Rsvp),
            _ => {}
        }
    }

    // === Guest: RSVP form ===

    fn handle_rsvp_key(&mut self, key: KeyEvent) {
        debug!(?key.code, "App::handle_rsvp_key: called");
        if self.state.submitted {
            // Confirmation pane: any navigation key returns home; no
            // re-submission path from here.
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.state.go_to(View::Landing);
            }
            return;
        }

        let attending = self.state.rsvp_form.attending;
        match key.code {
            KeyCode::Esc => self.state.go_to(View::Landing),
            KeyCode::Tab | KeyCode::Down => {
                self.state.rsvp_form.field = self.state.rsvp_form.field.next(attending);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.rsvp_form.field = self.state.rsvp_form.field.prev(attending);
            }
            KeyCode::Enter => self.submit_rsvp(),
            KeyCode::Left | KeyCode::Right => match self.state.rsvp_form.field {
                RsvpField::Attending => {
                    let form = &mut self.state.rsvp_form;
                    form.attending = if key.code == KeyCode::Right {
                        form.attending.next()
                    } else {
                        form.attending.prev()
                    };
                }
                RsvpField::Guests => {
                    let delta = if key.code == KeyCode::Right { 1 } else { -1 };
                    self.state.rsvp_form.bump_guests(delta);
                }
                _ => {}
            },
            KeyCode::Char(c) => match self.state.rsvp_form.field {
                RsvpField::Attending => {
                    if c == ' ' {
                        self.state.rsvp_form.attending = attending.next();
                    }
                }
                RsvpField::Guests => match c {
                    '+' => self.state.rsvp_form.bump_guests(1),
                    '-' => self.state.rsvp_form.bump_guests(-1),
                    _ => {}
                },
                field => {
                    self.rsvp_text_buffer(field).push(c);
                    self.state.rsvp_form.error = None;
                }
            },
            KeyCode::Backspace => {
                let field = self.state.rsvp_form.field;
                if !matches!(field, RsvpField::Attending | RsvpField::Guests) {
                    self.rsvp_text_buffer(field).pop();
                }
            }
            _ => {}
        }
    }

    fn rsvp_text_buffer(&mut self, field: RsvpField) -> &mut String {
        let form = &mut self.state.rsvp_form;
        match field {
            RsvpField::Name => &mut form.name,
            RsvpField::Email => &mut form.email,
            RsvpField::Dietary => &mut form.dietary,
            RsvpField::Song => &mut form.song,
            // Callers exclude the non-text fields
            RsvpField::Attending | RsvpField::Guests => unreachable!("not a text field"),
        }
    }

    fn submit_rsvp(&mut self) {
        debug!("App::submit_rsvp: called");
        match self.state.rsvp_form.submit() {
            Ok(rsvp) => {
                self.state.queue(PendingAction::SubmitRsvp(rsvp));
                self.state.submitted = true;
            }
            Err(message) => {
                debug!(%message, "App::submit_rsvp: validation failed");
                self.state.rsvp_form.error = Some(message);
            }
        }
    }

    // === Planner: login ===

    fn handle_login_key(&mut self, key: KeyEvent) {
        debug!(?key.code, "App::handle_login_key: called");
        match key.code {
            KeyCode::Esc => self.state.go_to(View::Landing),
            KeyCode::Enter => self.state.try_login(),
            KeyCode::Char(c) => self.state.login_input.push(c),
            KeyCode::Backspace => {
                self.state.login_input.pop();
            }
            _ => {}
        }
    }

    // === Planner: dashboard ===

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        debug!(?key.code, tab = ?self.state.admin_tab, "App::handle_dashboard_key: called");

        // A task title being typed captures everything first
        if self.state.task_input.is_some() {
            self.handle_task_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => self.state.admin_tab = self.state.admin_tab.next(),
            KeyCode::BackTab => self.state.admin_tab = self.state.admin_tab.prev(),
            KeyCode::Esc => self.state.logout(),
            _ => match self.state.admin_tab {
                AdminTab::Tasks => self.handle_tasks_key(key),
                AdminTab::Rsvps => self.handle_rsvps_key(key),
                AdminTab::Details => self.handle_config_key(key),
                AdminTab::AiTools => self.handle_ai_key(key),
            },
        }
    }

    fn handle_task_input_key(&mut self, key: KeyEvent) {
        debug!(?key.code, "App::handle_task_input_key: called");
        match key.code {
            KeyCode::Esc => self.state.task_input = None,
            KeyCode::Enter => {
                if let Some(title) = self.state.task_input.take() {
                    let title = title.trim().to_string();
                    if title.is_empty() {
                        debug!("App::handle_task_input_key: empty title, ignoring");
                    } else {
                        self.state.queue(PendingAction::AddTask(title));
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = &mut self.state.task_input {
                    input.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = &mut self.state.task_input {
                    input.pop();
                }
            }
            _ => {}
        }
    }

    fn handle_tasks_key(&mut self, key: KeyEvent) {
        debug!(?key.code, "App::handle_tasks_key: called");
        match key.code {
            KeyCode::Char('q') => self.state.logout(),
            KeyCode::Char('a') => self.state.task_input = Some(String::new()),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.selected_task + 1 < self.state.tasks.len() {
                    self.state.selected_task += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.selected_task = self.state.selected_task.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(task) = self.state.tasks.get(self.state.selected_task) {
                    self.state.queue(PendingAction::ToggleTask(task.id.clone()));
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(task) = self.state.tasks.get(self.state.selected_task) {
                    self.state.queue(PendingAction::DeleteTask(task.id.clone()));
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let timeframe = TIMEFRAMES[(c as usize) - ('1' as usize)];
                self.request_generation(GenerateRequest::Tasks {
                    timeframe: timeframe.to_string(),
                });
            }
            _ => {}
        }
    }

    fn handle_rsvps_key(&mut self, key: KeyEvent) {
        debug!(?key.code, "App::handle_rsvps_key: called");
        match key.code {
            KeyCode::Char('q') => self.state.logout(),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.selected_rsvp + 1 < self.state.rsvps.len() {
                    self.state.selected_rsvp += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.selected_rsvp = self.state.selected_rsvp.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_config_key(&mut self, key: KeyEvent) {
        debug!(?key.code, field = ?self.state.details_field, "App::handle_config_key: called");
        match key.code {
            KeyCode::Down => self.state.details_field = self.state.details_field.next(),
            KeyCode::Up => self.state.details_field = self.state.details_field.prev(),
            KeyCode::Char(c) => {
                self.state.details_field.value_mut(&mut self.state.details).push(c);
                self.replace_details();
            }
            KeyCode::Backspace => {
                self.state.details_field.value_mut(&mut self.state.details).pop();
                self.replace_details();
            }
            _ => {}
        }
    }

    /// Full-record replace on every keystroke; persistence happens in the
    /// store on each of these (no explicit save action)
    fn replace_details(&mut self) {
        self.state
            .queue(PendingAction::ReplaceDetails(self.state.details.clone()));
    }

    fn handle_ai_key(&mut self, key: KeyEvent) {
        debug!(?key.code, field = ?self.state.ai_field, "App::handle_ai_key: called");
        match key.code {
            KeyCode::Char('q') if self.state.ai_field == AiField::VowTone => {
                // Tone is a carousel, not a text field, so 'q' is free here;
                // everywhere else on this tab it types into the buffer.
                self.state.logout();
            }
            KeyCode::Down => self.state.ai_field = self.state.ai_field.next(),
            KeyCode::Up => self.state.ai_field = self.state.ai_field.prev(),
            KeyCode::Left | KeyCode::Right => {
                if self.state.ai_field == AiField::VowTone {
                    let len = super::state::TONES.len();
                    let idx = self.state.vow_form.tone_index;
                    self.state.vow_form.tone_index = if key.code == KeyCode::Right {
                        (idx + 1) % len
                    } else {
                        (idx + len - 1) % len
                    };
                }
            }
            KeyCode::Enter => {
                let request = if self.state.ai_field.in_vow_section() {
                    GenerateRequest::Vows {
                        tone: self.state.vow_form.tone().to_string(),
                        memories: self.state.vow_form.memories.clone(),
                        partner: self.state.vow_form.partner.clone(),
                    }
                } else {
                    GenerateRequest::ThankYou {
                        guest: self.state.note_form.guest.clone(),
                        gift: self.state.note_form.gift.clone(),
                    }
                };
                self.request_generation(request);
            }
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let text = if self.state.ai_field.in_vow_section() {
                    self.state.generated_vow.clone()
                } else {
                    self.state.generated_note.clone()
                };
                match text {
                    Some(text) => self.state.queue(PendingAction::CopyToClipboard(text)),
                    None => self.state.set_error("Nothing to copy yet."),
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.ai_text_buffer() {
                    buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.ai_text_buffer() {
                    buffer.pop();
                }
            }
            _ => {}
        }
    }

    fn ai_text_buffer(&mut self) -> Option<&mut String> {
        match self.state.ai_field {
            AiField::VowPartner => Some(&mut self.state.vow_form.partner),
            AiField::VowMemories => Some(&mut self.state.vow_form.memories),
            AiField::NoteGuest => Some(&mut self.state.note_form.guest),
            AiField::NoteGift => Some(&mut self.state.note_form.gift),
            AiField::VowTone => None,
        }
    }

    /// Queue a generation request unless one is already in flight
    ///
    /// One shared flag covers all generation operations; requests while it
    /// is set are refused rather than queued.
    fn request_generation(&mut self, request: GenerateRequest) {
        debug!(?request, "App::request_generation: called");
        if self.state.generating {
            self.state.set_error("A generation is already in progress.");
            return;
        }
        self.state.generating = true;
        self.state.queue(PendingAction::Generate(request));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Attendance;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app() -> App {
        App::new("love")
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = app();
        assert!(app.handle_key(ctrl('c')));
    }

    #[test]
    fn test_landing_navigation() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.state().view, View::Details);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state().view, View::Landing);

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.state().view, View::Rsvp);
    }

    #[test]
    fn test_login_success_and_failure() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.state().view, View::AdminLogin);

        type_str(&mut app, "wrong");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().view, View::AdminLogin);
        assert!(app.state().login_error);

        // Clear and retry with the correct secret, mixed case
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Backspace));
        }
        type_str(&mut app, "LOVE");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().view, View::AdminDashboard);
        assert!(!app.state().login_error);
    }

    #[test]
    fn test_rsvp_missing_fields_rejected() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('r')));
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.state().submitted);
        assert!(app.state().rsvp_form.error.is_some());
        assert!(app.state().pending.is_empty());
    }

    #[test]
    fn test_rsvp_valid_submission_creates_one_record() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('r')));

        type_str(&mut app, "Jane Doe");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "jane@example.com");
        // Attendance defaults to yes; bump party size to 2
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));

        assert!(app.state().submitted);
        let actions: Vec<_> = app.state().pending.iter().collect();
        assert_eq!(actions.len(), 1);
        match actions[0] {
            PendingAction::SubmitRsvp(rsvp) => {
                assert_eq!(rsvp.name, "Jane Doe");
                assert_eq!(rsvp.email, "jane@example.com");
                assert_eq!(rsvp.attending, Attendance::Yes);
                assert_eq!(rsvp.guests_count, 2);
            }
            other => panic!("unexpected action: {:?}", other),
        }

        // Enter again must not submit a second time
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().view, View::Landing);
        assert_eq!(app.state().pending.len(), 1);
    }

    #[test]
    fn test_rsvp_declined_skips_party_size() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('r')));
        type_str(&mut app, "Bob");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "bob@example.com");
        app.handle_key(key(KeyCode::Tab));
        // Cycle yes -> no
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.state().rsvp_form.attending, Attendance::No);
        // Tab skips the guests field entirely
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().rsvp_form.field, RsvpField::Dietary);

        app.handle_key(key(KeyCode::Enter));
        match app.state().pending.front().unwrap() {
            PendingAction::SubmitRsvp(rsvp) => assert_eq!(rsvp.guests_count, 1),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    fn login(app: &mut App) {
        app.handle_key(key(KeyCode::Char('a')));
        type_str(app, "love");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().view, View::AdminDashboard);
    }

    #[test]
    fn test_dashboard_tab_cycling_and_logout() {
        let mut app = app();
        login(&mut app);
        assert_eq!(app.state().admin_tab, AdminTab::Tasks);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().admin_tab, AdminTab::Rsvps);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.state().admin_tab, AdminTab::Tasks);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state().view, View::Landing);
    }

    #[test]
    fn test_add_task_via_input_mode() {
        let mut app = app();
        login(&mut app);

        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.state().task_input.is_some());
        type_str(&mut app, "Book venue");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.state().task_input.is_none());
        assert_eq!(
            app.state().pending.front(),
            Some(&PendingAction::AddTask("Book venue".to_string()))
        );
    }

    #[test]
    fn test_blank_task_title_ignored() {
        let mut app = app();
        login(&mut app);
        app.handle_key(key(KeyCode::Char('a')));
        type_str(&mut app, "   ");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.state().pending.is_empty());
    }

    #[test]
    fn test_generate_tasks_sets_flag_and_refuses_second() {
        let mut app = app();
        login(&mut app);

        app.handle_key(key(KeyCode::Char('1')));
        assert!(app.state().generating);
        assert!(matches!(
            app.state().pending.front(),
            Some(PendingAction::Generate(GenerateRequest::Tasks { timeframe })) if timeframe == "12 months"
        ));

        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.state().pending.len(), 1);
        assert!(app.state().error.is_some());
    }

    #[test]
    fn test_config_keystroke_queues_full_replace() {
        let mut app = app();
        login(&mut app);
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().admin_tab, AdminTab::Details);

        // Focus starts on Date; typing appends and queues a replace
        app.handle_key(key(KeyCode::Char('!')));
        assert!(app.state().details.date.ends_with('!'));
        assert!(matches!(
            app.state().pending.back(),
            Some(PendingAction::ReplaceDetails(details)) if details.date.ends_with('!')
        ));
    }

    #[test]
    fn test_ai_enter_requests_vows_from_vow_section() {
        let mut app = app();
        login(&mut app);
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.state().admin_tab, AdminTab::AiTools);

        type_str(&mut app, "Erin");
        app.handle_key(key(KeyCode::Enter));

        assert!(matches!(
            app.state().pending.front(),
            Some(PendingAction::Generate(GenerateRequest::Vows { partner, .. })) if partner == "Erin"
        ));
    }

    #[test]
    fn test_ai_copy_without_result_is_an_error() {
        let mut app = app();
        login(&mut app);
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab));
        }

        app.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL));
        assert!(app.state().error.is_some());
        assert!(app.state().pending.is_empty());
    }
}
