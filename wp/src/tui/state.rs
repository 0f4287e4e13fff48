//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here.
//! The AppState is the root controller: it owns which top-level view is
//! active and every form the guest and planner screens edit. Store
//! mutations are queued as pending actions and applied by the runner in
//! the order the user triggered them.

use std::collections::VecDeque;

use tracing::debug;

use crate::domain::{Attendance, EventDetails, MAX_PARTY_SIZE, Rsvp, Task};
use crate::store::RsvpSummary;

/// Canned timeframes for task generation, bound to keys 1-4
pub const TIMEFRAMES: &[&str] = &["12 months", "6 months", "1 month", "1 week"];

/// Vow tones, cycled with left/right on the tone field
pub const TONES: &[&str] = &[
    "Romantic & Emotional",
    "Funny & Lighthearted",
    "Short & Sweet",
    "Traditional",
];

/// Which top-level view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Guest landing screen (default)
    #[default]
    Landing,
    /// Guest event-details screen
    Details,
    /// Guest RSVP form
    Rsvp,
    /// Planner password gate
    AdminLogin,
    /// Planner dashboard
    AdminDashboard,
}

impl View {
    /// Display name for the header
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Landing => "Welcome",
            Self::Details => "Our Story & Details",
            Self::Rsvp => "RSVP",
            Self::AdminLogin => "Planner Access",
            Self::AdminDashboard => "Planner Dashboard",
        }
    }
}

/// Dashboard tabs, cycled with Tab/BackTab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Tasks,
    Rsvps,
    Details,
    AiTools,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [AdminTab::Tasks, AdminTab::Rsvps, AdminTab::Details, AdminTab::AiTools];

    /// Get the next tab in the cycle
    pub fn next(self) -> Self {
        debug!(?self, "AdminTab::next: called");
        match self {
            Self::Tasks => Self::Rsvps,
            Self::Rsvps => Self::Details,
            Self::Details => Self::AiTools,
            Self::AiTools => Self::Tasks,
        }
    }

    /// Get the previous tab in the cycle
    pub fn prev(self) -> Self {
        debug!(?self, "AdminTab::prev: called");
        match self {
            Self::Tasks => Self::AiTools,
            Self::Rsvps => Self::Tasks,
            Self::Details => Self::Rsvps,
            Self::AiTools => Self::Details,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Tasks => "Task Checklist",
            Self::Rsvps => "Guest List & RSVPs",
            Self::Details => "Event Configuration",
            Self::AiTools => "AI Planning Assistants",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Rsvps => "RSVPs",
            Self::Details => "Event Info",
            Self::AiTools => "AI Tools",
        }
    }
}

/// Focusable fields on the RSVP form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RsvpField {
    #[default]
    Name,
    Email,
    Attending,
    Guests,
    Dietary,
    Song,
}

impl RsvpField {
    fn next_raw(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Attending,
            Self::Attending => Self::Guests,
            Self::Guests => Self::Dietary,
            Self::Dietary => Self::Song,
            Self::Song => Self::Name,
        }
    }

    fn prev_raw(self) -> Self {
        match self {
            Self::Name => Self::Song,
            Self::Email => Self::Name,
            Self::Attending => Self::Email,
            Self::Guests => Self::Attending,
            Self::Dietary => Self::Guests,
            Self::Song => Self::Dietary,
        }
    }

    /// Next field; party size is only solicited when attending
    pub fn next(self, attending: Attendance) -> Self {
        let next = self.next_raw();
        if next == Self::Guests && attending != Attendance::Yes {
            next.next_raw()
        } else {
            next
        }
    }

    /// Previous field; party size is only solicited when attending
    pub fn prev(self, attending: Attendance) -> Self {
        let prev = self.prev_raw();
        if prev == Self::Guests && attending != Attendance::Yes {
            prev.prev_raw()
        } else {
            prev
        }
    }
}

/// Guest RSVP form buffer
#[derive(Debug, Clone, Default)]
pub struct RsvpForm {
    pub name: String,
    pub email: String,
    pub attending: Attendance,
    pub guests_count: u32,
    pub dietary: String,
    pub song: String,
    pub field: RsvpField,
    /// Inline validation message, shown until the next edit
    pub error: Option<String>,
}

impl RsvpForm {
    pub fn new() -> Self {
        Self {
            guests_count: 1,
            ..Default::default()
        }
    }

    /// Validate and build exactly one response record
    ///
    /// Name, email, and an attendance choice are all required; a missing
    /// field leaves the form untouched and reports the problem inline.
    pub fn submit(&self) -> Result<Rsvp, String> {
        debug!("RsvpForm::submit: called");
        if self.name.trim().is_empty() {
            return Err("Please enter your name.".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Please enter your email address.".to_string());
        }

        Ok(
            Rsvp::new(self.name.trim(), self.email.trim(), self.attending, self.guests_count)
                .with_dietary(self.dietary.clone())
                .with_song(self.song.clone()),
        )
    }

    pub fn bump_guests(&mut self, delta: i32) {
        let next = self.guests_count as i32 + delta;
        self.guests_count = next.clamp(1, MAX_PARTY_SIZE as i32) as u32;
    }
}

/// Focusable fields on the configuration tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsField {
    #[default]
    Date,
    Time,
    LocationName,
    Address,
    OurStory,
    RegistryUrl,
}

impl DetailsField {
    pub const ALL: [DetailsField; 6] = [
        DetailsField::Date,
        DetailsField::Time,
        DetailsField::LocationName,
        DetailsField::Address,
        DetailsField::OurStory,
        DetailsField::RegistryUrl,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Time,
            Self::Time => Self::LocationName,
            Self::LocationName => Self::Address,
            Self::Address => Self::OurStory,
            Self::OurStory => Self::RegistryUrl,
            Self::RegistryUrl => Self::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::RegistryUrl,
            Self::Time => Self::Date,
            Self::LocationName => Self::Time,
            Self::Address => Self::LocationName,
            Self::OurStory => Self::Address,
            Self::RegistryUrl => Self::OurStory,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Time => "Time",
            Self::LocationName => "Location Name",
            Self::Address => "Full Address",
            Self::OurStory => "Our Story",
            Self::RegistryUrl => "Registry URL",
        }
    }

    /// The buffer this field edits inside the record
    pub fn value_mut<'a>(&self, details: &'a mut EventDetails) -> &'a mut String {
        match self {
            Self::Date => &mut details.date,
            Self::Time => &mut details.time,
            Self::LocationName => &mut details.location_name,
            Self::Address => &mut details.address,
            Self::OurStory => &mut details.our_story,
            Self::RegistryUrl => &mut details.registry_url,
        }
    }

    pub fn value<'a>(&self, details: &'a EventDetails) -> &'a str {
        match self {
            Self::Date => &details.date,
            Self::Time => &details.time,
            Self::LocationName => &details.location_name,
            Self::Address => &details.address,
            Self::OurStory => &details.our_story,
            Self::RegistryUrl => &details.registry_url,
        }
    }
}

/// Focusable fields on the AI tools tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiField {
    #[default]
    VowPartner,
    VowTone,
    VowMemories,
    NoteGuest,
    NoteGift,
}

impl AiField {
    pub fn next(self) -> Self {
        match self {
            Self::VowPartner => Self::VowTone,
            Self::VowTone => Self::VowMemories,
            Self::VowMemories => Self::NoteGuest,
            Self::NoteGuest => Self::NoteGift,
            Self::NoteGift => Self::VowPartner,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::VowPartner => Self::NoteGift,
            Self::VowTone => Self::VowPartner,
            Self::VowMemories => Self::VowTone,
            Self::NoteGuest => Self::VowMemories,
            Self::NoteGift => Self::NoteGuest,
        }
    }

    /// Whether this field belongs to the vow form (vs the thank-you form)
    pub fn in_vow_section(&self) -> bool {
        matches!(self, Self::VowPartner | Self::VowTone | Self::VowMemories)
    }
}

/// Vow assistant form buffer
#[derive(Debug, Clone, Default)]
pub struct VowForm {
    pub partner: String,
    pub tone_index: usize,
    pub memories: String,
}

impl VowForm {
    pub fn tone(&self) -> &'static str {
        TONES[self.tone_index % TONES.len()]
    }
}

/// Thank-you note form buffer
#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    pub guest: String,
    pub gift: String,
}

/// Store mutation or side effect requested by a key handler
///
/// The runner drains these on tick and applies them against the
/// PlannerStore, keeping the App free of store references.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    AddTask(String),
    ToggleTask(String),
    DeleteTask(String),
    SubmitRsvp(Rsvp),
    ReplaceDetails(EventDetails),
    Generate(GenerateRequest),
    CopyToClipboard(String),
}

/// One of the three content generation operations
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateRequest {
    Tasks { timeframe: String },
    Vows { tone: String, memories: String, partner: String },
    ThankYou { guest: String, gift: String },
}

/// Complete TUI state
#[derive(Debug)]
pub struct AppState {
    // === View routing (root controller) ===
    pub view: View,
    pub admin_tab: AdminTab,
    pub should_quit: bool,

    // === Planner gate ===
    /// Shared secret from config; compared case-insensitively
    pub planner_password: String,
    pub login_input: String,
    pub login_error: bool,

    // === Guest workflow ===
    pub rsvp_form: RsvpForm,
    /// Set once an RSVP is posted; blocks re-submission until the guest
    /// navigates away and back
    pub submitted: bool,

    // === Dashboard: tasks ===
    pub selected_task: usize,
    /// When Some, the Tasks tab is capturing a new task title
    pub task_input: Option<String>,

    // === Dashboard: roster ===
    pub selected_rsvp: usize,

    // === Dashboard: configuration ===
    pub details_field: DetailsField,

    // === Dashboard: AI tools ===
    pub ai_field: AiField,
    pub vow_form: VowForm,
    pub note_form: NoteForm,
    pub generated_vow: Option<String>,
    pub generated_note: Option<String>,
    /// Shared across all generation operations; one indicator for the
    /// whole dashboard
    pub generating: bool,

    // === Transient messages ===
    pub error: Option<String>,
    pub notice: Option<String>,

    // === Pending work for the runner ===
    pub pending: VecDeque<PendingAction>,

    // === Store snapshot (refreshed by the runner after mutations) ===
    pub tasks: Vec<Task>,
    pub rsvps: Vec<Rsvp>,
    pub summary: RsvpSummary,
    pub details: EventDetails,
}

impl AppState {
    /// Create state gated by the given planner password
    pub fn new(planner_password: impl Into<String>) -> Self {
        debug!("AppState::new: called");
        Self {
            view: View::default(),
            admin_tab: AdminTab::default(),
            should_quit: false,
            planner_password: planner_password.into(),
            login_input: String::new(),
            login_error: false,
            rsvp_form: RsvpForm::new(),
            submitted: false,
            selected_task: 0,
            task_input: None,
            selected_rsvp: 0,
            details_field: DetailsField::default(),
            ai_field: AiField::default(),
            vow_form: VowForm::default(),
            note_form: NoteForm::default(),
            generated_vow: None,
            generated_note: None,
            generating: false,
            error: None,
            notice: None,
            pending: VecDeque::new(),
            tasks: Vec::new(),
            rsvps: Vec::new(),
            summary: RsvpSummary::default(),
            details: EventDetails::default(),
        }
    }

    /// Queue a store mutation for the runner
    pub fn queue(&mut self, action: PendingAction) {
        debug!(?action, "AppState::queue: called");
        self.pending.push_back(action);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "AppState::set_error: called");
        self.error = Some(message);
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Clear transient messages (called on every key press)
    pub fn clear_transients(&mut self) {
        self.error = None;
        self.notice = None;
    }

    /// Move to a guest view, resetting the RSVP flow
    pub fn go_to(&mut self, view: View) {
        debug!(?view, "AppState::go_to: called");
        if self.view == View::Rsvp && view != View::Rsvp {
            // Leaving the RSVP screen re-arms the form
            self.rsvp_form = RsvpForm::new();
            self.submitted = false;
        }
        self.view = view;
    }

    /// Attempt the planner login with the typed secret
    pub fn try_login(&mut self) {
        let matched = self.login_input.trim().to_lowercase() == self.planner_password.to_lowercase();
        debug!(matched, "AppState::try_login: called");
        if matched {
            self.view = View::AdminDashboard;
            self.admin_tab = AdminTab::default();
            self.login_error = false;
            self.login_input.clear();
        } else {
            self.login_error = true;
        }
    }

    /// Leave the dashboard unconditionally
    ///
    /// Nothing to invalidate: the authenticated flag is the view itself
    /// and was never persisted.
    pub fn logout(&mut self) {
        debug!("AppState::logout: called");
        self.task_input = None;
        self.login_input.clear();
        self.login_error = false;
        self.view = View::Landing;
    }

    /// Keep the task selection inside the list after mutations
    pub fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_task = 0;
        } else if self.selected_task >= self.tasks.len() {
            self.selected_task = self.tasks.len() - 1;
        }
        if self.rsvps.is_empty() {
            self.selected_rsvp = 0;
        } else if self.selected_rsvp >= self.rsvps.len() {
            self.selected_rsvp = self.rsvps.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_round_trips() {
        for tab in AdminTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_rsvp_field_skips_guests_when_not_attending() {
        let field = RsvpField::Attending;
        assert_eq!(field.next(Attendance::Yes), RsvpField::Guests);
        assert_eq!(field.next(Attendance::No), RsvpField::Dietary);
        assert_eq!(RsvpField::Dietary.prev(Attendance::Maybe), RsvpField::Attending);
    }

    #[test]
    fn test_rsvp_form_requires_name_and_email() {
        let mut form = RsvpForm::new();
        assert!(form.submit().is_err());

        form.name = "Jane Doe".to_string();
        assert!(form.submit().is_err());

        form.email = "jane@example.com".to_string();
        let rsvp = form.submit().unwrap();
        assert_eq!(rsvp.name, "Jane Doe");
        assert_eq!(rsvp.guests_count, 1);
    }

    #[test]
    fn test_rsvp_form_guest_bump_clamps() {
        let mut form = RsvpForm::new();
        form.bump_guests(10);
        assert_eq!(form.guests_count, MAX_PARTY_SIZE);
        form.bump_guests(-10);
        assert_eq!(form.guests_count, 1);
    }

    #[test]
    fn test_try_login_case_insensitive() {
        let mut state = AppState::new("love");
        state.login_input = "  LoVe ".to_string();
        state.try_login();
        assert_eq!(state.view, View::AdminDashboard);
        assert!(!state.login_error);
        assert!(state.login_input.is_empty());
    }

    #[test]
    fn test_try_login_failure_keeps_view_and_sets_error() {
        let mut state = AppState::new("love");
        state.view = View::AdminLogin;
        state.login_input = "roses".to_string();
        state.try_login();
        assert_eq!(state.view, View::AdminLogin);
        assert!(state.login_error);
    }

    #[test]
    fn test_leaving_rsvp_resets_form() {
        let mut state = AppState::new("love");
        state.go_to(View::Rsvp);
        state.rsvp_form.name = "Jane".to_string();
        state.submitted = true;

        state.go_to(View::Landing);
        assert!(!state.submitted);
        assert!(state.rsvp_form.name.is_empty());
    }

    #[test]
    fn test_logout_returns_to_landing() {
        let mut state = AppState::new("love");
        state.view = View::AdminDashboard;
        state.task_input = Some("half-typed".to_string());
        state.logout();
        assert_eq!(state.view, View::Landing);
        assert!(state.task_input.is_none());
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut state = AppState::new("love");
        state.selected_task = 5;
        state.tasks = vec![Task::new("only")];
        state.clamp_selection();
        assert_eq!(state.selected_task, 0);
    }
}
