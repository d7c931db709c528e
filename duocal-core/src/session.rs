//! The calendar session: the one owner of all calendar state.
//!
//! Presentation layers hold a `CalendarSession`, call its mutating methods in
//! response to input, and render whatever `view()` derives afterwards. Nothing
//! here is persisted.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::category::Category;
use crate::clock::ClockSpan;
use crate::config::DuocalConfig;
use crate::constants::DEFAULT_INVITE_PREFIX;
use crate::date::shift_month;
use crate::error::{DuocalResult, Rejection};
use crate::event::{DraftTiming, Event, EventDraft};
use crate::pairing::{PairingState, User};
use crate::participant::ParticipantSet;
use crate::store::EventStore;
use crate::view::{CalendarView, ParticipantFilter, ViewMode, ViewState};

pub const WELCOME_EVENT_ID: &str = "welcome";

#[derive(Debug, Clone)]
pub struct CalendarSession {
    store: EventStore,
    pairing: PairingState,
    view: ViewState,
    selected_event: Option<String>,
    tz: Tz,
    invite_prefix: String,
}

impl CalendarSession {
    /// An empty session showing `today`'s month.
    pub fn new(today: NaiveDate, tz: Tz) -> Self {
        CalendarSession {
            store: EventStore::new(),
            pairing: PairingState::new(),
            view: ViewState::new(today),
            selected_event: None,
            tz,
            invite_prefix: DEFAULT_INVITE_PREFIX.to_string(),
        }
    }

    /// A session for the current day in the configured zone, seeded if configured.
    pub fn from_config(config: &DuocalConfig) -> DuocalResult<Self> {
        let tz = config.time_zone()?;
        let now = Utc::now();

        let mut session = CalendarSession::new(now.with_timezone(&tz).date_naive(), tz)
            .with_invite_prefix(&config.invite_prefix);
        if config.seed_welcome_event {
            if let Err(rejection) = session.seed_welcome_event(now) {
                warn!(reason = %rejection, "welcome event not seeded");
            }
        }

        debug!(tz = %tz, seeded = config.seed_welcome_event, "session started");
        Ok(session)
    }

    pub fn with_invite_prefix(mut self, prefix: &str) -> Self {
        self.invite_prefix = prefix.to_string();
        self
    }

    /// Add the sample "Coffee catch-up" event starting at `now`.
    ///
    /// Rejected with `DuplicateEventId` if the session was already seeded.
    pub fn seed_welcome_event(&mut self, now: DateTime<Utc>) -> Result<&Event, Rejection> {
        let welcome = Event {
            id: WELCOME_EVENT_ID.to_string(),
            title: "Coffee catch-up".to_string(),
            description: "Start the week together".to_string(),
            category: Category::QualityTime,
            location: "Home".to_string(),
            start: now,
            end: now + Duration::hours(1),
            participants: ParticipantSet::both(),
        };
        self.store.add(welcome)
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn pairing(&self) -> &PairingState {
        &self.pairing
    }

    pub fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.view.selected_date
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    // PAIRING:

    pub fn create_account(&mut self, name: &str) -> Result<&User, Rejection> {
        self.create_account_with_rng(name, &mut rand::rng())
    }

    pub fn create_account_with_rng<R: Rng>(
        &mut self,
        name: &str,
        rng: &mut R,
    ) -> Result<&User, Rejection> {
        match self.pairing.create_account(name, &self.invite_prefix, rng) {
            Ok(user) => {
                info!(name = %user.name, code = %user.invite_code, "account created");
                Ok(user)
            }
            Err(rejection) => {
                debug!(reason = %rejection, "account creation rejected");
                Err(rejection)
            }
        }
    }

    pub fn accept_invite(&mut self, partner_name: &str, code: &str) -> Result<&User, Rejection> {
        match self.pairing.accept_invite(partner_name, code) {
            Ok(partner) => {
                info!(partner = %partner.name, "linked with partner");
                Ok(partner)
            }
            Err(rejection) => {
                debug!(reason = %rejection, "invite rejected");
                Err(rejection)
            }
        }
    }

    // EVENTS:

    /// Validate `draft` and store it as a new event at the front of the store.
    ///
    /// Clock times are placed on the selected date in the session zone.
    pub fn add_event(&mut self, draft: &EventDraft) -> Result<&Event, Rejection> {
        let event = match self.build_event(draft) {
            Ok(event) => event,
            Err(rejection) => {
                debug!(reason = %rejection, title = %draft.title, "event rejected");
                return Err(rejection);
            }
        };

        let event = self.store.add(event)?;
        info!(id = %event.id, title = %event.title, start = %event.start, "event added");
        Ok(event)
    }

    fn build_event(&self, draft: &EventDraft) -> Result<Event, Rejection> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(Rejection::BlankTitle);
        }
        if draft.participants.is_empty() {
            return Err(Rejection::NoParticipants);
        }

        let (start, end) = match &draft.timing {
            DraftTiming::Clock { start, end } => {
                let span = ClockSpan::resolve(start, end);
                if span.any_defaulted() {
                    debug!(?span, "draft times fell back to defaults");
                }
                span.anchor(self.view.selected_date, &self.tz)
                    .ok_or(Rejection::InvalidTime)?
            }
            DraftTiming::Absolute { start, end } => (*start, *end),
        };
        if end < start {
            return Err(Rejection::EndBeforeStart);
        }

        Ok(Event {
            id: self.fresh_id(),
            title: title.to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category,
            location: draft.location.trim().to_string(),
            start,
            end,
            participants: draft.participants,
        })
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Event::new_id();
            if !self.store.contains(&id) {
                return id;
            }
        }
    }

    /// Remove an event. Clears the event selection if it pointed at it.
    pub fn remove_event(&mut self, id: &str) -> Option<Event> {
        let removed = self.store.remove(id)?;
        if self.selected_event.as_deref() == Some(id) {
            self.selected_event = None;
        }
        info!(id = %removed.id, title = %removed.title, "event removed");
        Some(removed)
    }

    /// Mark an event as selected. Unknown ids leave the selection unchanged.
    pub fn select_event(&mut self, id: &str) -> Option<&Event> {
        let event = self.store.get(id)?;
        self.selected_event = Some(event.id.clone());
        Some(event)
    }

    pub fn clear_selected_event(&mut self) {
        self.selected_event = None;
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_event
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    // SELECTORS:

    /// Move to another day. Any selected event is deselected.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.view.selected_date = date;
        self.selected_event = None;
    }

    /// Move the selected date by whole months, clamping to the end of shorter months.
    pub fn change_month(&mut self, delta: i32) {
        if let Some(date) = shift_month(self.view.selected_date, delta) {
            self.view.selected_date = date;
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.mode = mode;
    }

    pub fn set_participant_filter(&mut self, filter: ParticipantFilter) {
        self.view.filter = filter;
    }

    pub fn view(&self) -> CalendarView<'_> {
        CalendarView::derive(&self.store, self.view, &self.tz)
    }
}
