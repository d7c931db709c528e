//! Events on the shared calendar and the drafts they are created from.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::constants::{DEFAULT_DRAFT_END, DEFAULT_DRAFT_START};
use crate::participant::{Participant, ParticipantSet};

/// A calendar event
///
/// Events are never edited in place: a change is a removal followed by a new event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub participants: ParticipantSet,
}

impl Event {
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn involves(&self, participant: Participant) -> bool {
        self.participants.contains(participant)
    }

    pub fn is_shared(&self) -> bool {
        self.participants.is_both()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// How a draft expresses its start and end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DraftTiming {
    /// `HH:MM` times on the session's selected date
    Clock { start: String, end: String },
    /// Exact instants
    Absolute {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl Default for DraftTiming {
    fn default() -> Self {
        DraftTiming::Clock {
            start: DEFAULT_DRAFT_START.to_string(),
            end: DEFAULT_DRAFT_END.to_string(),
        }
    }
}

/// An event form that has not been validated or stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub participants: ParticipantSet,
    pub timing: DraftTiming,
}

impl Default for EventDraft {
    fn default() -> Self {
        EventDraft {
            title: String::new(),
            description: String::new(),
            category: Category::default(),
            location: String::new(),
            participants: ParticipantSet::both(),
            timing: DraftTiming::default(),
        }
    }
}

impl EventDraft {
    pub fn new(title: impl Into<String>) -> Self {
        EventDraft {
            title: title.into(),
            ..EventDraft::default()
        }
    }

    pub fn with_clock(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.timing = DraftTiming::Clock {
            start: start.into(),
            end: end.into(),
        };
        self
    }

    pub fn with_span(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.timing = DraftTiming::Absolute { start, end };
        self
    }

    pub fn with_participants(mut self, participants: ParticipantSet) -> Self {
        self.participants = participants;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn toggle_participant(&mut self, participant: Participant) {
        self.participants.toggle(participant);
    }

    /// Clear the free-text fields after a successful save, keeping category,
    /// participants and times for the next event.
    pub fn reset_text(&mut self) {
        self.title.clear();
        self.description.clear();
        self.location.clear();
    }
}
