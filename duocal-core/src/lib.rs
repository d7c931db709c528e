//! Core of duocal, a calendar shared by two people.
//!
//! This crate holds everything below the presentation layer:
//! - `date` and `clock` for calendar arithmetic and draft time parsing
//! - `event`, `store` and `pairing` for the calendar's state
//! - `view` for month/week projections filtered by participant
//! - `session`, which owns the state and is what frontends talk to

pub mod category;
pub mod clock;
pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod event;
pub mod pairing;
pub mod participant;
pub mod session;
pub mod store;
pub mod view;

pub use category::Category;
pub use error::{DuocalError, DuocalResult, Rejection};
pub use event::{DraftTiming, Event, EventDraft};
pub use participant::{Participant, ParticipantSet};
pub use session::CalendarSession;
pub use view::{CalendarView, ParticipantFilter, ViewMode};
