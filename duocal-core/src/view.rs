//! Month and week projections of the event store.
//!
//! Views are recomputed from scratch on every call. They borrow the events
//! they show, so a view can't outlive a mutation of the store.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::date::{days_of_month, week_days};
use crate::error::DuocalError;
use crate::event::Event;
use crate::participant::Participant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Month => write!(f, "month"),
            ViewMode::Week => write!(f, "week"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = DuocalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            _ => Err(DuocalError::InvalidValue {
                field: "view mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Whose events to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantFilter {
    #[default]
    All,
    /// Events the local user takes part in
    #[serde(rename = "self")]
    Me,
    Partner,
    /// Only events shared by both
    Both,
}

impl ParticipantFilter {
    pub fn matches(self, event: &Event) -> bool {
        match self {
            ParticipantFilter::All => true,
            ParticipantFilter::Me => event.involves(Participant::Me),
            ParticipantFilter::Partner => event.involves(Participant::Partner),
            ParticipantFilter::Both => event.is_shared(),
        }
    }
}

impl From<Participant> for ParticipantFilter {
    fn from(participant: Participant) -> Self {
        match participant {
            Participant::Me => ParticipantFilter::Me,
            Participant::Partner => ParticipantFilter::Partner,
        }
    }
}

impl fmt::Display for ParticipantFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantFilter::All => write!(f, "all"),
            ParticipantFilter::Me => write!(f, "self"),
            ParticipantFilter::Partner => write!(f, "partner"),
            ParticipantFilter::Both => write!(f, "both"),
        }
    }
}

impl FromStr for ParticipantFilter {
    type Err = DuocalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ParticipantFilter::All),
            "self" | "me" => Ok(ParticipantFilter::Me),
            "partner" => Ok(ParticipantFilter::Partner),
            "both" => Ok(ParticipantFilter::Both),
            _ => Err(DuocalError::InvalidValue {
                field: "participant filter",
                value: s.to_string(),
            }),
        }
    }
}

/// The selectors a view is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub selected_date: NaiveDate,
    pub mode: ViewMode,
    pub filter: ParticipantFilter,
}

impl ViewState {
    pub fn new(selected_date: NaiveDate) -> Self {
        ViewState {
            selected_date,
            mode: ViewMode::default(),
            filter: ParticipantFilter::default(),
        }
    }
}

pub fn filter_by_participant<'a, I>(events: I, filter: ParticipantFilter) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events.into_iter().filter(|e| filter.matches(e)).collect()
}

/// Events starting on `day` in `tz`. Events spanning several days only show on their start day.
pub fn events_on_day<'a, I, Tz>(events: I, day: NaiveDate, tz: &Tz) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
    Tz: TimeZone,
{
    events
        .into_iter()
        .filter(|e| e.start.with_timezone(tz).date_naive() == day)
        .collect()
}

/// One cell of the month grid or week strip.
#[derive(Debug, Clone, Serialize)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub events: Vec<&'a Event>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarView<'a> {
    pub state: ViewState,
    pub days: Vec<DayBucket<'a>>,
    /// Filtered events of the selected date
    pub selected_day: Vec<&'a Event>,
}

impl<'a> CalendarView<'a> {
    pub fn derive<I, Tz>(events: I, state: ViewState, tz: &Tz) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
        Tz: TimeZone,
    {
        let filtered = filter_by_participant(events, state.filter);

        let dates = match state.mode {
            ViewMode::Month => days_of_month(state.selected_date),
            ViewMode::Week => week_days(state.selected_date),
        };

        let days = dates
            .into_iter()
            .map(|date| DayBucket {
                date,
                is_selected: date == state.selected_date,
                events: events_on_day(filtered.iter().copied(), date, tz),
            })
            .collect();

        CalendarView {
            state,
            days,
            selected_day: events_on_day(filtered.iter().copied(), state.selected_date, tz),
        }
    }

    pub fn event_count(&self) -> usize {
        self.days.iter().map(|d| d.events.len()).sum()
    }
}
