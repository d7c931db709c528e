//! Terminal rendering for duocal views.
//!
//! Extension traits and helpers that turn derived views into colored lines
//! using owo_colors.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use duocal_core::pairing::PairingState;
use duocal_core::view::DayBucket;
use duocal_core::{CalendarView, Category, Event, Participant, ViewMode};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("[{}]", self.label()).truecolor(r, g, b).to_string()
    }
}

/// Dot shown under a day for each of its events
fn dot(category: Category) -> String {
    let (r, g, b) = category.rgb();
    "•".truecolor(r, g, b).to_string()
}

/// `09:00 - 10:00` in the session zone
pub fn time_range(event: &Event, tz: Tz) -> String {
    format!(
        "{} - {}",
        event.start.with_timezone(&tz).format("%H:%M"),
        event.end.with_timezone(&tz).format("%H:%M")
    )
}

/// Lay out month buckets in Monday-first rows, with blanks before the 1st
/// and after the last day.
pub fn grid_weeks<'v, 'a>(days: &'v [DayBucket<'a>]) -> Vec<Vec<Option<&'v DayBucket<'a>>>> {
    let Some(first) = days.first() else {
        return Vec::new();
    };
    let lead = first.date.weekday().num_days_from_monday() as usize;

    let mut cells: Vec<Option<&DayBucket>> = vec![None; lead];
    cells.extend(days.iter().map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells.chunks(7).map(<[_]>::to_vec).collect()
}

fn month_cell(bucket: &DayBucket) -> String {
    let day = format!("{:>2}", bucket.date.day());
    let day = if bucket.is_selected {
        day.reversed().to_string()
    } else {
        day
    };
    let marker = match bucket.events.first() {
        Some(event) => dot(event.category),
        None => " ".to_string(),
    };
    let extra = if bucket.events.len() > 1 { "+" } else { " " };
    format!(" {}{}{}", day, marker, extra)
}

fn render_month(view: &CalendarView, lines: &mut Vec<String>) {
    lines.push(
        "  Mo   Tu   We   Th   Fr   Sa   Su"
            .dimmed()
            .to_string(),
    );
    for week in grid_weeks(&view.days) {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                Some(bucket) => month_cell(bucket),
                None => "     ".to_string(),
            })
            .collect();
        lines.push(row);
    }
}

fn render_week(view: &CalendarView, lines: &mut Vec<String>) {
    for bucket in &view.days {
        let label = bucket.date.format("%a %d").to_string();
        let label = if bucket.is_selected {
            label.reversed().to_string()
        } else {
            label
        };
        let chips: Vec<String> = bucket
            .events
            .iter()
            .map(|e| {
                let (r, g, b) = e.category.rgb();
                e.title.truecolor(r, g, b).to_string()
            })
            .collect();
        lines.push(format!("  {}  {}", label, chips.join(", ")));
    }
}

pub fn render_event(event: &Event, pairing: &PairingState, tz: Tz) -> Vec<String> {
    let mut lines = vec![format!(
        "  {} {} {}",
        event.category.render(),
        event.title.bold(),
        time_range(event, tz).dimmed()
    )];

    if !event.description.is_empty() {
        lines.push(format!("    {}", event.description));
    }

    let location = if event.location.is_empty() {
        "No location"
    } else {
        event.location.as_str()
    };
    lines.push(format!("    @ {}", location).dimmed().to_string());

    let people: Vec<String> = Participant::ALL
        .into_iter()
        .map(|p| {
            let name = pairing.display_name(p);
            if event.involves(p) {
                name.to_string()
            } else {
                name.dimmed().strikethrough().to_string()
            }
        })
        .collect();
    lines.push(format!("    {}", people.join("  ")));

    lines
}

fn title_for(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn render_view(view: &CalendarView, pairing: &PairingState, tz: Tz) -> Vec<String> {
    let state = view.state;
    let mut lines = vec![format!(
        "{} {}",
        format!("📅 {}", title_for(state.selected_date)).bold(),
        format!("({} view, showing {})", state.mode, state.filter).dimmed()
    )];

    match state.mode {
        ViewMode::Month => render_month(view, &mut lines),
        ViewMode::Week => render_week(view, &mut lines),
    }

    lines.push(String::new());
    lines.push(
        format!("Events on {}", state.selected_date.format("%A, %B %-d"))
            .bold()
            .to_string(),
    );
    if view.selected_day.is_empty() {
        lines.push(format!("  {}", "No events yet.".dimmed()));
    }
    for event in &view.selected_day {
        lines.extend(render_event(event, pairing, tz));
    }

    lines
}
