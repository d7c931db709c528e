use anyhow::{Context, Result};
use duocal_core::config::DuocalConfig;
use duocal_core::{CalendarSession, ParticipantFilter, ViewMode};
use tracing::debug;

use crate::render::render_view;
use crate::utils::date_input::parse_date;

pub fn run(
    config: &DuocalConfig,
    mode: ViewMode,
    date: Option<&str>,
    filter: ParticipantFilter,
    json: bool,
) -> Result<()> {
    let mut session = CalendarSession::from_config(config)?;

    if let Some(input) = date {
        session.select_date(parse_date(input)?);
    }
    session.set_view_mode(mode);
    session.set_participant_filter(filter);

    let view = session.view();
    debug!(
        date = %view.state.selected_date,
        events = view.event_count(),
        "view derived"
    );

    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        println!("{}", out);
        return Ok(());
    }

    for line in render_view(&view, session.pairing(), session.time_zone()) {
        println!("{}", line);
    }

    Ok(())
}
