//! Interactive session. Everything lives in memory and is gone on quit.

use anyhow::Result;
use dialoguer::{Input, MultiSelect, Select};
use duocal_core::config::DuocalConfig;
use duocal_core::event::DraftTiming;
use duocal_core::{
    CalendarSession, Category, EventDraft, Participant, ParticipantFilter, ParticipantSet,
    ViewMode,
};
use owo_colors::OwoColorize;

use crate::render::{render_event, render_view};
use crate::utils::date_input::parse_date;

#[derive(Clone, Copy)]
enum Action {
    CreateAccount,
    AcceptInvite,
    AddEvent,
    ShowEvent,
    CloseEvent,
    RemoveEvent,
    PickDay,
    PreviousMonth,
    NextMonth,
    ToggleView,
    Filter,
    Quit,
}

const ACTIONS: [(&str, Action); 12] = [
    ("Create account & invite code", Action::CreateAccount),
    ("Accept invite & link", Action::AcceptInvite),
    ("Add event", Action::AddEvent),
    ("Show event", Action::ShowEvent),
    ("Close event", Action::CloseEvent),
    ("Remove event", Action::RemoveEvent),
    ("Pick day", Action::PickDay),
    ("Previous month", Action::PreviousMonth),
    ("Next month", Action::NextMonth),
    ("Switch month/week", Action::ToggleView),
    ("Show for...", Action::Filter),
    ("Quit", Action::Quit),
];

pub fn run(config: &DuocalConfig) -> Result<()> {
    let mut session = CalendarSession::from_config(config)?;
    let mut draft = EventDraft::default();

    loop {
        println!();
        print_view(&session);
        println!();

        let labels: Vec<&str> = ACTIONS.iter().map(|(label, _)| *label).collect();
        let choice = Select::new()
            .with_prompt("  What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match ACTIONS[choice].1 {
            Action::CreateAccount => create_account(&mut session)?,
            Action::AcceptInvite => accept_invite(&mut session)?,
            Action::AddEvent => add_event(&mut session, &mut draft)?,
            Action::ShowEvent => show_event(&mut session)?,
            Action::CloseEvent => session.clear_selected_event(),
            Action::RemoveEvent => remove_event(&mut session)?,
            Action::PickDay => pick_day(&mut session)?,
            Action::PreviousMonth => session.change_month(-1),
            Action::NextMonth => session.change_month(1),
            Action::ToggleView => {
                let mode = match session.view_state().mode {
                    ViewMode::Month => ViewMode::Week,
                    ViewMode::Week => ViewMode::Month,
                };
                session.set_view_mode(mode);
            }
            Action::Filter => pick_filter(&mut session)?,
            Action::Quit => return Ok(()),
        }
    }
}

fn print_view(session: &CalendarSession) {
    for line in render_view(&session.view(), session.pairing(), session.time_zone()) {
        println!("{}", line);
    }

    let pairing = session.pairing();
    if let Some(event) = session.selected_event() {
        println!();
        for line in render_event(event, pairing, session.time_zone()) {
            println!("{}", line);
        }
    }

    println!();
    if let Some(me) = pairing.me() {
        println!("  Your invite code: {}", me.invite_code.bold());
    }
    if let (true, Some(partner)) = (pairing.is_linked(), pairing.partner()) {
        println!("  {}", format!("Linked with {}", partner.name).green());
    }
}

fn report<T>(result: Result<T, duocal_core::Rejection>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(rejection) => {
            eprintln!("  {}", rejection.to_string().red());
            None
        }
    }
}

fn prompt_optional(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?)
}

fn create_account(session: &mut CalendarSession) -> Result<()> {
    let name = prompt_optional("  Your name")?;
    if let Some(user) = report(session.create_account(&name)) {
        println!("  Invite code: {}", user.invite_code.bold());
    }
    Ok(())
}

fn accept_invite(session: &mut CalendarSession) -> Result<()> {
    let name = prompt_optional("  Partner name (optional)")?;
    let code = prompt_optional("  Invite code")?;
    report(session.accept_invite(&name, &code));
    Ok(())
}

fn add_event(session: &mut CalendarSession, draft: &mut EventDraft) -> Result<()> {
    draft.title = prompt_optional("  Title")?;
    draft.description = prompt_optional("  Description (skip)")?;

    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let current = Category::ALL
        .iter()
        .position(|c| *c == draft.category)
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("  Category")
        .items(&categories)
        .default(current)
        .interact()?;
    draft.category = Category::ALL[picked];

    draft.location = prompt_optional("  Where? (skip)")?;

    let (default_start, default_end) = match &draft.timing {
        DraftTiming::Clock { start, end } => (start.clone(), end.clone()),
        DraftTiming::Absolute { .. } => Default::default(),
    };
    let start: String = Input::new()
        .with_prompt("  Starts (HH:MM)")
        .default(default_start)
        .interact_text()?;
    let end: String = Input::new()
        .with_prompt("  Ends (HH:MM)")
        .default(default_end)
        .interact_text()?;
    draft.timing = DraftTiming::Clock { start, end };

    let names: Vec<String> = Participant::ALL
        .iter()
        .map(|p| session.pairing().display_name(*p).to_string())
        .collect();
    let checked: Vec<bool> = Participant::ALL
        .iter()
        .map(|p| draft.participants.contains(*p))
        .collect();
    let chosen = MultiSelect::new()
        .with_prompt("  Who? (space to toggle)")
        .items(&names)
        .defaults(&checked)
        .interact()?;
    draft.participants = chosen
        .into_iter()
        .map(|i| Participant::ALL[i])
        .collect::<ParticipantSet>();

    if let Some(event) = report(session.add_event(draft)) {
        println!("{}", format!("  Created: {}", event.title).green());
        draft.reset_text();
    }
    Ok(())
}

/// Pick one of the selected day's events, if there are any.
fn pick_event(session: &CalendarSession, prompt: &str) -> Result<Option<String>> {
    let view = session.view();
    if view.selected_day.is_empty() {
        println!("{}", "  No events on this day.".dimmed());
        return Ok(None);
    }

    let titles: Vec<&str> = view.selected_day.iter().map(|e| e.title.as_str()).collect();
    let picked = Select::new()
        .with_prompt(prompt)
        .items(&titles)
        .default(0)
        .interact()?;
    Ok(Some(view.selected_day[picked].id.clone()))
}

fn show_event(session: &mut CalendarSession) -> Result<()> {
    let Some(id) = pick_event(session, "  Which event?")? else {
        return Ok(());
    };

    session.select_event(&id);
    Ok(())
}

fn remove_event(session: &mut CalendarSession) -> Result<()> {
    let Some(id) = pick_event(session, "  Remove which event?")? else {
        return Ok(());
    };

    if let Some(event) = session.remove_event(&id) {
        println!("{}", format!("  Removed: {}", event.title).red());
    }
    Ok(())
}

fn pick_day(session: &mut CalendarSession) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("  Which day?")
        .default(session.selected_date().to_string())
        .interact_text()?;

    match parse_date(&input) {
        Ok(date) => session.select_date(date),
        Err(e) => eprintln!("  {}", e.to_string().red()),
    }
    Ok(())
}

fn pick_filter(session: &mut CalendarSession) -> Result<()> {
    let filters = [
        ParticipantFilter::All,
        ParticipantFilter::Me,
        ParticipantFilter::Partner,
        ParticipantFilter::Both,
    ];
    let pairing = session.pairing();
    let labels = [
        "Everyone".to_string(),
        pairing.display_name(Participant::Me).to_string(),
        pairing.display_name(Participant::Partner).to_string(),
        "Only together".to_string(),
    ];
    let current = filters
        .iter()
        .position(|f| *f == session.view_state().filter)
        .unwrap_or(0);

    let picked = Select::new()
        .with_prompt("  Show for")
        .items(&labels)
        .default(current)
        .interact()?;
    session.set_participant_filter(filters[picked]);
    Ok(())
}
