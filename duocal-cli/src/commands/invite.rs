use anyhow::Result;
use duocal_core::CalendarSession;
use duocal_core::config::DuocalConfig;
use owo_colors::OwoColorize;

pub fn run(config: &DuocalConfig, name: &str) -> Result<()> {
    let mut session = CalendarSession::from_config(config)?;
    let user = session.create_account(name)?;

    println!("{}", format!("  Account created for {}", user.name).green());
    println!("  Invite code: {}", user.invite_code.bold());
    println!(
        "{}",
        "  Share it with your partner so they can link with you.".dimmed()
    );

    Ok(())
}
