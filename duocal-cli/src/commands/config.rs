use anyhow::Result;
use duocal_core::config::DuocalConfig;
use owo_colors::OwoColorize;

pub fn run(config: &DuocalConfig, init: bool) -> Result<()> {
    let config_path = DuocalConfig::config_path()?;

    if init {
        if config_path.exists() {
            anyhow::bail!("Config file already exists at {}", config_path.display());
        }
        DuocalConfig::create_default_config(&config_path)?;
        println!(
            "{}",
            format!("  Created {}", config_path.display()).green()
        );
        return Ok(());
    }

    let status = if config_path.exists() {
        ""
    } else {
        " (not created, using defaults)"
    };

    println!("{}", "Paths".bold());
    println!("  Config:        {}{}", config_path.display(), status.dimmed());
    println!();
    println!("{}", "Settings".bold());
    println!("  Invite prefix: {}", config.invite_prefix);
    println!("  Time zone:     {}", config.time_zone()?);
    println!("  Sample event:  {}", config.seed_welcome_event);
    println!(
        "  Server:        http://{}:{}",
        config.server.host, config.server.port
    );

    Ok(())
}
