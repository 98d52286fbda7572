//! Settings command handler

use crate::cli::SettingsCommand;
use crate::config::Config;
use crate::error::Result;
use crate::session::UserSettings;
use colored::Colorize;

/// Handle settings commands
pub fn handle_settings(config: &Config, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            let store = super::history::build_store(config);
            let settings = config.user_settings(store.len());
            print_settings(&settings);
            Ok(())
        }
    }
}

/// Renders the user settings panel
pub(crate) fn print_settings(settings: &UserSettings) {
    println!("\n{}", "Settings".bold());
    println!(
        "  Response style:  {} ({})",
        settings.response_style.to_string().cyan(),
        settings.response_style.description()
    );
    println!("  Theme:           {}", settings.theme.to_string().cyan());
    println!(
        "  Notifications:   {}",
        if settings.notifications {
            "on".green()
        } else {
            "off".yellow()
        }
    );
    println!(
        "  Average session: {} minutes",
        settings.average_session_length
    );
    println!(
        "  Conversations:   {} {}",
        settings.total_conversations,
        "(snapshot)".dimmed()
    );
    println!();
}
