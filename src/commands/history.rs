//! History command handlers
//!
//! Listing, transcript rendering, and text export over the in-memory
//! conversation store.

use crate::cli::HistoryCommand;
use crate::config::Config;
use crate::error::{NeuronError, Result};
use crate::export::{default_export_file_name, export_as_text};
use crate::grouping::{format_date_time, format_day_label, format_time, format_time_short, group_by_day};
use crate::search::search_conversations;
use crate::session::seed::seeded_store;
use crate::session::{Conversation, ConversationStore, Role};
use colored::Colorize;
use prettytable::{format, Table};
use std::path::PathBuf;

/// Handle history commands
pub fn handle_history(config: &Config, command: HistoryCommand) -> Result<()> {
    let store = build_store(config);

    match command {
        HistoryCommand::List { query } => {
            list_history(&store, query.as_deref());
            Ok(())
        }
        HistoryCommand::Show { id, json } => show_conversation(&store, &id, json),
        HistoryCommand::Export { id, output } => export_conversation(&store, &id, output),
    }
}

/// Builds the store the history views operate on
pub(crate) fn build_store(config: &Config) -> ConversationStore {
    if config.chat.seed_demo_data {
        seeded_store()
    } else {
        ConversationStore::new()
    }
}

fn list_history(store: &ConversationStore, query: Option<&str>) {
    if store.is_empty() {
        println!("{}", "No conversation history found.".yellow());
        return;
    }

    // Stats reflect the full store, not the filtered view
    println!("\nConversation History:");
    println!(
        "{}",
        format!(
            "{} conversations, {} messages, {} active days",
            store.len(),
            store.message_count(),
            store.active_days()
        )
        .dimmed()
    );

    // Empty queries bypass the filter entirely (caller contract)
    let filtered: Vec<&Conversation> = match query {
        Some(q) if !q.is_empty() => search_conversations(q, store.conversations()),
        _ => store.conversations().iter().collect(),
    };

    if filtered.is_empty() {
        println!("\n{}", "No conversations found".yellow());
        println!("Try adjusting your search terms\n");
        return;
    }

    for group in group_by_day(filtered.iter().copied()) {
        println!("\n{}", format_day_label(group.date).bold());

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
        table.add_row(prettytable::row![
            "ID".bold(),
            "Title".bold(),
            "Messages".bold(),
            "Last Updated".bold()
        ]);

        for conversation in group.conversations {
            let title = if conversation.title.len() > 40 {
                format!("{}...", &conversation.title[..37])
            } else {
                conversation.title.clone()
            };
            table.add_row(prettytable::row![
                short_id(&conversation.id).cyan(),
                title,
                conversation.messages.len(),
                format_time_short(conversation.updated_at)
            ]);
        }

        table.printstd();
    }

    println!();
    println!(
        "Use {} to continue a conversation.",
        "neuron chat --resume <ID>".cyan()
    );
    println!();
}

fn show_conversation(store: &ConversationStore, id: &str, json: bool) -> Result<()> {
    let conversation = store
        .find_by_prefix(id)
        .ok_or_else(|| NeuronError::ConversationNotFound(id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(conversation)?);
    } else {
        render_conversation(conversation);
    }
    Ok(())
}

fn export_conversation(
    store: &ConversationStore,
    id: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let conversation = store
        .find_by_prefix(id)
        .ok_or_else(|| NeuronError::ConversationNotFound(id.to_string()))?;

    let path = output.unwrap_or_else(|| PathBuf::from(default_export_file_name(conversation)));
    std::fs::write(&path, export_as_text(conversation))?;

    println!(
        "{}",
        format!(
            "Exported conversation {} to {}",
            short_id(&conversation.id),
            path.display()
        )
        .green()
    );
    Ok(())
}

/// Renders a conversation transcript to the terminal
pub(crate) fn render_conversation(conversation: &Conversation) {
    println!("\n{}", conversation.title.bold());
    println!(
        "{}",
        format!("Created: {}", format_date_time(conversation.created_at)).dimmed()
    );
    println!();

    for message in &conversation.messages {
        let label = match message.role {
            Role::User => "You".green().bold(),
            Role::Assistant => "AI Assistant".cyan().bold(),
        };
        println!(
            "[{}] {}:",
            format_time(message.timestamp).dimmed(),
            label
        );
        println!("{}\n", message.content);
    }
}

/// Shortens an identifier for display (UUIDs collapse to 8 chars)
pub(crate) fn short_id(id: &str) -> &str {
    if id.len() > 8 {
        &id[..8]
    } else {
        id
    }
}
