/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `chat`     — Interactive chat session
- `history`  — List, show, and export conversations
- `settings` — Inspect user settings

These handlers are intentionally small and use the library components:
the conversation store, the responder, and the derived operations.
*/

pub mod history;
pub mod settings;

// Special commands parser for the interactive session
pub mod special_commands;

// Chat command handler
pub mod chat {
    //! Interactive chat mode handler.
    //!
    //! Builds the store and responder, then runs a readline-based loop
    //! that routes slash commands locally and submits everything else as
    //! a chat message: the user turn is appended, a typing indicator is
    //! shown while the responder simulates latency, and the reply is
    //! appended and rendered.

    use crate::commands::history::{render_conversation, short_id};
    use crate::commands::settings::print_settings;
    use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
    use crate::config::Config;
    use crate::error::Result;
    use crate::export::{default_export_file_name, export_as_text};
    use crate::grouping::format_time_short;
    use crate::responder::{create_responder, Responder};
    use crate::search::search_conversations;
    use crate::session::{Conversation, ConversationStore, ResponseStyle, Role, UserSettings};
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;
    use std::path::PathBuf;

    /// Whether the session loop keeps running after a command
    #[derive(Debug, PartialEq, Eq)]
    enum Flow {
        Continue,
        Exit,
    }

    /// Start an interactive chat session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `resume` - Optional conversation id or prefix to reopen
    /// * `style` - Optional response style override for this session
    /// * `seed` - Optional responder RNG seed for reproducible replies
    pub async fn run_chat(
        config: Config,
        resume: Option<String>,
        style: Option<String>,
        seed: Option<u64>,
    ) -> Result<()> {
        tracing::info!("Starting interactive chat session");

        let mut store = super::history::build_store(&config);
        let mut settings = config.user_settings(store.len());

        if let Some(style) = style.as_deref() {
            match ResponseStyle::parse_str(style) {
                Ok(parsed) => settings.response_style = parsed,
                Err(message) => println!("{}", message.yellow()),
            }
        }

        let mut responder_config = config.responder.clone();
        if seed.is_some() {
            responder_config.seed = seed;
        }
        let responder = create_responder(&responder_config)?;

        print_welcome_banner();

        if let Some(prefix) = resume.as_deref() {
            match store.find_by_prefix(prefix).map(|c| c.id.clone()) {
                Some(id) => {
                    store.select_conversation(id);
                    if let Some(conversation) = store.selected() {
                        println!(
                            "{}",
                            format!("Resumed conversation {}", short_id(&conversation.id)).green()
                        );
                        render_conversation(conversation);
                    }
                }
                None => println!(
                    "{}",
                    format!("No conversation matching '{}'", prefix).yellow()
                ),
            }
        }

        let mut rl = DefaultEditor::new()?;

        loop {
            let prompt = format_prompt(&store);
            match rl.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    rl.add_history_entry(trimmed)?;

                    match parse_special_command(trimmed) {
                        Ok(SpecialCommand::None) => {
                            send_message(
                                &mut store,
                                responder.as_ref(),
                                config.chat.max_input_chars,
                                trimmed,
                            )
                            .await;
                        }
                        Ok(command) => {
                            if handle_command(command, &mut store, &mut settings) == Flow::Exit {
                                break;
                            }
                        }
                        Err(error) => println!("{}\n", error.to_string().red()),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Submits a chat message: start-or-append, then append the reply
    ///
    /// Input longer than `max_input_chars` is silently truncated. Errors
    /// are rendered locally; a stale selection never aborts the session.
    async fn send_message(
        store: &mut ConversationStore,
        responder: &dyn Responder,
        max_input_chars: usize,
        input: &str,
    ) {
        let text = truncate_input(input, max_input_chars);

        let conversation_id = match store.selected().map(|c| c.id.clone()) {
            Some(id) => {
                if let Err(error) = store.append_message(&id, Role::User, text.as_str()) {
                    println!("{}\n", format!("Error: {}", error).red());
                    return;
                }
                id
            }
            None => store.start_conversation(text.as_str()).id.clone(),
        };

        println!("{}", "AI Assistant is typing...".dimmed());

        match responder.reply(&text).await {
            Ok(reply) => {
                match store.append_message(&conversation_id, Role::Assistant, reply.as_str()) {
                    Ok(_) => {
                        println!("\n{}", "AI Assistant:".cyan().bold());
                        println!("{}\n", reply);
                    }
                    Err(error) => println!("{}\n", format!("Error: {}", error).red()),
                }
            }
            Err(error) => println!("{}\n", format!("Error: {}", error).red()),
        }
    }

    /// Applies a parsed special command to the session state
    fn handle_command(
        command: SpecialCommand,
        store: &mut ConversationStore,
        settings: &mut UserSettings,
    ) -> Flow {
        match command {
            SpecialCommand::NewConversation => {
                store.clear_selection();
                println!("Started a new conversation. Type a message to begin.\n");
            }
            SpecialCommand::ListConversations => {
                print_conversation_list(store.conversations().iter());
            }
            SpecialCommand::OpenConversation(prefix) => {
                match store.find_by_prefix(&prefix).map(|c| c.id.clone()) {
                    Some(id) => {
                        store.select_conversation(id);
                        if let Some(conversation) = store.selected() {
                            render_conversation(conversation);
                        }
                    }
                    None => println!(
                        "{}\n",
                        format!("No conversation matching '{}'", prefix).yellow()
                    ),
                }
            }
            SpecialCommand::Search(query) => {
                if query.is_empty() {
                    print_conversation_list(store.conversations().iter());
                } else {
                    let hits = search_conversations(&query, store.conversations());
                    if hits.is_empty() {
                        println!("{}\n", "No conversations found".yellow());
                    } else {
                        print_conversation_list(hits.into_iter());
                    }
                }
            }
            SpecialCommand::Export(path) => export_selected(store, path),
            SpecialCommand::SetStyle(style) => {
                settings.response_style = style;
                println!("Response style set to {} (session only)\n", style);
            }
            SpecialCommand::SetTheme(theme) => {
                settings.theme = theme;
                println!("Theme set to {} (session only)\n", theme);
            }
            SpecialCommand::SetNotifications(enabled) => {
                settings.notifications = enabled;
                println!(
                    "Notifications turned {} (session only)\n",
                    if enabled { "on" } else { "off" }
                );
            }
            SpecialCommand::ShowSettings => print_settings(settings),
            SpecialCommand::ShowStatus => print_status_display(store, settings),
            SpecialCommand::Help => print_help(),
            SpecialCommand::Exit => return Flow::Exit,
            SpecialCommand::None => {}
        }
        Flow::Continue
    }

    /// Exports the active conversation, defaulting the file name
    fn export_selected(store: &ConversationStore, path: Option<PathBuf>) {
        let Some(conversation) = store.selected() else {
            println!("{}\n", "No active conversation to export.".yellow());
            return;
        };

        let path = path.unwrap_or_else(|| PathBuf::from(default_export_file_name(conversation)));
        match std::fs::write(&path, export_as_text(conversation)) {
            Ok(()) => println!(
                "{}\n",
                format!(
                    "Exported conversation {} to {}",
                    short_id(&conversation.id),
                    path.display()
                )
                .green()
            ),
            Err(error) => println!("{}\n", format!("Error: {}", error).red()),
        }
    }

    /// Truncates input to the configured maximum, silently
    fn truncate_input(input: &str, max_chars: usize) -> String {
        if input.chars().count() > max_chars {
            input.chars().take(max_chars).collect()
        } else {
            input.to_string()
        }
    }

    /// Readline prompt showing the active conversation
    fn format_prompt(store: &ConversationStore) -> String {
        match store.selected() {
            Some(conversation) => format!("[{}] >> ", short_id(&conversation.id)),
            None => "[new] >> ".to_string(),
        }
    }

    fn print_conversation_list<'a, I>(conversations: I)
    where
        I: Iterator<Item = &'a Conversation>,
    {
        let mut any = false;
        println!();
        for conversation in conversations {
            any = true;
            println!(
                "  {}  {} ({} messages, {})",
                short_id(&conversation.id).cyan(),
                conversation.title,
                conversation.messages.len(),
                format_time_short(conversation.updated_at)
            );
        }
        if !any {
            println!(
                "{}",
                "No conversations yet. Say something to start one.".yellow()
            );
        }
        println!();
    }

    /// Display welcome banner at the start of the interactive session
    fn print_welcome_banner() {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║               Neuron Chat - Interactive Session              ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Your intelligent assistant for instant answers, creative writing,");
        println!("problem-solving, and more.\n");
        println!("Try one of these to get started:");
        println!("  - Help me write a professional email to request time off next week.");
        println!("  - Explain quantum computing in simple terms with practical examples.");
        println!("  - What are the best practices for optimizing React application performance?");
        println!("  - Help me brainstorm unique ideas for a sci-fi short story.\n");
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }

    /// Display detailed status information about the current session
    fn print_status_display(store: &ConversationStore, settings: &UserSettings) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                     Neuron Session Status                    ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        match store.selected() {
            Some(conversation) => println!(
                "Active conversation: {} ({})",
                short_id(&conversation.id).cyan(),
                conversation.title
            ),
            None => println!("Active conversation: {}", "none".dimmed()),
        }
        println!("Conversations:       {}", store.len());
        println!("Messages:            {}", store.message_count());
        println!(
            "Response style:      {} ({})",
            settings.response_style,
            settings.response_style.description()
        );
        println!("Theme:               {}", settings.theme);
        println!(
            "Notifications:       {}",
            if settings.notifications { "on" } else { "off" }
        );
        println!();
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::responder::MockResponder;

        fn empty_settings() -> UserSettings {
            Config::default().user_settings(0)
        }

        #[test]
        fn test_truncate_input_below_limit_unchanged() {
            assert_eq!(truncate_input("hello", 10), "hello");
        }

        #[test]
        fn test_truncate_input_is_silent() {
            let text = "a".repeat(20);
            let truncated = truncate_input(&text, 5);
            assert_eq!(truncated, "aaaaa");
        }

        #[test]
        fn test_truncate_input_counts_characters() {
            let text = "é".repeat(10);
            assert_eq!(truncate_input(&text, 4).chars().count(), 4);
        }

        #[test]
        fn test_format_prompt_without_selection() {
            let store = ConversationStore::new();
            assert_eq!(format_prompt(&store), "[new] >> ");
        }

        #[test]
        fn test_format_prompt_with_selection() {
            let mut store = ConversationStore::new();
            let id = store.start_conversation("hello").id.clone();
            let prompt = format_prompt(&store);
            assert_eq!(prompt, format!("[{}] >> ", short_id(&id)));
        }

        #[test]
        fn test_format_prompt_with_stale_selection() {
            let mut store = ConversationStore::new();
            store.start_conversation("hello");
            store.select_conversation("gone");
            // Stale selection reads as no active conversation
            assert_eq!(format_prompt(&store), "[new] >> ");
        }

        #[test]
        fn test_handle_command_new_clears_selection() {
            let mut store = ConversationStore::new();
            store.start_conversation("hello");
            let mut settings = empty_settings();

            let flow = handle_command(SpecialCommand::NewConversation, &mut store, &mut settings);
            assert_eq!(flow, Flow::Continue);
            assert!(store.selected().is_none());
        }

        #[test]
        fn test_handle_command_open_selects_by_prefix() {
            let mut store = ConversationStore::new();
            let id = store.start_conversation("hello").id.clone();
            store.clear_selection();
            let mut settings = empty_settings();

            let flow = handle_command(
                SpecialCommand::OpenConversation(id[..8].to_string()),
                &mut store,
                &mut settings,
            );
            assert_eq!(flow, Flow::Continue);
            assert_eq!(store.selected().map(|c| c.id.clone()), Some(id));
        }

        #[test]
        fn test_handle_command_open_unknown_prefix_keeps_selection_clear() {
            let mut store = ConversationStore::new();
            let mut settings = empty_settings();

            handle_command(
                SpecialCommand::OpenConversation("nope".to_string()),
                &mut store,
                &mut settings,
            );
            assert!(store.selected().is_none());
        }

        #[test]
        fn test_handle_command_set_style_mutates_session_settings() {
            let mut store = ConversationStore::new();
            let mut settings = empty_settings();

            handle_command(
                SpecialCommand::SetStyle(ResponseStyle::Creative),
                &mut store,
                &mut settings,
            );
            assert_eq!(settings.response_style, ResponseStyle::Creative);
        }

        #[test]
        fn test_handle_command_set_notifications() {
            let mut store = ConversationStore::new();
            let mut settings = empty_settings();
            assert!(settings.notifications);

            handle_command(
                SpecialCommand::SetNotifications(false),
                &mut store,
                &mut settings,
            );
            assert!(!settings.notifications);
        }

        #[test]
        fn test_handle_command_export_without_selection_is_noop() {
            let mut store = ConversationStore::new();
            let mut settings = empty_settings();

            let flow = handle_command(SpecialCommand::Export(None), &mut store, &mut settings);
            assert_eq!(flow, Flow::Continue);
        }

        #[test]
        fn test_handle_command_exit() {
            let mut store = ConversationStore::new();
            let mut settings = empty_settings();

            let flow = handle_command(SpecialCommand::Exit, &mut store, &mut settings);
            assert_eq!(flow, Flow::Exit);
        }

        #[test]
        fn test_export_selected_writes_file() {
            let dir = tempfile::tempdir().expect("tempdir failed");
            let path = dir.path().join("out.txt");
            let mut store = ConversationStore::new();
            store.start_conversation("export me");

            export_selected(&store, Some(path.clone()));

            let written = std::fs::read_to_string(&path).expect("read failed");
            assert!(written.starts_with("Conversation: export me\n"));
        }

        #[tokio::test]
        async fn test_send_message_starts_conversation_and_appends_reply() {
            let mut store = ConversationStore::new();
            let responder = MockResponder::with_seed(1);

            send_message(&mut store, &responder, 4000, "random text").await;

            assert_eq!(store.len(), 1);
            let conversation = store.selected().expect("selected conversation");
            assert_eq!(conversation.messages.len(), 2);
            assert_eq!(conversation.messages[0].role, Role::User);
            assert_eq!(conversation.messages[1].role, Role::Assistant);
            assert!(conversation.messages[1].content.contains("\"random text\""));
        }

        #[tokio::test]
        async fn test_send_message_appends_to_selected_conversation() {
            let mut store = ConversationStore::new();
            let responder = MockResponder::with_seed(2);

            send_message(&mut store, &responder, 4000, "first message").await;
            send_message(&mut store, &responder, 4000, "second message").await;

            assert_eq!(store.len(), 1);
            let conversation = store.selected().expect("selected conversation");
            assert_eq!(conversation.messages.len(), 4);
        }

        #[tokio::test]
        async fn test_send_message_truncates_long_input() {
            let mut store = ConversationStore::new();
            let responder = MockResponder::with_seed(3);
            let long = "z".repeat(100);

            send_message(&mut store, &responder, 10, &long).await;

            let conversation = store.selected().expect("selected conversation");
            assert_eq!(conversation.messages[0].content, "z".repeat(10));
        }

        #[test]
        fn test_print_status_display_smoke() {
            let mut store = ConversationStore::new();
            store.start_conversation("hello");
            let settings = empty_settings();
            print_status_display(&store, &settings);
        }

        #[test]
        fn test_print_welcome_banner_smoke() {
            print_welcome_banner();
        }
    }
}
