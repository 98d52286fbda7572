//! Special commands parser for interactive chat mode
//!
//! This module parses the slash commands available during interactive
//! chat sessions. Special commands modify the session state or display
//! information rather than being sent to the responder:
//! - Start a new conversation or open an existing one
//! - List and search the conversation history
//! - Export the active conversation
//! - Change session settings (style, theme, notifications)
//! - View status and help, or exit
//!
//! Commands are prefixed with `/` and are case-insensitive; arguments
//! keep their original casing.

use crate::session::{ResponseStyle, Theme};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during interactive chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Clear the selection so the next message starts a new conversation
    NewConversation,

    /// List all conversations in the store
    ListConversations,

    /// Select a conversation by id or id prefix
    OpenConversation(String),

    /// Filter the history by a search query (empty query lists everything)
    Search(String),

    /// Export the active conversation, optionally to a specific path
    Export(Option<PathBuf>),

    /// Change the session response style
    SetStyle(ResponseStyle),

    /// Change the session theme
    SetTheme(Theme),

    /// Toggle reply notifications
    SetNotifications(bool),

    /// Display the current user settings
    ShowSettings,

    /// Display session status
    ShowStatus,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command; process as a regular chat message
    None,
}

/// Parse a user input string into a special command
///
/// Checks if the input matches any special command pattern. Command
/// words are case-insensitive; arguments are passed through verbatim.
///
/// # Errors
///
/// Returns [`CommandError::UnknownCommand`] if the input starts with "/"
/// but is not a valid command, [`CommandError::UnsupportedArgument`] for
/// invalid arguments, and [`CommandError::MissingArgument`] when a
/// required argument is absent.
///
/// # Examples
///
/// ```
/// use neuron::commands::special_commands::{parse_special_command, SpecialCommand};
/// use neuron::session::ResponseStyle;
///
/// let cmd = parse_special_command("/style casual").unwrap();
/// assert_eq!(cmd, SpecialCommand::SetStyle(ResponseStyle::Casual));
///
/// let cmd = parse_special_command("hello there").unwrap();
/// assert_eq!(cmd, SpecialCommand::None);
///
/// assert!(parse_special_command("/frobnicate").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    // Bare "exit"/"quit" work without the slash prefix
    if lower == "exit" || lower == "quit" {
        return Ok(SpecialCommand::Exit);
    }
    if !trimmed.starts_with('/') {
        return Ok(SpecialCommand::None);
    }

    let (command, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((command, arg)) => (command.to_lowercase(), arg.trim()),
        None => (lower, ""),
    };

    match command.as_str() {
        "/new" => reject_argument(SpecialCommand::NewConversation, "/new", arg),
        "/list" => reject_argument(SpecialCommand::ListConversations, "/list", arg),

        "/open" => {
            if arg.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/open".to_string(),
                    usage: "/open <id>".to_string(),
                })
            } else {
                Ok(SpecialCommand::OpenConversation(arg.to_string()))
            }
        }

        // Empty query is allowed: it falls back to the full listing
        "/search" => Ok(SpecialCommand::Search(arg.to_string())),

        "/export" => {
            if arg.is_empty() {
                Ok(SpecialCommand::Export(None))
            } else {
                Ok(SpecialCommand::Export(Some(PathBuf::from(arg))))
            }
        }

        "/style" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "/style".to_string(),
                    usage: "/style <formal|casual|creative>".to_string(),
                });
            }
            ResponseStyle::parse_str(arg)
                .map(SpecialCommand::SetStyle)
                .map_err(|_| CommandError::UnsupportedArgument {
                    command: "/style".to_string(),
                    arg: arg.to_string(),
                })
        }

        "/theme" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "/theme".to_string(),
                    usage: "/theme <dark|light|system>".to_string(),
                });
            }
            Theme::parse_str(arg)
                .map(SpecialCommand::SetTheme)
                .map_err(|_| CommandError::UnsupportedArgument {
                    command: "/theme".to_string(),
                    arg: arg.to_string(),
                })
        }

        "/notifications" => match arg.to_lowercase().as_str() {
            "on" => Ok(SpecialCommand::SetNotifications(true)),
            "off" => Ok(SpecialCommand::SetNotifications(false)),
            "" => Err(CommandError::MissingArgument {
                command: "/notifications".to_string(),
                usage: "/notifications <on|off>".to_string(),
            }),
            other => Err(CommandError::UnsupportedArgument {
                command: "/notifications".to_string(),
                arg: other.to_string(),
            }),
        },

        "/settings" => reject_argument(SpecialCommand::ShowSettings, "/settings", arg),
        "/status" => reject_argument(SpecialCommand::ShowStatus, "/status", arg),
        "/help" => reject_argument(SpecialCommand::Help, "/help", arg),
        "/exit" | "/quit" => reject_argument(SpecialCommand::Exit, "/exit", arg),

        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn reject_argument(
    command: SpecialCommand,
    name: &str,
    arg: &str,
) -> Result<SpecialCommand, CommandError> {
    if arg.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::UnsupportedArgument {
            command: name.to_string(),
            arg: arg.to_string(),
        })
    }
}

/// Print help for the interactive chat session
pub fn print_help() {
    println!("\nAvailable commands:");
    println!("  /new                         Start a new conversation");
    println!("  /list                        List conversations");
    println!("  /open <id>                   Open a conversation by id or prefix");
    println!("  /search <query>              Search conversations");
    println!("  /export [path]               Export the active conversation as text");
    println!("  /style <formal|casual|creative>   Set the response style");
    println!("  /theme <dark|light|system>   Set the theme");
    println!("  /notifications <on|off>      Toggle notifications");
    println!("  /settings                    Show current settings");
    println!("  /status                      Show session status");
    println!("  /help                        Show this help");
    println!("  exit | quit                  Leave the session\n");
}
