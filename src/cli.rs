//! Command-line interface definition for Neuron Chat
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, conversation history, and
//! settings.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Neuron Chat - terminal chat with a simulated assistant
///
/// Chat interactively, browse and search the conversation history, and
/// export transcripts as plain text.
#[derive(Parser, Debug, Clone)]
#[command(name = "neuron")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Neuron Chat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Resume a conversation by id or id prefix
        #[arg(short, long)]
        resume: Option<String>,

        /// Response style for this session (formal, casual, creative)
        #[arg(long)]
        style: Option<String>,

        /// Seed the responder's random source for reproducible replies
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Browse, search, and export conversation history
    History {
        /// History subcommand
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Inspect user settings
    Settings {
        /// Settings subcommand
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

/// History subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// List conversations grouped by day
    List {
        /// Filter conversations by a search query
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show a conversation transcript
    Show {
        /// Conversation id or id prefix
        id: String,

        /// Print the conversation as JSON instead of a transcript
        #[arg(long)]
        json: bool,
    },

    /// Export a conversation to a text file
    Export {
        /// Conversation id or id prefix
        id: String,

        /// Output path (defaults to conversation-<id>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommand {
    /// Show the effective user settings
    Show,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_chat_command() {
        let cli = Cli::try_parse_from(["neuron", "chat"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert!(matches!(cli.command, Commands::Chat { .. }));
    }

    #[test]
    fn test_cli_parse_chat_with_resume() {
        let cli = Cli::try_parse_from(["neuron", "chat", "--resume", "1a2b3c4d"]).unwrap();
        if let Commands::Chat { resume, .. } = cli.command {
            assert_eq!(resume, Some("1a2b3c4d".to_string()));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_with_style_and_seed() {
        let cli =
            Cli::try_parse_from(["neuron", "chat", "--style", "casual", "--seed", "7"]).unwrap();
        if let Commands::Chat { style, seed, .. } = cli.command {
            assert_eq!(style, Some("casual".to_string()));
            assert_eq!(seed, Some(7));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_defaults() {
        let cli = Cli::try_parse_from(["neuron", "chat"]).unwrap();
        if let Commands::Chat {
            resume,
            style,
            seed,
        } = cli.command
        {
            assert_eq!(resume, None);
            assert_eq!(style, None);
            assert_eq!(seed, None);
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_history_list() {
        let cli = Cli::try_parse_from(["neuron", "history", "list"]).unwrap();
        if let Commands::History { command } = cli.command {
            assert!(matches!(command, HistoryCommand::List { query: None }));
        } else {
            panic!("Expected History command");
        }
    }

    #[test]
    fn test_cli_parse_history_list_with_query() {
        let cli = Cli::try_parse_from(["neuron", "history", "list", "--query", "email"]).unwrap();
        if let Commands::History { command } = cli.command {
            if let HistoryCommand::List { query } = command {
                assert_eq!(query, Some("email".to_string()));
            } else {
                panic!("Expected List command");
            }
        } else {
            panic!("Expected History command");
        }
    }

    #[test]
    fn test_cli_parse_history_show() {
        let cli = Cli::try_parse_from(["neuron", "history", "show", "1"]).unwrap();
        if let Commands::History { command } = cli.command {
            if let HistoryCommand::Show { id, json } = command {
                assert_eq!(id, "1");
                assert!(!json);
            } else {
                panic!("Expected Show command");
            }
        } else {
            panic!("Expected History command");
        }
    }

    #[test]
    fn test_cli_parse_history_show_json() {
        let cli = Cli::try_parse_from(["neuron", "history", "show", "1", "--json"]).unwrap();
        if let Commands::History {
            command: HistoryCommand::Show { json, .. },
        } = cli.command
        {
            assert!(json);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn test_cli_parse_history_export_with_output() {
        let cli = Cli::try_parse_from([
            "neuron",
            "history",
            "export",
            "2",
            "--output",
            "transcript.txt",
        ])
        .unwrap();
        if let Commands::History {
            command: HistoryCommand::Export { id, output },
        } = cli.command
        {
            assert_eq!(id, "2");
            assert_eq!(output, Some(PathBuf::from("transcript.txt")));
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_cli_parse_history_export_default_output() {
        let cli = Cli::try_parse_from(["neuron", "history", "export", "2"]).unwrap();
        if let Commands::History {
            command: HistoryCommand::Export { id, output },
        } = cli.command
        {
            assert_eq!(id, "2");
            assert_eq!(output, None);
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_cli_parse_settings_show() {
        let cli = Cli::try_parse_from(["neuron", "settings", "show"]).unwrap();
        if let Commands::Settings { command } = cli.command {
            assert!(matches!(command, SettingsCommand::Show));
        } else {
            panic!("Expected Settings command");
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli =
            Cli::try_parse_from(["neuron", "--config", "custom.yaml", "settings", "show"]).unwrap();
        assert_eq!(cli.config, Some("custom.yaml".to_string()));
    }

    #[test]
    fn test_cli_parse_with_verbose() {
        let cli = Cli::try_parse_from(["neuron", "-v", "history", "list"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_missing_command() {
        let cli = Cli::try_parse_from(["neuron"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_invalid_command() {
        let cli = Cli::try_parse_from(["neuron", "invalid"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_export_missing_id() {
        let cli = Cli::try_parse_from(["neuron", "history", "export"]);
        assert!(cli.is_err());
    }
}
