//! Neuron Chat - terminal chat with a simulated assistant
//!
//! This library provides the core functionality for Neuron Chat: the
//! in-memory conversation store, the mock responder, and the derived
//! operations (search, calendar-day grouping, transcript export) behind
//! the CLI.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: Conversation store, data model, and demo seed data
//! - `responder`: Reply-generation seam and the mock implementation
//! - `search` / `grouping` / `export`: Pure derived operations
//! - `commands`: CLI command handlers (chat loop, history, settings)
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```
//! use neuron::session::{ConversationStore, Role};
//!
//! let mut store = ConversationStore::new();
//! let id = store.start_conversation("Hello!").id.clone();
//! store.append_message(&id, Role::Assistant, "Hi there!").unwrap();
//! assert_eq!(store.message_count(), 2);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod grouping;
pub mod responder;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use error::{NeuronError, Result};
pub use export::export_as_text;
pub use grouping::group_by_day;
pub use responder::{create_responder, MockResponder, Responder};
pub use search::search_conversations;
pub use session::{Conversation, ConversationStore, Message, Role, UserSettings};
