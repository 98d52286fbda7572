//! Error types for Neuron Chat
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Neuron Chat operations
///
/// This enum encompasses all possible errors that can occur during
/// session management, configuration loading, response generation,
/// and transcript export.
#[derive(Error, Debug)]
pub enum NeuronError {
    /// Operation referenced a conversation identifier absent from the store
    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Responder-related errors (unknown kind, generation failure)
    #[error("Responder error: {0}")]
    Responder(String),

    /// Transcript export errors
    #[error("Export error: {0}")]
    Export(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Neuron Chat operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
