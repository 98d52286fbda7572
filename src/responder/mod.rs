//! Responder abstraction for reply generation
//!
//! This module contains the responder seam and the built-in mock
//! implementation. Everything behind the trait is simulated: there is no
//! model inference and no network call, only canned keyword-matched
//! replies behind an artificial delay.

pub mod mock;

pub use mock::MockResponder;

use crate::config::ResponderConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Produces assistant replies for user input
///
/// Implementations always return non-empty text for any input, including
/// the empty string.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Generates a reply to the given user input
    ///
    /// May suspend to simulate inference latency before answering.
    async fn reply(&self, input: &str) -> Result<String>;
}

/// Create a responder instance based on configuration
///
/// # Arguments
///
/// * `config` - Responder configuration, including the kind to build
///
/// # Errors
///
/// Returns an error if the configured kind is unknown.
///
/// # Examples
///
/// ```
/// use neuron::config::ResponderConfig;
/// use neuron::responder::create_responder;
///
/// let responder = create_responder(&ResponderConfig::default());
/// assert!(responder.is_ok());
/// ```
pub fn create_responder(config: &ResponderConfig) -> Result<Box<dyn Responder>> {
    match config.kind.as_str() {
        "mock" => Ok(Box::new(MockResponder::new(config.clone()))),
        other => Err(crate::error::NeuronError::Responder(format!(
            "Unknown responder kind: {}",
            other
        ))
        .into()),
    }
}
