//! Keyword-matched mock responder
//!
//! Stands in for real model inference with a small ordered keyword table,
//! first-match-wins. Matching is case-insensitive substring containment,
//! so "hi" also fires inside words like "this".

use crate::config::ResponderConfig;
use crate::error::Result;
use crate::responder::Responder;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// The fixed greeting set; one entry is chosen uniformly at random
pub const GREETINGS: [&str; 3] = [
    "Hello! I'm here to help. What can I assist you with today?",
    "Hi there! How can I help you?",
    "Welcome! What would you like to know?",
];

/// Fixed acknowledgment used for help-style questions
const HELP_PREFIX: &str = "I'd be happy to help you with that!";

/// Filler appended to the help acknowledgment
const PROCESSING_NOTE: &str =
    "I'm processing your question. Let me think about the best way to help you with that.";

/// Simulated assistant backed by the canned reply table
///
/// The random source is owned by the responder so greeting selection and
/// latency jitter can be made reproducible by seeding
/// ([`MockResponder::with_seed`]).
pub struct MockResponder {
    rng: Mutex<StdRng>,
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl MockResponder {
    /// Creates a responder from configuration
    ///
    /// Seeds the random source from `config.seed` when set, otherwise
    /// from OS entropy.
    pub fn new(config: ResponderConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
            min_delay_ms: config.min_delay_ms,
            max_delay_ms: config.max_delay_ms,
        }
    }

    /// Creates a reproducible responder with no simulated latency
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron::responder::MockResponder;
    ///
    /// let responder = MockResponder::with_seed(42);
    /// let reply = responder.generate("hello");
    /// assert!(!reply.is_empty());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            min_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Generates a reply synchronously, without the simulated delay
    ///
    /// Case-insensitive, first-match-wins over the keyword table:
    /// greetings, then help-style questions, then the echoing fallback.
    /// Always returns non-empty text, including for empty input.
    pub fn generate(&self, input: &str) -> String {
        let lowered = input.to_lowercase();

        if lowered.contains("hello") || lowered.contains("hi") {
            let index = self.lock_rng().random_range(0..GREETINGS.len());
            return GREETINGS[index].to_string();
        }

        if lowered.contains("help") || lowered.contains("how") {
            return format!("{} {}", HELP_PREFIX, PROCESSING_NOTE);
        }

        format!(
            "Thank you for your question about \"{}\". I'll provide you with a detailed answer \
             that covers the key points you're asking about. This is a simulated response that \
             would normally be generated by an AI model. In a real implementation, this would \
             connect to an actual language model API to generate contextually relevant responses.",
            input
        )
    }

    /// Uniformly random simulated latency within the configured bounds
    fn simulated_delay(&self) -> Duration {
        let millis = if self.max_delay_ms > self.min_delay_ms {
            self.lock_rng()
                .random_range(self.min_delay_ms..=self.max_delay_ms)
        } else {
            self.min_delay_ms
        };
        Duration::from_millis(millis)
    }

    fn lock_rng(&self) -> std::sync::MutexGuard<'_, StdRng> {
        // A poisoned lock only means another caller panicked mid-draw;
        // the generator state is still usable.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Responder for MockResponder {
    async fn reply(&self, input: &str) -> Result<String> {
        let delay = self.simulated_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(self.generate(input))
    }
}
