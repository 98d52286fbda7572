//! Built-in demo conversations
//!
//! The application boots with a handful of canned conversations so the
//! history views have something to show before the user has chatted.
//! Timestamps are fixed local instants; identifiers use the
//! `{conversation}-{index}` scheme so prefix lookup stays predictable.

use crate::session::{Conversation, ConversationStore, Message, Role};
use chrono::{DateTime, Local, TimeZone};

/// Builds a store pre-populated with the demo conversations
///
/// The sequence is already most-recent-first; nothing is selected.
///
/// # Examples
///
/// ```
/// use neuron::session::seed::seeded_store;
///
/// let store = seeded_store();
/// assert_eq!(store.len(), 5);
/// assert!(store.selected().is_none());
/// ```
pub fn seeded_store() -> ConversationStore {
    let mut store = ConversationStore::new();
    for conversation in demo_conversations() {
        store.push_seeded(conversation);
    }
    store
}

/// The demo conversations, most recent first
pub fn demo_conversations() -> Vec<Conversation> {
    vec![
        conversation(
            "1",
            "Professional Email Request",
            "Help me write a professional email...",
            at(2025, 10, 15, 10, 30),
            at(2025, 10, 15, 10, 45),
            vec![
                message(
                    "1-1",
                    Role::User,
                    "Help me write a professional email to request time off for next week.",
                    at(2025, 10, 15, 10, 30),
                ),
                message(
                    "1-2",
                    Role::Assistant,
                    "I'd be happy to help you draft a professional time-off request email. \
                     Open with the dates you are requesting, confirm that your current projects \
                     will be wrapped up before you leave, and offer handover notes for anything \
                     ongoing. Close by asking whether the dates work for the team's schedule.",
                    at(2025, 10, 15, 10, 31),
                ),
                message(
                    "1-3",
                    Role::User,
                    "That's perfect! Can you make it a bit more casual since my workplace is \
                     pretty relaxed?",
                    at(2025, 10, 15, 10, 44),
                ),
                message(
                    "1-4",
                    Role::Assistant,
                    "Absolutely! Keep the same structure but loosen the tone: \"Hey, I'd like \
                     to take next week off. Everything will be wrapped up before I go, and I'll \
                     check email if anything urgent comes up. Let me know if those dates work!\" \
                     This stays professional while sounding relaxed.",
                    at(2025, 10, 15, 10, 45),
                ),
            ],
        ),
        conversation(
            "2",
            "Quantum Computing Explained",
            "Explain quantum computing in simple terms...",
            at(2025, 10, 14, 15, 20),
            at(2025, 10, 14, 15, 22),
            vec![
                message(
                    "2-1",
                    Role::User,
                    "Explain quantum computing in simple terms. I have a computer science \
                     background but not physics.",
                    at(2025, 10, 14, 15, 20),
                ),
                message(
                    "2-2",
                    Role::Assistant,
                    "Since you have a CS background: classical bits are 0 or 1, while qubits \
                     exist in a superposition of both until measured. Entanglement correlates \
                     qubits in ways classical bits cannot, and quantum gates deterministically \
                     rotate probability amplitudes. Certain algorithms get exponential speedups, \
                     but qubits are fragile and decohere easily, so quantum machines are \
                     specialized hardware rather than classical replacements.",
                    at(2025, 10, 14, 15, 22),
                ),
            ],
        ),
        conversation(
            "3",
            "React Performance Optimization",
            "How can I optimize my React app performance?...",
            at(2025, 10, 13, 9, 15),
            at(2025, 10, 13, 9, 17),
            vec![
                message(
                    "3-1",
                    Role::User,
                    "My React app is getting slow. What are the best ways to optimize \
                     performance?",
                    at(2025, 10, 13, 9, 15),
                ),
                message(
                    "3-2",
                    Role::Assistant,
                    "Profile first to find unnecessary re-renders, then reach for memoization \
                     (useMemo, useCallback, React.memo), code splitting with lazy loading, list \
                     virtualization for long lists, and stable references instead of inline \
                     objects. Always measure with a production build.",
                    at(2025, 10, 13, 9, 17),
                ),
            ],
        ),
        conversation(
            "4",
            "Python Data Analysis Tips",
            "Best practices for analyzing large datasets...",
            at(2025, 10, 12, 14, 0),
            at(2025, 10, 12, 14, 3),
            vec![
                message(
                    "4-1",
                    Role::User,
                    "What are the best practices for analyzing large datasets in Python?",
                    at(2025, 10, 12, 14, 0),
                ),
                message(
                    "4-2",
                    Role::Assistant,
                    "Pick the right library for the data size (pandas for gigabytes, Dask or \
                     Polars beyond RAM), use efficient dtypes and chunked reads, prefer \
                     vectorized operations over loops, and push really large workloads into a \
                     database instead of loading everything into memory.",
                    at(2025, 10, 12, 14, 3),
                ),
            ],
        ),
        conversation(
            "5",
            "Creative Writing Ideas",
            "Need help brainstorming a sci-fi story...",
            at(2025, 10, 11, 18, 30),
            at(2025, 10, 11, 18, 33),
            vec![
                message(
                    "5-1",
                    Role::User,
                    "I need help brainstorming ideas for a sci-fi short story. I want something \
                     unique, not the typical space adventure.",
                    at(2025, 10, 11, 18, 30),
                ),
                message(
                    "5-2",
                    Role::Assistant,
                    "A few starting points: a memory-deletion technician who finds the same \
                     memory in multiple patients; bacteria evolved to live inside digital \
                     ecosystems; an empathy therapy that goes viral and makes everyone feel \
                     everyone else's emotions; probability farmers creating chaos to keep the \
                     future unpredictable. Happy to develop whichever resonates.",
                    at(2025, 10, 11, 18, 33),
                ),
            ],
        ),
    ]
}

fn conversation(
    id: &str,
    title: &str,
    preview: &str,
    created_at: DateTime<Local>,
    updated_at: DateTime<Local>,
    messages: Vec<Message>,
) -> Conversation {
    Conversation {
        id: id.to_string(),
        title: title.to_string(),
        preview: preview.to_string(),
        messages,
        created_at,
        updated_at,
    }
}

fn message(id: &str, role: Role, content: &str, timestamp: DateTime<Local>) -> Message {
    Message {
        id: id.to_string(),
        role,
        content: content.to_string(),
        timestamp,
    }
}

/// Fixed local instant; seed times avoid DST-ambiguous wall clocks
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .earliest()
        .unwrap_or_else(Local::now)
}
