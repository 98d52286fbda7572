//! Conversation store and session state
//!
//! This module implements the in-memory conversation store: an ordered,
//! most-recent-first sequence of conversations plus the identifier of the
//! currently selected conversation. The store exclusively owns all
//! conversation and message records; callers hold only transient
//! references for rendering.

use crate::error::{NeuronError, Result};
use chrono::NaiveDate;
use std::collections::HashSet;

pub mod seed;
pub mod types;

pub use types::{
    derive_title, Conversation, Message, ResponseStyle, Role, Theme, UserSettings,
    TITLE_MAX_CHARS,
};

/// In-memory store of conversations, most recent first
///
/// Mutated only by the single UI control flow; every read observes a
/// consistent snapshot. Conversations are prepended on creation and never
/// reordered afterwards.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    selected: Option<String>,
}

impl ConversationStore {
    /// Creates an empty store with no selection
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron::session::ConversationStore;
    ///
    /// let store = ConversationStore::new();
    /// assert!(store.is_empty());
    /// assert!(store.selected().is_none());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new conversation from the first user message
    ///
    /// The conversation is prepended to the sequence and becomes the
    /// current selection. Non-empty text is a caller contract (the chat
    /// loop skips blank input); it is not validated here.
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron::session::ConversationStore;
    ///
    /// let mut store = ConversationStore::new();
    /// let id = store.start_conversation("Hello!").id.clone();
    /// assert_eq!(store.len(), 1);
    /// assert_eq!(store.selected_id(), Some(id.as_str()));
    /// ```
    pub fn start_conversation(&mut self, text: impl Into<String>) -> &Conversation {
        let conversation = Conversation::from_first_message(text);
        self.selected = Some(conversation.id.clone());
        self.conversations.insert(0, conversation);
        &self.conversations[0]
    }

    /// Appends a message to an existing conversation
    ///
    /// Bumps the conversation's `updated_at` to the new message's
    /// timestamp. The sequence order is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::ConversationNotFound`] when the identifier
    /// does not reference a stored conversation.
    pub fn append_message(
        &mut self,
        conversation_id: &str,
        role: Role,
        content: impl Into<String>,
    ) -> Result<&Message> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| NeuronError::ConversationNotFound(conversation_id.to_string()))?;

        let message = Message::new(role, content);
        conversation.updated_at = message.timestamp;
        conversation.messages.push(message);

        let last = conversation.messages.len() - 1;
        Ok(&conversation.messages[last])
    }

    /// Selects a conversation by identifier
    ///
    /// Selecting an identifier that is not in the store is allowed; it
    /// simply resolves to "no active conversation" when read back through
    /// [`ConversationStore::selected`].
    pub fn select_conversation(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    /// Clears the current selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Returns the raw selected identifier, if any
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolves the selection to a conversation
    ///
    /// Returns `None` when nothing is selected or the selected identifier
    /// no longer matches a stored conversation.
    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected.as_deref()?;
        self.get(id)
    }

    /// Returns the full conversation sequence, most recent first
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Looks up a conversation by exact identifier
    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Looks up a conversation by identifier prefix
    ///
    /// Matches exact identifiers first, then the first conversation whose
    /// identifier starts with `prefix`. Useful for the short ids printed
    /// by the history listing.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Conversation> {
        if prefix.is_empty() {
            return None;
        }
        self.get(prefix)
            .or_else(|| self.conversations.iter().find(|c| c.id.starts_with(prefix)))
    }

    /// Number of conversations in the store
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Returns true if the store holds no conversations
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Total number of messages across all conversations
    pub fn message_count(&self) -> usize {
        self.conversations.iter().map(|c| c.messages.len()).sum()
    }

    /// Number of distinct local calendar days with conversation activity
    ///
    /// Counts the civil dates conversations were created on.
    pub fn active_days(&self) -> usize {
        self.conversations
            .iter()
            .map(|c| c.created_at.date_naive())
            .collect::<HashSet<NaiveDate>>()
            .len()
    }

    /// Inserts an already-built conversation at the end of the sequence
    ///
    /// Used to pre-populate the store with seed data; preserves the
    /// caller's ordering rather than prepending.
    pub fn push_seeded(&mut self, conversation: Conversation) {
        self.conversations.push(conversation);
    }
}
