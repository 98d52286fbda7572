//! Core data model for chat sessions
//!
//! Defines the message, conversation, and user-settings records shared by
//! the store, the derived operations, and the CLI surface. Field names and
//! enum value sets are a fixed interface: any layer built on top of this
//! core must agree on this shape.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of characters retained in a derived conversation title
/// before the ellipsis is appended.
pub const TITLE_MAX_CHARS: usize = 50;

/// Author of a message turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A turn authored by the human user
    User,
    /// A turn authored by the simulated assistant
    Assistant,
}

impl Role {
    /// Transcript label for this role ("You" / "AI Assistant")
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron::session::Role;
    ///
    /// assert_eq!(Role::User.label(), "You");
    /// assert_eq!(Role::Assistant.label(), "AI Assistant");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "AI Assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single turn in a conversation
///
/// Immutable once created: the store only ever appends messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Identifier, unique within its conversation
    pub id: String,
    /// Author of the turn
    pub role: Role,
    /// Message body, stored verbatim
    pub content: String,
    /// Local instant the message was created
    pub timestamp: DateTime<Local>,
}

impl Message {
    /// Creates a message with a fresh identifier and the current timestamp
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Creates a new user message
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron::session::{Message, Role};
    ///
    /// let msg = Message::user("Hello!");
    /// assert_eq!(msg.role, Role::User);
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// An ordered thread of messages with title/preview metadata
///
/// Invariants: `messages` is never empty once the conversation exists,
/// `updated_at >= created_at`, and the title never exceeds
/// `TITLE_MAX_CHARS + 3` characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Globally unique identifier
    pub id: String,
    /// Derived display title (first message, truncated)
    pub title: String,
    /// First message text, stored verbatim
    pub preview: String,
    /// Ordered message sequence, append-only
    pub messages: Vec<Message>,
    /// Set once at creation
    pub created_at: DateTime<Local>,
    /// Refreshed to the timestamp of every appended message
    pub updated_at: DateTime<Local>,
}

impl Conversation {
    /// Creates a conversation from the first user message
    ///
    /// The title is the message text truncated to [`TITLE_MAX_CHARS`]
    /// characters with `"..."` appended iff the text was longer; the
    /// preview keeps the full text. Both timestamps equal the first
    /// message's timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron::session::Conversation;
    ///
    /// let conversation = Conversation::from_first_message("Hi");
    /// assert_eq!(conversation.title, "Hi");
    /// assert_eq!(conversation.messages.len(), 1);
    /// assert_eq!(conversation.created_at, conversation.updated_at);
    /// ```
    pub fn from_first_message(text: impl Into<String>) -> Self {
        let text = text.into();
        let first = Message::user(text.clone());
        let timestamp = first.timestamp;

        Self {
            id: Uuid::new_v4().to_string(),
            title: derive_title(&text),
            preview: text,
            messages: vec![first],
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

/// Derives a display title from the first message text
///
/// Keeps the first [`TITLE_MAX_CHARS`] characters and appends `"..."`
/// iff the text is longer.
pub fn derive_title(text: &str) -> String {
    let mut title: String = text.chars().take(TITLE_MAX_CHARS).collect();
    if text.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}

/// How the assistant phrases its replies
///
/// Informational preference only: the mock responder produces the same
/// canned output regardless of style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStyle {
    /// Professional and structured responses
    Formal,
    /// Friendly and conversational tone
    Casual,
    /// Imaginative and expressive answers
    Creative,
}

impl ResponseStyle {
    /// Parse a response style from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron::session::ResponseStyle;
    ///
    /// let style = ResponseStyle::parse_str("casual").unwrap();
    /// assert_eq!(style, ResponseStyle::Casual);
    /// ```
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "formal" => Ok(Self::Formal),
            "casual" => Ok(Self::Casual),
            "creative" => Ok(Self::Creative),
            other => Err(format!("Unknown response style: {}", other)),
        }
    }

    /// Get a user-friendly description of this style
    pub fn description(&self) -> &'static str {
        match self {
            Self::Formal => "Professional and structured responses",
            Self::Casual => "Friendly and conversational tone",
            Self::Creative => "Imaginative and expressive answers",
        }
    }
}

impl std::fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formal => write!(f, "formal"),
            Self::Casual => write!(f, "casual"),
            Self::Creative => write!(f, "creative"),
        }
    }
}

/// Interface color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    /// Follow the terminal/OS preference
    System,
}

impl Theme {
    /// Parse a theme from a string
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "system" => Ok(Self::System),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
            Self::System => write!(f, "system"),
        }
    }
}

/// User preferences for the chat experience
///
/// `total_conversations` is an informational snapshot taken when the
/// settings are built; it is not kept in sync with the live store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// Preferred assistant tone
    pub response_style: ResponseStyle,
    /// Interface theme
    pub theme: Theme,
    /// Whether reply notifications are enabled
    pub notifications: bool,
    /// Average session length in minutes
    pub average_session_length: u32,
    /// Conversation count snapshot, display-only
    pub total_conversations: usize,
}
