//! Transcript export
//!
//! Serializes a conversation into the flat text format consumers parse
//! back, so the structure is byte-exact: a two-line header, a separator
//! of exactly fifty `=` framed by blank lines, then one block per message
//! followed by exactly one blank line.

use crate::grouping::{format_date_time, format_time};
use crate::session::Conversation;

/// Width of the `=` separator line
const SEPARATOR_WIDTH: usize = 50;

/// Serializes a conversation into a flat text transcript
///
/// ```text
/// Conversation: {title}
/// Created: {long date-time}
///
/// ==================================================
///
/// [{time}] You:
/// {content}
///
/// [{time}] AI Assistant:
/// {content}
///
/// ```
///
/// # Examples
///
/// ```
/// use neuron::export::export_as_text;
/// use neuron::session::Conversation;
///
/// let conversation = Conversation::from_first_message("Hi");
/// let text = export_as_text(&conversation);
/// assert!(text.starts_with("Conversation: Hi\nCreated: "));
/// assert!(text.contains("You:\nHi\n\n"));
/// ```
pub fn export_as_text(conversation: &Conversation) -> String {
    let mut text = format!("Conversation: {}\n", conversation.title);
    text.push_str(&format!(
        "Created: {}\n",
        format_date_time(conversation.created_at)
    ));
    text.push_str(&format!("\n{}\n\n", "=".repeat(SEPARATOR_WIDTH)));

    for message in &conversation.messages {
        text.push_str(&format!(
            "[{}] {}:\n{}\n\n",
            format_time(message.timestamp),
            message.role.label(),
            message.content
        ));
    }

    text
}

/// Default file name for an exported transcript
///
/// # Examples
///
/// ```
/// use neuron::export::default_export_file_name;
/// use neuron::session::Conversation;
///
/// let conversation = Conversation::from_first_message("Hi");
/// let name = default_export_file_name(&conversation);
/// assert!(name.starts_with("conversation-"));
/// assert!(name.ends_with(".txt"));
/// ```
pub fn default_export_file_name(conversation: &Conversation) -> String {
    format!("conversation-{}.txt", conversation.id)
}
