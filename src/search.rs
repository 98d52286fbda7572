//! Conversation search
//!
//! Case-insensitive substring filtering over titles, previews, and
//! message bodies.

use crate::session::Conversation;

/// Filters conversations by a case-insensitive substring query
///
/// A conversation matches when the lowercased query is a substring of its
/// lowercased title, preview, or the content of any of its messages. The
/// original relative order of the input is preserved.
///
/// Empty queries are a caller contract: callers bypass this function and
/// pass the full list through when the query is empty, so no special case
/// lives here (an empty query trivially matches everything anyway).
///
/// # Examples
///
/// ```
/// use neuron::search::search_conversations;
/// use neuron::session::Conversation;
///
/// let conversations = vec![
///     Conversation::from_first_message("Plan a birthday party"),
///     Conversation::from_first_message("Fix my resume"),
/// ];
/// let hits = search_conversations("BIRTHDAY", &conversations);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "Plan a birthday party");
/// ```
pub fn search_conversations<'a>(
    query: &str,
    conversations: &'a [Conversation],
) -> Vec<&'a Conversation> {
    let query = query.to_lowercase();

    conversations
        .iter()
        .filter(|conversation| {
            conversation.title.to_lowercase().contains(&query)
                || conversation.preview.to_lowercase().contains(&query)
                || conversation
                    .messages
                    .iter()
                    .any(|message| message.content.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ConversationStore, Role};

    fn sample_store() -> ConversationStore {
        let mut store = ConversationStore::new();
        let first = store.start_conversation("Recipe for sourdough bread").id.clone();
        store
            .append_message(&first, Role::Assistant, "Start with a rye starter.")
            .expect("append failed");
        store.start_conversation("Tax filing deadline questions");
        store
    }

    #[test]
    fn test_search_matches_title() {
        let store = sample_store();
        let hits = search_conversations("sourdough", store.conversations());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Recipe for sourdough bread");
    }

    #[test]
    fn test_search_matches_message_body() {
        let store = sample_store();
        let hits = search_conversations("rye starter", store.conversations());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Recipe for sourdough bread");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = sample_store();
        let hits = search_conversations("TAX FILING", store.conversations());
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_search_preserves_input_order() {
        let store = sample_store();
        // Both conversations contain the letter "e"; order must match input
        let hits = search_conversations("e", store.conversations());
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, store.conversations()[0].id);
        assert_eq!(hits[1].id, store.conversations()[1].id);
    }

    #[test]
    fn test_search_no_match_returns_empty() {
        let store = sample_store();
        let hits = search_conversations("quantum chromodynamics", store.conversations());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_empty_input_sequence() {
        let hits = search_conversations("anything", &[]);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        // Callers normally bypass with an empty query; if one slips
        // through, it degrades to the identity filter
        let store = sample_store();
        let hits = search_conversations("", store.conversations());
        assert_eq!(hits.len(), store.len());
    }
}
