//! Calendar-day grouping and timestamp formatting
//!
//! Conversations are bucketed by the local civil date of their last
//! update for the history views. Formatting helpers produce the
//! human-readable day and clock labels; fixed en-US-style patterns stand
//! in for locale formatting.

use crate::session::Conversation;
use chrono::{DateTime, Local, NaiveDate};

/// Conversations sharing a local calendar day
#[derive(Debug)]
pub struct DayGroup<'a> {
    /// The shared civil date (derived from `updated_at`, local zone)
    pub date: NaiveDate,
    /// Conversations of that day, in input order
    pub conversations: Vec<&'a Conversation>,
}

/// Groups conversations by the local calendar date of `updated_at`
///
/// Two instants on the same civil day in the local zone map to the same
/// group regardless of clock time. Day keys appear in the order they are
/// first encountered, and each conversation keeps its position within its
/// bucket relative to the input sequence.
///
/// # Examples
///
/// ```
/// use neuron::grouping::group_by_day;
/// use neuron::session::Conversation;
///
/// let conversations = vec![
///     Conversation::from_first_message("one"),
///     Conversation::from_first_message("two"),
/// ];
/// let groups = group_by_day(&conversations);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].conversations.len(), 2);
/// ```
pub fn group_by_day<'a, I>(conversations: I) -> Vec<DayGroup<'a>>
where
    I: IntoIterator<Item = &'a Conversation>,
{
    let mut groups: Vec<DayGroup<'a>> = Vec::new();

    for conversation in conversations {
        let date = conversation.updated_at.date_naive();
        match groups.iter_mut().find(|group| group.date == date) {
            Some(group) => group.conversations.push(conversation),
            None => groups.push(DayGroup {
                date,
                conversations: vec![conversation],
            }),
        }
    }

    groups
}

/// Long day label, e.g. "October 15, 2025"
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// 12-hour clock label with seconds, e.g. "10:30:00 AM"
pub fn format_time(timestamp: DateTime<Local>) -> String {
    timestamp.format("%-I:%M:%S %p").to_string()
}

/// 12-hour clock label without seconds, e.g. "10:30 AM"
pub fn format_time_short(timestamp: DateTime<Local>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// Long date-time label, e.g. "October 15, 2025, 10:30:00 AM"
pub fn format_date_time(timestamp: DateTime<Local>) -> String {
    timestamp.format("%B %-d, %Y, %-I:%M:%S %p").to_string()
}
