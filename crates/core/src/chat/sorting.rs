use super::types::ChatMessage;

/// Sorts messages by send time, oldest first.
///
/// The sort is stable: messages with equal send times keep their relative
/// order.
pub fn sort_chronologically(messages: &mut [ChatMessage]) {
    messages.sort_by(|a, b| a.sent_time.cmp(&b.sent_time));
}

/// Joins message contents into the bracketed wire format: `[a,b,c]`.
///
/// Contents are not escaped, so a message containing `,` or `]` is
/// indistinguishable from several messages once joined.
pub fn join_contents(messages: &[ChatMessage]) -> String {
    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    format!("[{}]", contents.join(","))
}
