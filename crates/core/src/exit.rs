//! Detection of conversation-ending inputs.

const EXIT_KEYWORDS: [&str; 4] = ["exit", "quit", "done", "thank you"];

/// Returns whether the input asks to end the conversation.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// Anything else, including inputs that merely contain a keyword, is
/// not an exit.
pub fn is_exit_message(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&normalized.as_str())
}
