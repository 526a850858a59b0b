//! Response handling
//!
//! Cleans the model output before it is shown to the user.

use crate::constants::ui::ERROR_PREVIEW_LENGTH;

/// Truncate string for error preview (safe handling of multibyte characters)
pub fn truncate_for_preview(s: &str) -> String {
    if s.len() <= ERROR_PREVIEW_LENGTH {
        return s.to_string();
    }
    let boundary = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= ERROR_PREVIEW_LENGTH)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..boundary])
}

/// Clean commit message response (remove markdown code block fences)
///
/// Models sometimes wrap commit messages in code fences like:
/// ````text
/// ```
/// feat(auth): add login
/// ```
/// ````
/// This function strips those fences.
pub fn clean_commit_response(response: &str) -> String {
    let trimmed = response.trim();

    if let Some(rest) = trimmed.strip_prefix("```") {
        // Skip optional language tag (e.g., "text", "markdown", etc.)
        let after_lang = if let Some(newline_pos) = rest.find('\n') {
            let lang_part = &rest[..newline_pos];
            if lang_part.trim().len() <= 20 && !lang_part.contains(' ') {
                &rest[newline_pos + 1..]
            } else {
                rest
            }
        } else {
            rest
        };

        if let Some(inner) = after_lang.strip_suffix("```") {
            return inner.trim().to_string();
        }
    }

    trimmed.to_string()
}

/// Process commit message response: clean code fences and log
pub fn process_commit_response(response: String) -> String {
    let cleaned = clean_commit_response(&response);
    tracing::debug!("Generated commit message: {}", cleaned);
    cleaned
}
