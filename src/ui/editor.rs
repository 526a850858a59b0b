use crate::error::Result;

/// Call the system editor to edit text
///
/// Use the `edit` crate to automatically select editors by priority:
/// $VISUAL > $EDITOR > Platform default list (nano/vim/vi/emacs/...)
///
/// # Returns
/// * `Ok(Some(String))` - edited content, surrounding whitespace removed
/// * `Ok(None)` - the user cleared the content
/// * `Err(_)` - the editor could not be launched
pub fn edit_text(initial_content: &str) -> Result<Option<String>> {
    let edited = edit::edit(initial_content)?;
    Ok(non_empty(&edited))
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
