use crate::git::parser::ChangeEntry;

/// How many changed paths are spelled out before eliding the rest
const MAX_LISTED_FILES: usize = 3;

/// Derive a commit message from a change list
///
/// Used when the caller supplies no message of their own. Lists up to
/// three changed paths; beyond that the remainder is summarized as a
/// count. No changes at all yields "Empty commit".
pub fn generate_message(changes: &[ChangeEntry]) -> String {
    if changes.is_empty() {
        return "Empty commit".to_string();
    }

    let listed: Vec<&str> = changes
        .iter()
        .take(MAX_LISTED_FILES)
        .map(|entry| entry.path.as_str())
        .collect();

    if changes.len() <= MAX_LISTED_FILES {
        format!("Update {}", listed.join(", "))
    } else {
        format!(
            "Update {} and {} more files",
            listed.join(", "),
            changes.len() - MAX_LISTED_FILES
        )
    }
}
