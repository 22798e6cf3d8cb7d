//! Operator confirmation before any row is touched.
//!
//! The gate asks its questions through a caller-supplied answer source,
//! so the terminal prompter in the binary and the canned answers in tests
//! go through the same logic.

use std::io;

use crate::error::CoreError;
use crate::url::ReplacementSpec;

pub const BACKUP_QUESTION: &str = "This operation could cause issues if used incorrectly. \
    Have you made a backup of your existing database?";

/// First prompt: restate exactly what will be searched for and replaced.
pub fn replacement_question(spec: &ReplacementSpec) -> String {
    format!(
        "This will search for \"{}\" in your database and replace it with \"{}\".\n\
         Are you sure you want to proceed?",
        spec.old_url(),
        spec.new_url()
    )
}

/// The prompts in the order they are asked.
pub fn questions(spec: &ReplacementSpec) -> [String; 2] {
    [replacement_question(spec), BACKUP_QUESTION.to_string()]
}

/// Interpret a typed answer. Only `y`/`yes` (any case) affirm.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask every question in turn, stopping at the first decline.
///
/// Returns `Ok(true)` only when every question was affirmed. I/O errors
/// from the answer source propagate unchanged.
pub fn confirm_with<A>(spec: &ReplacementSpec, mut ask: A) -> io::Result<bool>
where
    A: FnMut(&str) -> io::Result<bool>,
{
    for question in questions(spec) {
        if !ask(&question)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Like [`confirm_with`] but turns a decline into [`CoreError::Declined`].
pub fn require_confirmation<A>(
    spec: &ReplacementSpec,
    ask: A,
) -> io::Result<Result<(), CoreError>>
where
    A: FnMut(&str) -> io::Result<bool>,
{
    let confirmed = confirm_with(spec, ask)?;
    Ok(if confirmed {
        Ok(())
    } else {
        Err(CoreError::Declined(
            "URL update cancelled, no changes were made.".to_string(),
        ))
    })
}
