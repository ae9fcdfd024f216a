//! Field checks for a submitted movie record.
//!
//! Pure logic with no store access; the first failing check wins.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::movie::MovieInput;

/// Validate a candidate movie.
///
/// Order: title, release date, star presence, star uniqueness. Whether the
/// release date parses is checked separately by the caller.
pub fn validate_movie(input: &MovieInput) -> Result<(), CoreError> {
    if input.title().trim().is_empty() {
        return Err(CoreError::MissingTitle);
    }
    if input.release_date().is_empty() {
        return Err(CoreError::MissingReleaseDate);
    }
    if input.stars().is_empty() {
        return Err(CoreError::MissingStar);
    }
    if has_duplicates(input.stars()) {
        return Err(CoreError::DuplicateStar);
    }
    Ok(())
}

/// Exact, case-sensitive duplicate check.
fn has_duplicates(names: &[String]) -> bool {
    let mut seen = HashSet::with_capacity(names.len());
    names.iter().any(|name| !seen.insert(name.as_str()))
}
