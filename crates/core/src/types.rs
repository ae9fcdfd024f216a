use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Release dates carry no time component.
pub type ReleaseDate = NaiveDate;

/// Wire and storage text format for release dates.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` release date.
///
/// The shape is checked before handing off to chrono, which on its own
/// accepts unpadded months/days and signed or overlong years. Years start
/// at 0001; there is no year zero.
pub fn parse_release_date(text: &str) -> Result<ReleaseDate, CoreError> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(CoreError::InvalidDate(text.to_string()));
    }

    NaiveDate::parse_from_str(text, RELEASE_DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
        .ok_or_else(|| CoreError::InvalidDate(text.to_string()))
}

/// Render a release date in the canonical `YYYY-MM-DD` form.
pub fn format_release_date(date: ReleaseDate) -> String {
    date.format(RELEASE_DATE_FORMAT).to_string()
}
