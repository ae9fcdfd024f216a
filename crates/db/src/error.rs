//! Translation of sqlx failures into catalog errors.

use catalog_core::error::CoreError;

/// Unique constraint on `movies (title, release_date)`.
pub const UQ_MOVIES_TITLE_RELEASE_DATE: &str = "uq_movies_title_release_date";

/// Unique constraint on `stars (name)`.
pub const UQ_STARS_NAME: &str = "uq_stars_name";

/// Primary key of `movie_stars (movie_id, star_id)`.
pub const PK_MOVIE_STARS: &str = "movie_stars_pkey";

/// PostgreSQL SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Name of the unique constraint `err` violated, if that is what it is.
pub fn violated_unique_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            db_err.constraint()
        }
        _ => None,
    }
}

/// Wrap an error with no catalog-level meaning.
pub fn internal(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("Database error: {err}"))
}

/// Map a failed star link write: a repeated link is a duplicate star.
pub fn star_link_error(err: sqlx::Error) -> CoreError {
    match violated_unique_constraint(&err) {
        Some(PK_MOVIE_STARS) => CoreError::DuplicateStar,
        _ => internal(err),
    }
}

/// Map a failed star insert: a concurrent insert of the same name loses.
pub fn star_insert_error(err: sqlx::Error) -> CoreError {
    match violated_unique_constraint(&err) {
        Some(UQ_STARS_NAME) => CoreError::DuplicateStar,
        _ => internal(err),
    }
}
