//! Movie entity model.

use catalog_core::movie::{Movie, Star};
use catalog_core::types::{DbId, ReleaseDate};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub release_date: ReleaseDate,
}

impl MovieRow {
    /// Attach the movie's stars, already in link order.
    pub fn into_movie(self, stars: Vec<Star>) -> Movie {
        Movie {
            id: Some(self.id),
            title: self.title,
            release_date: self.release_date,
            stars,
        }
    }
}
