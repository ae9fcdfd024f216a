//! Repository for the `movies` and `movie_stars` tables.

use catalog_core::types::{DbId, ReleaseDate};
use sqlx::PgConnection;

use crate::models::movie::MovieRow;
use crate::models::star::StarRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, release_date";

/// Provides CRUD operations for movies and their star links.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        title: &str,
        release_date: ReleaseDate,
    ) -> Result<MovieRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, release_date)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(title)
            .bind(release_date)
            .fetch_one(conn)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a movie by its natural key.
    pub async fn find_by_title_and_release_date(
        conn: &mut PgConnection,
        title: &str,
        release_date: ReleaseDate,
    ) -> Result<Option<MovieRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM movies WHERE title = $1 AND release_date = $2");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(title)
            .bind(release_date)
            .fetch_optional(conn)
            .await
    }

    /// Overwrite title and release date.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        title: &str,
        release_date: ReleaseDate,
    ) -> Result<Option<MovieRow>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET title = $2, release_date = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .bind(title)
            .bind(release_date)
            .fetch_optional(conn)
            .await
    }

    /// Delete a movie by ID. Star links go with it; stars stay.
    /// Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(conn)
            .await?;
        Ok(exists)
    }

    /// Stars linked to a movie, in the order they were submitted.
    pub async fn list_stars(
        conn: &mut PgConnection,
        movie_id: DbId,
    ) -> Result<Vec<StarRow>, sqlx::Error> {
        sqlx::query_as::<_, StarRow>(
            "SELECT s.id, s.name
             FROM movie_stars ms
             JOIN stars s ON s.id = ms.star_id
             WHERE ms.movie_id = $1
             ORDER BY ms.position ASC",
        )
        .bind(movie_id)
        .fetch_all(conn)
        .await
    }

    /// Replace a movie's star links with `star_ids`, keeping their order.
    pub async fn replace_stars(
        conn: &mut PgConnection,
        movie_id: DbId,
        star_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM movie_stars WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            "INSERT INTO movie_stars (movie_id, star_id, position)
             SELECT $1, t.star_id, (t.ord - 1)::INTEGER
             FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(star_id, ord)",
        )
        .bind(movie_id)
        .bind(star_ids)
        .execute(&mut *conn)
        .await?;

        tracing::debug!(movie_id, count = star_ids.len(), "Replaced movie star links");
        Ok(())
    }
}
