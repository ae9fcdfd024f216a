//! Repository for the `stars` table.

use sqlx::PgConnection;

use crate::models::star::StarRow;

/// Provides lookup and insert for stars. Stars are never updated or deleted.
pub struct StarRepo;

impl StarRepo {
    /// Insert a new star, returning the created row.
    pub async fn create(conn: &mut PgConnection, name: &str) -> Result<StarRow, sqlx::Error> {
        sqlx::query_as::<_, StarRow>("INSERT INTO stars (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(conn)
            .await
    }

    /// Exact, case-sensitive lookup by name.
    pub async fn find_by_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<StarRow>, sqlx::Error> {
        sqlx::query_as::<_, StarRow>("SELECT id, name FROM stars WHERE name = $1")
            .bind(name)
            .fetch_optional(conn)
            .await
    }
}
