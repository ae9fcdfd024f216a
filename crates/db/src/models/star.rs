//! Star entity model.

use catalog_core::movie::Star;
use catalog_core::types::DbId;
use sqlx::FromRow;

/// A row from the `stars` table.
#[derive(Debug, Clone, FromRow)]
pub struct StarRow {
    pub id: DbId,
    pub name: String,
}

impl From<StarRow> for Star {
    fn from(row: StarRow) -> Self {
        Star {
            id: row.id,
            name: row.name,
        }
    }
}
