//! PostgreSQL-backed [`Catalog`]: one sqlx transaction per unit of work.

use async_trait::async_trait;
use catalog_core::error::CoreError;
use catalog_core::movie::{Movie, Star};
use catalog_core::repository::{Catalog, CatalogTx, MovieStore, StarStore};
use catalog_core::types::{format_release_date, DbId, ReleaseDate};
use sqlx::{Postgres, Transaction};

use crate::error::{
    internal, star_insert_error, star_link_error, violated_unique_constraint,
    UQ_MOVIES_TITLE_RELEASE_DATE,
};
use crate::models::movie::MovieRow;
use crate::repositories::{MovieRepo, StarRepo};
use crate::DbPool;

#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: DbPool,
}

impl PgCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Catalog for PgCatalog {
    type Tx = PgCatalogTx;

    async fn begin(&self) -> Result<PgCatalogTx, CoreError> {
        let tx = self.pool.begin().await.map_err(internal)?;
        Ok(PgCatalogTx { tx })
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(internal)
    }
}

/// Open transaction. Rolled back on drop unless committed.
pub struct PgCatalogTx {
    tx: Transaction<'static, Postgres>,
}

impl PgCatalogTx {
    async fn hydrate(&mut self, row: MovieRow) -> Result<Movie, CoreError> {
        let stars = MovieRepo::list_stars(&mut *self.tx, row.id)
            .await
            .map_err(internal)?
            .into_iter()
            .map(Star::from)
            .collect();
        Ok(row.into_movie(stars))
    }
}

#[async_trait]
impl StarStore for PgCatalogTx {
    async fn find_by_name(&mut self, name: &str) -> Result<Option<Star>, CoreError> {
        let row = StarRepo::find_by_name(&mut *self.tx, name)
            .await
            .map_err(internal)?;
        Ok(row.map(Star::from))
    }

    async fn create(&mut self, name: &str) -> Result<Star, CoreError> {
        let row = StarRepo::create(&mut *self.tx, name)
            .await
            .map_err(star_insert_error)?;
        tracing::debug!(star_id = row.id, name = %row.name, "Star created");
        Ok(row.into())
    }
}

#[async_trait]
impl MovieStore for PgCatalogTx {
    async fn find_by_id(&mut self, id: DbId) -> Result<Option<Movie>, CoreError> {
        let row = MovieRepo::find_by_id(&mut *self.tx, id)
            .await
            .map_err(internal)?;
        match row {
            Some(row) => self.hydrate(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_natural_key(
        &mut self,
        title: &str,
        release_date: ReleaseDate,
    ) -> Result<Option<Movie>, CoreError> {
        let row = MovieRepo::find_by_title_and_release_date(&mut *self.tx, title, release_date)
            .await
            .map_err(internal)?;
        match row {
            Some(row) => self.hydrate(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn save(&mut self, movie: &Movie) -> Result<Movie, CoreError> {
        let written = match movie.id {
            None => MovieRepo::create(&mut *self.tx, &movie.title, movie.release_date)
                .await
                .map(Some),
            Some(id) => {
                MovieRepo::update(&mut *self.tx, id, &movie.title, movie.release_date).await
            }
        };

        let row = match written {
            Ok(Some(row)) => row,
            Ok(None) => return Err(CoreError::MovieNotFound(movie.id.unwrap_or_default())),
            Err(err) if violated_unique_constraint(&err) == Some(UQ_MOVIES_TITLE_RELEASE_DATE) => {
                return Err(CoreError::DuplicateMovie {
                    title: movie.title.clone(),
                    release_date: format_release_date(movie.release_date),
                });
            }
            Err(err) => return Err(internal(err)),
        };

        let star_ids: Vec<DbId> = movie.stars.iter().map(|s| s.id).collect();
        MovieRepo::replace_stars(&mut *self.tx, row.id, &star_ids)
            .await
            .map_err(star_link_error)?;

        tracing::debug!(movie_id = row.id, title = %row.title, "Movie saved");
        Ok(row.into_movie(movie.stars.clone()))
    }

    async fn delete_by_id(&mut self, id: DbId) -> Result<bool, CoreError> {
        MovieRepo::delete(&mut *self.tx, id).await.map_err(internal)
    }

    async fn exists_by_id(&mut self, id: DbId) -> Result<bool, CoreError> {
        MovieRepo::exists(&mut *self.tx, id).await.map_err(internal)
    }
}

#[async_trait]
impl CatalogTx for PgCatalogTx {
    async fn commit(self) -> Result<(), CoreError> {
        self.tx.commit().await.map_err(internal)
    }
}
