//! Movie service: validation, duplicate detection, star resolution and
//! persistence for the four catalog operations.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::movie::{Movie, MovieInput, MovieRecord};
use crate::repository::{Catalog, CatalogTx, MovieStore};
use crate::stars::resolve_stars;
use crate::types::{format_release_date, parse_release_date, DbId};
use crate::validation::validate_movie;

/// Operations exposed to the transport layer.
///
/// Object safe so handlers can hold an `Arc<dyn MovieService>` without
/// knowing which catalog backs it.
#[async_trait]
pub trait MovieService: Send + Sync {
    async fn get_movie(&self, id: DbId) -> Result<MovieRecord, CoreError>;

    async fn create_movie(&self, input: &MovieInput) -> Result<MovieRecord, CoreError>;

    async fn update_movie(&self, id: DbId, input: &MovieInput) -> Result<MovieRecord, CoreError>;

    async fn delete_movie(&self, id: DbId) -> Result<(), CoreError>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> Result<(), CoreError>;
}

/// [`MovieService`] over any [`Catalog`]. Every write runs in one unit of work.
#[derive(Debug, Clone)]
pub struct CatalogMovieService<C> {
    catalog: C,
}

impl<C: Catalog> CatalogMovieService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}

#[async_trait]
impl<C: Catalog> MovieService for CatalogMovieService<C> {
    async fn get_movie(&self, id: DbId) -> Result<MovieRecord, CoreError> {
        let mut tx = self.catalog.begin().await?;
        let movie = tx
            .find_by_id(id)
            .await?
            .ok_or(CoreError::MovieNotFound(id))?;
        Ok(movie.to_record())
    }

    async fn create_movie(&self, input: &MovieInput) -> Result<MovieRecord, CoreError> {
        validate_movie(input)?;
        let release_date = parse_release_date(input.release_date())?;

        let mut tx = self.catalog.begin().await?;

        if tx
            .find_by_natural_key(input.title(), release_date)
            .await?
            .is_some()
        {
            return Err(CoreError::DuplicateMovie {
                title: input.title().to_string(),
                release_date: input.release_date().to_string(),
            });
        }

        let stars = resolve_stars(&mut tx, input.stars()).await?;
        if stars.len() != input.stars().len() {
            return Err(CoreError::DuplicateStar);
        }

        let saved = tx
            .save(&Movie::new(input.title(), release_date, stars))
            .await?;
        tx.commit().await?;
        Ok(saved.to_record())
    }

    async fn update_movie(&self, id: DbId, input: &MovieInput) -> Result<MovieRecord, CoreError> {
        validate_movie(input)?;
        let release_date = parse_release_date(input.release_date())?;

        let mut tx = self.catalog.begin().await?;

        let clash = tx.find_by_natural_key(input.title(), release_date).await?;
        if clash.is_some_and(|existing| existing.id != Some(id)) {
            return Err(CoreError::DuplicateMovie {
                title: input.title().to_string(),
                release_date: format_release_date(release_date),
            });
        }

        let mut movie = tx
            .find_by_id(id)
            .await?
            .ok_or(CoreError::MovieNotFound(id))?;

        let stars = resolve_stars(&mut tx, input.stars()).await?;
        if stars.len() != input.stars().len() {
            return Err(CoreError::DuplicateStar);
        }

        movie.title = input.title().to_string();
        movie.release_date = release_date;
        movie.stars = stars;

        let saved = tx.save(&movie).await?;
        tx.commit().await?;
        Ok(saved.to_record())
    }

    async fn delete_movie(&self, id: DbId) -> Result<(), CoreError> {
        let mut tx = self.catalog.begin().await?;
        if !tx.exists_by_id(id).await? {
            return Err(CoreError::MovieNotFound(id));
        }
        tx.delete_by_id(id).await?;
        tx.commit().await
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        self.catalog.health_check().await
    }
}
