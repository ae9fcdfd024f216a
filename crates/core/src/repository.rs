//! Storage interfaces the movie service is written against.
//!
//! A [`Catalog`] hands out units of work. Each unit of work implements both
//! stores and makes its writes visible only on [`CatalogTx::commit`];
//! dropping it discards them.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::movie::{Movie, Star};
use crate::types::{DbId, ReleaseDate};

#[async_trait]
pub trait StarStore: Send {
    /// Exact-match lookup by name.
    async fn find_by_name(&mut self, name: &str) -> Result<Option<Star>, CoreError>;

    /// Insert a new star. A name that already exists fails with
    /// [`CoreError::DuplicateStar`].
    async fn create(&mut self, name: &str) -> Result<Star, CoreError>;
}

#[async_trait]
pub trait MovieStore: Send {
    async fn find_by_id(&mut self, id: DbId) -> Result<Option<Movie>, CoreError>;

    /// Lookup by the (title, release date) natural key.
    async fn find_by_natural_key(
        &mut self,
        title: &str,
        release_date: ReleaseDate,
    ) -> Result<Option<Movie>, CoreError>;

    /// Insert when `movie.id` is `None`, otherwise replace the stored row and
    /// its star set. Returns the movie as stored.
    ///
    /// Uniqueness violations surface as [`CoreError::DuplicateMovie`] or
    /// [`CoreError::DuplicateStar`].
    async fn save(&mut self, movie: &Movie) -> Result<Movie, CoreError>;

    /// Remove a movie and its star links. Stars themselves are kept.
    async fn delete_by_id(&mut self, id: DbId) -> Result<bool, CoreError>;

    async fn exists_by_id(&mut self, id: DbId) -> Result<bool, CoreError>;
}

/// A single atomic unit of work against the catalog.
#[async_trait]
pub trait CatalogTx: MovieStore + StarStore {
    async fn commit(self) -> Result<(), CoreError>;
}

/// A backing store able to open units of work.
#[async_trait]
pub trait Catalog: Send + Sync + 'static {
    type Tx: CatalogTx;

    async fn begin(&self) -> Result<Self::Tx, CoreError>;

    /// Cheap reachability probe for health reporting.
    async fn health_check(&self) -> Result<(), CoreError>;
}
