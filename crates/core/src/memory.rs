//! In-process catalog backed by plain tables behind an async mutex.
//!
//! Units of work are serialised: `begin` takes the lock and works on a copy
//! of the tables, `commit` writes the copy back. The same uniqueness rules
//! as the PostgreSQL schema are enforced on write.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::error::CoreError;
use crate::movie::{Movie, Star};
use crate::repository::{Catalog, CatalogTx, MovieStore, StarStore};
use crate::types::{format_release_date, DbId, ReleaseDate};

#[derive(Debug, Clone)]
struct MovieRow {
    title: String,
    release_date: ReleaseDate,
}

#[derive(Debug, Clone)]
struct MovieStarRow {
    movie_id: DbId,
    star_id: DbId,
    position: usize,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    movies: BTreeMap<DbId, MovieRow>,
    stars: BTreeMap<DbId, String>,
    movie_stars: Vec<MovieStarRow>,
    last_movie_id: DbId,
    last_star_id: DbId,
}

impl Tables {
    fn hydrate(&self, id: DbId, row: &MovieRow) -> Movie {
        let mut links: Vec<&MovieStarRow> =
            self.movie_stars.iter().filter(|l| l.movie_id == id).collect();
        links.sort_by_key(|l| l.position);

        let stars = links
            .into_iter()
            .filter_map(|l| {
                self.stars.get(&l.star_id).map(|name| Star {
                    id: l.star_id,
                    name: name.clone(),
                })
            })
            .collect();

        Movie {
            id: Some(id),
            title: row.title.clone(),
            release_date: row.release_date,
            stars,
        }
    }

    fn check_star_links(&self, stars: &[Star]) -> Result<(), CoreError> {
        for (i, star) in stars.iter().enumerate() {
            if !self.stars.contains_key(&star.id) {
                return Err(CoreError::Internal(format!(
                    "star {} does not exist",
                    star.id
                )));
            }
            if stars[..i].iter().any(|s| s.id == star.id) {
                return Err(CoreError::DuplicateStar);
            }
        }
        Ok(())
    }
}

/// Catalog kept entirely in memory. Cloning shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn movie_count(&self) -> usize {
        self.tables.lock().await.movies.len()
    }

    pub async fn star_count(&self) -> usize {
        self.tables.lock().await.stars.len()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    type Tx = MemoryCatalogTx;

    async fn begin(&self) -> Result<MemoryCatalogTx, CoreError> {
        let guard = Arc::clone(&self.tables).lock_owned().await;
        let working = guard.clone();
        Ok(MemoryCatalogTx { guard, working })
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Unit of work over a [`MemoryCatalog`]. Holds the catalog lock until
/// committed or dropped.
pub struct MemoryCatalogTx {
    guard: OwnedMutexGuard<Tables>,
    working: Tables,
}

#[async_trait]
impl StarStore for MemoryCatalogTx {
    async fn find_by_name(&mut self, name: &str) -> Result<Option<Star>, CoreError> {
        Ok(self
            .working
            .stars
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(id, n)| Star {
                id: *id,
                name: n.clone(),
            }))
    }

    async fn create(&mut self, name: &str) -> Result<Star, CoreError> {
        if self.working.stars.values().any(|n| n == name) {
            return Err(CoreError::DuplicateStar);
        }
        self.working.last_star_id += 1;
        let id = self.working.last_star_id;
        self.working.stars.insert(id, name.to_string());
        Ok(Star {
            id,
            name: name.to_string(),
        })
    }
}

#[async_trait]
impl MovieStore for MemoryCatalogTx {
    async fn find_by_id(&mut self, id: DbId) -> Result<Option<Movie>, CoreError> {
        Ok(self
            .working
            .movies
            .get(&id)
            .map(|row| self.working.hydrate(id, row)))
    }

    async fn find_by_natural_key(
        &mut self,
        title: &str,
        release_date: ReleaseDate,
    ) -> Result<Option<Movie>, CoreError> {
        Ok(self
            .working
            .movies
            .iter()
            .find(|(_, row)| row.title == title && row.release_date == release_date)
            .map(|(id, row)| self.working.hydrate(*id, row)))
    }

    async fn save(&mut self, movie: &Movie) -> Result<Movie, CoreError> {
        let clash = self.working.movies.iter().any(|(id, row)| {
            Some(*id) != movie.id
                && row.title == movie.title
                && row.release_date == movie.release_date
        });
        if clash {
            return Err(CoreError::DuplicateMovie {
                title: movie.title.clone(),
                release_date: format_release_date(movie.release_date),
            });
        }
        self.working.check_star_links(&movie.stars)?;

        let id = match movie.id {
            Some(id) if self.working.movies.contains_key(&id) => id,
            Some(id) => return Err(CoreError::MovieNotFound(id)),
            None => {
                self.working.last_movie_id += 1;
                self.working.last_movie_id
            }
        };

        let row = MovieRow {
            title: movie.title.clone(),
            release_date: movie.release_date,
        };
        self.working.movies.insert(id, row.clone());
        self.working.movie_stars.retain(|l| l.movie_id != id);
        self.working
            .movie_stars
            .extend(movie.stars.iter().enumerate().map(|(position, s)| MovieStarRow {
                movie_id: id,
                star_id: s.id,
                position,
            }));

        Ok(self.working.hydrate(id, &row))
    }

    async fn delete_by_id(&mut self, id: DbId) -> Result<bool, CoreError> {
        let removed = self.working.movies.remove(&id).is_some();
        self.working.movie_stars.retain(|l| l.movie_id != id);
        Ok(removed)
    }

    async fn exists_by_id(&mut self, id: DbId) -> Result<bool, CoreError> {
        Ok(self.working.movies.contains_key(&id))
    }
}

#[async_trait]
impl CatalogTx for MemoryCatalogTx {
    async fn commit(self) -> Result<(), CoreError> {
        let MemoryCatalogTx { mut guard, working } = self;
        *guard = working;
        Ok(())
    }
}
