//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut PgConnection` as the first argument, so callers can run
//! them on a pooled connection or inside a transaction.

pub mod movie_repo;
pub mod star_repo;

pub use movie_repo::MovieRepo;
pub use star_repo::StarRepo;
