//! Movie catalog domain: types, error taxonomy, validation, star
//! resolution, storage interfaces and the movie service.
//!
//! Nothing in this crate touches a database driver or HTTP; concrete
//! PostgreSQL storage lives in `catalog-db` and transport in `catalog-api`.

pub mod error;
pub mod memory;
pub mod movie;
pub mod repository;
pub mod service;
pub mod stars;
pub mod types;
pub mod validation;
