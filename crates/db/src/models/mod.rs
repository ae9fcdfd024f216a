//! Row types mapped from the catalog tables.

pub mod movie;
pub mod star;
