//! Movie and star value types plus the boundary record shapes.

use serde::{Deserialize, Serialize};

use crate::types::{format_release_date, DbId, ReleaseDate};

/// A named cast member. Shared across movies and never owned by one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Star {
    pub id: DbId,
    pub name: String,
}

/// A movie together with its resolved stars, in submission order.
///
/// `id` is `None` until the movie has been saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: Option<DbId>,
    pub title: String,
    pub release_date: ReleaseDate,
    pub stars: Vec<Star>,
}

impl Movie {
    pub fn new(title: impl Into<String>, release_date: ReleaseDate, stars: Vec<Star>) -> Self {
        Self {
            id: None,
            title: title.into(),
            release_date,
            stars,
        }
    }

    pub fn to_record(&self) -> MovieRecord {
        MovieRecord {
            id: self.id,
            title: self.title.clone(),
            release_date: format_release_date(self.release_date),
            stars: self.stars.iter().map(|s| s.name.clone()).collect(),
        }
    }
}

/// Candidate movie submitted for create or update.
///
/// Every field tolerates being absent or `null` so the validator, not the
/// decoder, decides what is missing. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub stars: Option<Vec<String>>,
}

impl MovieInput {
    pub fn new(title: &str, release_date: &str, stars: &[&str]) -> Self {
        Self {
            title: Some(title.to_string()),
            release_date: Some(release_date.to_string()),
            stars: Some(stars.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn release_date(&self) -> &str {
        self.release_date.as_deref().unwrap_or_default()
    }

    pub fn stars(&self) -> &[String] {
        self.stars.as_deref().unwrap_or_default()
    }
}

/// Canonical movie record returned at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: Option<DbId>,
    pub title: String,
    pub release_date: String,
    pub stars: Vec<String>,
}
