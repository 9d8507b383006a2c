//! # Movie Catalog
//!
//! The fixed, ordered collection of movies served by the API. A catalog is
//! validated once on construction and exposes read-only access afterwards,
//! so it can be shared between request handlers without synchronization.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use super::Movie;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate movie id {0}")]
    DuplicateId(u32),

    #[error("movie id must be positive")]
    InvalidId,

    #[error("movie {0} has an empty title")]
    EmptyTitle(u32),
}

/// An immutable, insertion-ordered list of movies with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// Fails if any id is zero or repeated, or if a title is blank.
    pub fn new(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(movies.len());

        for movie in &movies {
            if movie.id == 0 {
                return Err(CatalogError::InvalidId);
            }
            if movie.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(movie.id));
            }
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateId(movie.id));
            }
        }

        debug!(count = movies.len(), "Catalog constructed");
        Ok(Self { movies })
    }

    /// All movies in catalog order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Returns the first movie whose id matches, scanning in catalog order.
    pub fn find(&self, id: u32) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }
}
