//! # Movie Record
//!
//! A single entry of the movie catalog, serialized as-is in API responses.

use serde::{Deserialize, Serialize};

/// One movie in the catalog, uniquely identified by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: u16,
    pub director: String,
    pub genre: String,
    /// Rating on a 0-10 scale. Not range checked.
    pub rating: f32,
    pub description: String,
}

impl Movie {
    pub fn new(
        id: u32,
        title: &str,
        year: u16,
        director: &str,
        genre: &str,
        rating: f32,
        description: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            year,
            director: director.to_string(),
            genre: genre.to_string(),
            rating,
            description: description.to_string(),
        }
    }
}
