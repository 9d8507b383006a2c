use tracing::info;

use super::Catalog;

/// Application state shared across requests. Read-only after construction.
pub struct AppState {
    /// The movie catalog, alive for the whole process.
    pub catalog: &'static Catalog,
}

impl AppState {
    /// Creates the application state around an already validated catalog.
    pub fn new(catalog: &'static Catalog) -> Self {
        info!(movies = catalog.len(), "Initializing application state");
        Self { catalog }
    }
}
