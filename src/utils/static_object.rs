use std::sync::LazyLock;

use tracing::error;

use crate::models::Catalog;
use crate::utils::seed::seed_movies;

/// The process-wide movie catalog.
///
/// Built from [`seed_movies`] on first access and never mutated afterwards.
/// An invalid seed is a programming error, so the process exits instead of
/// serving a partial catalog.
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(seed_movies()).unwrap_or_else(|e| {
        error!("Failed to build movie catalog: {}", e);
        std::process::exit(1)
    })
});
