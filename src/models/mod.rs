mod catalog;
mod movie;
mod state;

pub use catalog::{Catalog, CatalogError};
pub use movie::Movie;
pub use state::AppState;
