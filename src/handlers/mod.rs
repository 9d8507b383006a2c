//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the Marquee application.
//! Each handler is responsible for processing specific HTTP requests and returning
//! appropriate responses.
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Movies** (`movies`) - Catalog listing and lookup by id
//! - **Root** (`root`) - Service description and router fallback

mod health_check;
mod movies;
mod root;

pub use health_check::*;
pub use movies::*;
pub use root::*;
