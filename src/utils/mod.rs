//! # Utility Modules
//!
//! This module contains constants, seed data, and process-wide static
//! objects used throughout the Marquee application.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Route paths, defaults and response messages
//! - **Seed** (`seed`) - The literal movie records the catalog is built from
//! - **Static objects** (`static_object`) - Lazily built, process-wide values

pub mod constant;
pub mod seed;
pub mod static_object;
