//! # Application Constants
//!
//! This module defines the route paths, configuration defaults and fixed
//! response messages used throughout the Marquee application.

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Bind address used when `HOST` is not set
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// `APP_ENV` value that turns on debug mode (compared case-insensitively)
pub const DEVELOPMENT_ENV: &str = "development";

/// Human-readable service name reported by the root endpoint
pub const SERVICE_NAME: &str = "Movie Picture Pipeline Backend API";

pub const HEALTH_PATH: &str = "/health";
pub const MOVIES_PATH: &str = "/api/movies";
pub const MOVIE_PATH: &str = "/api/movies/{id}";

pub const HEALTHY_STATUS: &str = "healthy";
pub const HEALTHY_MESSAGE: &str = "Backend service is running";
pub const MOVIES_RETRIEVED_MESSAGE: &str = "Movies retrieved successfully";
