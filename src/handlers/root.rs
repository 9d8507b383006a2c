//! # Root Handler
//!
//! Describes the service and where its endpoints live.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::AppError;
use crate::utils::constant::{HEALTH_PATH, MOVIES_PATH, SERVICE_NAME};

/// Logical endpoint names mapped to their paths
#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    pub movies: String,
    pub health: String,
}

/// Response body of the root endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

/// GET /
///
/// Always returns `200 OK` with the service name, the crate version and the
/// endpoint map.
#[instrument]
pub async fn api_info() -> Json<ApiInfoResponse> {
    debug!("Root endpoint accessed");
    Json(ApiInfoResponse {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            movies: MOVIES_PATH.to_string(),
            health: HEALTH_PATH.to_string(),
        },
    })
}

/// Router fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found")
}
