//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! This endpoint can be used by load balancers, monitoring systems, or
//! deployment tools to verify that the application is running.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::utils::constant::{HEALTHY_MESSAGE, HEALTHY_STATUS};

/// Response body of the health check endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Health check endpoint that always reports the service as healthy.
///
/// GET /health
///
/// It performs no checks beyond being able to answer the request, since the
/// service has no external dependencies.
///
/// # Returns
///
/// Always returns `200 OK` with a [`HealthResponse`].
#[instrument]
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check endpoint accessed");
    Json(HealthResponse {
        status: HEALTHY_STATUS.to_string(),
        message: HEALTHY_MESSAGE.to_string(),
    })
}
