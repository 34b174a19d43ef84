//! Diagnostic endpoints for checking the service wiring.
//!
//! `GET /api/weatherforecast` answers without touching storage.
//! `GET /api/weatherforecast/test-db` counts owners and domestic accounts
//! through the repository wrapper.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::repository::{Repositories, RepositoryWrapper};
use common::AppResult;
use domain::{AccountFilter, ACCOUNT_TYPE_DOMESTIC};

/// Liveness answer that proves the repository wrapper can be injected
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WiringResponse {
    pub message: String,
    pub status: String,
    pub repository_injected: bool,
    pub timestamp: DateTime<Utc>,
}

/// Counts read through the repositories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseProbeResponse {
    pub message: String,
    pub owners_count: usize,
    pub domestic_accounts_count: usize,
}

/// Error body of the storage probe
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProbeErrorResponse {
    pub error: String,
}

/// Create diagnostic routes
pub fn diagnostics_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(check_wiring))
        .route("/test-db", get(test_database))
}

/// Report that the service is up and the repository wrapper resolves
#[utoipa::path(
    get,
    path = "/api/weatherforecast",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Service wiring is working", body = WiringResponse)
    )
)]
pub async fn check_wiring(repos: Option<Repositories>) -> Json<WiringResponse> {
    Json(WiringResponse {
        message: "Repository Pattern Working!".to_string(),
        status: "Success - No Database Connection Required".to_string(),
        repository_injected: repos.is_some(),
        timestamp: Utc::now(),
    })
}

/// Count owners and domestic accounts through the repositories
#[utoipa::path(
    get,
    path = "/api/weatherforecast/test-db",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Storage reachable", body = DatabaseProbeResponse),
        (status = 400, description = "Storage error", body = ProbeErrorResponse)
    )
)]
pub async fn test_database(repos: Repositories) -> Response {
    match probe_database(&repos).await {
        Ok(probe) => (StatusCode::OK, Json(probe)).into_response(),
        Err(e) => {
            tracing::warn!("Database probe failed: {}", e);
            let body = ProbeErrorResponse {
                error: format!("Database Error: {}", e.detail()),
            };
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}

/// Read every owner and the domestic accounts, returning their counts.
pub async fn probe_database(repos: &dyn RepositoryWrapper) -> AppResult<DatabaseProbeResponse> {
    let owners = repos.owner().find_all(false).await?;
    let domestic = repos
        .account()
        .find_by_condition(AccountFilter::AccountType(ACCOUNT_TYPE_DOMESTIC.to_string()), false)
        .await?;

    Ok(DatabaseProbeResponse {
        message: "Database Connection Working!".to_string(),
        owners_count: owners.len(),
        domestic_accounts_count: domestic.len(),
    })
}
