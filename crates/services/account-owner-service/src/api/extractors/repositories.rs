//! Per-request repository wrapper extractor.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::api::AppState;
use crate::repository::Repositories;

/// Each request gets a fresh unit of work over the shared pool.
#[async_trait]
impl FromRequestParts<AppState> for Repositories {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(state.repositories())
    }
}
