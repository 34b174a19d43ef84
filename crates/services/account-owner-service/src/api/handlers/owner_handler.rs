//! Owner handlers.

use axum::{
    extract::Path,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::repository::{Repositories, RepositoryWrapper};
use common::{AppResult, OptionExt};
use domain::{AccountFilter, Owner, OwnerDetailsResponse, OwnerResponse};

/// Create or replace an owner
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    #[validate(length(min = 1, max = 60, message = "Name is required and cannot be longer than 60 characters."))]
    #[schema(example = "Alice Smith", max_length = 60)]
    pub name: String,
    #[schema(example = "1990-01-01T00:00:00Z")]
    pub date_of_birth: DateTime<Utc>,
    #[validate(length(min = 1, max = 100, message = "Address is required and cannot be longer than 100 characters."))]
    #[schema(example = "1 Main St", max_length = 100)]
    pub address: String,
}

/// Create owner routes
pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_owners).post(create_owner))
        .route("/:id", get(get_owner).put(update_owner).delete(delete_owner))
        .route("/:id/account", get(get_owner_with_accounts))
}

/// List all owners
#[utoipa::path(
    get,
    path = "/api/owner",
    tag = "Owners",
    responses(
        (status = 200, description = "All owners", body = Vec<OwnerResponse>)
    )
)]
pub async fn list_owners(repos: Repositories) -> AppResult<Json<Vec<OwnerResponse>>> {
    let owners = repos.owner().find_all(false).await?;
    Ok(Json(owners.into_iter().map(OwnerResponse::from).collect()))
}

/// Get owner by ID
#[utoipa::path(
    get,
    path = "/api/owner/{id}",
    tag = "Owners",
    params(("id" = Uuid, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Owner found", body = OwnerResponse),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn get_owner(repos: Repositories, Path(id): Path<Uuid>) -> AppResult<Json<OwnerResponse>> {
    let owner = repos.owner().find_by_id(id, false).await?.ok_or_not_found()?;
    Ok(Json(OwnerResponse::from(owner)))
}

/// Get owner together with their accounts
#[utoipa::path(
    get,
    path = "/api/owner/{id}/account",
    tag = "Owners",
    params(("id" = Uuid, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Owner with accounts", body = OwnerDetailsResponse),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn get_owner_with_accounts(
    repos: Repositories,
    Path(id): Path<Uuid>,
) -> AppResult<Json<OwnerDetailsResponse>> {
    let owner = repos.owner().find_by_id(id, false).await?.ok_or_not_found()?;
    let accounts = repos
        .account()
        .find_by_condition(AccountFilter::OwnerId(id), false)
        .await?;

    Ok(Json(OwnerDetailsResponse::new(owner, accounts)))
}

/// Create a new owner
#[utoipa::path(
    post,
    path = "/api/owner",
    tag = "Owners",
    request_body = OwnerRequest,
    responses(
        (status = 201, description = "Owner created", body = OwnerResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_owner(
    repos: Repositories,
    ValidatedJson(payload): ValidatedJson<OwnerRequest>,
) -> AppResult<(StatusCode, Json<OwnerResponse>)> {
    let owner = Owner::new(payload.name, payload.date_of_birth, payload.address);
    repos.owner().create(owner.clone())?;
    repos.save().await?;

    tracing::info!(owner_id = %owner.id, "Owner created");
    Ok((StatusCode::CREATED, Json(OwnerResponse::from(owner))))
}

/// Replace an existing owner
#[utoipa::path(
    put,
    path = "/api/owner/{id}",
    tag = "Owners",
    params(("id" = Uuid, Path, description = "Owner ID")),
    request_body = OwnerRequest,
    responses(
        (status = 200, description = "Owner updated", body = OwnerResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn update_owner(
    repos: Repositories,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<OwnerRequest>,
) -> AppResult<Json<OwnerResponse>> {
    let owner = Owner::with_id(id, payload.name, payload.date_of_birth, payload.address);
    repos.owner().update(owner.clone())?;
    repos.save().await?;

    Ok(Json(OwnerResponse::from(owner)))
}

/// Delete an owner that holds no accounts
#[utoipa::path(
    delete,
    path = "/api/owner/{id}",
    tag = "Owners",
    params(("id" = Uuid, Path, description = "Owner ID")),
    responses(
        (status = 204, description = "Owner deleted"),
        (status = 404, description = "Owner not found"),
        (status = 409, description = "Owner still holds accounts")
    )
)]
pub async fn delete_owner(repos: Repositories, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    repos.owner().delete(id);
    repos.save().await?;

    tracing::info!(owner_id = %id, "Owner deleted");
    Ok(StatusCode::NO_CONTENT)
}
