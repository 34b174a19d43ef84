//! Account handlers.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::repository::{Repositories, RepositoryWrapper};
use common::{AppResult, OptionExt};
use domain::{Account, AccountFilter, AccountResponse};

/// Create or replace an account
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub date_created: DateTime<Utc>,
    #[validate(length(min = 1, max = 30, message = "Account Type is required and cannot be longer than 30 characters."))]
    #[schema(example = "Domestic", max_length = 30)]
    pub account_type: String,
    pub owner_id: Uuid,
}

/// Query parameters for listing accounts
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AccountQuery {
    /// Only accounts of this type
    pub account_type: Option<String>,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route("/:id", get(get_account).put(update_account).delete(delete_account))
}

/// List accounts, optionally filtered by type
#[utoipa::path(
    get,
    path = "/api/account",
    tag = "Accounts",
    params(AccountQuery),
    responses(
        (status = 200, description = "Matching accounts", body = Vec<AccountResponse>)
    )
)]
pub async fn list_accounts(
    repos: Repositories,
    Query(query): Query<AccountQuery>,
) -> AppResult<Json<Vec<AccountResponse>>> {
    let accounts = match query.account_type {
        Some(account_type) => {
            repos
                .account()
                .find_by_condition(AccountFilter::AccountType(account_type), false)
                .await?
        }
        None => repos.account().find_all(false).await?,
    };

    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Get account by ID
#[utoipa::path(
    get,
    path = "/api/account/{id}",
    tag = "Accounts",
    params(("id" = Uuid, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_account(repos: Repositories, Path(id): Path<Uuid>) -> AppResult<Json<AccountResponse>> {
    let account = repos.account().find_by_id(id, false).await?.ok_or_not_found()?;
    Ok(Json(AccountResponse::from(account)))
}

/// Open an account for an existing owner
#[utoipa::path(
    post,
    path = "/api/account",
    tag = "Accounts",
    request_body = AccountRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Owner does not exist")
    )
)]
pub async fn create_account(
    repos: Repositories,
    ValidatedJson(payload): ValidatedJson<AccountRequest>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    let account = Account::new(payload.date_created, payload.account_type, payload.owner_id);
    repos.account().create(account.clone())?;
    repos.save().await?;

    tracing::info!(account_id = %account.id, owner_id = %account.owner_id, "Account created");
    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// Replace an existing account
#[utoipa::path(
    put,
    path = "/api/account/{id}",
    tag = "Accounts",
    params(("id" = Uuid, Path, description = "Account ID")),
    request_body = AccountRequest,
    responses(
        (status = 200, description = "Account updated", body = AccountResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Owner does not exist")
    )
)]
pub async fn update_account(
    repos: Repositories,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<AccountRequest>,
) -> AppResult<Json<AccountResponse>> {
    let account = Account::with_id(id, payload.date_created, payload.account_type, payload.owner_id);
    repos.account().update(account.clone())?;
    repos.save().await?;

    Ok(Json(AccountResponse::from(account)))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/api/account/{id}",
    tag = "Accounts",
    params(("id" = Uuid, Path, description = "Account ID")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn delete_account(repos: Repositories, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    repos.account().delete(id);
    repos.save().await?;

    Ok(StatusCode::NO_CONTENT)
}
