//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{account_handler, diagnostics_handler, owner_handler};
use domain::{AccountResponse, OwnerDetailsResponse, OwnerResponse};

/// OpenAPI documentation for the account/owner service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Owner Service",
        version = "0.1.0",
        description = "Owners and their bank accounts behind a repository and unit-of-work layer",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Diagnostics
        diagnostics_handler::check_wiring,
        diagnostics_handler::test_database,
        // Owners
        owner_handler::list_owners,
        owner_handler::get_owner,
        owner_handler::get_owner_with_accounts,
        owner_handler::create_owner,
        owner_handler::update_owner,
        owner_handler::delete_owner,
        // Accounts
        account_handler::list_accounts,
        account_handler::get_account,
        account_handler::create_account,
        account_handler::update_account,
        account_handler::delete_account,
    ),
    components(
        schemas(
            OwnerResponse,
            OwnerDetailsResponse,
            AccountResponse,
            owner_handler::OwnerRequest,
            account_handler::AccountRequest,
            diagnostics_handler::WiringResponse,
            diagnostics_handler::DatabaseProbeResponse,
            diagnostics_handler::ProbeErrorResponse,
        )
    ),
    tags(
        (name = "Diagnostics", description = "Wiring and storage checks"),
        (name = "Owners", description = "Owner management"),
        (name = "Accounts", description = "Account management")
    )
)]
pub struct ApiDoc;
