//! Login endpoint and credential checks.
//!
//! ```text
//! POST /api/v1/login {"username":"admin","password":"password"}
//! ```
//!
//! Real credential verification is owned by an external identity provider;
//! this fixture check exists so session-authenticated endpoints can be
//! exercised end to end.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::OrganiserSession;

/// Login request body for `POST /api/v1/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

pub(crate) fn authenticate(username: &str, password: &str) -> ApiResult<UserId> {
    if username == "admin" && password == "password" {
        UserId::new("123e4567-e89b-12d3-a456-426614174000")
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
    } else {
        Err(Error::unauthorized("invalid credentials"))
    }
}

fn require_non_empty(value: &str, field: &'static str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(
            Error::invalid_request(format!("{field} must not be empty"))
                .with_details(json!({ "field": field, "code": "missing_field" })),
        );
    }
    Ok(())
}

/// Authenticate a user and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    session: OrganiserSession,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let LoginRequest { username, password } = payload.into_inner();
    require_non_empty(&username, "username")?;
    require_non_empty(&password, "password")?;

    let user_id = authenticate(&username, &password)?;
    session.sign_in(&user_id)?;
    Ok(HttpResponse::Ok().finish())
}
