use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::user::User;
use crate::errors::AppError;
use crate::state::AppState;

use super::iso_timestamp;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// `admin` or `user`.
    pub role: String,
    pub last_login: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role.as_str().to_string(),
            last_login: iso_timestamp(u.last_login),
        }
    }
}

/// GET /api/users
///
/// Returns every user after a simulated database delay. A share of requests
/// fails on purpose with a 500.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Injected database failure"),
    ),
    tag = "users"
)]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = state.catalog.list_users().await.map_err(|e| {
        log::error!("Error fetching users: {}", e);
        AppError::FetchUsers(e)
    })?;

    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
