//! User endpoints
//!
//! Every handler builds a `UserRepo` over the shared pool and runs exactly
//! one statement; the pooled connection goes back when the call returns.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::UserId;
use crate::http::server::AppState;
use crate::models::{DeleteUserForm, FormFields, UserForm};
use crate::views::{self, Component, FormResponse};

/// GET /api/ - table of all users
async fn users_table(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Component>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(views::users_page(&users)?))
}

/// GET /api/user/add/ - blank add-user form
async fn add_user_form() -> Json<Vec<Component>> {
    Json(views::add_user_page())
}

/// POST /api/user/add/ - validate, insert, send the client back to the list
async fn add_user(
    State(state): State<Arc<AppState>>,
    fields: FormFields,
) -> Result<Json<FormResponse>, ApiError> {
    let form = UserForm::from_fields(&fields)?;
    let user = UserRepo::new(&state.pool).create(form.into()).await?;
    tracing::info!(id = user.id, "user added");

    Ok(Json(FormResponse::go_to("/")))
}

/// GET /api/user/{id}/ - profile page, 404 when the id is unknown
async fn user_profile(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Json<Vec<Component>>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;
    Ok(Json(views::user_page(&user)?))
}

/// POST /api/user/{id}/delete/ - delete when confirmed; unknown ids are a no-op
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
    fields: FormFields,
) -> Result<Json<FormResponse>, ApiError> {
    DeleteUserForm::from_fields(&fields)?.require_confirmed()?;

    let deleted = UserRepo::new(&state.pool).delete(id).await?;
    if deleted {
        tracing::info!(id, "user deleted");
    } else {
        tracing::debug!(id, "delete of unknown user ignored");
    }

    Ok(Json(FormResponse::go_to("/")))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/", get(users_table))
        .route("/api/user/add/", get(add_user_form).post(add_user))
        .route("/api/user/{id}/", get(user_profile))
        .route("/api/user/{id}/delete/", post(delete_user))
}
