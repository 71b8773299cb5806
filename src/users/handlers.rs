use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{UserCreate, UserOut},
        repo_types::User,
    },
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/get_user", get(get_user))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/add_user", post(add_user))
}

#[instrument(skip(state, payload))]
pub async fn add_user(
    State(state): State<AppState>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> Result<Json<UserOut>, ApiError> {
    let Json(payload) = payload?;

    let user = User::create(&state.db, &payload.name, &payload.email).await?;

    info!(user_id = user.id, email = %user.email, "user created");
    Ok(Json(UserOut::from(user)))
}

#[instrument(skip(state))]
pub async fn get_user(State(state): State<AppState>) -> Result<Json<Vec<UserOut>>, ApiError> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(users.into_iter().map(UserOut::from).collect()))
}
