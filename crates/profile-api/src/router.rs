use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use profile_shared::constants::USERS_ROUTE;

use crate::handlers::{health, users};
use crate::state::AppState;

const USER_ROUTE: &str = "/api/users/{user_id}";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            USERS_ROUTE,
            get(users::list_users)
                .post(users::create_user)
                .options(users::list_options),
        )
        .route(
            USER_ROUTE,
            get(users::get_user)
                .head(users::head_user)
                .put(users::replace_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
