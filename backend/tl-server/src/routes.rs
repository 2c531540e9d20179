use crate::{
    AppState, create_talent, delete_talent, get_me, get_talent, health, list_adjustments,
    list_favorites, list_talents, login, logout, record_adjustment, register, toggle_favorite,
    update_password, update_talent, update_username,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        // Account
        .route("/me", get(get_me))
        .route("/me/username", put(update_username))
        .route("/me/password", put(update_password))
        // Talents
        .route("/talents", get(list_talents).post(create_talent))
        .route("/talents/favorites", get(list_favorites))
        .route(
            "/talents/{id}",
            get(get_talent).put(update_talent).delete(delete_talent),
        )
        .route("/talents/{id}/favorite", post(toggle_favorite))
        .route(
            "/talents/{id}/adjustments",
            get(list_adjustments).post(record_adjustment),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        .with_state(state)
        // Cookie auth: same-origin only, so no permissive CORS
        .layer(CorsLayer::new())
}
