//! menu-board web server.
//!
//! Serves the public menu API consumed by the web frontend, the
//! registration/login endpoints, and the JWT-guarded admin API, with
//! the built frontend dist as the static fallback.

mod auth;
mod routes;
mod state;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::net::SocketAddr;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use routes::{
    add_category, add_menu_item, add_restaurant, all_categories, all_restaurants,
    delete_categories, delete_restaurants, get_categories, get_menu, get_restaurants,
    get_snapshot, login, sign_up,
};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Seed the store: a JSON file when MENU_FILE is set, the built-in
    // sample menu otherwise.
    let data = match std::env::var("MENU_FILE") {
        Ok(path) => sample_menu::load_menu_from_file(Path::new(&path))?,
        Err(_) => sample_menu::load_builtin_menu(),
    };
    tracing::info!(
        restaurants = data.restaurants.len(),
        categories = data.categories.len(),
        items = data.items.len(),
        "Loaded menu data"
    );

    let jwt_key = std::env::var("JWT_KEY").unwrap_or_else(|_| {
        tracing::warn!("JWT_KEY not set, using a development-only key");
        "dev-only-key".to_string()
    });

    let state = AppState::new(data, jwt_key);

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public read API
    let api_routes = Router::new()
        .route("/menu", get(get_menu))
        .route("/categories", get(get_categories))
        .route("/restaurants", get(get_restaurants));

    // Admin API behind the bearer-token gate
    let admin_routes = Router::new()
        .route("/restaurants", post(add_restaurant))
        .route("/menu-items", post(add_menu_item))
        .route("/add-categories", post(add_category))
        .route("/all-restaurants", get(all_restaurants))
        .route("/all-categories", get(all_categories))
        .route("/delete-restaurants", delete(delete_restaurants))
        .route("/delete-categories", delete(delete_categories))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    // Build main router
    let app = Router::new()
        .route("/", get(get_snapshot))
        .route("/sign_up", post(sign_up))
        .route("/login", post(login))
        .nest("/api", api_routes)
        .nest("/admin", admin_routes)
        // Serve static files from frontend dist (when built)
        .fallback_service(ServeDir::new("../frontend/dist").append_index_html_on_directories(true))
        .layer(cors)
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_builds_from_builtin_menu() {
        let state = AppState::new(sample_menu::load_builtin_menu(), "key".to_string());

        assert!(!state.store.read().await.items.is_empty());
    }
}
