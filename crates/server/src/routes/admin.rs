//! Admin management routes.
//!
//! All of these sit behind the admin bearer-token middleware; the
//! handlers themselves only deal with the store.

use axum::{Json, extract::State, http::StatusCode};
use core_types::{Category, MenuItem, Restaurant};
use web_types::{ApiError, MessageResponse};

use crate::state::AppState;

type ErrorResponse = (StatusCode, Json<ApiError>);

/// POST /admin/restaurants - Add a restaurant.
pub async fn add_restaurant(
    State(state): State<AppState>,
    Json(input): Json<Restaurant>,
) -> (StatusCode, Json<Restaurant>) {
    let created = state.store.write().await.add_restaurant(input);

    (StatusCode::CREATED, Json(created))
}

/// POST /admin/add-categories - Add a category.
pub async fn add_category(
    State(state): State<AppState>,
    Json(input): Json<Category>,
) -> (StatusCode, Json<Category>) {
    let created = state.store.write().await.add_category(input);

    (StatusCode::CREATED, Json(created))
}

/// POST /admin/menu-items - Add a menu item.
///
/// Rejects items whose `category_id` matches no existing category, so
/// the public menu never gains an item the home page cannot display.
pub async fn add_menu_item(
    State(state): State<AppState>,
    Json(input): Json<MenuItem>,
) -> Result<(StatusCode, Json<MenuItem>), ErrorResponse> {
    let mut store = state.store.write().await;

    if !store.category_exists(input.category_id) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_code(
                format!("No category with id {}", input.category_id),
                "BAD_CATEGORY",
            )),
        ));
    }

    let created = store.add_item(input);

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /admin/all-restaurants - List restaurants, 404 when none exist.
pub async fn all_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Restaurant>>, ErrorResponse> {
    let restaurants = state.store.read().await.restaurants.clone();

    if restaurants.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::with_code("No restaurants found", "NOT_FOUND")),
        ));
    }

    Ok(Json(restaurants))
}

/// GET /admin/all-categories - List categories.
pub async fn all_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store.read().await.categories.clone())
}

/// DELETE /admin/delete-restaurants - Delete all restaurants.
pub async fn delete_restaurants(State(state): State<AppState>) -> Json<MessageResponse> {
    state.store.write().await.delete_all_restaurants();

    Json(MessageResponse::new("All restaurants deleted"))
}

/// DELETE /admin/delete-categories - Delete all categories.
pub async fn delete_categories(State(state): State<AppState>) -> Json<MessageResponse> {
    state.store.write().await.delete_all_categories();

    Json(MessageResponse::new("All categories deleted"))
}
