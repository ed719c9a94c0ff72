//! Public read-only API routes.

use axum::{Json, extract::State};
use core_types::{Category, MenuItem, Restaurant};
use web_types::MenuSnapshot;

use crate::state::AppState;

/// GET /api/menu - All menu items.
pub async fn get_menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.store.read().await.items.clone())
}

/// GET /api/categories - All categories.
pub async fn get_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store.read().await.categories.clone())
}

/// GET /api/restaurants - All restaurants.
pub async fn get_restaurants(State(state): State<AppState>) -> Json<Vec<Restaurant>> {
    Json(state.store.read().await.restaurants.clone())
}

/// GET / - Combined snapshot of everything the frontend renders.
pub async fn get_snapshot(State(state): State<AppState>) -> Json<MenuSnapshot> {
    let store = state.store.read().await;

    Json(MenuSnapshot {
        restaurants: store.restaurants.clone(),
        categories: store.categories.clone(),
        items: store.items.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_state() -> AppState {
        AppState::new(sample_menu::load_builtin_menu(), "test-key".to_string())
    }

    #[tokio::test]
    async fn test_get_menu_returns_seeded_items() {
        let state = seeded_state();

        let Json(items) = get_menu(State(state)).await;

        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.price > 0.0));
    }

    #[tokio::test]
    async fn test_get_categories_returns_seeded_categories() {
        let state = seeded_state();

        let Json(categories) = get_categories(State(state)).await;

        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].name, "Appetizers");
    }

    #[tokio::test]
    async fn test_snapshot_combines_all_three_collections() {
        let state = seeded_state();

        let Json(snapshot) = get_snapshot(State(state.clone())).await;
        let Json(items) = get_menu(State(state)).await;

        assert_eq!(snapshot.items.len(), items.len());
        assert!(!snapshot.restaurants.is_empty());
        assert!(!snapshot.categories.is_empty());
    }
}
