//! Application state for the menu server.

use core_types::{Category, MenuItem, Restaurant, User};
use sample_menu::MenuData;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Menu data and users, behind one lock.
    pub store: Arc<RwLock<MenuStore>>,
    /// HS256 signing key for session tokens.
    pub jwt_key: Arc<String>,
}

impl AppState {
    /// Create app state seeded with the given menu data.
    pub fn new(data: MenuData, jwt_key: String) -> Self {
        Self {
            store: Arc::new(RwLock::new(MenuStore::from_data(data))),
            jwt_key: Arc::new(jwt_key),
        }
    }
}

/// In-memory store for everything the API serves.
///
/// Ids are assigned monotonically on insert, so a deleted record's id
/// is not reused until the whole collection is cleared.
pub struct MenuStore {
    pub restaurants: Vec<Restaurant>,
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    pub users: Vec<User>,
    next_restaurant_id: u32,
    next_category_id: u32,
    next_item_id: u32,
    next_user_id: u32,
}

fn next_id_after<T>(records: &[T], id_of: impl Fn(&T) -> u32) -> u32 {
    records.iter().map(id_of).max().unwrap_or(0) + 1
}

impl MenuStore {
    /// Build a store from seed data, continuing id assignment past it.
    pub fn from_data(data: MenuData) -> Self {
        let next_restaurant_id = next_id_after(&data.restaurants, |r| r.id);
        let next_category_id = next_id_after(&data.categories, |c| c.id);
        let next_item_id = next_id_after(&data.items, |i| i.id);

        Self {
            restaurants: data.restaurants,
            categories: data.categories,
            items: data.items,
            users: Vec::new(),
            next_restaurant_id,
            next_category_id,
            next_item_id,
            next_user_id: 1,
        }
    }

    /// Whether a category with the given id exists.
    pub fn category_exists(&self, id: u32) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// Insert a restaurant, assigning its id.
    pub fn add_restaurant(&mut self, mut restaurant: Restaurant) -> Restaurant {
        restaurant.id = self.next_restaurant_id;
        self.next_restaurant_id += 1;
        self.restaurants.push(restaurant.clone());
        restaurant
    }

    /// Insert a category, assigning its id.
    pub fn add_category(&mut self, mut category: Category) -> Category {
        category.id = self.next_category_id;
        self.next_category_id += 1;
        self.categories.push(category.clone());
        category
    }

    /// Insert a menu item, assigning its id.
    ///
    /// The caller is expected to have validated `category_id` first.
    pub fn add_item(&mut self, mut item: MenuItem) -> MenuItem {
        item.id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Look up a user by login email.
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Insert a user, assigning its id.
    ///
    /// The caller is expected to have checked for a duplicate email.
    pub fn add_user(&mut self, mut user: User) -> User {
        user.id = self.next_user_id;
        self.next_user_id += 1;
        self.users.push(user.clone());
        user
    }

    /// Delete all restaurants and restart their id sequence at 1.
    pub fn delete_all_restaurants(&mut self) {
        self.restaurants.clear();
        self.next_restaurant_id = 1;
    }

    /// Delete all categories and restart their id sequence at 1.
    pub fn delete_all_categories(&mut self) {
        self.categories.clear();
        self.next_category_id = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Role;

    fn empty_store() -> MenuStore {
        MenuStore::from_data(MenuData::default())
    }

    #[test]
    fn test_store_seeding() {
        let store = MenuStore::from_data(sample_menu::load_builtin_menu());

        assert!(!store.items.is_empty());
        assert!(store.category_exists(1));
        assert!(!store.category_exists(999));
    }

    #[test]
    fn test_id_assignment_continues_past_seed() {
        let mut store = MenuStore::from_data(sample_menu::load_builtin_menu());
        let max_seed_id = store.items.iter().map(|i| i.id).max().unwrap();

        let created = store.add_item(MenuItem::new(0, 1, "Special", 15.0));

        assert_eq!(created.id, max_seed_id + 1);
    }

    #[test]
    fn test_delete_all_restaurants_restarts_ids() {
        let mut store = empty_store();
        store.add_restaurant(Restaurant {
            id: 0,
            name: "First".to_string(),
            description: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            working_hours: String::new(),
        });

        store.delete_all_restaurants();
        let created = store.add_restaurant(Restaurant {
            id: 0,
            name: "Second".to_string(),
            description: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            working_hours: String::new(),
        });

        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_user_lookup_by_email() {
        let mut store = empty_store();
        store.add_user(User {
            id: 0,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hash".to_string(),
            role: Role::Admin,
        });

        assert!(store.find_user_by_email("ada@example.com").is_some());
        assert!(store.find_user_by_email("nobody@example.com").is_none());
    }
}
