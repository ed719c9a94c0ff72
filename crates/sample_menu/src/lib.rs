//! Seed data for the menu-board server.
//!
//! The server keeps its data in memory; this crate provides a built-in
//! sample menu so it is usable out of the box, plus helpers to load a
//! menu from a JSON file instead.

use core_types::{Category, MenuItem, Restaurant};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from menu-data loading.
#[derive(Error, Debug)]
pub enum MenuDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for menu-data operations.
pub type Result<T> = std::result::Result<T, MenuDataError>;

/// A full menu data set: what the store is seeded with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuData {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Load the built-in sample menu.
pub fn load_builtin_menu() -> MenuData {
    MenuData {
        restaurants: builtin_restaurants(),
        categories: builtin_categories(),
        items: builtin_items(),
    }
}

/// Load a menu from a JSON string.
pub fn load_menu_from_json(json: &str) -> Result<MenuData> {
    Ok(serde_json::from_str(json)?)
}

/// Load a menu from a JSON file.
pub fn load_menu_from_file(path: &Path) -> Result<MenuData> {
    let content = std::fs::read_to_string(path)?;
    load_menu_from_json(&content)
}

fn builtin_restaurants() -> Vec<Restaurant> {
    vec![Restaurant {
        id: 1,
        name: "The Copper Kettle".to_string(),
        description: "Seasonal comfort food in a converted brewery.".to_string(),
        address: "14 Foundry Lane".to_string(),
        phone: "+1 555 0114".to_string(),
        email: "hello@copperkettle.example".to_string(),
        working_hours: "Tue-Sun 11:00-22:00".to_string(),
    }]
}

fn builtin_categories() -> Vec<Category> {
    let specs: [(u32, &str, &str, &str); 4] = [
        (1, "Appetizers", "Small plates to start", "🥗"),
        (2, "Main Course", "Hearty mains from the kitchen", "🍽"),
        (3, "Desserts", "Sweet endings", "🍰"),
        (4, "Beverages", "Hot and cold drinks", "☕"),
    ];

    specs
        .into_iter()
        .map(|(id, name, description, icon)| Category {
            id,
            name: name.to_string(),
            description: description.to_string(),
            icon: Some(icon.to_string()),
        })
        .collect()
}

fn builtin_items() -> Vec<MenuItem> {
    let mut items = Vec::new();

    // Appetizers
    items.push(item(1, 1, "Roasted Tomato Soup", "Slow-roasted tomatoes, basil oil, croutons.", 7.5));
    items.push(item(2, 1, "Burrata & Peach", "Creamy burrata, grilled peach, aged balsamic.", 11.0));
    items.push(item(3, 1, "Crispy Calamari", "Lemon aioli, pickled chili.", 12.5));

    // Main Course
    items.push(item(4, 2, "Braised Short Rib", "Red-wine braise, parsnip purée, gremolata.", 26.0));
    items.push(item(5, 2, "Pan-Seared Trout", "Brown butter, capers, new potatoes.", 23.5));
    items.push(item(6, 2, "Mushroom Risotto", "Arborio rice, porcini, parmesan.", 19.0));
    items.push(unavailable(7, 2, "Sunday Roast", "Served Sundays only.", 24.0));

    // Desserts
    items.push(item(8, 3, "Burnt Basque Cheesecake", "Caramelized top, berry compote.", 9.5));
    items.push(item(9, 3, "Dark Chocolate Tart", "Sea salt, crème fraîche.", 9.0));

    // Beverages
    items.push(item(10, 4, "House Lemonade", "Pressed daily.", 4.5));
    items.push(item(11, 4, "Flat White", "Double shot, silky milk.", 4.0));

    items
}

fn item(id: u32, category_id: u32, name: &str, description: &str, price: f64) -> MenuItem {
    MenuItem {
        description: description.to_string(),
        ..MenuItem::new(id, category_id, name, price)
    }
}

fn unavailable(id: u32, category_id: u32, name: &str, description: &str, price: f64) -> MenuItem {
    MenuItem {
        is_available: false,
        ..item(id, category_id, name, description, price)
    }
}
