//! Core types for the menu-board restaurant menu app.
//!
//! This crate defines the entities shared between the server,
//! the seed-data loader, and the web frontend.

use serde::{Deserialize, Serialize};

/// Role assigned to a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Can reach the `/admin` management endpoints.
    Admin,
    /// Regular browsing user.
    Client,
}

/// A named grouping of menu items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier (assigned by the server on insert)
    #[serde(default)]
    pub id: u32,
    /// Display name
    pub name: String,
    /// Longer description (may be empty)
    #[serde(default)]
    pub description: String,
    /// Optional icon glyph shown next to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    /// Create a new category with an empty description and no icon.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            icon: None,
        }
    }
}

/// A purchasable dish record served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique item identifier (assigned by the server on insert)
    #[serde(default)]
    pub id: u32,
    /// Foreign key to [`Category::id`]
    pub category_id: u32,
    /// Display name
    pub name: String,
    /// Longer description (may be empty)
    #[serde(default)]
    pub description: String,
    /// Price in the restaurant's currency
    pub price: f64,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether the item can currently be ordered
    pub is_available: bool,
}

impl MenuItem {
    /// Create a new, available menu item with no image.
    pub fn new(id: u32, category_id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            category_id,
            name: name.into(),
            description: String::new(),
            price,
            image_url: None,
            is_available: true,
        }
    }
}

/// A restaurant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique restaurant identifier (assigned by the server on insert)
    #[serde(default)]
    pub id: u32,
    /// Display name
    pub name: String,
    /// Longer description (may be empty)
    #[serde(default)]
    pub description: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// Contact phone
    #[serde(default)]
    pub phone: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Opening hours, free-form text
    #[serde(default)]
    pub working_hours: String,
}

/// A registered user.
///
/// The password hash is never serialized back to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (assigned by the server on insert)
    #[serde(default)]
    pub id: u32,
    /// Display name
    pub name: String,
    /// Login email, unique per user
    pub email: String,
    /// Bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Access role
    pub role: Role,
}

/// Format a price for display, e.g. `12.5` -> `"$12.50"`.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::new(1, "Appetizers");

        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Appetizers");
        assert!(category.description.is_empty());
        assert!(category.icon.is_none());
    }

    #[test]
    fn test_menu_item_creation() {
        let item = MenuItem::new(5, 1, "Soup", 12.5);

        assert_eq!(item.id, 5);
        assert_eq!(item.category_id, 1);
        assert_eq!(item.name, "Soup");
        assert!(item.is_available);
        assert!(item.image_url.is_none());
    }

    #[test]
    fn test_menu_item_serialization() {
        let item = MenuItem::new(5, 1, "Soup", 12.5);

        let json = serde_json::to_string(&item).unwrap();
        let parsed: MenuItem = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, item);
        // Field names match the backend's wire format
        assert!(json.contains("\"category_id\":1"));
        assert!(json.contains("\"is_available\":true"));
    }

    #[test]
    fn test_menu_item_deserializes_without_optional_fields() {
        // A minimal backend payload carries no image_url and no description
        let json = r#"{"id":5,"category_id":1,"name":"Soup","price":12.5,"is_available":true}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.name, "Soup");
        assert!(item.image_url.is_none());
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
    }

    #[test]
    fn test_user_password_never_serialized() {
        let user = User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "$2b$12$secret-hash".to_string(),
            role: Role::Admin,
        };

        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("secret-hash"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(8.0), "$8.00");
        assert_eq!(format_price(0.99), "$0.99");
    }
}
