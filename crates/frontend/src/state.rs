//! Pure page-state logic, kept free of Yew so it tests natively.

use core_types::{Category, MenuItem};

/// Load phase shared by the home and admin pages.
///
/// Both pages collapse every failure - menu fetch, categories fetch,
/// transport or status - into the one `Failed` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Failed,
    Ready,
}

impl LoadPhase {
    /// Phase after the joint fetch settles.
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => LoadPhase::Ready,
            Err(_) => LoadPhase::Failed,
        }
    }
}

/// The category selected when the home page first loads: the first
/// fetched category, if any exist.
pub fn initial_active_category(categories: &[Category]) -> Option<u32> {
    categories.first().map(|c| c.id)
}

/// Items shown in the home grid: exactly those whose `category_id`
/// equals the active category. No active category means an empty grid,
/// and so does an active id no item references.
pub fn filter_by_category(items: &[MenuItem], active: Option<u32>) -> Vec<MenuItem> {
    match active {
        Some(id) => items
            .iter()
            .filter(|item| item.category_id == id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Admin panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Menu,
    Orders,
    Staff,
}

impl AdminTab {
    /// Tab bar order.
    pub const ALL: [AdminTab; 3] = [AdminTab::Menu, AdminTab::Orders, AdminTab::Staff];

    /// Button label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Menu => "Menu Management",
            AdminTab::Orders => "Orders",
            AdminTab::Staff => "Staff Management",
        }
    }
}

/// UI theme. Dark mode is applied by putting `dark` on the document
/// root; the toggle holds no other state and persists nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class the document root carries for this theme.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(1, "Appetizers"),
            Category::new(2, "Main Course"),
        ]
    }

    #[test]
    fn test_initial_active_category_is_first() {
        assert_eq!(initial_active_category(&categories()), Some(1));
    }

    #[test]
    fn test_initial_active_category_empty_list() {
        assert_eq!(initial_active_category(&[]), None);
    }

    #[test]
    fn test_filter_keeps_only_matching_items() {
        let items = vec![
            MenuItem::new(1, 1, "Soup", 7.5),
            MenuItem::new(2, 2, "Steak", 26.0),
            MenuItem::new(3, 1, "Salad", 9.0),
        ];

        let visible = filter_by_category(&items, Some(1));

        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|i| i.category_id == 1));
        assert!(!visible.iter().any(|i| i.name == "Steak"));
    }

    #[test]
    fn test_filter_without_active_category_is_empty() {
        let items = vec![MenuItem::new(1, 1, "Soup", 7.5)];

        assert!(filter_by_category(&items, None).is_empty());
    }

    #[test]
    fn test_filter_with_dangling_category_is_empty() {
        // A category id nothing references must not panic, just
        // produce an empty grid.
        let items = vec![MenuItem::new(1, 1, "Soup", 7.5)];

        assert!(filter_by_category(&items, Some(999)).is_empty());
    }

    #[test]
    fn test_single_category_example() {
        let categories = vec![Category::new(1, "Appetizers")];
        let items = vec![MenuItem::new(5, 1, "Soup", 12.5)];

        let active = initial_active_category(&categories);
        let visible = filter_by_category(&items, active);

        assert_eq!(active, Some(1));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Soup");
        assert_eq!(visible[0].price, 12.5);
    }

    #[test]
    fn test_either_failed_fetch_reaches_the_same_state() {
        let menu_failed: Result<(), &str> = Err("menu fetch failed");
        let categories_failed: Result<(), &str> = Err("categories fetch failed");

        assert_eq!(LoadPhase::from_result(&menu_failed), LoadPhase::Failed);
        assert_eq!(
            LoadPhase::from_result(&categories_failed),
            LoadPhase::Failed
        );
    }

    #[test]
    fn test_theme_toggle_twice_restores_root_class() {
        let theme = Theme::default();

        let flipped = theme.toggled();
        let restored = flipped.toggled();

        assert_eq!(flipped.root_class(), "dark");
        assert_eq!(restored, theme);
        assert_eq!(restored.root_class(), theme.root_class());
    }

    #[test]
    fn test_admin_tabs_are_mutually_exclusive() {
        // One active tab at a time, three distinct labels
        let labels: Vec<&str> = AdminTab::ALL.iter().map(|t| t.label()).collect();

        assert_eq!(labels.len(), 3);
        assert!(labels.contains(&"Menu Management"));
        assert_eq!(
            labels.iter().collect::<std::collections::HashSet<_>>().len(),
            3
        );
    }
}
