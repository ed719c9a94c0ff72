//! Menu item card.

use core_types::{MenuItem, format_price};
use yew::prelude::*;

/// Properties for MenuItemCard.
#[derive(Properties, PartialEq)]
pub struct MenuItemCardProps {
    pub item: MenuItem,
    /// Render the (not yet wired) admin controls.
    #[prop_or_default]
    pub admin: bool,
}

/// Card showing one menu item: image, name, price, availability.
#[function_component(MenuItemCard)]
pub fn menu_item_card(props: &MenuItemCardProps) -> Html {
    let item = &props.item;

    let (availability_class, availability_text) = if item.is_available {
        ("availability available", "Available")
    } else {
        ("availability unavailable", "Unavailable")
    };

    html! {
        <div class="card menu-item-card">
            if let Some(url) = &item.image_url {
                <img class="menu-item-image" src={url.clone()} alt={item.name.clone()} />
            }
            <div class="menu-item-header">
                <h3 class="menu-item-name">{ &item.name }</h3>
                <span class="menu-item-price">{ format_price(item.price) }</span>
            </div>
            <p class="menu-item-description">{ &item.description }</p>
            <div class="menu-item-footer">
                <span class={availability_class}>{ availability_text }</span>
                if props.admin {
                    <div class="menu-item-actions">
                        <button class="btn btn-secondary">{"Edit"}</button>
                        <button class="btn btn-primary">{"Delete"}</button>
                    </div>
                }
            </div>
        </div>
    }
}
