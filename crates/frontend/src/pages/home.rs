//! Customer-facing menu page.

use core_types::{Category, MenuItem};
use yew::prelude::*;

use crate::api;
use crate::components::{ErrorMessage, Loading, MenuItemCard};
use crate::state::{LoadPhase, filter_by_category, initial_active_category};

/// Home page component.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let items = use_state(Vec::<MenuItem>::new);
    let categories = use_state(Vec::<Category>::new);
    let active_category = use_state(|| None::<u32>);
    let phase = use_state(LoadPhase::default);

    // Fetch items and categories together on mount
    {
        let items = items.clone();
        let categories = categories.clone();
        let active_category = active_category.clone();
        let phase = phase.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // The page fails as soon as either fetch does.
                let result =
                    futures::future::try_join(api::fetch_menu(), api::fetch_categories()).await;

                match &result {
                    Ok((fetched_items, fetched_categories)) => {
                        active_category.set(initial_active_category(fetched_categories));
                        items.set(fetched_items.clone());
                        categories.set(fetched_categories.clone());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to load menu: {e}").into());
                    }
                }
                phase.set(LoadPhase::from_result(&result));
            });
        });
    }

    match *phase {
        LoadPhase::Loading => return html! { <Loading /> },
        LoadPhase::Failed => return html! { <ErrorMessage /> },
        LoadPhase::Ready => {}
    }

    let visible_items = filter_by_category(&items, *active_category);

    html! {
        <div>
            <h1>{"Welcome to the Restaurant Menu"}</h1>

            <div class="category-bar">
                { for categories.iter().map(|category| {
                    let class = if Some(category.id) == *active_category {
                        "category-pill active"
                    } else {
                        "category-pill"
                    };
                    let onclick = {
                        let active_category = active_category.clone();
                        let id = category.id;
                        Callback::from(move |_| active_category.set(Some(id)))
                    };

                    html! {
                        <button {class} {onclick}>
                            if let Some(icon) = &category.icon {
                                <span class="category-icon">{ icon }</span>
                            }
                            { &category.name }
                        </button>
                    }
                })}
            </div>

            if visible_items.is_empty() {
                <div class="card">
                    <p>{"No items in this category."}</p>
                </div>
            } else {
                <div class="menu-grid">
                    { for visible_items.iter().map(|item| {
                        html! { <MenuItemCard item={item.clone()} /> }
                    })}
                </div>
            }
        </div>
    }
}
