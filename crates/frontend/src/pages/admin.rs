//! Admin panel page.
//!
//! Three tabs: menu management (the fetched items), plus orders and
//! staff placeholders. The tabs are pure UI state - no data is loaded
//! or mutated per tab.

use core_types::{Category, MenuItem};
use yew::prelude::*;

use crate::api;
use crate::components::{ErrorMessage, Loading, MenuItemCard};
use crate::state::{AdminTab, LoadPhase};

/// Admin page component.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let items = use_state(Vec::<MenuItem>::new);
    let categories = use_state(Vec::<Category>::new);
    let active_tab = use_state(|| AdminTab::Menu);
    let phase = use_state(LoadPhase::default);

    // Same joint fetch as the home page
    {
        let items = items.clone();
        let categories = categories.clone();
        let phase = phase.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    futures::future::try_join(api::fetch_menu(), api::fetch_categories()).await;

                match &result {
                    Ok((fetched_items, fetched_categories)) => {
                        items.set(fetched_items.clone());
                        categories.set(fetched_categories.clone());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to load data: {e}").into());
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

    html! {
        <div>
            <header class="admin-header">
                <h1>{"Admin Panel"}</h1>
            </header>

            <div class="tab-bar">
                { for AdminTab::ALL.iter().map(|tab| {
                    let class = if *tab == *active_tab { "tab active" } else { "tab" };
                    let onclick = {
                        let active_tab = active_tab.clone();
                        let tab = *tab;
                        Callback::from(move |_| active_tab.set(tab))
                    };

                    html! {
                        <button {class} {onclick}>{ tab.label() }</button>
                    }
                })}
            </div>

            <div class="card">
                { match *active_tab {
                    AdminTab::Menu => html! {
                        <div>
                            <div class="card-header">
                                <h2 class="card-title">{"Menu Items"}</h2>
                                <span class="card-subtitle">
                                    { format!("{} items in {} categories", items.len(), categories.len()) }
                                </span>
                                <button class="btn btn-primary">{"Add New Item"}</button>
                            </div>
                            <div class="menu-grid">
                                { for items.iter().map(|item| {
                                    html! { <MenuItemCard item={item.clone()} admin={true} /> }
                                })}
                            </div>
                        </div>
                    },
                    AdminTab::Orders => html! {
                        <div>
                            <h2 class="card-title">{"Active Orders"}</h2>
                            <p class="text-secondary">{"No active orders at the moment."}</p>
                        </div>
                    },
                    AdminTab::Staff => html! {
                        <div>
                            <div class="card-header">
                                <h2 class="card-title">{"Staff Members"}</h2>
                                <button class="btn btn-primary">{"Add Staff Member"}</button>
                            </div>
                            <p class="text-secondary">{"No staff members added yet."}</p>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
