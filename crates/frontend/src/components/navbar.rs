//! Top navigation bar with the theme toggle.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::state::Theme;

/// Flip the `dark` class on the document root to match the theme.
fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let class_list = root.class_list();
    let result = if theme.is_dark() {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };

    if result.is_err() {
        web_sys::console::error_1(&"Failed to update theme class".into());
    }
}

/// Navigation bar component.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let theme = use_state(Theme::default);

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            apply_theme(next);
            theme.set(next);
        })
    };

    let (icon, toggle_label) = if theme.is_dark() {
        ("☀", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };

    html! {
        <nav class="navbar" role="navigation" aria-label="Main navigation">
            <div class="nav-brand">{"Restaurant Menu"}</div>
            <div class="nav-links">
                <Link<Route> to={Route::Home}>{"Menu"}</Link<Route>>
                <Link<Route> to={Route::Admin}>{"Admin"}</Link<Route>>
            </div>
            <button class="theme-toggle" onclick={on_toggle} aria-label={toggle_label}>
                { icon }
            </button>
        </nav>
    }
}
