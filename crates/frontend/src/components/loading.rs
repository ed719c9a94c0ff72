//! Loading indicator shown while page data is in flight.

use yew::prelude::*;

/// Centered loading placeholder.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading">{"Loading..."}</div>
    }
}
