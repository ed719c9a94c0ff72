//! Generic load-failure message.
//!
//! Every page-level fetch failure renders through this one component,
//! so a failed menu fetch, a failed categories fetch, and a plain
//! network outage all look identical to the user.

use yew::prelude::*;

/// Text shown for any failed page load.
pub const LOAD_ERROR_TEXT: &str = "Failed to load data";

/// Load-failure placeholder.
#[function_component(ErrorMessage)]
pub fn error_message() -> Html {
    html! {
        <div class="card error-message">{ LOAD_ERROR_TEXT }</div>
    }
}
