//! Restaurant Menu - Yew WASM frontend.
//!
//! This crate provides the customer-facing menu browser and the
//! minimal admin panel, both rendered from the backend menu API.

pub mod api;
mod app;
mod components;
mod pages;
pub mod state;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
