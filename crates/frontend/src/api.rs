//! HTTP client for the backend menu API.
//!
//! One best-effort GET per call: no retries, no timeout, no caching.
//! A non-success status is an error just like a transport failure.

use core_types::{Category, MenuItem, Restaurant};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::fmt;

/// Base path of the backend API.
const API_BASE: &str = "/api";

/// Error from a backend fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never completed.
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "request failed: {msg}"),
            FetchError::Status(code) => write!(f, "request failed with status {code}"),
        }
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let result = try_get_json(path).await;

    if let Err(e) = &result {
        web_sys::console::error_1(&format!("Error fetching {path}: {e}").into());
    }

    result
}

async fn try_get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let resp = Request::get(path)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// Fetch all menu items.
pub async fn fetch_menu() -> Result<Vec<MenuItem>, FetchError> {
    get_json(&format!("{API_BASE}/menu")).await
}

/// Fetch all categories.
pub async fn fetch_categories() -> Result<Vec<Category>, FetchError> {
    get_json(&format!("{API_BASE}/categories")).await
}

/// Fetch all restaurants.
pub async fn fetch_restaurants() -> Result<Vec<Restaurant>, FetchError> {
    get_json(&format!("{API_BASE}/restaurants")).await
}
