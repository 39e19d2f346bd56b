//! HTTP helpers for talking to the portal backend.

use serde::{de::DeserializeOwned, Serialize};

/// Port the axum server listens on (`[server] port` in config.toml)
const BACKEND_PORT: u16 = 3000;

/// Backend origin derived from the page's own host, e.g. `http://localhost:3000`.
///
/// Empty outside a browser window.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".into());
    let host = location.hostname().unwrap_or_else(|_| "127.0.0.1".into());
    format!("{protocol}//{host}:{BACKEND_PORT}")
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON document; non-2xx answers become `Err("HTTP <status>")`
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = gloo_net::http::Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

/// POST `body` as JSON and return the raw response for status-aware decoding
pub async fn post_json<B: Serialize>(
    path: &str,
    body: &B,
) -> Result<gloo_net::http::Response, String> {
    gloo_net::http::Request::post(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())
}
