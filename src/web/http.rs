//! JSON round trips to the backend.
//!
//! The server answers JSON on failures too (often with a 4xx status), so
//! bodies are parsed regardless of the HTTP status and handlers branch on
//! the payload's own `success`/`valid`/`error` fields.
//!
//! No timeout or cancellation: a hung request leaves whatever indicator the
//! caller raised in place until the page is reloaded.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(super) async fn post_json<B, T>(url: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("request build failed: {e}"))?
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("malformed response: {e}"))
}

pub(super) async fn get_json<T>(url: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("malformed response: {e}"))
}
