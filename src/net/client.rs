//! HTTP client wrapper shared by every resource call.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always sending the
//! session cookie. Host builds (tests): stubs returning
//! [`ApiError::Unavailable`] since a backend is only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx answer maps to [`ApiError::Status`]; callers treat all
//! failures alike and surface a static message, so no finer taxonomy is kept.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Backend origin used when no build-time override is set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Query-string pairs appended to a request URL.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Backend origin, read once at build time from `LESSONGEN_API_BASE_URL`.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("LESSONGEN_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{base}/{}", path.trim_start_matches('/'))
}

/// Absolute URL for an API path such as `/lessons`.
pub fn endpoint(path: &str) -> String {
    join_url(&api_base_url(), path)
}

/// Map an HTTP status to success or [`ApiError::Status`].
///
/// # Errors
///
/// Returns [`ApiError::Status`] for anything outside `200..300`.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(feature = "csr")]
#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
}

#[cfg(feature = "csr")]
fn request(method: Method, path: &str, query: &[(&'static str, String)]) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let url = endpoint(path);
    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };
    builder
        .credentials(web_sys::RequestCredentials::Include)
        .query(query.iter().map(|(k, v)| (*k, v.as_str())))
}

#[cfg(feature = "csr")]
async fn send_checked(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp.status())?;
    Ok(resp)
}

#[cfg(feature = "csr")]
async fn send_builder(builder: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Response, ApiError> {
    let request = builder.build().map_err(|e| ApiError::Encode(e.to_string()))?;
    send_checked(request).await
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET` a JSON resource.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn get_json<T: DeserializeOwned>(path: &str, query: QueryPairs) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = send_builder(request(Method::Get, path, &query)).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, query);
        Err(ApiError::Unavailable)
    }
}

/// `GET` a raw byte body (file downloads).
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or non-2xx status.
pub async fn get_bytes(path: &str, query: QueryPairs) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = send_builder(request(Method::Get, path, &query)).await?;
        resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, query);
        Err(ApiError::Unavailable)
    }
}

/// `POST` a JSON body and decode a JSON answer.
///
/// # Errors
///
/// Returns [`ApiError`] on encode/transport/decode failure or non-2xx status.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let req = request(Method::Post, path, &[])
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = send_checked(req).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, serde_json::to_value(body));
        Err(ApiError::Unavailable)
    }
}

/// `POST` without a body and decode a JSON answer.
///
/// # Errors
///
/// Returns [`ApiError`] on transport/decode failure or non-2xx status.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = send_builder(request(Method::Post, path, &[])).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST` without a body, ignoring whatever the server answers.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or non-2xx status.
pub async fn post_ignore(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send_builder(request(Method::Post, path, &[])).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `PUT` a JSON body and decode a JSON answer.
///
/// # Errors
///
/// Returns [`ApiError`] on encode/transport/decode failure or non-2xx status.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let req = request(Method::Put, path, &[])
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = send_checked(req).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, serde_json::to_value(body));
        Err(ApiError::Unavailable)
    }
}
