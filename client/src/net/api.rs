//! REST API helpers for communicating with the review backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Network`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Transport failures, non-2xx
//! statuses (with the backend's `error`/`message` text) and unreadable bodies
//! stay distinguishable so pages can pick the right banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reviews::{ApiError, BulkImportRequest, BulkImportResponse, NewSnippet, ReviewPayload, Snippet, Stats};

pub const HEALTH_PATH: &str = "/health";
pub const STATS_PATH: &str = "/stats";
pub const CODES_PATH: &str = "/codes";
pub const BULK_CODES_PATH: &str = "/codes/bulk";
pub const RANDOM_CODE_PATH: &str = "/codes/random";
pub const REVIEWS_PATH: &str = "/reviews";
pub const EXPORT_PATH: &str = "/reviews/export";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use reviews::ApiError;
    use serde::de::DeserializeOwned;

    use super::endpoint;
    use crate::config::api_base_url;

    pub fn get(path: &str) -> RequestBuilder {
        let url = endpoint(&api_base_url(), path);
        log::debug!("GET {url}");
        Request::get(&url).header("Content-Type", "application/json")
    }

    pub fn post(path: &str) -> RequestBuilder {
        let url = endpoint(&api_base_url(), path);
        log::debug!("POST {url}");
        Request::post(&url).header("Content-Type", "application/json")
    }

    /// Build a JSON body for `builder`.
    pub fn with_json<T: serde::Serialize>(builder: RequestBuilder, body: &T) -> Result<Request, ApiError> {
        builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Await a send and turn non-2xx statuses into [`ApiError::Rejected`].
    pub async fn checked<F>(path: &str, pending: F) -> Result<Response, ApiError>
    where
        F: std::future::Future<Output = Result<Response, gloo_net::Error>>,
    {
        let resp = pending.await.map_err(|e| {
            log::warn!("{path}: {e}");
            ApiError::Network(e.to_string())
        })?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("{path}: HTTP {status}");
        Err(ApiError::rejected(status, &body))
    }

    pub async fn json_body<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Probe `GET /health`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the backend is unreachable or unhealthy.
pub async fn check_health() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::checked(HEALTH_PATH, transport::get(HEALTH_PATH).send()).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Fetch aggregate counters from `GET /stats`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status or decode failure.
pub async fn fetch_stats() -> Result<Stats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::checked(STATS_PATH, transport::get(STATS_PATH).send()).await?;
        transport::json_body(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Fetch every snippet from `GET /codes`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status or decode failure.
pub async fn fetch_snippets() -> Result<Vec<Snippet>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::checked(CODES_PATH, transport::get(CODES_PATH).send()).await?;
        transport::json_body(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Insert one snippet via `POST /codes`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or status failure.
pub async fn create_snippet(snippet: &NewSnippet) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::with_json(transport::post(CODES_PATH), snippet)?;
        transport::checked(CODES_PATH, request.send()).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = snippet;
        Err(unavailable())
    }
}

/// Insert many snippets via `POST /codes/bulk`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status or decode failure.
pub async fn bulk_import(body: &BulkImportRequest) -> Result<BulkImportResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::with_json(transport::post(BULK_CODES_PATH), body)?;
        let resp = transport::checked(BULK_CODES_PATH, request.send()).await?;
        transport::json_body(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(unavailable())
    }
}

/// Fetch one unreviewed snippet from `GET /codes/random`, scoped to `email`
/// when given. A 404 means nothing is left to review.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status or decode failure.
pub async fn fetch_random_snippet(email: Option<&str>) -> Result<Snippet, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::get(RANDOM_CODE_PATH);
        let builder = match email {
            Some(email) => builder.query([("email", email)]),
            None => builder,
        };
        let resp = transport::checked(RANDOM_CODE_PATH, builder.send()).await?;
        transport::json_body(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(unavailable())
    }
}

/// Submit a review via `POST /reviews`.
///
/// # Errors
///
/// Returns an [`ApiError`]; 400 carries the backend's validation message and
/// 404 means the snippet is no longer available.
pub async fn submit_review(payload: &ReviewPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::with_json(transport::post(REVIEWS_PATH), payload)?;
        transport::checked(REVIEWS_PATH, request.send()).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(unavailable())
    }
}

/// Download the CSV produced by `GET /reviews/export`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status or body read failure.
pub async fn export_reviews() -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::checked(EXPORT_PATH, transport::get(EXPORT_PATH).send()).await?;
        resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}
