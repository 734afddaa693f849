//! Shared HTTP client for the REST backend.
//!
//! Every call carries the bearer token from local storage. A 401 becomes
//! [`ApiError::Unauthorized`]; any other non-2xx answer is a uniform
//! [`ApiError::Server`] whose status code is kept for logging only.

use contracts::shared::ApiMessage;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::{File, FormData};

use super::api_utils::api_url;
use super::crud::payload::{Part, Payload};
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Not authenticated")]
    Unauthorized,
    #[error("Browser error: {0}")]
    Browser(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Post,
    Put,
}

fn builder(verb: Verb, url: &str) -> RequestBuilder {
    match verb {
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
    }
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = storage::get_access_token().ok_or(ApiError::Unauthorized)?;
    Ok(builder.header("Authorization", &format!("Bearer {}", token)))
}

/// Human-readable reason for a failed response.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.text().map(str::to_string))
        .unwrap_or_else(|| format!("Request failed (HTTP {})", status))
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 401 {
        log::warn!("{} -> 401", response.url());
        return Err(ApiError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    log::warn!("{} {} -> {}: {}", response.url(), status, response.status_text(), message);
    Err(ApiError::Server { status, message })
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let request = authorized(Request::get(&url))?
        .header("Cache-Control", "no-cache")
        .build()
        .map_err(|e| ApiError::Browser(e.to_string()))?;
    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// JSON request without a bearer token, for the login endpoint.
pub async fn post_json_public<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Sends a form payload, JSON or multipart, and ignores the response body.
pub async fn send_payload(verb: Verb, path: &str, payload: Payload<File>) -> Result<(), ApiError> {
    let url = api_url(path);
    let request = match payload {
        Payload::Json(value) => {
            log::debug!("{:?} {} (json)", verb, url);
            authorized(builder(verb, &url))?
                .json(&value)
                .map_err(|e| ApiError::Decode(e.to_string()))?
        }
        Payload::Multipart(parts) => {
            log::debug!("{:?} {} (multipart, {} parts)", verb, url, parts.len());
            authorized(builder(verb, &url))?
                .body(form_data(&parts)?)
                .map_err(|e| ApiError::Browser(e.to_string()))?
        }
    };
    send(request).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    let request = authorized(Request::delete(&url))?
        .build()
        .map_err(|e| ApiError::Browser(e.to_string()))?;
    send(request).await.map(|_| ())
}

fn form_data(parts: &[Part<File>]) -> Result<FormData, ApiError> {
    let browser = |e: wasm_bindgen::JsValue| ApiError::Browser(format!("{e:?}"));
    let data = FormData::new().map_err(browser)?;
    for part in parts {
        match part {
            Part::Text { name, value } => data.append_with_str(name, value).map_err(browser)?,
            Part::File {
                name,
                filename,
                blob,
            } => data
                .append_with_blob_and_filename(name, blob, filename)
                .map_err(browser)?,
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_surfaced() {
        assert_eq!(
            error_message(409, r#"{"message":"Category name already exists"}"#),
            "Category name already exists"
        );
    }

    #[test]
    fn falls_back_to_status_for_opaque_bodies() {
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "Request failed (HTTP 502)");
        assert_eq!(error_message(500, ""), "Request failed (HTTP 500)");
    }

    #[test]
    fn server_error_displays_message_only() {
        let e = ApiError::Server {
            status: 400,
            message: "Invalid image".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid image");
    }
}
