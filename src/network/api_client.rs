use std::fmt;

use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::models::EntityKind;

/// Why a request produced no usable data.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// `fetch` itself rejected (offline, CORS, DNS…).
    Network(String),
    /// The server answered with a non-2xx status.
    Status { status: u16, text: String },
    /// The body was not the JSON we expected.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status { status, text } => write!(f, "API request failed: {} {}", status, text),
            ApiError::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

// REST client for the entity collections
pub struct ApiClient;

impl ApiClient {
    fn collection_url(kind: EntityKind) -> String {
        super::api_config().url(kind.path())
    }

    fn record_url(kind: EntityKind, id: u32) -> String {
        super::api_config().url(&format!("{}/{}", kind.path(), id))
    }

    /// `GET /<path>` – the full collection as a JSON array.
    pub async fn list(kind: EntityKind) -> Result<Value, ApiError> {
        let resp = Self::send(&Self::collection_url(kind), "GET", None).await?;
        let json = JsFuture::from(resp.json()?).await?;
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /<path>` – returns the created record as echoed by the server.
    pub async fn create(kind: EntityKind, payload: &Map<String, Value>) -> Result<Value, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = Self::fetch_json(&Self::collection_url(kind), "POST", Some(&body)).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `PATCH /<path>/:id` with only the changed fields. The response body
    /// is ignored.
    pub async fn update(kind: EntityKind, id: u32, payload: &Map<String, Value>) -> Result<(), ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::fetch_json(&Self::record_url(kind, id), "PATCH", Some(&body)).await?;
        Ok(())
    }

    /// `DELETE /<path>/:id`
    pub async fn delete(kind: EntityKind, id: u32) -> Result<(), ApiError> {
        Self::send(&Self::record_url(kind, id), "DELETE", None).await?;
        Ok(())
    }

    /// Issue a request and return the body as text.
    pub async fn fetch_json(url: &str, method: &str, body: Option<&str>) -> Result<String, ApiError> {
        let resp = Self::send(url, method, body).await?;
        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }

    async fn send(url: &str, method: &str, body: Option<&str>) -> Result<Response, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        headers.append("Accept", "application/json")?;
        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(data));
            headers.append("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no global window exists".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                text: resp.status_text(),
            });
        }
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_read_like_http() {
        let err = ApiError::Status {
            status: 404,
            text: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "API request failed: 404 Not Found");
    }
}
