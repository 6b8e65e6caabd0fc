/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod api;
pub mod error;
pub mod flow;
pub mod gate;
pub mod http;
pub mod listing;
pub mod models;
pub mod progress;
pub mod resource;
pub mod roster;
pub mod session;

use error::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub token: Option<String>,
}

pub type RequestType = reqwest::Method;

fn get_client(
    client: &reqwest::Client,
    config: &RequestConfig,
    endpoint: &str,
    request_type: RequestType,
    login: bool,
) -> ConnectorResult<reqwest::RequestBuilder> {
    let url = format!("{}/api/{}", config.server_url.trim_end_matches('/'), endpoint);
    tracing::debug!(method = %request_type, %url, "sending request");

    let mut client = client.request(request_type, url);

    client = client.header("Content-Type", "application/json");

    if !login {
        return Ok(client);
    }

    let token = match config.token.as_deref().filter(|t| !t.is_empty()) {
        Some(token) => token,
        None => return Err(ConnectorError::NotLoggedIn),
    };

    client = client.header("Authorization", format!("Bearer {}", token));

    Ok(client)
}

/// Reads the body and maps non-success statuses onto [`ConnectorError`].
async fn read_response(res: reqwest::Response, resource: &str) -> ConnectorResult<Vec<u8>> {
    let status = res.status();
    let body = res.bytes().await?.to_vec();

    if status.is_success() {
        return Ok(body);
    }

    let err = ConnectorError::from_status(status.as_u16(), resource, &body);

    if err.is_session_expired() {
        tracing::warn!(%status, resource, "server rejected the session token");
    }

    Err(err)
}

/// Payloads arrive either bare or wrapped as `{"data": ...}`.
fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

pub fn decode_item<T: DeserializeOwned>(body: &[u8]) -> ConnectorResult<T> {
    let value: Value = serde_json::from_slice(body)?;
    Ok(serde_json::from_value(unwrap_data(value))?)
}

/// Decodes a list payload. Anything but an array is an invalid format;
/// single entries that are not records are skipped.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> ConnectorResult<Vec<T>> {
    let value: Value = serde_json::from_slice(body)?;

    let items = match unwrap_data(value) {
        Value::Array(items) => items,
        other => {
            return Err(ConnectorError::InvalidFormat(format!(
                "expected a list, got {}",
                json_kind(&other)
            )));
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("skipping malformed list entry: {}", e);
                None
            }
        })
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
