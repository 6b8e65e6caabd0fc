/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::fmt;

pub const GENERIC_FAILURE: &str = "Something went wrong, please try again";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    NoResponse(String),
    SessionExpired,
    NotFound(String),
    Rejected { status: u16, message: Option<String> },
    InvalidFormat(String),
    NotLoggedIn,
    RoleNotRecognized(String),
    Validation(String),
    AlreadyEvaluated(String),
    Storage(String),
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorError::NoResponse(_) => write!(f, "No response from server"),
            ConnectorError::SessionExpired => write!(f, "Session expired, please log in again"),
            ConnectorError::NotFound(resource) => write!(f, "{} not found", resource),
            ConnectorError::Rejected {
                message: Some(message),
                ..
            } => write!(f, "{}", message),
            ConnectorError::Rejected {
                status,
                message: None,
            } => write!(f, "Request failed with status {}", status),
            ConnectorError::InvalidFormat(_) => write!(f, "Invalid data format"),
            ConnectorError::NotLoggedIn => write!(
                f,
                "Not logged in. Use `agency login` to start a session."
            ),
            ConnectorError::RoleNotRecognized(role) => {
                write!(f, "Role not recognized: {}", role)
            }
            ConnectorError::Validation(msg) => write!(f, "{}", msg),
            ConnectorError::AlreadyEvaluated(project) => {
                write!(f, "Project {} has already been evaluated", project)
            }
            ConnectorError::Storage(msg) => write!(f, "Session storage error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectorError {}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        ConnectorError::NoResponse(err.to_string())
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        ConnectorError::InvalidFormat(err.to_string())
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

impl ConnectorError {
    pub fn validation(msg: &str) -> Self {
        ConnectorError::Validation(msg.to_string())
    }

    pub fn not_found(resource: &str) -> Self {
        ConnectorError::NotFound(resource.to_string())
    }

    /// Maps a non-success status and its body onto the error taxonomy.
    pub fn from_status(status: u16, resource: &str, body: &[u8]) -> Self {
        match status {
            401 | 403 => ConnectorError::SessionExpired,
            404 => ConnectorError::not_found(resource),
            _ => ConnectorError::Rejected {
                status,
                message: server_message(body),
            },
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ConnectorError::SessionExpired)
    }

    /// Message shown in a failed form; falls back to a generic string when
    /// the server sent nothing usable.
    pub fn user_message(&self) -> String {
        match self {
            ConnectorError::Rejected { message: None, .. } => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;

    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|m| m.as_str())
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_auth_failures_to_expiry() {
        assert_eq!(
            ConnectorError::from_status(401, "Profile", b""),
            ConnectorError::SessionExpired
        );
        assert_eq!(
            ConnectorError::from_status(403, "Profile", b"{\"message\":\"nope\"}"),
            ConnectorError::SessionExpired
        );
    }

    #[test]
    fn test_from_status_keeps_server_message() {
        let err = ConnectorError::from_status(422, "Review", b"{\"message\":\"Rating wajib diisi\"}");
        assert_eq!(err.to_string(), "Rating wajib diisi");
        assert_eq!(err.user_message(), "Rating wajib diisi");
    }

    #[test]
    fn test_from_status_without_message_uses_fallback() {
        let err = ConnectorError::from_status(500, "Review", b"<html>oops</html>");
        assert_eq!(err.to_string(), "Request failed with status 500");
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_not_found() {
        let err = ConnectorError::from_status(404, "Project", b"");
        assert_eq!(err.to_string(), "Project not found");
    }
}
