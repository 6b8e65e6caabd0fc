/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::RequestConfig;
use connector::api::AgencyApi;
use connector::error::*;
use connector::http::HttpApi;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Answers a single request with `status` and `body`, handing back the raw
/// request it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (url, handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn api(url: &str, token: Option<&str>) -> HttpApi {
    HttpApi::new(RequestConfig {
        server_url: url.to_string(),
        token: token.map(str::to_string),
    })
}

#[tokio::test]
async fn test_get_sends_bearer_token_and_decodes_envelope() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"data":[{"_id":"e1","fullName":"Budi","employmentStatus":"ActiveEmployee"}]}"#,
    )
    .await;

    let employees = api(&format!("{}/", url), Some("token-123"))
        .employees()
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("GET /api/karyawan HTTP/1.1\r\n"));
    assert!(request.to_lowercase().contains("authorization: bearer token-123\r\n"));
    assert!(request.to_lowercase().contains("content-type: application/json\r\n"));
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].full_name, "Budi");
}

#[tokio::test]
async fn test_missing_token_fails_before_sending() {
    for token in [None, Some("")] {
        let err = api("http://127.0.0.1:9", token).projects().await.unwrap_err();
        assert_eq!(err, ConnectorError::NotLoggedIn);
    }
}

#[tokio::test]
async fn test_delete_uses_delete_method() {
    let (url, server) = serve_once("200 OK", r#"{"message":"deleted"}"#).await;

    api(&url, Some("token-123")).delete_employee("e2").await.unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("DELETE /api/karyawan/e2 HTTP/1.1\r\n"));
}

#[tokio::test]
async fn test_unauthorized_and_forbidden_mean_session_expired() {
    for status in ["401 Unauthorized", "403 Forbidden"] {
        let (url, server) = serve_once(status, r#"{"message":"jwt expired"}"#).await;

        let err = api(&url, Some("stale")).profile(connector::models::Role::Client).await.unwrap_err();
        server.await.unwrap();

        assert!(err.is_session_expired());
        assert_eq!(err.to_string(), "Session expired, please log in again");
    }
}

#[tokio::test]
async fn test_not_found_names_the_resource() {
    let (url, server) = serve_once("404 Not Found", "").await;

    let err = api(&url, Some("token-123")).project("p9").await.unwrap_err();
    let request = server.await.unwrap();

    assert!(request.starts_with("GET /api/projects/p9 HTTP/1.1\r\n"));
    assert_eq!(err.to_string(), "Project not found");
}

#[tokio::test]
async fn test_rejection_carries_server_message_or_fallback() {
    let (url, server) = serve_once("422 Unprocessable Entity", r#"{"message":"Rating wajib diisi"}"#).await;
    let review = connector::models::NewReview {
        rating: 0,
        comment: "ok".to_string(),
    };

    let err = api(&url, Some("token-123")).submit_review(&review).await.unwrap_err();
    let request = server.await.unwrap();

    assert!(request.starts_with("POST /api/reviews HTTP/1.1\r\n"));
    assert!(request.contains(r#""comment":"ok""#));
    assert_eq!(err.user_message(), "Rating wajib diisi");

    let (url, server) = serve_once("500 Internal Server Error", "<html>oops</html>").await;
    let err = api(&url, Some("token-123")).reviews().await.unwrap_err();
    server.await.unwrap();

    assert_eq!(err.user_message(), GENERIC_FAILURE);
}

#[tokio::test]
async fn test_login_without_token_header() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"data":{"token":"fresh-token","role":"Manager"}}"#,
    )
    .await;

    let login = api(&url, None).login("siti@agency.id", "rahasia").await.unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("POST /api/users/login HTTP/1.1\r\n"));
    assert!(!request.to_lowercase().contains("authorization:"));
    assert!(request.contains(r#""email":"siti@agency.id""#));
    assert_eq!(login.token, "fresh-token");
    assert_eq!(login.role, "Manager");
}

#[tokio::test]
async fn test_login_unauthorized_is_bad_credentials() {
    let (url, server) = serve_once("401 Unauthorized", r#"{"message":"Unauthorized"}"#).await;

    let err = api(&url, None).login("siti@agency.id", "salah").await.unwrap_err();
    server.await.unwrap();

    assert!(!err.is_session_expired());
    assert_eq!(
        err,
        ConnectorError::Rejected {
            status: 401,
            message: Some("Invalid email or password".to_string()),
        }
    );
}

#[tokio::test]
async fn test_login_without_token_in_body_is_invalid_format() {
    let (url, server) = serve_once("200 OK", r#"{"role":"client"}"#).await;

    let err = api(&url, None).login("siti@agency.id", "rahasia").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ConnectorError::InvalidFormat(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_no_response() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = api(&url, Some("token-123")).clients().await.unwrap_err();

    assert!(matches!(err, ConnectorError::NoResponse(_)));
    assert_eq!(err.to_string(), "No response from server");
}
