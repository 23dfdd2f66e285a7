//! Login handshake tests against a canned-response server: outcome
//! classification, device-id header placement, and token installation.

mod common;

use std::sync::Arc;
use std::time::Duration;

use folio_client::api_client::ApiClient;
use folio_client::device::DeviceIdentityStore;
use folio_client::errors::{GENERIC_FAILURE_MESSAGE, LoginError};
use folio_client::session::SessionNegotiator;
use folio_client::testing::MemoryDeviceStore;
use folio_model::{Credentials, Role};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn negotiator_for(base_url: &str) -> SessionNegotiator {
    SessionNegotiator::new(
        ApiClient::new(base_url),
        DeviceIdentityStore::new(Arc::new(MemoryDeviceStore::new())),
    )
}

fn sample_credentials() -> Credentials {
    Credentials {
        email: "admin@example.com".into(),
        password: "Sup3rsecret".into(),
    }
}

#[tokio::test]
async fn successful_login_installs_token_and_sends_device_header() {
    let (base_url, request_rx) = common::serve_once(
        200,
        "OK",
        r#"{
            "token": "tok-1",
            "userId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "role": "admin",
            "email": "admin@example.com",
            "displayName": "Admin"
        }"#,
    );
    let negotiator = negotiator_for(&base_url);

    let session = negotiator
        .login(&sample_credentials())
        .await
        .expect("login succeeds");

    assert_eq!(session.token, "tok-1");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(
        negotiator.api().token().await.as_deref(),
        Some("tok-1"),
        "bearer token installed for subsequent requests"
    );

    let request = request_rx.recv_timeout(RECV_TIMEOUT).expect("request seen");
    let device_id = negotiator
        .devices()
        .peek()
        .await
        .expect("identifier persisted by login");
    assert!(
        request.contains(&format!("x-device-id: {}", device_id)),
        "device id must travel as a header"
    );

    let body = request
        .split("\r\n\r\n")
        .nth(1)
        .expect("request has a body");
    assert!(
        !body.contains(&device_id),
        "device id must not be embedded in the body"
    );
}

#[tokio::test]
async fn session_limit_rejection_preserves_the_payload() {
    let (base_url, _request_rx) = common::serve_once(
        403,
        "Forbidden",
        r#"{
            "message": "Maximum number of devices reached",
            "error": "SESSION_LIMIT_REACHED",
            "maxSessions": 3,
            "activeSessions": 3
        }"#,
    );
    let negotiator = negotiator_for(&base_url);

    let rejection = negotiator
        .login(&sample_credentials())
        .await
        .expect_err("login rejected");

    match rejection {
        LoginError::SessionLimit {
            message,
            max_sessions,
            active_sessions,
        } => {
            assert_eq!(message, "Maximum number of devices reached");
            assert_eq!(max_sessions, 3);
            assert_eq!(active_sessions, 3);
        }
        other => panic!("expected session limit, got {other:?}"),
    }

    assert!(
        negotiator.api().token().await.is_none(),
        "no token installed on rejection"
    );
}

#[tokio::test]
async fn wrong_password_maps_to_invalid_credentials() {
    let (base_url, _request_rx) = common::serve_once(
        401,
        "Unauthorized",
        r#"{"message": "Invalid email or password"}"#,
    );
    let negotiator = negotiator_for(&base_url);

    let rejection = negotiator
        .login(&sample_credentials())
        .await
        .expect_err("login rejected");

    assert!(matches!(rejection, LoginError::InvalidCredentials));
}

#[tokio::test]
async fn server_error_surfaces_the_server_message() {
    let (base_url, _request_rx) = common::serve_once(
        500,
        "Internal Server Error",
        r#"{"message": "database unavailable"}"#,
    );
    let negotiator = negotiator_for(&base_url);

    let rejection = negotiator
        .login(&sample_credentials())
        .await
        .expect_err("login rejected");

    match rejection {
        LoginError::Failed { message } => {
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected generic failure, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_uses_the_fixed_fallback_message() {
    let negotiator = negotiator_for(&common::unreachable_base_url());

    let rejection = negotiator
        .login(&sample_credentials())
        .await
        .expect_err("login fails");

    match rejection {
        LoginError::Failed { message } => {
            assert_eq!(message, GENERIC_FAILURE_MESSAGE);
        }
        other => panic!("expected generic failure, got {other:?}"),
    }
}

#[tokio::test]
async fn close_other_sessions_posts_the_device_id() {
    let (base_url, request_rx) = common::serve_once(204, "No Content", "");
    let negotiator = negotiator_for(&base_url);

    negotiator
        .close_other_sessions()
        .await
        .expect("close succeeds");

    let request = request_rx.recv_timeout(RECV_TIMEOUT).expect("request seen");
    let device_id = negotiator
        .devices()
        .peek()
        .await
        .expect("identifier persisted");
    assert!(request.contains("POST /close-other-sessions"));
    assert!(
        request.contains(&format!(r#""deviceId":"{}""#, device_id)),
        "body carries the device id: {request}"
    );
}

#[tokio::test]
async fn active_sessions_decodes_descriptors() {
    let (base_url, _request_rx) = common::serve_once(
        200,
        "OK",
        r#"[
            {
                "deviceId": "5e0c7c1e-9bfb-4a40-9df0-6a1c7d0e8f21",
                "deviceName": "Pixel 9",
                "createdAt": "2026-02-01T12:00:00Z",
                "lastActiveAt": "2026-02-03T08:30:00Z"
            },
            {
                "deviceId": "b7a9d2c4-1f3e-4d5a-8c6b-0e9f8a7d6c5b",
                "createdAt": "2026-02-02T09:00:00Z"
            }
        ]"#,
    );
    let negotiator = negotiator_for(&base_url);

    let sessions = negotiator
        .active_sessions()
        .await
        .expect("listing succeeds");

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].device_name.as_deref(), Some("Pixel 9"));
    assert!(sessions[1].device_name.is_none());
    assert!(sessions[1].last_active_at.is_none());
}

#[tokio::test]
async fn logout_clears_the_token_but_not_the_device_identity() {
    let negotiator = negotiator_for("http://127.0.0.1:0");

    let device_id = negotiator.devices().get_or_create().await;
    negotiator.api().set_token(Some("tok".into())).await;

    negotiator.logout().await;

    assert!(negotiator.api().token().await.is_none());
    assert_eq!(
        negotiator.devices().peek().await.as_deref(),
        Some(device_id.as_str()),
        "device identity outlives the session"
    );
}
