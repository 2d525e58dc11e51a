//! Deposit validators against mock profile servers.
//!
//! ```bash
//! cargo test -p rampkit-lib --test deposit_validation
//! ```

#![cfg(feature = "http-lookup")]

mod common;

use common::registry_for;
use rampkit_lib::{LookupError, PaymentPlatform, RampkitError};
use std::error::Error;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const CASHAPP_PROFILE: &str = r#"<!DOCTYPE html><html><head><title>Pay $alice on Cash App</title></head><body></body></html>"#;

const VENMO_PROFILE: &str = r#"<html><script id="__NEXT_DATA__">{"props":{"pageProps":{"user":{"displayName":"Alice Example","id":"3141592653589793","username":"alice-ex"}}}}</script></html>"#;

// ============================================================================
// Cash App
// ============================================================================

#[tokio::test]
async fn test_cashapp_resolves_cashtag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/$alice"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CASHAPP_PROFILE))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server.uri(), 0);
    let config = registry.get(PaymentPlatform::CashApp);
    let id = config
        .resolve_payee_id(&config.deposit_data("alice", Some("alice_tg")))
        .await
        .unwrap();

    assert_eq!(id, "alice");
}

#[tokio::test]
async fn test_cashapp_unknown_cashtag_collapses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/$ghost"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("<html><title>Cash App</title></html>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server.uri(), 2);
    let config = registry.get(PaymentPlatform::CashApp);
    let err = config
        .resolve_payee_id(&config.deposit_data("ghost", None))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to get Cashapp ID for ghost");
    assert!(!err.is_retryable());
    assert!(matches!(
        err,
        RampkitError::DepositValidation {
            cause: LookupError::PatternNotFound,
            ..
        }
    ));
}

// ============================================================================
// Venmo
// ============================================================================

#[tokio::test]
async fn test_venmo_resolves_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/u/alice-ex"))
        .respond_with(ResponseTemplate::new(200).set_body_string(VENMO_PROFILE))
        .mount(&server)
        .await;

    let registry = registry_for(&server.uri(), 0);
    let data = registry
        .get(PaymentPlatform::Venmo)
        .deposit_data("alice-ex", None);
    let id = registry
        .validate_deposit(PaymentPlatform::Venmo, &data)
        .await
        .unwrap();

    assert_eq!(id, "3141592653589793");
}

#[tokio::test]
async fn test_venmo_retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/u/alice-ex"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/u/alice-ex"))
        .respond_with(ResponseTemplate::new(200).set_body_string(VENMO_PROFILE))
        .mount(&server)
        .await;

    let registry = registry_for(&server.uri(), 2);
    let data = registry
        .get(PaymentPlatform::Venmo)
        .deposit_data("alice-ex", None);
    let id = registry
        .validate_deposit(PaymentPlatform::Venmo, &data)
        .await
        .unwrap();

    assert_eq!(id, "3141592653589793");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_venmo_gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/u/alice-ex"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let registry = registry_for(&server.uri(), 1);
    let data = registry
        .get(PaymentPlatform::Venmo)
        .deposit_data("alice-ex", None);
    let err = registry
        .validate_deposit(PaymentPlatform::Venmo, &data)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to get Venmo ID for alice-ex");
    assert!(err.is_retryable());
    assert_eq!(server.received_requests().await.unwrap().len(), 2);

    let cause = err
        .source()
        .and_then(|e| e.downcast_ref::<LookupError>())
        .unwrap();
    assert!(matches!(cause, LookupError::Status { status: 429, .. }));
}

#[tokio::test]
async fn test_venmo_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/u/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(VENMO_PROFILE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let registry = registry_for(&server.uri(), 0);
    let data = registry.get(PaymentPlatform::Venmo).deposit_data("slow", None);
    let err = registry
        .validate_deposit(PaymentPlatform::Venmo, &data)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to get Venmo ID for slow");
    assert!(matches!(
        err,
        RampkitError::DepositValidation {
            cause: LookupError::Timeout { timeout_ms: 1000, .. },
            ..
        }
    ));
}

// ============================================================================
// Revolut
// ============================================================================

#[tokio::test]
async fn test_revolut_resolves_username() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/web-profile/alicer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "alicer",
            "firstName": "Alice",
            "lastName": "R",
        })))
        .mount(&server)
        .await;

    let registry = registry_for(&server.uri(), 0);
    let data = registry
        .get(PaymentPlatform::Revolut)
        .deposit_data("alicer", None);

    assert_eq!(
        registry
            .validate_deposit(PaymentPlatform::Revolut, &data)
            .await
            .unwrap(),
        "alicer"
    );
}

#[tokio::test]
async fn test_revolut_handle_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/web-profile/alicer"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"username": "someoneelse"})),
        )
        .mount(&server)
        .await;

    let registry = registry_for(&server.uri(), 0);
    let data = registry
        .get(PaymentPlatform::Revolut)
        .deposit_data("alicer", None);
    let err = registry
        .validate_deposit(PaymentPlatform::Revolut, &data)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to get Revolut ID for alicer");
    assert!(matches!(
        err,
        RampkitError::DepositValidation {
            cause: LookupError::HandleMismatch { .. },
            ..
        }
    ));
}

#[tokio::test]
async fn test_revolut_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/web-profile/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let registry = registry_for(&server.uri(), 0);
    let data = registry
        .get(PaymentPlatform::Revolut)
        .deposit_data("nobody", None);
    let err = registry
        .validate_deposit(PaymentPlatform::Revolut, &data)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RampkitError::DepositValidation {
            cause: LookupError::Malformed(_),
            ..
        }
    ));
}

// ============================================================================
// Transport failures
// ============================================================================

#[tokio::test]
async fn test_connection_refused_collapses() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let registry = registry_for(&format!("http://127.0.0.1:{port}"), 0);
    let data = registry
        .get(PaymentPlatform::CashApp)
        .deposit_data("alice", None);
    let err = registry
        .validate_deposit(PaymentPlatform::CashApp, &data)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to get Cashapp ID for alice");
    assert!(err.is_retryable());
    assert!(matches!(
        err,
        RampkitError::DepositValidation {
            cause: LookupError::Connection { .. },
            ..
        }
    ));
}
