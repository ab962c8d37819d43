//! Response mapping of the HTTP quotation lookup client, exercised against
//! stub quoting services

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;

use core_kernel::{AdapterHealth, HealthCheckable, PortError, QuotationId};
use domain_policy::{HttpQuotationLookupClient, QuotationLookupClient, QuotingClientConfig};

async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn client_for(router: Router) -> HttpQuotationLookupClient {
    let addr = spawn(router).await;
    HttpQuotationLookupClient::new(QuotingClientConfig::new(format!("http://{addr}/quotations")))
        .unwrap()
}

fn answering(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/quotations/:id",
        get(move || async move { (status, body).into_response() }),
    )
}

#[tokio::test]
async fn test_quotation_body_is_decoded() {
    let router = Router::new().route(
        "/quotations/:id",
        get(|| async {
            Json(json!({
                "id": "q-1",
                "petName": "Max",
                "species": "DOG",
                "breed": null,
                "age": 3,
                "premiumPlan": false,
                "price": 12.0,
                "expiresAt": "2024-07-15",
                "expired": false
            }))
        }),
    );
    let client = client_for(router).await;

    let snapshot = client
        .find_by_id(&QuotationId::from("q-1"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(snapshot.id.as_str(), "q-1");
    assert_eq!(snapshot.pet_name.as_deref(), Some("Max"));
    assert_eq!(snapshot.age, 3);
    assert_eq!(snapshot.price, rust_decimal_macros::dec!(12));
    assert_eq!(
        snapshot.expires_at,
        chrono::NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    );
}

#[tokio::test]
async fn test_not_found_status_is_none() {
    let client = client_for(answering(StatusCode::NOT_FOUND, "")).await;
    let found = client.find_by_id(&QuotationId::from("q-1")).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_empty_ok_body_is_none() {
    let client = client_for(answering(StatusCode::OK, "")).await;
    let found = client.find_by_id(&QuotationId::from("q-1")).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_null_body_is_none() {
    let client = client_for(answering(StatusCode::OK, "null")).await;
    let found = client.find_by_id(&QuotationId::from("q-1")).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_server_error_is_service_unavailable() {
    let client = client_for(answering(StatusCode::INTERNAL_SERVER_ERROR, "boom")).await;
    let err = client.find_by_id(&QuotationId::from("q-1")).await.unwrap_err();
    assert!(matches!(err, PortError::ServiceUnavailable { .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_unexpected_status_is_internal() {
    let client = client_for(answering(StatusCode::IM_A_TEAPOT, "")).await;
    let err = client.find_by_id(&QuotationId::from("q-1")).await.unwrap_err();
    assert!(matches!(err, PortError::Internal { .. }));
}

#[tokio::test]
async fn test_garbage_body_is_transformation_error() {
    let client = client_for(answering(StatusCode::OK, "{\"id\": 42")).await;
    let err = client.find_by_id(&QuotationId::from("q-1")).await.unwrap_err();
    assert!(matches!(err, PortError::Transformation { .. }));
}

#[tokio::test]
async fn test_id_is_sent_as_single_path_segment() {
    let router = Router::new().route(
        "/quotations/:id",
        get(|axum::extract::Path(id): axum::extract::Path<String>| async move {
            if id == "a/b c" {
                (StatusCode::OK, "null").into_response()
            } else {
                StatusCode::IM_A_TEAPOT.into_response()
            }
        }),
    );
    let client = client_for(router).await;

    let found = client.find_by_id(&QuotationId::from("a/b c")).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_health_check_against_live_service() {
    let router = Router::new()
        .route("/health", get(|| async { Json(json!({"status": "UP"})) }))
        .route("/quotations", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let client = client_for(router).await;

    let result = client.health_check().await;
    assert_eq!(result.status, AdapterHealth::Healthy);
    assert_eq!(result.adapter_id, "quoting-service");
}

#[tokio::test]
async fn test_health_check_requests_only_the_health_endpoint() {
    let hits: Arc<Mutex<Vec<String>>> = Arc::default();
    let recorded = hits.clone();
    let router = Router::new().fallback(move |uri: Uri| {
        let recorded = recorded.clone();
        async move {
            recorded.lock().unwrap().push(uri.path().to_string());
            StatusCode::OK
        }
    });
    let client = client_for(router).await;

    client.health_check().await;

    assert_eq!(*hits.lock().unwrap(), vec!["/health".to_string()]);
}

#[tokio::test]
async fn test_health_check_reports_degraded_on_error_status() {
    let client = client_for(Router::new()).await;

    let result = client.health_check().await;
    assert_eq!(result.status, AdapterHealth::Degraded);
    assert!(result.message.is_some());
}
