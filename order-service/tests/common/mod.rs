//! Shared fixtures: stub user/product services and an app wired to them

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use http_body_util::BodyExt;
use order_service::AppState;
use order_service::api::create_router;
use order_service::clients::{ProductClient, UserClient};
use order_service::db::MemoryOrderStore;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Running stub collaborator with a request counter
pub struct Stub {
    pub base_url: String,
    calls: Arc<AtomicUsize>,
}

impl Stub {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn user_by_id(State(calls): State<Arc<AtomicUsize>>, Path(id): Path<i64>) -> Response {
    calls.fetch_add(1, Ordering::SeqCst);
    match id {
        1 => axum::Json(serde_json::json!({
            "id": 1,
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .into_response(),
        2 => "<html>maintenance</html>".into_response(),
        _ => (StatusCode::NOT_FOUND, "User not found").into_response(),
    }
}

async fn product_by_id(State(calls): State<Arc<AtomicUsize>>, Path(id): Path<i64>) -> Response {
    calls.fetch_add(1, Ordering::SeqCst);
    let product = match id {
        1 => serde_json::json!({ "id": 1, "name": "Laptop", "price": 1300.00 }),
        3 => serde_json::json!({ "id": 3, "name": "Keyboard", "price": 75.00 }),
        4 => serde_json::json!({ "id": 4, "name": "Broken" }),
        _ => return (StatusCode::NOT_FOUND, "Product not found").into_response(),
    };
    axum::Json(product).into_response()
}

/// User service knowing user 1; user 2 answers 200 with an undecodable body
pub async fn spawn_user_service() -> Stub {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/users/{id}", get(user_by_id))
        .with_state(calls.clone());
    Stub {
        base_url: serve(router).await,
        calls,
    }
}

/// Product service: 1 costs 1300.00, 3 costs 75.00, 4 has no price
pub async fn spawn_product_service() -> Stub {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/products/{id}", get(product_by_id))
        .with_state(calls.clone());
    Stub {
        base_url: serve(router).await,
        calls,
    }
}

/// Base URL of a port nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Router over an in-memory store and the given collaborator URLs
pub fn app(user_url: &str, product_url: &str) -> Router {
    let timeout = Duration::from_secs(2);
    let state = AppState::from_parts(
        Arc::new(MemoryOrderStore::new()),
        Arc::new(UserClient::new(user_url, timeout).unwrap()),
        Arc::new(ProductClient::new(product_url, timeout).unwrap()),
    );
    create_router(state)
}

/// Send one request through the router
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}
