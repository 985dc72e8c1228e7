//! In-process stand-in for the remote catalog service.
//!
//! [`StubCatalog::start`] serves `/categories` and `/products` on an
//! ephemeral localhost port with canned data, records every request, and lets
//! a test choose how `POST /products` answers.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use catalog_common::CatalogConfig;

/// How the stub answers `POST /products`.
#[derive(Clone, Debug)]
pub enum CreateBehavior {
    /// Store the product and return it with a fresh id (201).
    Accept,
    /// Return `body` with the given status.
    Respond { status: u16, body: String },
}

/// One request as seen by the stub.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: Option<(usize, usize)>,
    pub body: Option<Value>,
}

struct StubState {
    categories: Vec<Value>,
    products: Mutex<Vec<Value>>,
    create: Mutex<CreateBehavior>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubState {
    fn record(&self, request: RecordedRequest) {
        tracing::debug!(method = request.method, path = %request.path, query = ?request.query, "stub request");
        self.requests.lock().unwrap().push(request);
    }
}

#[derive(Deserialize)]
struct PageQuery {
    limit: Option<usize>,
    offset: Option<usize>,
}

pub struct StubCatalog {
    pub base_url: String,
    state: Arc<StubState>,
    server: tokio::task::JoinHandle<()>,
}

impl StubCatalog {
    /// Serve `products` and `categories` until the stub is dropped.
    pub async fn start(products: Vec<Value>, categories: Vec<Value>) -> Self {
        tracing_subscriber::fmt::try_init().ok();

        let state = Arc::new(StubState {
            categories,
            products: Mutex::new(products),
            create: Mutex::new(CreateBehavior::Accept),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/v1/categories", get(categories_handler))
            .route(
                "/api/v1/products",
                get(products_handler).post(create_handler),
            )
            .route("/api/v1/products/{id}", get(product_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub catalog");
        let addr = listener.local_addr().expect("stub address");
        tracing::info!(%addr, "stub catalog listening");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            base_url: format!("http://{addr}/api/v1"),
            state,
            server,
        }
    }

    /// Config pointing at this stub, with the default page sizes.
    pub fn config(&self) -> CatalogConfig {
        CatalogConfig::default().with_base_url(self.base_url.clone())
    }

    pub fn set_create_behavior(&self, behavior: CreateBehavior) {
        *self.state.create.lock().unwrap() = behavior;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Bodies of every `POST /products` received so far.
    pub fn created_bodies(&self) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "POST")
            .filter_map(|r| r.body)
            .collect()
    }

    pub fn product_count(&self) -> usize {
        self.state.products.lock().unwrap().len()
    }
}

impl Drop for StubCatalog {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// A base URL on which nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}/api/v1")
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

pub fn category_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase(),
        "image": format!("https://i.imgur.com/{id}.jpeg"),
        "creationAt": "2025-01-01T00:00:00.000Z",
        "updatedAt": "2025-01-01T00:00:00.000Z"
    })
}

/// Product `id` in category `category_id`, created on `created` (RFC 3339).
pub fn product_json(id: u64, category_id: u64, created: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Product {id}"),
        "slug": format!("product-{id}"),
        "price": 10 + id,
        "description": format!("Description of product {id}"),
        "category": category_json(category_id, &format!("Category {category_id}")),
        "images": [format!("https://i.imgur.com/p{id}.jpeg")],
        "creationAt": created,
        "updatedAt": created
    })
}

// ─── Handlers ────────────────────────────────────────────────────────────────

async fn categories_handler(
    State(state): State<Arc<StubState>>,
    Query(page): Query<PageQuery>,
) -> Json<Value> {
    let limit = page.limit.unwrap_or(usize::MAX);
    state.record(RecordedRequest {
        method: "GET",
        path: "/categories".into(),
        query: Some((limit, 0)),
        body: None,
    });
    Json(Value::Array(
        state.categories.iter().take(limit).cloned().collect(),
    ))
}

async fn products_handler(
    State(state): State<Arc<StubState>>,
    Query(page): Query<PageQuery>,
) -> Json<Value> {
    let limit = page.limit.unwrap_or(usize::MAX);
    let offset = page.offset.unwrap_or(0);
    state.record(RecordedRequest {
        method: "GET",
        path: "/products".into(),
        query: Some((limit, offset)),
        body: None,
    });
    let products = state.products.lock().unwrap();
    Json(Value::Array(
        products.iter().skip(offset).take(limit).cloned().collect(),
    ))
}

async fn product_handler(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    state.record(RecordedRequest {
        method: "GET",
        path: format!("/products/{id}"),
        query: None,
        body: None,
    });
    let products = state.products.lock().unwrap();
    match products.iter().find(|p| p["id"] == json!(id)) {
        Some(product) => Json(product.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"name": "EntityNotFoundError", "message": format!("Could not find product {id}")})),
        )
            .into_response(),
    }
}

async fn create_handler(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    state.record(RecordedRequest {
        method: "POST",
        path: "/products".into(),
        query: None,
        body: Some(body.clone()),
    });
    let behavior = state.create.lock().unwrap().clone();
    match behavior {
        CreateBehavior::Accept => {
            let mut products = state.products.lock().unwrap();
            let id = 1000 + products.len() as u64;
            let category_id = body["categoryId"].as_u64().unwrap_or(0);
            let created = json!({
                "id": id,
                "title": body["title"],
                "slug": format!("product-{id}"),
                "price": body["price"],
                "description": body["description"],
                "category": category_json(category_id, &format!("Category {category_id}")),
                "images": body["images"],
                "creationAt": chrono::Utc::now().to_rfc3339(),
                "updatedAt": chrono::Utc::now().to_rfc3339()
            });
            products.push(created.clone());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        CreateBehavior::Respond { status, body } => {
            tracing::debug!(status, "stub answering create with canned response");
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, body).into_response()
        }
    }
}
