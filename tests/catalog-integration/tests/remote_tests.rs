//! Wire-level tests of the HTTP catalog client against the stub service.

use serde_json::json;

use catalog_common::category::CategoryId;
use catalog_common::product::{NewProduct, ProductId};
use catalog_common::remote::HttpCatalogClient;
use catalog_common::{CatalogApi, CatalogConfig, CatalogError};

use catalog_integration::{
    category_json, product_json, unreachable_base_url, CreateBehavior, RecordedRequest,
    StubCatalog,
};

fn lamp() -> NewProduct {
    NewProduct {
        title: "Lamp".into(),
        price: 19.99,
        description: "desk lamp".into(),
        category_id: CategoryId(2),
        images: vec!["https://x/img.png".into()],
    }
}

async fn stub_with_catalog() -> StubCatalog {
    let categories = (1..=6)
        .map(|i| category_json(i, &format!("Category {i}")))
        .collect();
    let products = (1..=30)
        .map(|i| product_json(i, i % 5 + 1, "2025-02-01T10:00:00.000Z"))
        .collect();
    StubCatalog::start(products, categories).await
}

#[tokio::test]
async fn fetch_categories_sends_limit() {
    let stub = stub_with_catalog().await;
    let client = HttpCatalogClient::new(stub.config()).unwrap();

    let categories = client.fetch_categories(4).await.unwrap();

    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0].id, CategoryId(1));
    assert_eq!(categories[0].name, "Category 1");
    assert_eq!(categories[0].image, "https://i.imgur.com/1.jpeg");
    assert_eq!(
        stub.requests(),
        vec![RecordedRequest {
            method: "GET",
            path: "/categories".into(),
            query: Some((4, 0)),
            body: None,
        }]
    );
}

#[tokio::test]
async fn fetch_products_requests_page_at_offset() {
    let stub = stub_with_catalog().await;
    let client = HttpCatalogClient::new(stub.config()).unwrap();

    let products = client.fetch_products(12, 12).await.unwrap();

    assert_eq!(products.len(), 12);
    assert_eq!(products[0].id, ProductId(13));
    assert_eq!(products[11].id, ProductId(24));
    assert_eq!(stub.requests()[0].query, Some((12, 12)));
}

#[tokio::test]
async fn fetch_product_by_id() {
    let stub = stub_with_catalog().await;
    let client = HttpCatalogClient::new(stub.config()).unwrap();

    let product = client.fetch_product(ProductId(7)).await.unwrap();
    assert_eq!(product.title, "Product 7");
    assert_eq!(product.category_id(), Some(CategoryId(3)));

    let missing = client.fetch_product(ProductId(999)).await.unwrap_err();
    assert_eq!(missing, CatalogError::RequestFailed { status: 404 });
}

#[tokio::test]
async fn create_product_posts_service_shape() {
    let stub = stub_with_catalog().await;
    let client = HttpCatalogClient::new(stub.config()).unwrap();

    let created = client.create_product(&lamp()).await.unwrap();

    assert_eq!(created.title, "Lamp");
    assert_eq!(created.price, 19.99);
    assert_eq!(created.images, vec!["https://x/img.png".to_string()]);
    assert_eq!(
        stub.created_bodies(),
        vec![json!({
            "title": "Lamp",
            "price": 19.99,
            "description": "desk lamp",
            "categoryId": 2,
            "images": ["https://x/img.png"]
        })]
    );
}

#[tokio::test]
async fn create_rejection_carries_server_message() {
    let stub = stub_with_catalog().await;
    stub.set_create_behavior(CreateBehavior::Respond {
        status: 400,
        body: json!({
            "message": ["price must be a positive number"],
            "error": "Bad Request",
            "statusCode": 400
        })
        .to_string(),
    });
    let client = HttpCatalogClient::new(stub.config()).unwrap();

    let err = client.create_product(&lamp()).await.unwrap_err();

    assert_eq!(
        err,
        CatalogError::ValidationRejected("price must be a positive number".into())
    );
}

#[tokio::test]
async fn create_failure_without_body_is_request_failed() {
    let stub = stub_with_catalog().await;
    stub.set_create_behavior(CreateBehavior::Respond {
        status: 500,
        body: String::new(),
    });
    let client = HttpCatalogClient::new(stub.config()).unwrap();

    let err = client.create_product(&lamp()).await.unwrap_err();

    assert_eq!(err, CatalogError::RequestFailed { status: 500 });
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let stub = stub_with_catalog().await;
    stub.set_create_behavior(CreateBehavior::Respond {
        status: 201,
        body: "{\"id\": \"not-a-number\"}".into(),
    });
    let client = HttpCatalogClient::new(stub.config()).unwrap();

    let err = client.create_product(&lamp()).await.unwrap_err();

    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let config = CatalogConfig::default().with_base_url(unreachable_base_url().await);
    let client = HttpCatalogClient::new(config).unwrap();

    assert_eq!(client.fetch_categories(4).await.unwrap_err().kind(), "transport");
    assert_eq!(client.fetch_products(12, 12).await.unwrap_err().kind(), "transport");
    assert_eq!(client.create_product(&lamp()).await.unwrap_err().kind(), "transport");
}
