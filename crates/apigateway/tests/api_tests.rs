use apigateway::{handler::AppRouter, state::AppState};
use axum::http::StatusCode;
use axum_test::TestServer;
use catalog::catalog::Catalog;
use serde_json::{Value, json};
use std::sync::Arc;

const FIXTURE: &str = include_str!("../../../data/catalog.json");

fn create_test_server() -> TestServer {
    let catalog = Catalog::from_json_str(FIXTURE).expect("fixture catalog must parse");
    let app = AppRouter::build(AppState::new(Arc::new(catalog)));

    TestServer::try_new(app).expect("Failed to create test server")
}

fn as_array(body: &Value) -> &Vec<Value> {
    body.as_array().expect("response body should be a JSON array")
}

// =============================================================================
// Brands
// =============================================================================

mod brand_tests {
    use super::*;

    #[tokio::test]
    async fn lists_every_brand() {
        let server = create_test_server();

        let response = server.get("/api/brands").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(as_array(&body).len(), 5);
        assert_eq!(body[0], json!({ "id": 1, "name": "Oakley" }));
    }

    #[tokio::test]
    async fn caps_brands_with_limit() {
        let server = create_test_server();

        let response = server.get("/api/brands").add_query_param("limit", "4").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(as_array(&body).len(), 4);
    }

    #[tokio::test]
    async fn zero_limit_is_an_empty_array() {
        let server = create_test_server();

        let response = server.get("/api/brands?limit=0").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert!(as_array(&body).is_empty());
    }

    #[tokio::test]
    async fn malformed_limit_is_a_bad_request() {
        let server = create_test_server();

        for limit in ["boogers", "-1", ""] {
            let response = server.get(&format!("/api/brands?limit={limit}")).await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let body: Value = response.json();
            assert_eq!(body["status"], "error");
        }
    }

    #[tokio::test]
    async fn oversized_limit_returns_every_brand() {
        let server = create_test_server();

        let response = server
            .get("/api/brands")
            .add_query_param("limit", "99999999999999999999999")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(as_array(&body).len(), 5);
    }

    #[tokio::test]
    async fn repeated_limit_uses_the_first_value() {
        let server = create_test_server();

        let response = server.get("/api/brands?limit=2&limit=boogers").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(as_array(&body).len(), 2);
    }

    #[tokio::test]
    async fn lists_products_of_a_brand() {
        let server = create_test_server();

        let response = server.get("/api/brands/1/products").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let products = as_array(&body);
        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| p["brandId"] == 1));
    }

    #[tokio::test]
    async fn product_json_uses_camel_case_keys() {
        let server = create_test_server();

        let body: Value = server.get("/api/brands/1/products").await.json();

        assert_eq!(
            body[0],
            json!({
                "id": 1,
                "brandId": 1,
                "name": "Superglasses",
                "description": "The best glasses in the world"
            })
        );
    }

    #[tokio::test]
    async fn non_numeric_brand_is_not_found() {
        let server = create_test_server();

        let response = server.get("/api/brands/bob/products").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_brand_is_not_found() {
        let server = create_test_server();

        let response = server.get("/api/brands/99/products").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["status"], "error");
    }
}

// =============================================================================
// Products
// =============================================================================

mod product_tests {
    use super::*;

    async fn search_count(server: &TestServer, term: &str) -> usize {
        let response = server
            .get("/api/products")
            .add_query_param("search", term)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        as_array(&body).len()
    }

    #[tokio::test]
    async fn lists_every_product_without_search() {
        let server = create_test_server();

        let response = server.get("/api/products").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(as_array(&body).len(), 11);
    }

    #[tokio::test]
    async fn search_matches_brand_name() {
        let server = create_test_server();
        assert_eq!(search_count(&server, "Oakley").await, 3);
    }

    #[tokio::test]
    async fn search_matches_product_name() {
        let server = create_test_server();
        assert_eq!(search_count(&server, "qdogs").await, 1);
    }

    #[tokio::test]
    async fn search_matches_description() {
        let server = create_test_server();
        assert_eq!(search_count(&server, "best").await, 4);
    }

    #[tokio::test]
    async fn empty_search_returns_everything() {
        let server = create_test_server();
        assert_eq!(search_count(&server, "").await, 11);
    }

    #[tokio::test]
    async fn repeated_search_uses_the_first_term() {
        let server = create_test_server();

        let response = server.get("/api/products?search=Oakley&search=qdogs").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let products = as_array(&body);
        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| p["brandId"] == 1));
    }

    #[tokio::test]
    async fn repeated_search_is_stable() {
        let server = create_test_server();

        let first: Value = server.get("/api/products?search=glasses").await.json();
        let second: Value = server.get("/api/products?search=glasses").await.json();

        assert_eq!(first, second);
    }
}

// =============================================================================
// Ambient routes
// =============================================================================

mod ambient_tests {
    use super::*;

    #[tokio::test]
    async fn login_is_not_implemented() {
        let server = create_test_server();

        let response = server
            .post("/api/login")
            .json(&json!({ "email": "jane@example.com", "password": "hunter22" }))
            .await;
        response.assert_status(StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let server = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn metrics_count_served_queries() {
        let server = create_test_server();

        server.get("/api/brands").await.assert_status_ok();
        server
            .get("/api/brands/bob/products")
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let response = server.get("/metrics").await;
        response.assert_status_ok();

        let text = response.text();
        assert!(text.contains("catalog_queries_total"));
        assert!(text.contains("operation=\"ListBrands\""));
        assert!(text.contains("operation=\"ListBrandProducts\""));
    }

    #[tokio::test]
    async fn openapi_document_lists_catalog_routes() {
        let server = create_test_server();

        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();

        let doc: Value = response.json();
        assert!(doc["paths"]["/api/brands"].is_object());
        assert!(doc["paths"]["/api/brands/{brand_id}/products"].is_object());
        assert!(doc["paths"]["/api/products"].is_object());
    }
}
