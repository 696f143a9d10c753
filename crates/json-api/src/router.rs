//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    cors::{Any, Cors},
    http::Method,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    observability::{metrics_handler, request_logging},
    state::State,
    transactions::{categories, import, index, ranges, sales},
};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("import-product-transaction").get(import::handler))
        .push(Router::with_path("product-transactions").get(index::handler))
        .push(Router::with_path("product-transactions-sales").get(sales::handler))
        .push(Router::with_path("product-transactions-range").get(ranges::handler))
        .push(Router::with_path("product-transactions-catagories").get(categories::handler))
}

fn cors() -> Cors {
    Cors::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET])
        .allow_headers(Any)
}

/// Full HTTP service: API routes, metrics, OpenAPI document and Swagger UI.
pub(crate) fn app_service(state: Arc<State>) -> Service {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(api_router());

    let doc = OpenApi::new("Salesboard API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"));

    Service::new(router)
        .hoop(cors().into_handler())
        .hoop(remove_slash())
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN},
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use salesboard_app::{
        domain::transactions::MockTransactionsService, feed::MockTransactionFeed,
    };

    use crate::{errors::ErrorResponse, test_helpers::state_with};

    use super::*;

    fn idle_service() -> Service {
        let mut transactions = MockTransactionsService::new();
        let mut feed = MockTransactionFeed::new();

        transactions.expect_list_transactions().never();
        transactions.expect_sales_summary().never();
        transactions.expect_category_breakdown().never();
        transactions.expect_price_histogram().never();
        transactions.expect_replace_transactions().never();
        feed.expect_fetch().never();

        app_service(state_with(transactions, feed))
    }

    #[tokio::test]
    async fn openapi_document_lists_every_endpoint() -> TestResult {
        let document = TestClient::get(format!("http://example.com{OPENAPI_PATH}"))
            .send(&idle_service())
            .await
            .take_string()
            .await?;

        for path in [
            "/api/import-product-transaction",
            "/api/product-transactions",
            "/api/product-transactions-sales",
            "/api/product-transactions-range",
            "/api/product-transactions-catagories",
        ] {
            assert!(
                document.contains(&format!("\"{path}\"")),
                "expected {path} in OpenAPI document"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn validation_errors_pass_through_middleware() -> TestResult {
        let mut res =
            TestClient::get("http://example.com/api/product-transactions-range?date=2024-13-01")
                .send(&idle_service())
                .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.headers().contains_key("x-request-id"),
            "expected request id header"
        );

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.message, "Invalid date format. Please use YYYY-MM-DD");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_routes_return_404() {
        let res = TestClient::get("http://example.com/api/products")
            .send(&idle_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let res =
            TestClient::get("http://example.com/api/product-transactions-sales?date=2021-13-01")
                .add_header(ORIGIN, "http://dashboard.example.org", true)
                .send(&idle_service())
                .await;

        assert!(
            res.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN),
            "expected CORS allow-origin header"
        );
    }
}
