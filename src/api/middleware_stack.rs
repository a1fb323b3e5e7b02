//! Middleware stack builder for clean composition
//!
//! This module provides a builder pattern for composing the Tower middleware stack,
//! making it easier to maintain and test the middleware pipeline.

use crate::api::headers::X_REQUEST_ID;
use crate::api::middleware::*;
use axum::{middleware::from_fn, Router};
use http::{HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for composing the API middleware stack
#[derive(Debug, Clone)]
pub struct ApiMiddlewareStack {
    cors: bool,
}

impl Default for ApiMiddlewareStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiMiddlewareStack {
    /// Create a new middleware stack builder with CORS enabled
    pub fn new() -> Self {
        Self { cors: true }
    }

    /// Build a stack without the CORS layer
    pub fn without_cors(mut self) -> Self {
        self.cors = false;
        self
    }

    /// Apply the complete middleware stack to a router
    ///
    /// The middleware are applied in the following order (outer to inner):
    /// 1. CORS, answering preflight requests from any origin
    /// 2. HTTP tracing spans
    /// 3. Request ID generation/propagation
    /// 4. Logging (with request ID)
    /// 5. Error logging
    pub fn apply_to_router<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let router = router
            // Apply middleware in reverse order (innermost first in the builder)
            .layer(from_fn(error_handling_middleware))
            .layer(from_fn(logging_middleware))
            .layer(from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http());

        if self.cors {
            router.layer(cors_layer())
        } else {
            router
        }
    }
}

/// CORS policy: any origin, read-only methods
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(X_REQUEST_ID)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::headers::ORIGIN;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    fn test_router(stack: ApiMiddlewareStack) -> Router {
        stack.apply_to_router(Router::new().route("/", get(|| async { "ok" })))
    }

    #[tokio::test]
    async fn test_stack_sets_request_id() {
        let response = test_router(ApiMiddlewareStack::new())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(X_REQUEST_ID));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = test_router(ApiMiddlewareStack::new())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(ORIGIN, "https://portfolio.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_cors_can_be_disabled() {
        let response = test_router(ApiMiddlewareStack::new().without_cors())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(ORIGIN, "https://portfolio.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(!response
            .headers()
            .contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_preflight_is_answered() {
        let response = test_router(ApiMiddlewareStack::new())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/")
                    .header(ORIGIN, "https://portfolio.example")
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|methods| methods.contains("GET")));
    }
}
