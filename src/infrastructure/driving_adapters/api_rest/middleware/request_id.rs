//! Request ID Middleware
//!
//! Every request runs inside a `request` span tagged with an id. A client
//! supplied `X-Request-ID` is reused when it is short enough, otherwise a
//! UUID is generated. The id is echoed back on the response. The span also
//! carries an empty `uid` field that the auth middleware fills in.

use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{field, Instrument};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const MAX_CLIENT_ID_LEN: usize = 128;

/// Id of the current request, available as a request extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    fn from_request(request: &Request) -> Self {
        request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty() && v.len() <= MAX_CLIENT_ID_LEN)
            .map_or_else(|| Self(Uuid::new_v4().to_string()), |v| Self(v.to_string()))
    }
}

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id.0,
        method = %request.method(),
        uri = %request.uri(),
        uid = field::Empty,
    );
    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.0) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, routing::get, Extension, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|Extension(id): Extension<RequestId>| async move { id.0 }))
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    async fn send(request: HttpRequest<Body>) -> (String, String) {
        let response = app().oneshot(request).await.unwrap();
        let header = response
            .headers()
            .get(&REQUEST_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (header, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let (header, seen_by_handler) =
            send(HttpRequest::builder().uri("/").body(Body::empty()).unwrap()).await;

        assert!(Uuid::parse_str(&header).is_ok());
        assert_eq!(header, seen_by_handler);
    }

    #[tokio::test]
    async fn test_echoes_client_request_id() {
        let request = HttpRequest::builder()
            .uri("/")
            .header("x-request-id", "trace-abc")
            .body(Body::empty())
            .unwrap();
        let (header, _) = send(request).await;

        assert_eq!(header, "trace-abc");
    }

    #[tokio::test]
    async fn test_replaces_oversized_client_id() {
        let request = HttpRequest::builder()
            .uri("/")
            .header("x-request-id", "x".repeat(MAX_CLIENT_ID_LEN + 1))
            .body(Body::empty())
            .unwrap();
        let (header, _) = send(request).await;

        assert!(Uuid::parse_str(&header).is_ok());
    }
}
