//! Origin allow-list middleware.
//!
//! Only origins listed in the server config are echoed back. Preflight
//! `OPTIONS` requests are answered here and never reach a handler; any
//! request headers the browser asks for are allowed.

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS, ORIGIN, VARY,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::collections::HashSet;
use std::sync::Arc;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
/// Sent when a preflight does not list the headers it wants.
const DEFAULT_ALLOWED_HEADERS: &str = "content-type";

/// Set of origins allowed to call the API from a browser.
#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    origins: HashSet<String>,
}

impl CorsPolicy {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    fn allowed_origin(&self, headers: &HeaderMap) -> Option<HeaderValue> {
        headers
            .get(ORIGIN)
            .filter(|value| value.to_str().map(|o| self.allows(o)).unwrap_or(false))
            .cloned()
    }
}

pub(crate) async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let allowed = policy.allowed_origin(request.headers());

    if request.method() == Method::OPTIONS {
        let allow_headers = requested_headers(request.headers());
        let mut response = StatusCode::NO_CONTENT.into_response();
        if let Some(origin) = allowed {
            let headers = response.headers_mut();
            apply_origin(headers, origin);
            headers.insert(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
            headers.append(
                VARY,
                HeaderValue::from_static("access-control-request-headers"),
            );
        }
        return response;
    }

    let mut response = next.run(request).await;
    if let Some(origin) = allowed {
        apply_origin(response.headers_mut(), origin);
    }
    response
}

/// Echoes `Access-Control-Request-Headers`, falling back to `content-type`.
fn requested_headers(headers: &HeaderMap) -> HeaderValue {
    headers
        .get(ACCESS_CONTROL_REQUEST_HEADERS)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_HEADERS))
}

fn apply_origin(headers: &mut HeaderMap, origin: HeaderValue) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.append(VARY, HeaderValue::from_static("origin"));
}
