use axum::{
    body::Body,
    http::{
        Request, Response, StatusCode,
        header::{HeaderName, HeaderValue},
    },
    middleware::Next,
};

/// Content-Security-Policy for the catalog page.
///
/// Product photos are served from the site itself; `img-src` also allows
/// https sources so externally hosted photos keep working. `wasm-unsafe-eval`
/// is required for the hydration bundle.
fn content_security_policy() -> String {
    [
        "default-src 'self'",
        "script-src 'self' 'wasm-unsafe-eval'",
        "style-src 'self' 'unsafe-inline'",
        "img-src 'self' data: https:",
        "font-src 'self' data:",
        "connect-src 'self'",
        "frame-ancestors 'none'",
    ]
    .join("; ")
}

/// Security headers middleware
/// Adds the standard security headers to all responses.
pub async fn security_headers(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        HeaderName::from_static("strict-transport-security"),
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    if let Ok(csp) = HeaderValue::from_str(&content_security_policy()) {
        headers.insert(HeaderName::from_static("content-security-policy"), csp);
    }

    Ok(response)
}
