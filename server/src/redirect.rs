use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    middleware::Next,
};

/// Rewrites a `www.`-prefixed host to the canonical HTTPS origin, keeping
/// the request path and query. Returns `None` for hosts already canonical.
fn canonical_location(host: &str, path_and_query: &str) -> Option<String> {
    let bare = host.strip_prefix("www.")?;
    Some(format!("https://{bare}{path_and_query}"))
}

pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if let Some(host) = req.headers().get("host").and_then(|h| h.to_str().ok())
        && let Some(path_query) = req.uri().path_and_query()
        && let Some(location) = canonical_location(host, path_query.as_str())
    {
        let response = Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header("location", location)
            .body(Body::empty())
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        return Ok(response);
    }
    Ok(next.run(req).await)
}
