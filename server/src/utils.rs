use app::types::Category;
use axum::http::StatusCode;
use axum::response::Response;
use core::fmt::Write as _;
use tracing::error;

/// Canonical site origin used in generated URLs.
const SITE_URL: &str = "https://toposdebolo.com.br";

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

pub async fn sitemap_handler() -> Response<String> {
    match generate_sitemap() {
        Ok(sitemap) => build_response(sitemap, "application/xml", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to generate sitemap");
            build_response(
                "Failed to generate sitemap".to_owned(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

/// Builds the sitemap over the catalog's fixed page set: the root page plus
/// one anchor per category tab.
pub fn generate_sitemap() -> Result<String, core::fmt::Error> {
    let mut sitemap = String::new();
    write!(sitemap, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    write!(
        sitemap,
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"
    )?;
    write!(
        sitemap,
        "<url><loc>{SITE_URL}/</loc><changefreq>monthly</changefreq></url>"
    )?;
    for category in Category::ALL {
        write!(sitemap, "<url><loc>{SITE_URL}/#{}</loc></url>", category.key())?;
    }
    write!(sitemap, "</urlset>")?;
    Ok(sitemap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_lists_root_and_every_category() {
        let sitemap = generate_sitemap().unwrap();
        assert!(sitemap.contains("<loc>https://toposdebolo.com.br/</loc>"));
        for category in Category::ALL {
            assert!(
                sitemap.contains(&format!(
                    "<loc>https://toposdebolo.com.br/#{}</loc>",
                    category.key()
                )),
                "missing sitemap entry for {}",
                category.key()
            );
        }
    }

    #[test]
    fn test_sitemap_is_well_formed_enough() {
        let sitemap = generate_sitemap().unwrap();
        assert!(sitemap.starts_with("<?xml"));
        assert!(sitemap.ends_with("</urlset>"));
        assert_eq!(sitemap.matches("<url>").count(), 1 + Category::ALL.len());
        assert_eq!(
            sitemap.matches("<url>").count(),
            sitemap.matches("</url>").count()
        );
    }

    #[test]
    fn test_build_response_sets_content_type() {
        let response = build_response("ok".to_owned(), "text/plain", StatusCode::OK);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/plain"
        );
    }
}
