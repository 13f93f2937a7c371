use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::{from_path, Mime};

static PANEL_DIST: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// A file of the embedded panel build.
pub struct Asset {
    pub bytes: &'static [u8],
    pub mime: Mime,
    /// True when `index.html` stands in for an unknown path.
    pub fallback: bool,
}

/// Resolves a request path against `dist`. Unknown paths resolve to
/// `index.html` so the single-page app can route them itself.
pub fn lookup(dist: &'static Dir<'static>, path: &str) -> Option<Asset> {
    let path = path.trim_start_matches('/');
    if let Some(file) = dist.get_file(path).filter(|_| !path.is_empty()) {
        return Some(Asset {
            bytes: file.contents(),
            mime: from_path(path).first_or_octet_stream(),
            fallback: false,
        });
    }
    dist.get_file(INDEX).map(|index| Asset {
        bytes: index.contents(),
        mime: mime_guess::mime::TEXT_HTML_UTF_8,
        fallback: true,
    })
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match lookup(&PANEL_DIST, req.path()) {
        Some(asset) => {
            // The shell must be re-read after every rebuild; hashed bundles need not.
            let cache = if asset.fallback || req.path().ends_with(INDEX) {
                CacheDirective::NoCache
            } else {
                CacheDirective::MaxAge(3600)
            };
            HttpResponse::Ok()
                .content_type(asset.mime.as_ref())
                .insert_header(CacheControl(vec![cache]))
                .body(asset.bytes)
        }
        None => {
            log::warn!("no panel build embedded, {} not served", req.path());
            HttpResponse::NotFound().body("Panel build not found. Run `trunk build` in frontend/ first.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    static EMPTY: Dir = Dir::new("", &[]);

    #[::core::prelude::v1::test]
    fn empty_build_resolves_nothing() {
        assert!(lookup(&EMPTY, "/").is_none());
        assert!(lookup(&EMPTY, "/clients/7").is_none());
    }

    #[::core::prelude::v1::test]
    fn unknown_path_falls_back_to_the_shell() {
        let Some(asset) = lookup(&PANEL_DIST, "/clients/7") else {
            // Panel not built in this checkout.
            return;
        };
        assert!(asset.fallback);
        assert_eq!(asset.mime, mime_guess::mime::TEXT_HTML_UTF_8);
    }

    #[actix_web::test]
    async fn default_route_serves_the_shell_or_a_hint() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let req = test::TestRequest::get().uri("/no/such/asset.js").to_request();
        let resp = test::call_service(&app, req).await;

        if PANEL_DIST.get_file(INDEX).is_some() {
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(
                resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
                Some("text/html; charset=utf-8")
            );
        } else {
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body = test::read_body(resp).await;
            assert!(body.starts_with(b"Panel build not found"));
        }
    }
}
