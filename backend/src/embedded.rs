//! The built frontend, embedded at compile time.
//!
//! Unknown paths get `index.html` so client-side routes such as
//! `/results/demo` survive a reload; the router then resolves them.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// An embedded file ready to be sent.
#[derive(Debug, PartialEq, Eq)]
pub struct Asset {
    pub content_type: String,
    pub body: &'static [u8],
}

/// Relative asset path for a request path. The root maps to `index.html`.
pub fn asset_path(request_path: &str) -> &str {
    match request_path.trim_start_matches('/') {
        "" => INDEX,
        path => path,
    }
}

/// Resolves a request path against the embedded tree, falling back to the
/// SPA entry point. `None` only when the tree has no `index.html` at all.
pub fn resolve(request_path: &str) -> Option<Asset> {
    let path = asset_path(request_path);
    if let Some(file) = STATIC_DIR.get_file(path) {
        return Some(Asset {
            content_type: from_path(path).first_or_octet_stream().to_string(),
            body: file.contents(),
        });
    }
    STATIC_DIR.get_file(INDEX).map(|index| Asset {
        content_type: "text/html; charset=utf-8".to_string(),
        body: index.contents(),
    })
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve(req.path()) {
        Some(asset) => HttpResponse::Ok()
            .content_type(asset.content_type)
            .body(asset.body),
        None => {
            log::warn!("no embedded asset for {}", req.path());
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{call_service, init_service, TestRequest};
    use actix_web::{web, App};

    #[test]
    fn root_maps_to_index() {
        assert_eq!(asset_path("/"), "index.html");
        assert_eq!(asset_path(""), "index.html");
        assert_eq!(asset_path("/styles.css"), "styles.css");
    }

    #[test]
    fn entry_point_is_always_embedded() {
        let index = resolve("/").expect("index.html embedded");
        assert!(index.content_type.starts_with("text/html"));
        assert!(!index.body.is_empty());
    }

    #[test]
    fn unknown_paths_resolve_to_the_entry_point() {
        let fallback = resolve("/results/uploaded").expect("fallback");
        let index = resolve("/").expect("index.html embedded");
        assert_eq!(fallback.body, index.body);
        assert!(fallback.content_type.starts_with("text/html"));
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let app = init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let req = TestRequest::get().uri("/dashboard/logs").to_request();
        let resp = call_service(&app, req).await;
        assert!(resp.status().is_success());
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
    }
}
