use crate::config::Config;
use crate::error::ServerError;
use crate::og::{self, OgVariant};
use crate::sitemap::{build_robots, build_sitemap};
use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct OgQuery {
    title: Option<String>,
    variant: Option<String>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    let index = frontend_dir.join("index.html");

    cfg.service(web::resource("/healthz").route(web::get().to(healthz)))
        .service(web::resource("/sitemap.xml").route(web::get().to(sitemap)))
        .service(web::resource("/robots.txt").route(web::get().to(robots)))
        .service(web::resource("/api/og").route(web::get().to(og_image)))
        .service(
            Files::new("/", frontend_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        if req.path().starts_with("/api/") {
                            let response = HttpResponse::NotFound().json(json!({ "error": "Not found" }));
                            return Ok(ServiceResponse::new(req, response));
                        }
                        let file = NamedFile::open_async(index).await?;
                        let response = file.into_response(&req);
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, response))
                    }
                })),
        );
}

async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn sitemap(config: web::Data<Config>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(build_sitemap(&config.app_url, Utc::now().date_naive()))
}

async fn robots(config: web::Data<Config>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(build_robots(&config.app_url))
}

async fn og_image(query: web::Query<OgQuery>) -> Result<HttpResponse, ServerError> {
    let variant = OgVariant::parse(query.variant.as_deref());
    let title = query.title.as_deref().unwrap_or_default();
    log::debug!("Rendering OG card ({}) for {:?}", variant, title);

    let png = og::render(title, variant)?;
    Ok(HttpResponse::Ok()
        .content_type("image/png")
        .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
        .body(png))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::fs;

    fn frontend_fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("scamcheck-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), "<html>app shell</html>").unwrap();
        dir
    }

    fn config(frontend_dir: PathBuf) -> Config {
        Config {
            port: 0,
            app_url: "https://example.test".to_string(),
            frontend_dir,
        }
    }

    macro_rules! app {
        ($config:expr) => {{
            let config = $config;
            let dir = config.frontend_dir.clone();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(config))
                    .configure(|cfg| configure_routes(cfg, dir)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn healthz_reports_ok() {
        let app = app!(config(frontend_fixture("health")));
        let body: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/healthz").to_request()).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn sitemap_and_robots_use_app_url() {
        let app = app!(config(frontend_fixture("seo")));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/sitemap.xml").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let xml = std::str::from_utf8(&body).unwrap();
        assert!(xml.contains("<loc>https://example.test/check</loc>"));

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/robots.txt").to_request()).await;
        let robots = std::str::from_utf8(&body).unwrap();
        assert!(robots.contains("Sitemap: https://example.test/sitemap.xml"));
    }

    #[actix_web::test]
    async fn og_endpoint_returns_png() {
        let app = app!(config(frontend_fixture("og")));
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/og?title=Risk%2085%25&variant=scam")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type.to_str().unwrap(), "image/png");
        let body = test::read_body(resp).await;
        assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[actix_web::test]
    async fn page_routes_fall_back_to_app_shell() {
        let app = app!(config(frontend_fixture("spa")));
        for uri in ["/check", "/blog/fake-bank-slip", "/admin/detections"] {
            let body = test::call_and_read_body(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(&body[..], b"<html>app shell</html>", "{uri}");
        }
    }

    #[actix_web::test]
    async fn unknown_api_paths_are_not_served_the_shell() {
        let app = app!(config(frontend_fixture("api404")));
        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/missing").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
