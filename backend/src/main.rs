mod config;
mod error;
mod og;
mod routes;
mod sitemap;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::Config;
use routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::load().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    if !config.frontend_dir.join("index.html").exists() {
        log::warn!(
            "No index.html in {}; page routes will fail until the frontend is built",
            config.frontend_dir.display()
        );
    }

    let bind_address = format!("0.0.0.0:{}", config.port);
    log::info!("Public URL: {}", config.app_url);
    log::info!("Starting server on {}", bind_address);

    let data = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(data.clone())
            .configure(|cfg| configure_routes(cfg, data.frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
