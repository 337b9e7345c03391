mod config;
mod proxy;
mod routes;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::ServerConfig;
use proxy::Classifier;
use routes::configure_routes;
use std::path::Path;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let serve_frontend = Path::new(&config.frontend_dir).is_dir();
    if serve_frontend {
        log::info!("Serving frontend from {}", config.frontend_dir);
    } else {
        log::warn!(
            "Frontend bundle not found at {}; only the API routes are served. Run `trunk build` in frontend/ first.",
            config.frontend_dir
        );
    }

    let classifier = web::Data::new(Classifier::new(config.classifier_url.clone()));
    log::info!("Forwarding predictions to {}", classifier.base_url());

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    let frontend_dir = config.frontend_dir.clone();
    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(classifier.clone())
            .configure(configure_routes);

        if serve_frontend {
            app.service(Files::new("/", frontend_dir.clone()).index_file("index.html"))
        } else {
            app
        }
    })
    .bind(&bind_address)?
    .run()
    .await
}
