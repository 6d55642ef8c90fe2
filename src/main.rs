//! Linkshelf server: JSON-over-HTTP bookmark API backed by a flat JSON file or SQLite.
//!
//! Configuration comes from the environment; see [`linkshelf::config`].

use std::io::Write;
use std::sync::Mutex;

use actix_web::{middleware, web, HttpServer};
use log::{error, info};

use linkshelf::api;
use linkshelf::app::App;
use linkshelf::config::ServerConfig;

fn init_logger(config: &ServerConfig) {
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    init_logger(&config);

    let app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize data store: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let state = web::Data::new(Mutex::new(app));

    info!("Data file: {}", config.data_file.display());
    info!("Server running on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        actix_web::App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
