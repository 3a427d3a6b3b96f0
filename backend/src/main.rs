mod config;
mod services;
mod sheets;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::Config;
use crate::sheets::SheetRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let registry = SheetRegistry::new(&config.data_dir);
    let bind = (config.host.clone(), config.port);

    info!(
        "Forms endpoint listening on http://{}:{}, sheets stored in {}",
        bind.0, bind.1, config.data_dir
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(registry.clone()))
            .app_data(web::Data::new(config.clone()))
            .service(services::forms::configure_routes())
            .service(services::feedbacks::configure_routes())
    })
    .bind(bind)?
    .run()
    .await
}
