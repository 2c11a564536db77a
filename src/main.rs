use actix_web::web;
use demo_web_app::{build_server, AppConfig, AppState};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);
    log::info!("Serving client from {}", config.client_build_dir.display());
    log::info!("Chaos /api/users: {}", config.chaos.users);
    log::info!("Chaos /api/products: {}", config.chaos.products);
    log::info!("Chaos /api/orders: {}", config.chaos.orders);

    let state = web::Data::new(AppState::from_config(&config));
    build_server(state, &config.host, config.port)?.await
}
