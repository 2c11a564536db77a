pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod middleware;
pub mod openapi;
pub mod state;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::AppConfig;
pub use state::AppState;

use openapi::ApiDoc;

/// Assemble the application: API routes, OpenAPI docs, and the client bundle
/// as a catch-all.
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let client_build_dir = state.client_build_dir.clone();

    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(handlers::orders::json_error_handler))
        .app_data(
            web::QueryConfig::default().error_handler(handlers::products::query_error_handler),
        )
        .wrap(middleware::cors())
        .wrap(middleware::security_headers())
        .wrap(Logger::new(middleware::COMBINED_LOG_FORMAT))
        .route("/api/health", web::get().to(handlers::health::health))
        .route("/api/users", web::get().to(handlers::users::list_users))
        .route("/api/products", web::get().to(handlers::products::list_products))
        .route("/api/orders", web::post().to(handlers::orders::create_order))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .service(handlers::spa::client_bundle(client_build_dir))
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: web::Data<AppState>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || create_app(state.clone()))
        .bind((host.to_string(), port))?
        .run())
}
