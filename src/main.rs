use actix_files::Files;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};

use kahragen_web::config::AppConfig;
use kahragen_web::web::handlers;
use kahragen_web::web::handlers::not_found::default_not_found;
use kahragen_web::web::middleware::SecurityHeaders;
use kahragen_web::web::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!(
        "starting kahragen-web on {} (content API at {})",
        config.bind_addr,
        config.api_url
    );

    let state = Data::new(AppState::from_config(&config));
    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .configure(handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(web::route().to(default_not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
