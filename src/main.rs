use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use minamiya_api::middleware::locale::LocaleRedirect;
use minamiya_api::routes;
use minamiya_api::routes::payment::ChargeConfig;
use minamiya_api::services::availability_service::AvailabilityService;
use minamiya_api::services::i18n::Translations;
use minamiya_api::services::payment::interface::{PaymentOutcome, SimulatedGateway};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DEFAULT_AVAILABILITY_API_URL: &str = "http://localhost:5080";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let availability_url = std::env::var("AVAILABILITY_API_URL")
        .unwrap_or_else(|_| DEFAULT_AVAILABILITY_API_URL.to_string());
    println!("Availability service: {}", availability_url);

    let availability = AvailabilityService::new(availability_url);
    let translations = Translations::load();
    let charge_config = ChargeConfig::from_env();
    let gateway: Arc<dyn PaymentOutcome> = Arc::new(SimulatedGateway::new());

    println!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(LocaleRedirect)
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(availability.clone()))
            .app_data(web::Data::new(translations.clone()))
            .app_data(web::Data::new(charge_config.clone()))
            .app_data(web::Data::new(gateway.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route(
                        "/availability",
                        web::get().to(routes::availability::search_availability),
                    )
                    .service(
                        web::scope("/payment")
                            .route("/charge", web::post().to(routes::payment::charge)),
                    ),
            )
            .service(
                web::scope("/{locale}").route("", web::get().to(routes::pages::welcome)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
