use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App};

use minamiya_api::routes;
use minamiya_api::routes::payment::ChargeConfig;
use minamiya_api::services::availability_service::AvailabilityService;
use minamiya_api::services::payment::interface::PaymentOutcome;

pub const TEST_RECEIPT_BASE: &str = "https://pay.test/receipts";

pub fn test_charge_config() -> ChargeConfig {
    ChargeConfig {
        // No simulated processor latency in tests.
        processing_delay: Duration::ZERO,
        receipt_base_url: TEST_RECEIPT_BASE.to_string(),
    }
}

/// App with the charge endpoint wired to an injected outcome so the random
/// draw is pinned per test.
pub fn charge_app(
    outcome: Arc<dyn PaymentOutcome>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(test_charge_config()))
        .app_data(web::Data::new(outcome))
        .service(
            web::scope("/api").service(
                web::scope("/payment").route("/charge", web::post().to(routes::payment::charge)),
            ),
        )
}

/// App with the availability proxy pointed at the given collaborator URL.
pub fn availability_app(
    base_url: &str,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(AvailabilityService::new(base_url)))
        .service(web::scope("/api").route(
            "/availability",
            web::get().to(routes::availability::search_availability),
        ))
}
