use std::collections::HashMap;
use std::env;

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use url::Url;

use crate::services::availability_service::AvailabilityService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(availability: web::Data<AvailabilityService>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let availability_result = check_availability_config(&availability);
    health
        .services
        .insert("availability".to_string(), availability_result.clone());

    let payment_result = check_payment_config();
    health
        .services
        .insert("payment".to_string(), payment_result.clone());

    if availability_result.status != "ok" || payment_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_availability_config(availability: &web::Data<AvailabilityService>) -> ServiceStatus {
    match Url::parse(availability.base_url()) {
        Ok(url) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Availability service configured at {}", url)),
        },
        Err(e) => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("AVAILABILITY_API_URL is not a valid URL: {}", e)),
        },
    }
}

fn check_payment_config() -> ServiceStatus {
    let domain = env::var("PAYMENT_DOMAIN").ok();
    let receipt_base = env::var("RECEIPT_BASE_URL").ok();

    let mut missing = Vec::new();
    if domain.is_none() {
        missing.push("PAYMENT_DOMAIN");
    }
    if receipt_base.is_none() {
        missing.push("RECEIPT_BASE_URL");
    }

    if missing.is_empty() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Payment configured for domain {}",
                domain.unwrap_or_default()
            )),
        }
    } else {
        // Defaults apply; report what is falling back.
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Using defaults for: {}", missing.join(", "))),
        }
    }
}
