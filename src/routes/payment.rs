use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use rand::Rng;
use serde::Deserialize;
use tokio::time::sleep;

use crate::models::payment::{BookingInfo, ChargeResult, CustomerInfo};
use crate::services::payment::interface::PaymentOutcome;

const DEFAULT_PROCESSING_DELAY_MS: u64 = 1_000;
const DEFAULT_RECEIPT_BASE_URL: &str = "https://pay.minamiya.example/receipts";

const BOOKING_SUFFIX_LENGTH: usize = 9;
const BASE36_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone)]
pub struct ChargeConfig {
    /// Simulated processor round-trip time. Zeroed in tests.
    pub processing_delay: Duration,
    pub receipt_base_url: String,
}

impl ChargeConfig {
    pub fn from_env() -> Self {
        Self {
            processing_delay: Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
            receipt_base_url: std::env::var("RECEIPT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_RECEIPT_BASE_URL.to_string()),
        }
    }
}

/// Lenient view of the charge body: field-level validation answers with the
/// endpoint's own error codes instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub booking: Option<BookingInfo>,
    #[serde(default)]
    pub customer: Option<CustomerInfo>,
}

pub async fn charge(
    config: web::Data<ChargeConfig>,
    outcome: web::Data<Arc<dyn PaymentOutcome>>,
    input: web::Json<ChargeRequest>,
) -> impl Responder {
    let input = input.into_inner();

    let _nonce = match input.nonce.as_deref().map(str::trim) {
        Some(nonce) if !nonce.is_empty() => nonce.to_string(),
        _ => {
            return HttpResponse::BadRequest().json(ChargeResult {
                success: false,
                error: Some("INVALID_REQUEST".to_string()),
                message: Some("A payment nonce is required".to_string()),
                ..Default::default()
            });
        }
    };

    let amount = match input.amount {
        Some(amount) if amount > 0 => amount,
        _ => {
            return HttpResponse::BadRequest().json(ChargeResult {
                success: false,
                error: Some("INVALID_AMOUNT".to_string()),
                message: Some("Charge amount must be a positive number".to_string()),
                ..Default::default()
            });
        }
    };

    let currency = input.currency.unwrap_or_else(|| "JPY".to_string());

    if let Some(booking) = &input.booking {
        println!(
            "Processing charge: {} {} for {} ({} -> {})",
            amount, currency, booking.room_type_name, booking.check_in_date, booking.check_out_date
        );
    }

    // Simulated processor round trip.
    sleep(config.processing_delay).await;

    if !outcome.approve() {
        return HttpResponse::PaymentRequired().json(ChargeResult {
            success: false,
            error: Some("PAYMENT_FAILED".to_string()),
            message: Some("The payment could not be completed. Please try again.".to_string()),
            ..Default::default()
        });
    }

    match settle(amount, currency, &config) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(message) => {
            eprintln!("Charge settlement failed: {}", message);
            HttpResponse::InternalServerError().json(ChargeResult {
                success: false,
                error: Some("INTERNAL_ERROR".to_string()),
                message: Some("An unexpected error occurred while processing the payment".to_string()),
                ..Default::default()
            })
        }
    }
}

fn settle(amount: i64, currency: String, config: &ChargeConfig) -> Result<ChargeResult, String> {
    let millis = epoch_millis()?;
    let booking_id = format!("booking_{}_{}", millis, random_base36(BOOKING_SUFFIX_LENGTH));
    let payment_id = format!("payment_{}", millis);

    // A real integration would persist the booking here.
    println!("Saving booking {} (no-op: nothing is persisted)", booking_id);

    Ok(ChargeResult {
        success: true,
        payment_id: Some(payment_id),
        status: Some("COMPLETED".to_string()),
        amount: Some(amount),
        currency: Some(currency),
        receipt_url: Some(format!(
            "{}/{}",
            config.receipt_base_url.trim_end_matches('/'),
            booking_id
        )),
        created_at: Some(Utc::now().to_rfc3339()),
        error: None,
        message: None,
    })
}

fn epoch_millis() -> Result<u128, String> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .map_err(|e| format!("system clock is before the epoch: {}", e))
}

fn random_base36(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| BASE36_CHARSET[rng.gen_range(0..BASE36_CHARSET.len())] as char)
        .collect()
}
