use std::fmt;

use crate::models::payment::{ChargeResult, PaymentCharge};

#[derive(Debug)]
pub enum PaymentSubmitError {
    /// The request never produced a usable response.
    Transport(String),
    /// The endpoint answered with a non-2xx status; `message` is the server's
    /// own message when it sent one.
    Rejected { status: u16, message: String },
}

impl fmt::Display for PaymentSubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentSubmitError::Transport(message) => {
                write!(f, "payment submission failed: {}", message)
            }
            PaymentSubmitError::Rejected { status, message } => {
                write!(f, "payment rejected ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for PaymentSubmitError {}

/// Posts one assembled charge to the charge endpoint. No retries and no
/// explicit timeout; a retry is a new charge with a fresh nonce.
pub struct PaymentClient {
    http: reqwest::Client,
    charge_url: String,
}

impl PaymentClient {
    pub fn new(charge_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            charge_url: charge_url.into(),
        }
    }

    pub async fn submit(&self, charge: &PaymentCharge) -> Result<ChargeResult, PaymentSubmitError> {
        let response = self
            .http
            .post(&self.charge_url)
            .json(charge)
            .send()
            .await
            .map_err(|e| PaymentSubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ChargeResult>()
                .await
                .ok()
                .and_then(|result| result.message)
                .unwrap_or_else(|| "Payment request failed".to_string());
            return Err(PaymentSubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ChargeResult>()
            .await
            .map_err(|e| PaymentSubmitError::Transport(e.to_string()))
    }
}
