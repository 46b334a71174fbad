use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Raw card input as captured by the payment form. Only ever handed to a
/// tokenizer; it must not appear in a charge request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardInput {
    pub number: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub security_code: String,
    pub holder_name: String,
}

/// Single-use token standing in for card details. Consumed exactly once by
/// the charge endpoint; a retry must tokenize again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardToken(pub String);

#[derive(Debug)]
pub enum TokenizeError {
    /// The SDK returned a non-OK status for the card input.
    Rejected(String),
    /// The SDK could not be loaded or reached.
    Unavailable(String),
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::Rejected(message) => write!(f, "card rejected: {}", message),
            TokenizeError::Unavailable(message) => write!(f, "tokenizer unavailable: {}", message),
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Boundary to the hosted card-capture SDK. The SDK is a black box: card
/// input goes in, a nonce or a rejection comes out.
pub trait CardTokenizer {
    async fn tokenize(&self, card: CardInput) -> Result<CardToken, TokenizeError>;
}

/// Stand-in tokenizer for demos and tests. Applies the same shallow shape
/// check the hosted SDK applies before issuing a token.
pub struct SandboxTokenizer;

impl CardTokenizer for SandboxTokenizer {
    async fn tokenize(&self, card: CardInput) -> Result<CardToken, TokenizeError> {
        let digits: String = card.number.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < 12 || digits.len() > 19 {
            return Err(TokenizeError::Rejected("card number length".to_string()));
        }
        if card.security_code.len() < 3 {
            return Err(TokenizeError::Rejected("security code".to_string()));
        }

        let last4 = &digits[digits.len() - 4..];
        let suffix: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        Ok(CardToken(format!("tok_sandbox_{}_{}", last4, suffix)))
    }
}

/// The accept/decline draw of the simulated processor, kept behind a trait so
/// tests can pin the outcome instead of asserting on probabilities.
pub trait PaymentOutcome: Send + Sync {
    fn approve(&self) -> bool;
}

/// Production stand-in: approves ~90% of charges, uniformly at random per
/// call. Not seeded and not idempotent, so a retry can flip the outcome.
pub struct SimulatedGateway {
    approval_rate: f64,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self { approval_rate: 0.9 }
    }

    pub fn with_approval_rate(approval_rate: f64) -> Self {
        Self { approval_rate }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentOutcome for SimulatedGateway {
    fn approve(&self) -> bool {
        rand::thread_rng().gen::<f64>() < self.approval_rate
    }
}

/// Fixed outcome for tests.
pub struct FixedOutcome(bool);

impl FixedOutcome {
    pub fn approved() -> Self {
        Self(true)
    }

    pub fn declined() -> Self {
        Self(false)
    }
}

impl PaymentOutcome for FixedOutcome {
    fn approve(&self) -> bool {
        self.0
    }
}
