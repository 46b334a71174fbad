use serde::{Deserialize, Serialize};

/// Guest contact details collected on the second wizard step. Never persisted;
/// handed to the payment page through the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub special_requests: String,
    pub arrival_time_window: String,
    pub agree_to_terms: bool,
}

/// Form fields addressable by the validator and the clear-on-edit logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuestField {
    FirstName,
    LastName,
    Email,
    Phone,
    Country,
    SpecialRequests,
    ArrivalTimeWindow,
    AgreeToTerms,
}
