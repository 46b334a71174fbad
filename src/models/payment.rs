use serde::{Deserialize, Serialize};

/// Stay summary embedded in a charge request, derived from the stay query,
/// the chosen room and the chosen package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    pub room_type_code: String,
    pub room_type_name: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub guests: u32,
    pub capacity: u32,
    pub total_price: i64,
    pub package_code: String,
    pub package_name: String,
}

/// Customer block of a charge request. `address` carries the guest's country;
/// the wire name is kept for backend compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub special_requests: String,
}

/// Fully assembled charge request. Built once per attempt; the nonce is
/// single-use, so a retry always carries a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCharge {
    pub nonce: String,
    pub amount: i64,
    pub currency: String,
    pub domain: String,
    pub booking: BookingInfo,
    pub customer: CustomerInfo,
}

/// Charge endpoint response. Only drives confirmation rendering; absent
/// fields are omitted from the JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
