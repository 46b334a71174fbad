use serde::{Deserialize, Serialize};

/// One bookable room as returned by the availability service. The price is
/// the pre-tax total for the whole stay, in whole yen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOffer {
    pub room_code: String,
    pub room_name: String,
    pub room_type: String,
    pub price: i64,
    pub max_occupancy: u32,
    pub max_children: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub available_count: u32,
}

/// Response envelope of the availability service. `code` 200 signals success;
/// anything else is an application-level failure even when the HTTP status
/// was 200.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityEnvelope {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    pub data: Option<AvailabilityData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityData {
    pub rooms: Vec<RoomOffer>,
    pub total: u32,
    pub page_index: u32,
    pub page_size: u32,
}

/// Display name for a room type code. Unknown codes pass through unchanged so
/// a new room type never breaks the payment flow.
pub fn room_display_name(code: &str) -> &str {
    match code {
        "STD_TWIN" => "Standard Twin",
        "DLX_TWIN" => "Deluxe Twin",
        "DLX_KING" => "Deluxe King",
        "JR_SUITE" => "Junior Suite",
        "GDN_SUITE" => "Garden Suite",
        other => other,
    }
}
