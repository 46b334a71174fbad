use serde::{Deserialize, Serialize};

/// Meal-plan variant bundled with a room stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageCode {
    #[default]
    RoomOnly,
    Breakfast,
    Dinner,
    BreakfastDinner,
}

impl PackageCode {
    pub fn all() -> [PackageCode; 4] {
        [
            PackageCode::RoomOnly,
            PackageCode::Breakfast,
            PackageCode::Dinner,
            PackageCode::BreakfastDinner,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageCode::RoomOnly => "ROOM_ONLY",
            PackageCode::Breakfast => "BREAKFAST",
            PackageCode::Dinner => "DINNER",
            PackageCode::BreakfastDinner => "BREAKFAST_DINNER",
        }
    }

    pub fn from_code(code: &str) -> Option<PackageCode> {
        match code {
            "ROOM_ONLY" => Some(PackageCode::RoomOnly),
            "BREAKFAST" => Some(PackageCode::Breakfast),
            "DINNER" => Some(PackageCode::Dinner),
            "BREAKFAST_DINNER" => Some(PackageCode::BreakfastDinner),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageCode::RoomOnly => "Room Only",
            PackageCode::Breakfast => "Breakfast Included",
            PackageCode::Dinner => "Dinner Included",
            PackageCode::BreakfastDinner => "Breakfast & Dinner",
        }
    }

    /// Extra cost over room-only, per guest per night, in whole yen.
    pub fn nightly_adjustment(&self) -> i64 {
        match self {
            PackageCode::RoomOnly => 0,
            PackageCode::Breakfast => 2_500,
            PackageCode::Dinner => 8_000,
            PackageCode::BreakfastDinner => 10_000,
        }
    }
}

/// Display name for a package code string. Unknown codes pass through
/// unchanged, mirroring the room-type lookup.
pub fn package_display_name(code: &str) -> &str {
    match PackageCode::from_code(code) {
        Some(package) => package.display_name(),
        None => code,
    }
}

/// One meal-plan offer priced for a concrete stay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageOffer {
    pub code: PackageCode,
    pub total_price: i64,
    pub average_nightly_price: i64,
    /// Extra cost of this package over room-only for the whole stay.
    pub adjustment_value: i64,
}

impl PackageOffer {
    /// The fixed catalog of meal plans for one room context, priced from the
    /// room-only stay total.
    pub fn catalog(stay_total: i64, nights: i64, guests: u32) -> Vec<PackageOffer> {
        PackageCode::all()
            .iter()
            .map(|&code| {
                let adjustment = code.nightly_adjustment() * nights * guests as i64;
                let total = stay_total + adjustment;
                let average = if nights > 0 {
                    (total as f64 / nights as f64).round() as i64
                } else {
                    0
                };
                PackageOffer {
                    code,
                    total_price: total,
                    average_nightly_price: average,
                    adjustment_value: adjustment,
                }
            })
            .collect()
    }
}
