use chrono::NaiveDateTime;
use rand::Rng;

use crate::models::guest::GuestDetails;
use crate::models::packages;
use crate::models::payment::{BookingInfo, CustomerInfo, PaymentCharge};
use crate::models::rooms;
use crate::models::stay::StayQuery;
use crate::services::guest_validation::GuestFormValidator;

pub const CURRENCY: &str = "JPY";
pub const DEFAULT_PACKAGE_CODE: &str = "ROOM_ONLY";

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
const REFERENCE_LENGTH: usize = 8;
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Outcome of the pre-submission sanity pass. Unlike the guest form
/// validator, every failure is accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDataCheck {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub struct PaymentRequestBuilder;

impl PaymentRequestBuilder {
    /// Maps the wizard's accumulated stay/room/package selection onto the
    /// charge request's booking block. Unknown room or package codes pass
    /// through as both code and display name. `total_price` is tax-inclusive
    /// and rounded to whole yen.
    pub fn build_booking_info(
        stay: &StayQuery,
        room_id: &str,
        package_code: Option<&str>,
        total_price: f64,
        capacity: u32,
    ) -> BookingInfo {
        let package_code = package_code.unwrap_or(DEFAULT_PACKAGE_CODE);

        BookingInfo {
            room_type_code: room_id.to_string(),
            room_type_name: rooms::room_display_name(room_id).to_string(),
            check_in_date: format_wire_date(stay.check_in),
            check_out_date: format_wire_date(stay.check_out),
            guests: stay.total_guests(),
            capacity,
            total_price: total_price.round() as i64,
            package_code: package_code.to_string(),
            package_name: packages::package_display_name(package_code).to_string(),
        }
    }

    /// The guest's country rides in the `address` field. The mapping is kept
    /// for wire compatibility with the existing backend contract.
    pub fn build_customer_info(guest: &GuestDetails) -> CustomerInfo {
        CustomerInfo {
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            address: guest.country.clone(),
            special_requests: guest.special_requests.clone(),
        }
    }

    pub fn build_payment_request(
        nonce: impl Into<String>,
        amount: f64,
        domain: impl Into<String>,
        booking: BookingInfo,
        customer: CustomerInfo,
    ) -> PaymentCharge {
        PaymentCharge {
            nonce: nonce.into(),
            amount: amount.round() as i64,
            currency: CURRENCY.to_string(),
            domain: domain.into(),
            booking,
            customer,
        }
    }

    /// Narrow re-check run right before tokenized submission. The payment
    /// page is reachable by direct URL, so presence of the essentials is
    /// verified again even though the guest form validated them already.
    pub fn validate_payment_data(stay: &StayQuery, guest: &GuestDetails) -> PaymentDataCheck {
        let mut errors = Vec::new();

        if stay.check_in.is_none() {
            errors.push("Check-in date is missing".to_string());
        }
        if stay.check_out.is_none() {
            errors.push("Check-out date is missing".to_string());
        }
        if guest.first_name.trim().is_empty() {
            errors.push("First name is required".to_string());
        }
        if guest.last_name.trim().is_empty() {
            errors.push("Last name is required".to_string());
        }

        let email = guest.email.trim();
        if email.is_empty() {
            errors.push("Email address is required".to_string());
        } else if !GuestFormValidator::is_plausible_email(email) {
            errors.push("Email address is not valid".to_string());
        }

        if guest.phone.trim().is_empty() {
            errors.push("Phone number is required".to_string());
        }

        PaymentDataCheck {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Display-only booking reference. The authoritative identifier comes
    /// from the charge response; this one carries no uniqueness guarantee.
    pub fn generate_booking_reference() -> String {
        let mut rng = rand::thread_rng();
        (0..REFERENCE_LENGTH)
            .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
            .collect()
    }
}

fn format_wire_date(date: Option<NaiveDateTime>) -> String {
    match date {
        Some(date) => date.format(WIRE_DATE_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use regex::Regex;

    fn stay() -> StayQuery {
        let date = |d: u32| {
            NaiveDate::from_ymd_opt(2024, 6, d)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap()
        };
        StayQuery {
            check_in: Some(date(1)),
            check_out: Some(date(4)),
            adults: 2,
            children: 1,
        }
    }

    fn guest() -> GuestDetails {
        GuestDetails {
            first_name: "Hanako".to_string(),
            last_name: "Yamada".to_string(),
            email: "hanako@example.com".to_string(),
            phone: "+81-90-0000-0000".to_string(),
            country: "Japan".to_string(),
            special_requests: "Late arrival".to_string(),
            arrival_time_window: "21:00-22:00".to_string(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn booking_info_maps_known_codes() {
        let info = PaymentRequestBuilder::build_booking_info(
            &stay(),
            "DLX_TWIN",
            Some("BREAKFAST"),
            72_600.4,
            3,
        );

        assert_eq!(info.room_type_code, "DLX_TWIN");
        assert_eq!(info.room_type_name, "Deluxe Twin");
        assert_eq!(info.check_in_date, "2024-06-01");
        assert_eq!(info.check_out_date, "2024-06-04");
        assert_eq!(info.guests, 3);
        assert_eq!(info.capacity, 3);
        assert_eq!(info.total_price, 72_600);
        assert_eq!(info.package_code, "BREAKFAST");
        assert_eq!(info.package_name, "Breakfast Included");
    }

    #[test]
    fn booking_info_falls_back_for_unknown_codes_and_default_package() {
        let info =
            PaymentRequestBuilder::build_booking_info(&stay(), "ANNEX_LOFT", None, 50_000.0, 2);

        assert_eq!(info.room_type_code, "ANNEX_LOFT");
        assert_eq!(info.room_type_name, "ANNEX_LOFT");
        assert_eq!(info.package_code, "ROOM_ONLY");
        assert_eq!(info.package_name, "Room Only");
    }

    #[test]
    fn customer_info_carries_country_as_address() {
        let info = PaymentRequestBuilder::build_customer_info(&guest());
        assert_eq!(info.address, "Japan");
        assert_eq!(info.special_requests, "Late arrival");

        let mut no_requests = guest();
        no_requests.special_requests = String::new();
        let info = PaymentRequestBuilder::build_customer_info(&no_requests);
        assert_eq!(info.special_requests, "");
    }

    #[test]
    fn payment_request_rounds_and_stamps_currency() {
        let booking = PaymentRequestBuilder::build_booking_info(
            &stay(),
            "DLX_TWIN",
            Some("DINNER"),
            108_900.0,
            3,
        );
        let customer = PaymentRequestBuilder::build_customer_info(&guest());
        let charge = PaymentRequestBuilder::build_payment_request(
            "tok_abc",
            108_899.6,
            "book.minamiya.example",
            booking,
            customer,
        );

        assert_eq!(charge.nonce, "tok_abc");
        assert_eq!(charge.amount, 108_900);
        assert_eq!(charge.currency, "JPY");
        assert_eq!(charge.domain, "book.minamiya.example");
    }

    #[test]
    fn payment_data_check_accumulates_every_error() {
        let check =
            PaymentRequestBuilder::validate_payment_data(&StayQuery::default(), &GuestDetails::default());
        assert!(!check.is_valid);
        assert_eq!(check.errors.len(), 6);
        assert!(check.errors.iter().any(|e| e.contains("Check-in date")));
        assert!(check.errors.iter().any(|e| e.contains("Check-out date")));
    }

    #[test]
    fn payment_data_check_passes_complete_data() {
        let check = PaymentRequestBuilder::validate_payment_data(&stay(), &guest());
        assert!(check.is_valid);
        assert!(check.errors.is_empty());
    }

    #[test]
    fn payment_data_check_flags_malformed_email() {
        let mut bad_email = guest();
        bad_email.email = "not-an-email".to_string();
        let check = PaymentRequestBuilder::validate_payment_data(&stay(), &bad_email);
        assert!(!check.is_valid);
        assert_eq!(check.errors, vec!["Email address is not valid".to_string()]);
    }

    #[test]
    fn booking_reference_format() {
        let pattern = Regex::new(r"^[A-Z0-9]{8}$").unwrap();
        for _ in 0..100 {
            let reference = PaymentRequestBuilder::generate_booking_reference();
            assert!(pattern.is_match(&reference), "bad reference {reference}");
        }
    }
}
