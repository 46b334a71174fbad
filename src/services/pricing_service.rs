use chrono::NaiveDateTime;

/// Flat consumption tax applied to every stay total.
pub const CONSUMPTION_TAX_RATE: f64 = 0.10;

const SECONDS_PER_DAY: f64 = 86_400.0;

pub struct PricingService;

impl PricingService {
    /// Number of nights between check-in and check-out, rounding partial days
    /// up (a stay ending mid-day still counts the final night). Returns 0
    /// when either date is absent or the range is not positive.
    pub fn nights(check_in: Option<NaiveDateTime>, check_out: Option<NaiveDateTime>) -> i64 {
        let (check_in, check_out) = match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => (check_in, check_out),
            _ => return 0,
        };

        let seconds = (check_out - check_in).num_seconds();
        if seconds <= 0 {
            return 0;
        }
        (seconds as f64 / SECONDS_PER_DAY).ceil() as i64
    }

    /// Unit price per night per guest, rounded to whole yen. Returns 0 when
    /// there are no nights or no guests.
    pub fn per_night_per_guest(total: f64, nights: i64, total_guests: u32) -> i64 {
        if nights <= 0 || total_guests == 0 {
            return 0;
        }
        (total / nights as f64 / total_guests as f64).round() as i64
    }

    /// 10% consumption tax on an amount.
    pub fn tax(amount: f64) -> f64 {
        amount * CONSUMPTION_TAX_RATE
    }

    /// Amount plus consumption tax.
    pub fn total_with_tax(amount: f64) -> f64 {
        amount + Self::tax(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<NaiveDateTime> {
        Some(NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn nights_is_whole_day_difference() {
        assert_eq!(PricingService::nights(at(2024, 6, 1, 0, 0), at(2024, 6, 4, 0, 0)), 3);
        assert_eq!(PricingService::nights(at(2024, 6, 1, 0, 0), at(2024, 6, 2, 0, 0)), 1);
    }

    #[test]
    fn nights_rounds_partial_days_up() {
        // Checking out at noon still counts the last night.
        assert_eq!(PricingService::nights(at(2024, 6, 1, 15, 0), at(2024, 6, 4, 12, 0)), 3);
        assert_eq!(PricingService::nights(at(2024, 6, 1, 0, 0), at(2024, 6, 1, 12, 0)), 1);
    }

    #[test]
    fn nights_is_zero_without_a_valid_range() {
        assert_eq!(PricingService::nights(None, at(2024, 6, 4, 0, 0)), 0);
        assert_eq!(PricingService::nights(at(2024, 6, 1, 0, 0), None), 0);
        assert_eq!(PricingService::nights(None, None), 0);
        assert_eq!(PricingService::nights(at(2024, 6, 4, 0, 0), at(2024, 6, 1, 0, 0)), 0);
        assert_eq!(PricingService::nights(at(2024, 6, 1, 0, 0), at(2024, 6, 1, 0, 0)), 0);
    }

    #[test]
    fn per_night_per_guest_guards_zero_denominators() {
        assert_eq!(PricingService::per_night_per_guest(66_000.0, 0, 2), 0);
        assert_eq!(PricingService::per_night_per_guest(66_000.0, 3, 0), 0);
        assert_eq!(PricingService::per_night_per_guest(0.0, 0, 0), 0);
    }

    #[test]
    fn per_night_per_guest_rounds_to_whole_yen() {
        assert_eq!(PricingService::per_night_per_guest(66_000.0, 3, 2), 11_000);
        // 10000 / 3 / 1 = 3333.33... -> 3333
        assert_eq!(PricingService::per_night_per_guest(10_000.0, 3, 1), 3_333);
        // 50000 / 3 / 2 = 8333.33... -> 8333
        assert_eq!(PricingService::per_night_per_guest(50_000.0, 3, 2), 8_333);
    }

    #[test]
    fn tax_and_total_round_trip() {
        assert_eq!(PricingService::tax(60_000.0), 6_000.0);
        assert_eq!(PricingService::total_with_tax(60_000.0), 66_000.0);

        for amount in [0.0, 1.0, 980.0, 123_456.0] {
            let total = PricingService::total_with_tax(amount);
            assert!((total - PricingService::tax(amount) - amount).abs() < 1e-9);
            assert!((total - amount * 1.1).abs() < 1e-9);
        }
    }
}
