use std::collections::HashMap;

use regex::Regex;

use crate::models::guest::{GuestDetails, GuestField};
use crate::services::i18n::{Locale, Translator};

/// Intentionally permissive: anything@anything.anything. The form accepts
/// what stricter RFC validation would reject, and the error copy assumes
/// this looseness.
pub const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

pub struct GuestFormValidator;

impl GuestFormValidator {
    /// Checks the current form snapshot. One message per failing field, first
    /// failing rule wins; a clean form yields an empty map.
    pub fn validate(
        details: &GuestDetails,
        translations: &dyn Translator,
        locale: Locale,
    ) -> HashMap<GuestField, String> {
        let mut errors = HashMap::new();
        let t = |key: &str| translations.resolve(locale, key);

        if details.first_name.trim().is_empty() {
            errors.insert(GuestField::FirstName, t("booking.form.errors.firstNameRequired"));
        }
        if details.last_name.trim().is_empty() {
            errors.insert(GuestField::LastName, t("booking.form.errors.lastNameRequired"));
        }

        let email = details.email.trim();
        if email.is_empty() {
            errors.insert(GuestField::Email, t("booking.form.errors.emailRequired"));
        } else if !Self::is_plausible_email(email) {
            errors.insert(GuestField::Email, t("booking.form.errors.emailInvalid"));
        }

        if details.phone.trim().is_empty() {
            errors.insert(GuestField::Phone, t("booking.form.errors.phoneRequired"));
        }
        if details.country.trim().is_empty() {
            errors.insert(GuestField::Country, t("booking.form.errors.countryRequired"));
        }
        if details.arrival_time_window.trim().is_empty() {
            errors.insert(
                GuestField::ArrivalTimeWindow,
                t("booking.form.errors.arrivalTimeRequired"),
            );
        }
        if !details.agree_to_terms {
            errors.insert(GuestField::AgreeToTerms, t("booking.form.errors.termsRequired"));
        }

        errors
    }

    pub fn is_plausible_email(email: &str) -> bool {
        Regex::new(EMAIL_PATTERN)
            .expect("email pattern compiles")
            .is_match(email)
    }
}
