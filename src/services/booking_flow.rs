use std::collections::HashMap;

use serde::Serialize;
use url::form_urlencoded;

use crate::models::guest::{GuestDetails, GuestField};
use crate::models::packages::PackageCode;
use crate::models::stay::StayQuery;
use crate::services::guest_validation::GuestFormValidator;
use crate::services::i18n::{Locale, Translator};
use crate::services::pricing_service::PricingService;

const HANDOFF_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The two sequential phases of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectingRoom,
    EnteringGuestDetails,
}

/// What a room selection did to the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First selection; the wizard moved on and the view scrolls to top.
    AdvancedToGuestDetails,
    /// Already on guest details; only the stored selection changed.
    SelectionUpdated,
}

/// Navigation capability the wizard hands off through, one narrow method
/// implemented per platform.
pub trait Navigator {
    fn navigate_to(&mut self, path: &str, query: &str);
}

/// Running price breakdown for the current selection, recomputed on demand
/// as dates, guests or the room change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub nights: i64,
    pub per_night_per_guest: i64,
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

/// Two-step booking wizard. Owns every piece of in-memory state the flow
/// accumulates; nothing survives the handoff to the payment page except the
/// query string it emits.
pub struct BookingWizard {
    step: WizardStep,
    pub stay: StayQuery,
    selected_room_id: Option<String>,
    selected_package: PackageCode,
    room_price: i64,
    guest: GuestDetails,
    field_errors: HashMap<GuestField, String>,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectingRoom,
            stay: StayQuery::default(),
            selected_room_id: None,
            selected_package: PackageCode::default(),
            room_price: 0,
            guest: GuestDetails::default(),
            field_errors: HashMap::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn guest(&self) -> &GuestDetails {
        &self.guest
    }

    pub fn field_errors(&self) -> &HashMap<GuestField, String> {
        &self.field_errors
    }

    pub fn selection(&self) -> Option<(&str, PackageCode, i64)> {
        self.selected_room_id
            .as_deref()
            .map(|room_id| (room_id, self.selected_package, self.room_price))
    }

    /// Stores a room/package choice with its stay total. Advances to guest
    /// details only from step 1; a re-selection on step 2 just replaces the
    /// stored choice.
    pub fn select_room(
        &mut self,
        room_id: impl Into<String>,
        package: PackageCode,
        total_price: i64,
    ) -> SelectOutcome {
        self.selected_room_id = Some(room_id.into());
        self.selected_package = package;
        self.room_price = total_price;

        match self.step {
            WizardStep::SelectingRoom => {
                self.step = WizardStep::EnteringGuestDetails;
                SelectOutcome::AdvancedToGuestDetails
            }
            WizardStep::EnteringGuestDetails => SelectOutcome::SelectionUpdated,
        }
    }

    // Field edits optimistically clear that field's error; nothing is
    // re-validated until the next submit.

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.guest.first_name = value.into();
        self.field_errors.remove(&GuestField::FirstName);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.guest.last_name = value.into();
        self.field_errors.remove(&GuestField::LastName);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.guest.email = value.into();
        self.field_errors.remove(&GuestField::Email);
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.guest.phone = value.into();
        self.field_errors.remove(&GuestField::Phone);
    }

    pub fn set_country(&mut self, value: impl Into<String>) {
        self.guest.country = value.into();
        self.field_errors.remove(&GuestField::Country);
    }

    pub fn set_special_requests(&mut self, value: impl Into<String>) {
        self.guest.special_requests = value.into();
        self.field_errors.remove(&GuestField::SpecialRequests);
    }

    pub fn set_arrival_time_window(&mut self, value: impl Into<String>) {
        self.guest.arrival_time_window = value.into();
        self.field_errors.remove(&GuestField::ArrivalTimeWindow);
    }

    pub fn set_agree_to_terms(&mut self, agreed: bool) {
        self.guest.agree_to_terms = agreed;
        self.field_errors.remove(&GuestField::AgreeToTerms);
    }

    /// Price breakdown for the current selection. The stored room price is
    /// the pre-tax stay total for the chosen package.
    pub fn price_summary(&self) -> PriceSummary {
        let nights = PricingService::nights(self.stay.check_in, self.stay.check_out);
        let subtotal = self.room_price;
        let tax = PricingService::tax(subtotal as f64).round() as i64;

        PriceSummary {
            nights,
            per_night_per_guest: PricingService::per_night_per_guest(
                subtotal as f64,
                nights,
                self.stay.total_guests(),
            ),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Validates the guest form; on success hands off to the payment page and
    /// this wizard's lifecycle is over. On failure the error map is stored
    /// and returned.
    pub fn submit_guest_details(
        &mut self,
        translations: &dyn Translator,
        locale: Locale,
        navigator: &mut dyn Navigator,
    ) -> Result<(), HashMap<GuestField, String>> {
        let errors = GuestFormValidator::validate(&self.guest, translations, locale);
        if !errors.is_empty() {
            self.field_errors = errors.clone();
            return Err(errors);
        }

        self.field_errors.clear();
        let path = format!("/{}/payment", locale.as_str());
        navigator.navigate_to(&path, &self.handoff_query());
        Ok(())
    }

    /// Query string carrying the session to the payment page. This is the
    /// only state-transfer mechanism between the two pages.
    pub fn handoff_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if let Some(check_in) = self.stay.check_in {
            query.append_pair("checkInDate", &check_in.format(HANDOFF_DATE_FORMAT).to_string());
        }
        if let Some(check_out) = self.stay.check_out {
            query.append_pair("checkOutDate", &check_out.format(HANDOFF_DATE_FORMAT).to_string());
        }
        query.append_pair("roomId", self.selected_room_id.as_deref().unwrap_or(""));
        query.append_pair("price", &self.room_price.to_string());
        query.append_pair("adults", &self.stay.adults.to_string());
        query.append_pair("children", &self.stay.children.to_string());
        query.append_pair("firstName", &self.guest.first_name);
        query.append_pair("lastName", &self.guest.last_name);
        query.append_pair("email", &self.guest.email);
        query.append_pair("phone", &self.guest.phone);

        query.finish()
    }

    /// Post-submission reset: everything back to step 1, empty.
    pub fn reset(&mut self) {
        *self = BookingWizard::new();
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}
