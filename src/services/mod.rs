pub mod availability_service;
pub mod booking_flow;
pub mod guest_validation;
pub mod i18n;
pub mod payment;
pub mod pricing_service;
