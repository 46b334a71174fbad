pub mod guest;
pub mod packages;
pub mod payment;
pub mod rooms;
pub mod stay;
