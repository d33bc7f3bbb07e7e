pub mod analytics;
pub mod auth;
pub mod bookings;
pub mod clubs;
pub mod errors;
