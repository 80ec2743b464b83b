pub mod dish;
pub mod reservation;
pub mod restaurant;
pub mod serde_helpers;
