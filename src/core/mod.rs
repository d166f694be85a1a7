pub mod backup;
pub mod checkin;
pub mod checkout;
pub mod filter;
pub mod stats;
pub mod validate;
