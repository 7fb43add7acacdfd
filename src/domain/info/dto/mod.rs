pub mod requests;
pub mod views;
