pub mod auth;
pub mod common;
pub mod info;
pub mod metric;
