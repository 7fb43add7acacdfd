pub mod claims;
pub mod credentials;
pub mod dto;
pub mod service;
pub mod token_service;
