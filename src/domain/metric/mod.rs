pub mod dto;
pub mod normalizer;
pub mod service;
