pub mod cluster;
pub mod deployment;
pub mod event;
pub mod namespace;
pub mod node;
pub mod pod;
pub mod service;
