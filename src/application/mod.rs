pub mod builder;
pub mod dto;
pub mod errors;
pub mod ports;
pub mod service;
pub mod use_cases;
pub mod validation;
