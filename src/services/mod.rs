pub mod benefit_service;

pub use benefit_service::*;
