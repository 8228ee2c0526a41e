pub mod benefit_repository;
pub mod usage_repository;

pub use benefit_repository::*;
pub use usage_repository::*;
