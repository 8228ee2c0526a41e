// Re-export all models organized by domain
pub mod benefit;
pub mod errors;
pub mod request;
pub mod response;

pub use benefit::*;
pub use errors::*;
pub use request::*;
pub use response::*;
