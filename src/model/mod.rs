pub mod error;
pub mod severity;
