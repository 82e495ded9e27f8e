pub mod employee;
pub mod error;
pub mod reports;
pub mod stats;
