pub mod api;
pub mod employees;
pub mod reports;
pub mod statistics;
