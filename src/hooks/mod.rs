pub mod use_api_config;
pub mod use_employees;
pub mod use_report;
pub mod use_statistics;
