use crate::config::Config;
use crate::models::{
    error::AppError,
    reports::{ReportKind, ReportQuery},
};
use serde::de::DeserializeOwned;

// CONSTANTS
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// API CONFIGURATION
/// Address of the employee service, passed explicitly to every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    employees_path: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Parses a user-entered address.
    ///
    /// Only emptiness is rejected; the address is otherwise used as typed,
    /// minus surrounding whitespace and a trailing slash.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AppError::Config("Please enter an address".to_string()));
        }
        Ok(Self::builder().base_url(trimmed).build())
    }

    /// Address of a backend running on the same host as the device.
    pub fn device_address(host: &str) -> String {
        format!("http://{host}:{}", Config::DEVICE_API_PORT)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// First page of the paginated employee collection.
    pub fn employees_url(&self) -> String {
        format!("{}{}", self.base_url, self.employees_path)
    }

    /// The whole employee collection in a single page.
    pub fn bulk_employees_url(&self) -> String {
        format!(
            "{}?limit={}",
            self.employees_url(),
            Config::BULK_EMPLOYEE_LIMIT
        )
    }

    /// Constructs the full URL of a report for one employee and date window.
    pub fn report_url(&self, kind: ReportKind, query: &ReportQuery) -> String {
        format!(
            "{}/{}?{}",
            self.employees_url(),
            kind.path(),
            query.query_string()
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

impl std::fmt::Display for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base_url)
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    employees_path: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the backend base address.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overrides the employee collection path (primarily for testing).
    pub fn employees_path(mut self, path: impl Into<String>) -> Self {
        self.employees_path = Some(path.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            employees_path: self
                .employees_path
                .unwrap_or_else(|| Config::EMPLOYEES_PATH.to_string()),
        }
    }
}

// JSON SOURCE
/// Anything that can answer a GET with a JSON body.
///
/// Loaders and the statistics aggregator are generic over this so they can be
/// driven without a network.
#[allow(async_fn_in_trait)]
pub trait JsonSource {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError>;
}

// EMPLOYEES CLIENT
/// HTTP client for the employee service.
#[derive(Debug, Clone)]
pub struct EmployeesClient {
    http: reqwest::Client,
}

impl EmployeesClient {
    /// Creates a new client with default transport settings.
    pub fn new() -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Api(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Api(format!("Request error: {error}"))
        } else {
            AppError::Api(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::Api(format!("Client error {status}: {body}")),
            500..=599 => AppError::Api(format!("Server error {status}: {body}")),
            _ => AppError::Api(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl JsonSource for EmployeesClient {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        log::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Data(format!("Failed to parse response from {url}: {e}")))
    }
}
