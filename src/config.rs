/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Employee collection path, relative to the configured base address
    pub const EMPLOYEES_PATH: &'static str = "/api/dsm44/empleados";

    /// Page size requested when the statistics screens need every employee at once
    pub const BULK_EMPLOYEE_LIMIT: u32 = 1000;

    /// Port the backend listens on when the address is detected from the device
    pub const DEVICE_API_PORT: u16 = 3000;

    /// Quiet period before re-rendering charts after a resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
