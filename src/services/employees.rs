use crate::models::{
    employee::{Employee, EmployeePage},
    error::AppError,
};
use crate::services::api::{ApiConfig, JsonSource};

/// A page fetch handed out by [`EmployeeLoader::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: String,
    generation: u64,
}

/// Accumulates the employee collection page by page.
///
/// The loader never suspends itself: callers take a [`PageRequest`] from
/// `begin`, fetch it however they like, and hand the outcome back to
/// `complete`. That keeps the loader usable from a `RefCell` across an await.
#[derive(Debug, Clone)]
pub struct EmployeeLoader {
    config: ApiConfig,
    next_page_url: String,
    employees: Vec<Employee>,
    loading: bool,
    generation: u64,
}

impl EmployeeLoader {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            next_page_url: config.employees_url(),
            config,
            employees: Vec::new(),
            loading: false,
            generation: 0,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn next_page_url(&self) -> &str {
        &self.next_page_url
    }

    /// Switches to a new address: drops everything loaded so far and points
    /// the cursor back at the first page. In-flight pages are orphaned.
    pub fn reset(&mut self, config: ApiConfig) {
        self.next_page_url = config.employees_url();
        self.config = config;
        self.employees.clear();
        self.loading = false;
        self.generation += 1;
    }

    /// Claims the in-flight slot, or returns `None` if a page is already loading.
    pub fn begin(&mut self) -> Option<PageRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;

        Some(PageRequest {
            url: self.next_page_url.clone(),
            generation: self.generation,
        })
    }

    /// Applies a fetched page. Returns `false` if the page was discarded
    /// because a reset happened while it was in flight.
    pub fn complete(&mut self, request: PageRequest, result: Result<EmployeePage, AppError>) -> bool {
        if request.generation != self.generation {
            log::debug!("Discarding stale employee page from {}", request.url);
            return false;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                // No `next` means the cursor holds and the same page is fetched again.
                if let Some(next) = page.next.as_deref().filter(|next| !next.is_empty()) {
                    self.next_page_url = next.to_string();
                }
                let employees = page.into_employees();
                log::debug!(
                    "Loaded {} employees ({} total)",
                    employees.len(),
                    self.employees.len() + employees.len()
                );
                self.employees.extend(employees);
            }
            Err(e) => log::error!("Error loading employees: {e}"),
        }
        true
    }

    /// Fetches the next page from `source` when nothing else is in flight.
    pub async fn load_next<S: JsonSource>(&mut self, source: &S) {
        if let Some(request) = self.begin() {
            let result = source.get_json::<EmployeePage>(&request.url).await;
            self.complete(request, result);
        }
    }
}
