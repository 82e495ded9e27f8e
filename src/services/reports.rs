use crate::models::{
    error::AppError,
    reports::{
        AttendanceSummary, DailyAttendance, DayWorked, DaysWorkedReport, HoursWorked, Payroll,
        ProductionRecord, ProductionReport, Report, ReportQuery, ReportRecord, UnitsProduced,
        UnitsProducedReport,
    },
};
use crate::services::api::{ApiConfig, JsonSource};

/// Issues the single GET backing report `R`.
pub async fn fetch_report<R: Report, S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    query: &ReportQuery,
) -> Result<R::Payload, AppError> {
    let url = config.report_url(R::KIND, query);
    let wire = source.get_json::<R::Wire>(&url).await?;
    Ok(R::from_wire(wire))
}

pub async fn fetch_attendance_summary<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    query: &ReportQuery,
) -> Result<ReportRecord, AppError> {
    fetch_report::<AttendanceSummary, _>(source, config, query).await
}

pub async fn fetch_daily_attendance<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    query: &ReportQuery,
) -> Result<ReportRecord, AppError> {
    fetch_report::<DailyAttendance, _>(source, config, query).await
}

pub async fn fetch_payroll<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    query: &ReportQuery,
) -> Result<ReportRecord, AppError> {
    fetch_report::<Payroll, _>(source, config, query).await
}

pub async fn fetch_days_worked<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    query: &ReportQuery,
) -> Result<Vec<DayWorked>, AppError> {
    fetch_report::<DaysWorkedReport, _>(source, config, query).await
}

pub async fn fetch_production_report<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    query: &ReportQuery,
) -> Result<Vec<ProductionRecord>, AppError> {
    fetch_report::<ProductionReport, _>(source, config, query).await
}

pub async fn fetch_hours_worked<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    query: &ReportQuery,
) -> Result<Vec<ReportRecord>, AppError> {
    fetch_report::<HoursWorked, _>(source, config, query).await
}

pub async fn fetch_units_produced<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    query: &ReportQuery,
) -> Result<UnitsProduced, AppError> {
    fetch_report::<UnitsProducedReport, _>(source, config, query).await
}

/// The last result a report view is showing.
///
/// Each load fully replaces the data. A failed load keeps what was shown
/// before and records the error. Only the most recently issued ticket may
/// write, so a slow earlier response cannot overwrite a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSlot<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    latest: u64,
}

impl<T> Default for ReportSlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            latest: 0,
        }
    }
}

impl<T> ReportSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks a load as started and returns its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.loading = true;
        self.latest
    }

    /// Applies a finished load. Returns `false` for superseded tickets.
    pub fn complete(&mut self, ticket: u64, result: Result<T, AppError>) -> bool {
        if ticket != self.latest {
            return false;
        }
        self.loading = false;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                log::warn!("Report load failed: {e}");
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Forgets everything, e.g. after the address changes.
    pub fn clear(&mut self) {
        self.data = None;
        self.error = None;
        self.loading = false;
        self.latest += 1;
    }
}
