use chrono::NaiveDate;
use futures::future::try_join_all;

use crate::models::{
    employee::{Employee, EmployeePage},
    error::AppError,
    reports::{DayWorked, ProductionRecord, ReportQuery},
    stats::{AreaCounts, GeneralStats},
};
use crate::services::api::{ApiConfig, JsonSource};
use crate::services::reports::{fetch_days_worked, fetch_production_report};

async fn fetch_all_employees<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
) -> Result<Vec<Employee>, AppError> {
    let page: EmployeePage = source.get_json(&config.bulk_employees_url()).await?;
    Ok(page.into_employees())
}

/// Headcount per area over the whole collection.
pub async fn fetch_area_counts<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
) -> Result<AreaCounts, AppError> {
    let result = fetch_all_employees(source, config)
        .await
        .map(AreaCounts::from_employees);

    if let Err(e) = &result {
        log::error!("Error loading employees by area: {e}");
    }
    result
}

/// Production and attendance per area for a date window.
///
/// Each report kind is fetched for every employee concurrently. The first
/// failing request fails the whole aggregation and drops the requests still
/// in flight.
pub async fn fetch_general_statistics<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<GeneralStats, AppError> {
    let result = aggregate_general_statistics(source, config, start, end).await;

    if let Err(e) = &result {
        log::error!("Error loading general statistics: {e}");
    }
    result
}

async fn aggregate_general_statistics<S: JsonSource>(
    source: &S,
    config: &ApiConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<GeneralStats, AppError> {
    let employees = fetch_all_employees(source, config).await?;
    let queries: Vec<ReportQuery> = employees
        .iter()
        .map(|employee| ReportQuery::new(employee.id_empleado, start, end))
        .collect();

    let production: Vec<ProductionRecord> = try_join_all(
        queries
            .iter()
            .map(|query| fetch_production_report(source, config, query)),
    )
    .await?
    .into_iter()
    .flatten()
    .collect();

    let attendance: Vec<DayWorked> = try_join_all(
        queries
            .iter()
            .map(|query| fetch_days_worked(source, config, query)),
    )
    .await?
    .into_iter()
    .flatten()
    .collect();

    log::debug!(
        "Aggregating {} employees, {} production rows, {} attendance rows",
        employees.len(),
        production.len(),
        attendance.len()
    );

    Ok(GeneralStats::aggregate(employees, production, attendance))
}
