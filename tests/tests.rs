#[cfg(test)]
mod tests {
    use empleados_dashboard::hooks::use_statistics::DataState;
    use empleados_dashboard::models::{
        employee::{Employee, EmployeePage},
        error::AppError,
        reports::{DayWorked, ProductionRecord, ReportKind, ReportQuery},
        stats::GeneralStats,
    };
    use empleados_dashboard::services::{
        api::{ApiConfig, JsonSource},
        employees::EmployeeLoader,
        reports::{ReportSlot, fetch_production_report, fetch_units_produced},
        statistics::{fetch_area_counts, fetch_general_statistics},
    };
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use futures::future::{self, abortable};
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::rc::Rc;

    const BASE: &str = "http://api";
    const EMPLOYEES: &str = "http://api/api/dsm44/empleados";
    const BULK: &str = "http://api/api/dsm44/empleados?limit=1000";

    /// Serves canned JSON bodies by exact URL and records every request.
    #[derive(Default)]
    struct ScriptedSource {
        responses: HashMap<String, Value>,
        failing: HashSet<String>,
        stalled: HashSet<String>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedSource {
        fn with(mut self, url: impl Into<String>, body: Value) -> Self {
            self.responses.insert(url.into(), body);
            self
        }

        fn failing(mut self, url: impl Into<String>) -> Self {
            self.failing.insert(url.into());
            self
        }

        /// Requests to this URL never complete.
        fn stalled(mut self, url: impl Into<String>) -> Self {
            self.stalled.insert(url.into());
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn call_count(&self, url: &str) -> usize {
            self.calls.borrow().iter().filter(|c| *c == url).count()
        }
    }

    impl JsonSource for ScriptedSource {
        async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
            self.calls.borrow_mut().push(url.to_string());

            if self.stalled.contains(url) {
                future::pending::<()>().await;
            }
            if self.failing.contains(url) {
                return Err(AppError::Api("Server error 500".to_string()));
            }
            let body = self
                .responses
                .get(url)
                .ok_or_else(|| AppError::NotFound(url.to_string()))?;
            serde_json::from_value(body.clone()).map_err(|e| AppError::Data(e.to_string()))
        }
    }

    fn config() -> ApiConfig {
        ApiConfig::builder().base_url(BASE).build()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn report_url(kind: ReportKind, employee_id: i64) -> String {
        config().report_url(kind, &ReportQuery::new(employee_id, day(), day()))
    }

    fn ids(employees: &[Employee]) -> Vec<i64> {
        employees.iter().map(|e| e.id_empleado).collect()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::Api("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::Data("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
    }

    // ===== Employee Loader Tests =====

    #[test]
    fn test_loader_accumulates_pages_in_order() {
        let page_two = format!("{EMPLOYEES}?page=2");
        let page_three = format!("{EMPLOYEES}?page=3");
        let source = ScriptedSource::default()
            .with(
                EMPLOYEES,
                json!({"data": [{"id_empleado": 1}, {"id_empleado": 2}], "next": page_two}),
            )
            .with(
                page_two.clone(),
                json!({"data": [{"id_empleado": 3}], "next": page_three}),
            )
            .with(page_three.clone(), json!({"data": [{"id_empleado": 4}]}));

        let mut loader = EmployeeLoader::new(config());
        assert_eq!(loader.next_page_url(), EMPLOYEES);

        block_on(loader.load_next(&source));
        assert_eq!(ids(loader.employees()), vec![1, 2]);
        assert_eq!(loader.next_page_url(), page_two);

        block_on(loader.load_next(&source));
        block_on(loader.load_next(&source));
        assert_eq!(ids(loader.employees()), vec![1, 2, 3, 4]);
        assert_eq!(source.calls(), vec![EMPLOYEES.to_string(), page_two, page_three.clone()]);

        // The last page has no cursor, so it is requested again
        assert_eq!(loader.next_page_url(), page_three);
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_loader_holds_cursor_without_next() {
        let source = ScriptedSource::default()
            .with(EMPLOYEES, json!({"data": [{"id_empleado": 1}], "next": null}));

        let mut loader = EmployeeLoader::new(config());
        block_on(loader.load_next(&source));
        block_on(loader.load_next(&source));

        assert_eq!(source.call_count(EMPLOYEES), 2);
        assert_eq!(loader.next_page_url(), EMPLOYEES);
        assert_eq!(loader.employees().len(), 2);
    }

    #[test]
    fn test_loader_rejects_concurrent_load() {
        let mut loader = EmployeeLoader::new(config());

        let request = loader.begin().expect("first load starts");
        assert!(loader.is_loading());
        assert!(loader.begin().is_none());

        loader.complete(request, Ok(EmployeePage::new(vec![Employee::new(1, "Ana", "OFICINA")], None)));
        assert!(!loader.is_loading());
        assert!(loader.begin().is_some());
    }

    #[test]
    fn test_loader_keeps_partial_results_on_failure() {
        let page_two = format!("{EMPLOYEES}?page=2");
        let source = ScriptedSource::default()
            .with(EMPLOYEES, json!({"data": [{"id_empleado": 1}], "next": page_two}))
            .failing(page_two.clone());

        let mut loader = EmployeeLoader::new(config());
        block_on(loader.load_next(&source));
        block_on(loader.load_next(&source));

        assert_eq!(ids(loader.employees()), vec![1]);
        assert_eq!(loader.next_page_url(), page_two);
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_loader_reset_on_address_change() {
        let source = ScriptedSource::default().with(
            EMPLOYEES,
            json!({"data": [{"id_empleado": 1}], "next": format!("{EMPLOYEES}?page=2")}),
        );

        let mut loader = EmployeeLoader::new(config());
        block_on(loader.load_next(&source));
        assert_eq!(loader.employees().len(), 1);

        let other = ApiConfig::parse("http://10.0.0.9:3000").unwrap();
        loader.reset(other.clone());

        assert!(loader.employees().is_empty());
        assert_eq!(loader.next_page_url(), other.employees_url());
        assert_eq!(loader.config(), &other);
    }

    #[test]
    fn test_loader_discards_page_from_previous_address() {
        let mut loader = EmployeeLoader::new(config());
        let stale = loader.begin().unwrap();

        loader.reset(ApiConfig::parse("http://10.0.0.9:3000").unwrap());
        let fresh = loader.begin().unwrap();

        let applied = loader.complete(
            stale,
            Ok(EmployeePage::new(vec![Employee::new(1, "Ana", "OFICINA")], None)),
        );
        assert!(!applied);
        assert!(loader.employees().is_empty());
        assert!(loader.is_loading());

        assert!(loader.complete(
            fresh,
            Ok(EmployeePage::new(vec![Employee::new(2, "Luis", "OFICINA")], None)),
        ));
        assert_eq!(ids(loader.employees()), vec![2]);
    }

    // ===== Report Fetcher Tests =====

    #[test]
    fn test_report_fetch_uses_kind_path() {
        let url = report_url(ReportKind::Production, 1);
        let source = ScriptedSource::default().with(
            url.clone(),
            json!([{"e_id_empleado": 1, "p_unidadesProducidas": 12}]),
        );

        let query = ReportQuery::new(1, day(), day());
        let records = block_on(fetch_production_report(&source, &config(), &query)).unwrap();

        assert_eq!(records, vec![ProductionRecord::new(1, 12.0)]);
        assert_eq!(source.calls(), vec![url]);
    }

    #[test]
    fn test_units_produced_fetch() {
        let url = report_url(ReportKind::UnitsProduced, 3);
        let source = ScriptedSource::default().with(
            url,
            json!({"total": [{"total_producido": 7}, {"total_producido": 8}]}),
        );

        let query = ReportQuery::new(3, day(), day());
        let units = block_on(fetch_units_produced(&source, &config(), &query)).unwrap();
        assert_eq!(units.item_count(), 2);
        assert_eq!(units.total_units(), 15.0);
    }

    #[test]
    fn test_failed_report_keeps_previous_data() {
        let url = report_url(ReportKind::Production, 1);
        let good = ScriptedSource::default()
            .with(url.clone(), json!([{"e_id_empleado": 1, "p_unidadesProducidas": 5}]));
        let bad = ScriptedSource::default().failing(url);
        let query = ReportQuery::new(1, day(), day());

        let mut slot = ReportSlot::new();
        let ticket = slot.begin();
        slot.complete(ticket, block_on(fetch_production_report(&good, &config(), &query)));

        let ticket = slot.begin();
        slot.complete(ticket, block_on(fetch_production_report(&bad, &config(), &query)));

        assert_eq!(slot.data(), Some(&vec![ProductionRecord::new(1, 5.0)]));
        assert!(slot.error().is_some());
        assert!(!slot.is_loading());
    }

    // ===== Statistics Aggregator Tests =====

    #[test]
    fn test_area_counts() {
        let source = ScriptedSource::default().with(
            BULK,
            json!({"data": [
                {"id_empleado": 1, "area": "PRODUCCION"},
                {"id_empleado": 2, "area": "OFICINA"},
                {"id_empleado": 3, "area": "PRODUCCION"},
                {"id_empleado": 4, "area": "INVENTARIO"}
            ]}),
        );

        let counts = block_on(fetch_area_counts(&source, &config())).unwrap();
        assert_eq!(counts.total_employees, 4);
        assert_eq!(counts.counts_by_area["PRODUCCION"], 2);
        assert_eq!(counts.counts_by_area["OFICINA"], 1);
        assert_eq!(counts.counts_by_area["INVENTARIO"], 1);
        assert_eq!(source.calls(), vec![BULK.to_string()]);
    }

    #[test]
    fn test_area_counts_failure() {
        let source = ScriptedSource::default().failing(BULK);
        let result = block_on(fetch_area_counts(&source, &config()));
        assert!(matches!(result, Err(AppError::Api(_))));
    }

    #[test]
    fn test_unmatched_production_counts_only_in_total() {
        let source = ScriptedSource::default()
            .with(
                BULK,
                json!({"data": [
                    {"id_empleado": 1, "area": "PRODUCCION"},
                    {"id_empleado": 2, "area": "OFICINA"}
                ]}),
            )
            .with(
                report_url(ReportKind::Production, 1),
                json!([{"e_id_empleado": 1, "p_unidadesProducidas": 50}]),
            )
            .with(
                report_url(ReportKind::Production, 2),
                json!([{"e_id_empleado": 99, "p_unidadesProducidas": 10}]),
            )
            .with(report_url(ReportKind::DaysWorked, 1), json!([]))
            .with(report_url(ReportKind::DaysWorked, 2), json!(null));

        let stats = block_on(fetch_general_statistics(&source, &config(), day(), day())).unwrap();

        assert_eq!(stats.area("PRODUCCION").unwrap().production, 50.0);
        assert_eq!(stats.area("OFICINA").unwrap().production, 0.0);
        assert_eq!(stats.total_production, 60.0);
        assert_eq!(stats.total_employees, 2);
        assert_eq!(stats.total_attendance, 0);
    }

    #[test]
    fn test_rows_without_employee_or_units_still_load() {
        let source = ScriptedSource::default()
            .with(
                BULK,
                json!({"data": [
                    {"id_empleado": 1, "area": "PRODUCCION"},
                    {"id_empleado": 2, "area": "OFICINA"}
                ]}),
            )
            .with(
                report_url(ReportKind::Production, 1),
                json!([
                    {"e_id_empleado": 1, "p_unidadesProducidas": 20},
                    {"e_id_empleado": null, "p_unidadesProducidas": 10}
                ]),
            )
            .with(
                report_url(ReportKind::Production, 2),
                json!([
                    {"e_id_empleado": 2, "p_unidadesProducidas": null},
                    {"e_id_empleado": 2, "p_unidadesProducidas": "7"}
                ]),
            )
            .with(
                report_url(ReportKind::DaysWorked, 1),
                json!([{"e_id_empleado": 1}, {"e_id_empleado": null}]),
            )
            .with(report_url(ReportKind::DaysWorked, 2), json!([]));

        let stats = block_on(fetch_general_statistics(&source, &config(), day(), day())).unwrap();

        assert_eq!(stats.area("PRODUCCION").unwrap().production, 20.0);
        assert_eq!(stats.area("OFICINA").unwrap().production, 7.0);
        assert_eq!(stats.total_production, 37.0);
        assert_eq!(stats.area("PRODUCCION").unwrap().attendance, 1);
        assert_eq!(stats.total_attendance, 2);
    }

    #[test]
    fn test_aborted_statistics_load_stops_and_writes_nothing() {
        let source = ScriptedSource::default()
            .with(
                BULK,
                json!({"data": [
                    {"id_empleado": 1, "area": "PRODUCCION"},
                    {"id_empleado": 2, "area": "OFICINA"}
                ]}),
            )
            .with(
                report_url(ReportKind::Production, 1),
                json!([{"e_id_empleado": 1, "p_unidadesProducidas": 5}]),
            )
            .stalled(report_url(ReportKind::Production, 2))
            .with(report_url(ReportKind::DaysWorked, 1), json!([]))
            .with(report_url(ReportKind::DaysWorked, 2), json!([]));

        let state = RefCell::new(DataState::<GeneralStats>::Loading);
        let binding = config();
        let (task, handle) = abortable(fetch_general_statistics(&source, &binding, day(), day()));
        let mut task = Box::pin(task);

        // One poll puts both production requests in flight
        let first = block_on(async { futures::poll!(task.as_mut()) });
        assert!(first.is_pending());
        assert_eq!(source.calls().len(), 3);

        handle.abort();
        let outcome = block_on(task);
        assert!(outcome.is_err());

        if let Some(next) = DataState::from_outcome(outcome) {
            *state.borrow_mut() = next;
        }
        assert!(state.borrow().is_loading());
        assert!(!source.calls().iter().any(|c| c.contains("/dias-trabajados?")));
    }

    #[test]
    fn test_attendance_counts_records() {
        let source = ScriptedSource::default()
            .with(
                BULK,
                json!({"data": [
                    {"id_empleado": 1, "area": "PRODUCCION"},
                    {"id_empleado": 2, "area": "PRODUCCION"},
                    {"id_empleado": 3, "area": "OFICINA"}
                ]}),
            )
            .with(report_url(ReportKind::Production, 1), json!([]))
            .with(report_url(ReportKind::Production, 2), json!([]))
            .with(report_url(ReportKind::Production, 3), json!([]))
            .with(
                report_url(ReportKind::DaysWorked, 1),
                // The same day twice still counts twice
                json!([
                    {"e_id_empleado": 1, "fecha": "2025-01-01"},
                    {"e_id_empleado": 1, "fecha": "2025-01-01"}
                ]),
            )
            .with(
                report_url(ReportKind::DaysWorked, 2),
                json!([{"e_id_empleado": 2}]),
            )
            .with(
                report_url(ReportKind::DaysWorked, 3),
                json!([{"e_id_empleado": 3}, {"e_id_empleado": 42}]),
            );

        let stats = block_on(fetch_general_statistics(&source, &config(), day(), day())).unwrap();

        let produccion = stats.area("PRODUCCION").unwrap();
        assert_eq!(produccion.employees, 2);
        assert_eq!(produccion.attendance, 3);
        assert_eq!(stats.area("OFICINA").unwrap().attendance, 1);
        assert_eq!(stats.total_attendance, 5);
        assert_eq!(stats.attendance_records.len(), 5);
    }

    #[test]
    fn test_general_statistics_fetches_every_employee() {
        let source = ScriptedSource::default()
            .with(
                BULK,
                json!({"data": [
                    {"id_empleado": 1, "area": "PRODUCCION"},
                    {"id_empleado": 2, "area": "OFICINA"}
                ]}),
            )
            .with(report_url(ReportKind::Production, 1), json!([]))
            .with(report_url(ReportKind::Production, 2), json!([]))
            .with(report_url(ReportKind::DaysWorked, 1), json!([]))
            .with(report_url(ReportKind::DaysWorked, 2), json!([]));

        block_on(fetch_general_statistics(&source, &config(), day(), day())).unwrap();

        let calls = source.calls();
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[0], BULK);
        // Every production fetch is issued before any days-worked fetch
        let first_days = calls
            .iter()
            .position(|c| c.contains("/dias-trabajados?"))
            .unwrap();
        assert!(calls[..first_days].iter().skip(1).all(|c| c.contains("/reporte-produccion?")));
    }

    #[test]
    fn test_general_statistics_aborts_on_any_failure() {
        let source = ScriptedSource::default()
            .with(
                BULK,
                json!({"data": [
                    {"id_empleado": 1, "area": "PRODUCCION"},
                    {"id_empleado": 2, "area": "OFICINA"}
                ]}),
            )
            .with(
                report_url(ReportKind::Production, 1),
                json!([{"e_id_empleado": 1, "p_unidadesProducidas": 5}]),
            )
            .failing(report_url(ReportKind::Production, 2));

        let result = block_on(fetch_general_statistics(&source, &config(), day(), day()));
        assert!(matches!(result, Err(AppError::Api(_))));

        // Days-worked is never requested once production failed
        assert!(!source.calls().iter().any(|c| c.contains("/dias-trabajados?")));

        let state: DataState<GeneralStats> = DataState::from_outcome(Ok(result)).unwrap();
        assert!(state.data().is_none());
        assert!(matches!(state, DataState::Error(_)));
    }

    #[test]
    fn test_general_statistics_rejects_malformed_payload() {
        let source = ScriptedSource::default()
            .with(BULK, json!({"data": [{"id_empleado": 1, "area": "PRODUCCION"}]}))
            .with(
                report_url(ReportKind::Production, 1),
                json!({"unexpected": "shape"}),
            );

        let result = block_on(fetch_general_statistics(&source, &config(), day(), day()));
        assert!(matches!(result, Err(AppError::Data(_))));
    }

    #[test]
    fn test_general_statistics_with_no_employees() {
        let source = ScriptedSource::default().with(BULK, json!({"data": null}));

        let stats = block_on(fetch_general_statistics(&source, &config(), day(), day())).unwrap();

        assert!(stats.stats_by_area.is_empty());
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.total_production, 0.0);
        assert_eq!(stats.total_attendance, 0);
        assert_eq!(stats.average_production(), 0.0);
        assert_eq!(source.calls(), vec![BULK.to_string()]);
    }

    #[test]
    fn test_area_buckets_match_employee_counts() {
        let employees: Vec<Employee> = (1..=9)
            .map(|id| {
                let area = match id % 3 {
                    0 => "PRODUCCION",
                    1 => "OFICINA",
                    _ => "INVENTARIO",
                };
                Employee::new(id, format!("Empleado {id}"), area)
            })
            .collect();
        let production: Vec<ProductionRecord> = (1..=9)
            .map(|id| ProductionRecord::new(id, id as f64))
            .collect();
        let attendance: Vec<DayWorked> = (1..=9).map(DayWorked::new).collect();

        let stats = GeneralStats::aggregate(employees.clone(), production, attendance);

        for (area, bucket) in &stats.stats_by_area {
            let expected = employees.iter().filter(|e| &e.area == area).count();
            assert_eq!(bucket.employees, expected);
            assert_eq!(bucket.attendance, expected);
        }
        assert_eq!(stats.area("PRODUCCION").unwrap().production, 3.0 + 6.0 + 9.0);
        assert_eq!(stats.total_production, 45.0);
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_data_extraction() {
        let stats = Rc::new(GeneralStats::default());
        let loaded = DataState::Loaded(stats.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &stats);

        let loading: DataState<GeneralStats> = DataState::Loading;
        assert!(loading.data().is_none());
        assert!(loading.is_loading());

        let error: DataState<GeneralStats> = DataState::Error("Test error".to_string());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_data_state_ignores_aborted_load() {
        let outcome: Result<Result<GeneralStats, AppError>, futures::future::Aborted> =
            Err(futures::future::Aborted);
        assert!(DataState::from_outcome(outcome).is_none());
    }
}
