use std::collections::{BTreeMap, HashMap};

use super::employee::{Employee, EmployeeId};
use super::reports::{DayWorked, ProductionRecord};

/// Headcount per area, as shown on the configuration screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AreaCounts {
    pub employees: Vec<Employee>,
    pub counts_by_area: BTreeMap<String, usize>,
    pub total_employees: usize,
}

impl AreaCounts {
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        let mut counts_by_area = BTreeMap::new();
        for employee in &employees {
            *counts_by_area.entry(employee.area.clone()).or_insert(0) += 1;
        }

        Self {
            total_employees: employees.len(),
            counts_by_area,
            employees,
        }
    }

    /// `(area, headcount)` pairs for pie/bar rendering.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        self.counts_by_area
            .iter()
            .map(|(area, count)| (area.clone(), *count as f64))
            .unzip()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AreaStats {
    pub employees: usize,
    pub production: f64,
    pub attendance: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneralStats {
    pub employees: Vec<Employee>,
    pub production_records: Vec<ProductionRecord>,
    pub attendance_records: Vec<DayWorked>,
    pub stats_by_area: BTreeMap<String, AreaStats>,
    pub total_employees: usize,
    pub total_production: f64,
    pub total_attendance: usize,
}

impl GeneralStats {
    /// Joins production and days-worked rows onto the employee list by id.
    ///
    /// Rows whose employee is not in `employees` never reach an area bucket,
    /// but `total_production` still sums every production row and
    /// `total_attendance` counts every days-worked row. Attendance is a row
    /// count, not a count of distinct days.
    pub fn aggregate(
        employees: Vec<Employee>,
        production_records: Vec<ProductionRecord>,
        attendance_records: Vec<DayWorked>,
    ) -> Self {
        let mut stats_by_area: BTreeMap<String, AreaStats> = BTreeMap::new();
        for employee in &employees {
            stats_by_area
                .entry(employee.area.clone())
                .or_default()
                .employees += 1;
        }

        // First employee with a given id wins, as a linear search would.
        let mut area_of: HashMap<EmployeeId, &str> = HashMap::with_capacity(employees.len());
        for employee in &employees {
            area_of
                .entry(employee.id_empleado)
                .or_insert(employee.area.as_str());
        }

        for record in &production_records {
            if let Some(bucket) = record
                .e_id_empleado
                .and_then(|id| area_of.get(&id))
                .and_then(|area| stats_by_area.get_mut(*area))
            {
                bucket.production += record.units;
            }
        }

        for record in &attendance_records {
            if let Some(bucket) = record
                .e_id_empleado
                .and_then(|id| area_of.get(&id))
                .and_then(|area| stats_by_area.get_mut(*area))
            {
                bucket.attendance += 1;
            }
        }

        let total_production = production_records.iter().map(|r| r.units).sum();

        Self {
            total_employees: employees.len(),
            total_production,
            total_attendance: attendance_records.len(),
            stats_by_area,
            employees,
            production_records,
            attendance_records,
        }
    }

    pub fn area(&self, area: &str) -> Option<&AreaStats> {
        self.stats_by_area.get(area)
    }

    /// Units produced per employee across all areas, 0 with no employees.
    pub fn average_production(&self) -> f64 {
        if self.total_employees == 0 {
            0.0
        } else {
            self.total_production / self.total_employees as f64
        }
    }

    /// Area labels with their production and attendance series, in area order.
    pub fn area_series(&self) -> (Vec<String>, Vec<f64>, Vec<f64>) {
        let mut labels = Vec::with_capacity(self.stats_by_area.len());
        let mut production = Vec::with_capacity(self.stats_by_area.len());
        let mut attendance = Vec::with_capacity(self.stats_by_area.len());

        for (area, stats) in &self.stats_by_area {
            labels.push(area.clone());
            production.push(stats.production);
            attendance.push(stats.attendance as f64);
        }

        (labels, production, attendance)
    }
}
