use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::employee::{EmployeeId, optional_id};
use super::error::AppError;

/// The report endpoints hanging off the employee collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    AttendanceSummary,
    DailyAttendance,
    Payroll,
    DaysWorked,
    Production,
    HoursWorked,
    UnitsProduced,
}

impl ReportKind {
    /// Path segment appended to the employee collection URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::AttendanceSummary => "reporte-asistencia-empleado",
            Self::DailyAttendance => "asistencia-empleado",
            Self::Payroll => "nomina",
            Self::DaysWorked => "dias-trabajados",
            Self::Production => "reporte-produccion",
            Self::HoursWorked => "horas-trabajadas",
            Self::UnitsProduced => "unidades-producidas",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AttendanceSummary => "Reporte de asistencia",
            Self::DailyAttendance => "Asistencia por día",
            Self::Payroll => "Nómina",
            Self::DaysWorked => "Días trabajados",
            Self::Production => "Reporte de producción",
            Self::HoursWorked => "Horas trabajadas",
            Self::UnitsProduced => "Unidades producidas",
        }
    }

    pub fn all() -> &'static [ReportKind] {
        &[
            Self::AttendanceSummary,
            Self::DailyAttendance,
            Self::Payroll,
            Self::DaysWorked,
            Self::Production,
            Self::HoursWorked,
            Self::UnitsProduced,
        ]
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ReportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/');
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.path() == wanted)
            .ok_or_else(|| AppError::Config(format!("Unknown report kind: {s}")))
    }
}

/// Employee and date window every report endpoint is scoped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportQuery {
    pub employee_id: EmployeeId,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportQuery {
    pub fn new(employee_id: EmployeeId, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            employee_id,
            start,
            end,
        }
    }

    pub fn query_string(&self) -> String {
        format!(
            "id_empleado={}&fechaInicio={}&fechaFin={}",
            self.employee_id,
            format_date(self.start),
            format_date(self.end)
        )
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::Data(format!("Invalid date '{input}': {e}")))
}

// REPORT PAYLOADS
/// A report row whose shape the dashboard only reads loosely.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReportRecord {
    #[serde(default, deserialize_with = "optional_id")]
    pub e_id_empleado: Option<EmployeeId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ReportRecord {
    /// Reads a numeric field, accepting numbers serialized as strings.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.fields.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn text(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Field names in key order, for generic table rendering.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Null, missing or non-numeric unit counts add nothing.
fn lenient_units<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductionRecord {
    #[serde(default, deserialize_with = "optional_id")]
    pub e_id_empleado: Option<EmployeeId>,
    #[serde(
        rename = "p_unidadesProducidas",
        default,
        deserialize_with = "lenient_units"
    )]
    pub units: f64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProductionRecord {
    pub fn new(e_id_empleado: EmployeeId, units: f64) -> Self {
        Self {
            e_id_empleado: Some(e_id_empleado),
            units,
            fields: Map::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DayWorked {
    #[serde(default, deserialize_with = "optional_id")]
    pub e_id_empleado: Option<EmployeeId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DayWorked {
    pub fn new(e_id_empleado: EmployeeId) -> Self {
        Self {
            e_id_empleado: Some(e_id_empleado),
            fields: Map::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UnitsTotal {
    #[serde(default)]
    pub total_producido: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UnitsProduced {
    #[serde(default)]
    total: Option<Vec<UnitsTotal>>,
}

impl UnitsProduced {
    pub fn items(&self) -> &[UnitsTotal] {
        self.total.as_deref().unwrap_or_default()
    }

    pub fn item_count(&self) -> usize {
        self.items().len()
    }

    pub fn total_units(&self) -> f64 {
        self.items().iter().map(|item| item.total_producido).sum()
    }
}

/// List payloads arrive as `null` when the window has no rows.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Rows<T>(Option<Vec<T>>);

impl<T> Rows<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0.unwrap_or_default()
    }
}

// TYPED REPORTS
/// Binds a report endpoint to the payload it returns.
pub trait Report: 'static {
    const KIND: ReportKind;
    type Wire: DeserializeOwned;
    type Payload: Clone + PartialEq + 'static;

    fn from_wire(wire: Self::Wire) -> Self::Payload;
}

macro_rules! object_report {
    ($name:ident, $kind:expr, $payload:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name;

        impl Report for $name {
            const KIND: ReportKind = $kind;
            type Wire = $payload;
            type Payload = $payload;

            fn from_wire(wire: Self::Wire) -> Self::Payload {
                wire
            }
        }
    };
}

macro_rules! list_report {
    ($name:ident, $kind:expr, $row:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name;

        impl Report for $name {
            const KIND: ReportKind = $kind;
            type Wire = Rows<$row>;
            type Payload = Vec<$row>;

            fn from_wire(wire: Self::Wire) -> Self::Payload {
                wire.into_vec()
            }
        }
    };
}

object_report!(AttendanceSummary, ReportKind::AttendanceSummary, ReportRecord);
object_report!(DailyAttendance, ReportKind::DailyAttendance, ReportRecord);
object_report!(Payroll, ReportKind::Payroll, ReportRecord);
list_report!(DaysWorkedReport, ReportKind::DaysWorked, DayWorked);
list_report!(ProductionReport, ReportKind::Production, ProductionRecord);
list_report!(HoursWorked, ReportKind::HoursWorked, ReportRecord);
object_report!(UnitsProducedReport, ReportKind::UnitsProduced, UnitsProduced);
