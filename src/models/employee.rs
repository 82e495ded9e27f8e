use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Value};

pub type EmployeeId = i64;

/// Reads an id sent either as a number or as a numeric string.
fn id_from_value(value: &Value) -> Option<EmployeeId> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EmployeeId, D::Error> {
    let value = Value::deserialize(deserializer)?;
    id_from_value(&value).ok_or_else(|| D::Error::custom(format!("invalid employee id: {value}")))
}

/// Foreign keys on report rows. Anything that is not an id reads as `None`
/// and joins no employee.
pub(crate) fn optional_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<EmployeeId>, D::Error> {
    Ok(id_from_value(&Value::deserialize(deserializer)?))
}

/// An employee as returned by the collection endpoint.
///
/// Only the fields the dashboard joins or groups on are typed; the rest of the
/// profile is kept as-is so schema drift on the server never breaks parsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(deserialize_with = "lenient_id")]
    pub id_empleado: EmployeeId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub area: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Employee {
    pub fn new(id_empleado: EmployeeId, nombre: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            id_empleado,
            nombre: nombre.into(),
            area: area.into(),
            profile: Map::new(),
        }
    }

    /// Looks up a loosely-typed profile field and renders it as text.
    pub fn profile_text(&self, field: &str) -> Option<String> {
        match self.profile.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// One page of the paginated employee collection.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EmployeePage {
    #[serde(default)]
    data: Option<Vec<Employee>>,
    #[serde(default)]
    pub next: Option<String>,
}

impl EmployeePage {
    pub fn new(data: Vec<Employee>, next: Option<String>) -> Self {
        Self {
            data: Some(data),
            next,
        }
    }

    /// Employees on this page; a `null` data field reads as an empty page.
    pub fn into_employees(self) -> Vec<Employee> {
        self.data.unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
