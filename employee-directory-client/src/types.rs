//! Employee service data types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::lenient;

// ============ Identifier ============

/// Opaque employee identifier as issued by the remote service.
///
/// The service sends ids as JSON numbers, but they are treated as text so a
/// search query can be used verbatim as an identifier. `1` and `"1"` decode
/// to the same id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EmployeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            U64(u64),
            I64(i64),
            String(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::U64(n) => Self(n.to_string()),
            RawId::I64(n) => Self(n.to_string()),
            RawId::String(s) => Self(s),
        })
    }
}

// ============ Record ============

/// A single employee as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_age", deserialize_with = "lenient::u32_from_any")]
    pub age: u32,
    #[serde(rename = "employee_salary", deserialize_with = "lenient::f64_from_any")]
    pub salary: f64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::non_empty_string"
    )]
    pub profile_image: Option<String>,
}

impl EmployeeRecord {
    /// Salary formatted for display, without a fractional part when it is whole.
    pub fn display_salary(&self) -> String {
        if self.salary.fract() == 0.0 {
            format!("{:.0}", self.salary)
        } else {
            format!("{:.2}", self.salary)
        }
    }
}

// ============ Wire envelope ============

/// Response wrapper used by every endpoint: `{ "status", "data", "message" }`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[allow(dead_code)]
    pub status: Option<String>,
    pub data: Option<T>,
    #[allow(dead_code)]
    pub message: Option<String>,
}

// ============ Resource descriptor ============

/// Target of a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// `GET /employees`
    AllEmployees,
    /// `GET /employee/{id}`
    EmployeeById(EmployeeId),
}

impl Resource {
    /// Request path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Self::AllEmployees => "/employees".to_string(),
            Self::EmployeeById(id) => format!("/employee/{}", urlencoding::encode(id.as_str())),
        }
    }

    /// Identifier carried into `NotFound` errors.
    pub fn not_found_id(&self) -> String {
        match self {
            Self::AllEmployees => self.path(),
            Self::EmployeeById(id) => id.to_string(),
        }
    }
}
