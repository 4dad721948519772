//! Department category enum.

use serde::{Deserialize, Serialize};

/// Display grouping for departments.
///
/// The category carries no authorization weight; it only drives how
/// departments are grouped in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentCategory {
    /// A congregational (church) department.
    Church,
    /// An administrative (corporate) department.
    Corporate,
}

impl DepartmentCategory {
    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Church => "church",
            Self::Corporate => "corporate",
        }
    }
}

impl std::fmt::Display for DepartmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DepartmentCategory {
    type Err = vestry_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "church" => Ok(Self::Church),
            "corporate" => Ok(Self::Corporate),
            _ => Err(vestry_core::AppError::validation(format!(
                "Invalid department category: '{s}'"
            ))),
        }
    }
}
