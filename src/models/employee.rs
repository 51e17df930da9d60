use serde::{Deserialize, Serialize};

/// An employee entry as stored in the bundled data file, before it gets an id.
/// Any `id` key in the source is dropped on deserialization.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawEmployee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>, // only newer hires carry a code
    pub full_name: String,
    pub occupation: String,
    pub department: String,
    pub date_of_employment: String,
    #[serde(default)]
    pub termination_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub full_name: String,
    pub occupation: String,
    pub department: String,
    pub date_of_employment: String,
    pub termination_date: Option<String>,
}

impl Employee {
    pub fn from_raw(id: u64, raw: RawEmployee) -> Self {
        Employee {
            id,
            code: raw.code,
            full_name: raw.full_name,
            occupation: raw.occupation,
            department: raw.department,
            date_of_employment: raw.date_of_employment,
            termination_date: raw.termination_date,
        }
    }

    pub fn is_employed(&self) -> bool {
        self.termination_date.is_none()
    }
}
