use serde::{Deserialize, Serialize};
use std::fmt;

/// 搜尋結果中的一位醫師
///
/// `name`、`specialization`、`email` 為必填；其餘欄位由搜尋 API 額外提供，可缺省或為 `null`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub name: String,
    pub specialization: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<ConsultationFee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl DoctorRecord {
    pub fn new(
        name: impl Into<String>,
        specialization: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            specialization: specialization.into(),
            email: email.into(),
            id: None,
            phone: None,
            qualification: None,
            experience_years: None,
            clinic_name: None,
            city: None,
            consultation_fee: None,
            profile_image: None,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Decimal fees arrive as strings (`"500.00"`) from some backends and as numbers from others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConsultationFee {
    Text(String),
    Amount(f64),
}

impl fmt::Display for ConsultationFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationFee::Text(text) => f.write_str(text),
            ConsultationFee::Amount(amount) => write!(f, "{:.2}", amount),
        }
    }
}

/// How the query field value is placed into the request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    /// Spliced into the URL as typed; `&` and `#` keep their URL meaning.
    Raw,
    /// Percent-encoded as a single query component.
    #[default]
    Encoded,
}

pub const DEFAULT_SEARCH_PATH: &str = "/api/search-doctors/";
pub const DEFAULT_QUERY_PARAMETER: &str = "problem";
pub const DEFAULT_INPUT_ID: &str = "problem";
pub const DEFAULT_CONTAINER_ID: &str = "doctor-list";

/// Identifiers of the page elements the controller reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIds {
    pub input_id: String,
    pub container_id: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            input_id: DEFAULT_INPUT_ID.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Awaiting,
}
