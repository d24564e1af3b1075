//! Doctor record types.
//!
//! The registry returns PascalCase JSON records. The proxy relays the first one untouched as a
//! [`DoctorRecord`]. Clients decode it into a [`DoctorDetail`]: a [`DoctorSummary`] with the four
//! table fields plus the fields the registry only sometimes includes. Decoding is lenient, so a
//! null or numeric value never makes a record unreadable.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A registry record exactly as the registry sent it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorRecord(Map<String, Value>);

impl DoctorRecord {
    /// Wrap `value` if it is a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Decode the known fields.
    pub fn to_detail(&self) -> serde_json::Result<DoctorDetail> {
        DoctorDetail::deserialize(Value::Object(self.0.clone()))
    }
}

/// Identity and standing of a registered doctor. Identity is the registration number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DoctorSummary {
    #[serde(default, deserialize_with = "string_or_number")]
    #[schema(example = "12345-A")]
    pub registration_no: String,
    #[serde(default, deserialize_with = "string_or_number")]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    #[schema(example = "John Doe")]
    pub father_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    #[schema(example = "Active")]
    pub status: String,
}

/// One qualification line on a doctor's registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Qualification {
    #[serde(default, deserialize_with = "string_or_number")]
    pub qualification: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub university: String,
    /// Some registry responses encode the year as a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub passing_year: String,
}

/// The known fields of a doctor record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DoctorDetail {
    #[serde(flatten)]
    pub summary: DoctorSummary,
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_type: Option<String>,
    /// Date the registration was issued, as formatted by the registry.
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub valid_upto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<Vec<Qualification>>,
}

impl DoctorDetail {
    pub fn summary(&self) -> &DoctorSummary {
        &self.summary
    }

    pub fn registration_no(&self) -> &str {
        &self.summary.registration_no
    }
}

impl From<DoctorSummary> for DoctorDetail {
    fn from(summary: DoctorSummary) -> Self {
        Self {
            summary,
            registration_type: None,
            registration_date: None,
            valid_upto: None,
            qualifications: None,
        }
    }
}

impl From<DoctorDetail> for DoctorSummary {
    fn from(detail: DoctorDetail) -> Self {
        detail.summary
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Flag(bool),
    Null(()),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Int(n) => Some(n.to_string()),
            Scalar::Float(n) => Some(n.to_string()),
            Scalar::Flag(b) => Some(b.to_string()),
            Scalar::Null(()) => None,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?
        .into_text()
        .unwrap_or_default())
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?.into_text())
}
