//! Medical intake form payload.
//!
//! The form is a flat record submitted by the HTML intake page. It is validated on receipt,
//! defaulted (absent optional fields become `null`, absent `medications` becomes an empty list)
//! and forwarded verbatim to the clinical-procedure writer. Field names on the wire are
//! camelCase.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One prescribed medication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Medication {
    pub name: String,
    pub dose: String,
    pub frequency: String,
    pub route: String,
}

/// Intake form submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalForm {
    // practitioner
    pub doctor_name: String,
    pub specialty: String,
    pub institution: String,

    // patient
    pub patient_name: String,
    pub document_type: String,
    pub document_number: String,
    /// Integer, or a string holding one.
    #[serde(deserialize_with = "lenient_integer")]
    pub age: i64,
    pub sex: String,
    pub main_diagnosis: String,

    // procedure performed
    pub procedure_done: String,
    pub procedure_name: String,
    pub procedure_code: Option<String>,
    pub procedure_date: String,
    pub procedure_time: String,
    pub procedure_type: Option<String>,
    pub procedure_description: String,
    pub technique: Option<String>,
    pub anesthesia: Option<String>,

    // outcome
    pub patient_status: Option<String>,
    pub follow_up: Option<String>,

    /// Absent or `null` is treated as an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub medications: Vec<Medication>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Medication>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<Medication>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntegerOrText {
        Integer(i64),
        Text(String),
    }

    match IntegerOrText::deserialize(deserializer)? {
        IntegerOrText::Integer(n) => Ok(n),
        IntegerOrText::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("expected an integer, got \"{text}\""))
        }),
    }
}

impl MedicalForm {
    /// Converts the form into the JSON document handed to the clinical-procedure writer.
    ///
    /// Every field is present; unset optional fields are `null`.
    pub fn to_document(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
