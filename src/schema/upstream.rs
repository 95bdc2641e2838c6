use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::schema::api::InsuranceQuote;

/// A mortgage application as stored by the registry (MBR).
///
/// Only the fields this service reads are typed. Everything else lands in
/// `extra` so the record can be sent back unchanged apart from the quote.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Mortgage {
    #[serde(rename = "mortgageID", deserialize_with = "string_or_number")]
    pub mortgage_id: String,
    #[serde(rename = "houseID", deserialize_with = "string_or_number")]
    pub house_id: String,
    #[serde(
        rename = "insuranceQuote",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub insurance_quote: Option<InsuranceQuote>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Some registry deployments send numeric ids.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

/// Response of the service-code lookup (MUN).
#[derive(Deserialize, Debug)]
pub struct ServiceCodesBody {
    #[serde(default)]
    pub services: Option<Value>,
}

/// Opaque service codes for a house, only ever handed to the calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceCodes(pub Value);
