use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A stored insurance quote, keyed by mortgage id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub mort_id: String,
    pub deductible_value: f64,
    pub insured_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

/// The quote as embedded in a mortgage sent back to the registry. It carries
/// no `mortId` since the enclosing mortgage already identifies it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceQuote {
    pub deductible_value: f64,
    pub insured_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

impl From<Quote> for InsuranceQuote {
    fn from(quote: Quote) -> Self {
        Self {
            deductible_value: quote.deductible_value,
            insured_value: quote.insured_value,
            client_name: quote.client_name,
        }
    }
}

/// Body of `POST /v1/quote`. Both fields are optional at the type level so
/// the handler can answer missing input with the legacy status code.
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub mort_id: Option<String>,
    /// A number, or a string holding one (form bodies only carry strings).
    #[schema(value_type = Option<f64>)]
    pub value: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FetchParams {
    pub mort_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    pub build_date: String,
    pub revision: String,
    pub commit_date: String,
}
