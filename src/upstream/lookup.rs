use isahc::HttpClient;

use crate::{
    error::QuoteError,
    schema::upstream::{ServiceCodes, ServiceCodesBody},
    upstream::{endpoint, get_body},
};

const SERVICE: &str = "service-code lookup";

/// Client for the municipal service-code lookup (MUN).
#[derive(Clone)]
pub struct ServiceCodeClient {
    http: HttpClient,
    base_url: String,
}

impl ServiceCodeClient {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_service_codes(&self, house_id: &str) -> Result<ServiceCodes, QuoteError> {
        let url = endpoint(
            SERVICE,
            &self.base_url,
            "service-codes",
            &[("mlsId", house_id)],
        )?;
        let body = get_body(&self.http, SERVICE, &url).await?;
        let not_found = || QuoteError::NotFound(format!("service codes for house {house_id}"));

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(not_found());
        }
        let parsed: Option<ServiceCodesBody> =
            serde_json::from_slice(&body).map_err(|e| QuoteError::upstream(SERVICE, e))?;

        match parsed.and_then(|b| b.services) {
            Some(serde_json::Value::Null) | None => Err(not_found()),
            Some(services) => Ok(ServiceCodes(services)),
        }
    }
}
