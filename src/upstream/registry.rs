use isahc::{HttpClient, Request};
use log::{log, Level};

use crate::{
    error::QuoteError,
    schema::upstream::Mortgage,
    upstream::{endpoint, get_body},
};

const SERVICE: &str = "mortgage registry";

/// Client for the mortgage broker registry (MBR).
#[derive(Clone)]
pub struct MortgageClient {
    http: HttpClient,
    base_url: String,
}

impl MortgageClient {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Looks up the single mortgage application with `mortgageID == mort_id`.
    pub async fn fetch_mortgage(&self, mort_id: &str) -> Result<Mortgage, QuoteError> {
        let url = endpoint(
            SERVICE,
            &self.base_url,
            "MortgageApplications",
            &[("filter[where][mortgageID]", mort_id)],
        )?;
        let body = get_body(&self.http, SERVICE, &url).await?;

        let found: Option<Vec<Mortgage>> =
            serde_json::from_slice(&body).map_err(|e| QuoteError::upstream(SERVICE, e))?;
        match found {
            Some(mut mortgages) if mortgages.len() == 1 => Ok(mortgages.remove(0)),
            Some(mortgages) => {
                log!(
                    Level::Debug,
                    "Registry returned {} mortgages for {mort_id}",
                    mortgages.len()
                );
                Err(QuoteError::NotFound(format!("mortgage {mort_id}")))
            }
            None => Err(QuoteError::NotFound(format!("mortgage {mort_id}"))),
        }
    }

    /// Sends the mortgage, quote attached, back to the registry. Only a
    /// transport failure is reported; the registry's answer is not read.
    pub async fn notify(&self, mortgage: &Mortgage) -> Result<(), QuoteError> {
        let url = endpoint(SERVICE, &self.base_url, "MortgageApplications", &[])?;
        let body = serde_json::to_vec(mortgage).map_err(|e| QuoteError::upstream(SERVICE, e))?;
        let request = Request::put(url.as_str())
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| QuoteError::upstream(SERVICE, e))?;

        log!(Level::Debug, "PUT {url}");
        self.http
            .send_async(request)
            .await
            .map_err(|e| QuoteError::upstream(SERVICE, e))?;
        Ok(())
    }
}
