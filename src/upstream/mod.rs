use isahc::{AsyncReadResponseExt, HttpClient};
use log::{log, Level};
use url::Url;

use crate::error::QuoteError;

pub mod lookup;
pub mod registry;

pub use lookup::ServiceCodeClient;
pub use registry::MortgageClient;

/// Joins `path` onto `base` and appends `params` as an encoded query string.
pub(crate) fn endpoint(
    service: &'static str,
    base: &str,
    path: &str,
    params: &[(&str, &str)],
) -> Result<Url, QuoteError> {
    let raw = format!("{}/{}", base.trim_end_matches('/'), path);
    let url = if params.is_empty() {
        Url::parse(&raw)
    } else {
        Url::parse_with_params(&raw, params)
    };
    url.map_err(|e| QuoteError::upstream(service, format!("bad url {raw}: {e}")))
}

/// Issues a GET and returns the raw body of a successful response.
pub(crate) async fn get_body(
    http: &HttpClient,
    service: &'static str,
    url: &Url,
) -> Result<Vec<u8>, QuoteError> {
    log!(Level::Debug, "GET {url}");
    let mut response = http
        .get_async(url.as_str())
        .await
        .map_err(|e| QuoteError::upstream(service, e))?;

    if !response.status().is_success() {
        return Err(QuoteError::upstream(
            service,
            format!("status is {}", response.status()),
        ));
    }

    response
        .bytes()
        .await
        .map_err(|e| QuoteError::upstream(service, e))
}
