use sqlx::FromRow;

use crate::schema::api::Quote;

#[derive(FromRow, Debug)]
pub struct QuoteRow {
    pub mort_id: String,
    pub deductible_value: f64,
    pub insured_value: f64,
    pub client_name: Option<String>,
}

impl From<QuoteRow> for Quote {
    fn from(row: QuoteRow) -> Self {
        Self {
            mort_id: row.mort_id,
            deductible_value: row.deductible_value,
            insured_value: row.insured_value,
            client_name: row.client_name,
        }
    }
}
