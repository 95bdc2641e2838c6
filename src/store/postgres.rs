use async_trait::async_trait;
use log::{log, Level};
use sqlx::{query_as, Error, Pool, Postgres};

use crate::{
    error::StoreError,
    schema::{api::Quote, db::QuoteRow},
    store::QuoteStore,
};

#[derive(Clone)]
pub struct PgQuoteStore {
    db: Pool<Postgres>,
}

impl PgQuoteStore {
    pub fn new(db: Pool<Postgres>) -> Self {
        Self { db }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.db).await
    }
}

fn log_query<T>(query: Result<T, Error>, mort_id: &str) -> Result<T, StoreError> {
    match query {
        Ok(v) => Ok(v),
        Err(Error::Database(e)) if e.is_unique_violation() => {
            log!(Level::Debug, "Duplicate quote insert for {mort_id}");
            Err(StoreError::DuplicateKey(mort_id.to_owned()))
        }
        Err(e) => {
            log!(Level::Warn, "DB Query failed: {}", e);
            Err(StoreError::Database(e))
        }
    }
}

#[async_trait]
impl QuoteStore for PgQuoteStore {
    async fn find_by_mort_id(&self, mort_id: &str) -> Result<Option<Quote>, StoreError> {
        let row = log_query(
            query_as::<_, QuoteRow>(
                "SELECT mort_id, deductible_value, insured_value, client_name
                FROM quotes WHERE mort_id = $1",
            )
            .bind(mort_id)
            .fetch_optional(&self.db)
            .await,
            mort_id,
        )?;
        Ok(row.map(Quote::from))
    }

    async fn create(&self, quote: &Quote) -> Result<Quote, StoreError> {
        let row = log_query(
            query_as::<_, QuoteRow>(
                "INSERT INTO quotes(mort_id, deductible_value, insured_value, client_name)
                VALUES ($1, $2, $3, $4)
                RETURNING mort_id, deductible_value, insured_value, client_name",
            )
            .bind(&quote.mort_id)
            .bind(quote.deductible_value)
            .bind(quote.insured_value)
            .bind(&quote.client_name)
            .fetch_one(&self.db)
            .await,
            &quote.mort_id,
        )?;
        log!(Level::Trace, "created a new entry in quotes table");
        Ok(row.into())
    }
}
