use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{error::StoreError, schema::api::Quote, store::QuoteStore};

/// Keeps quotes in a map. Only used by the tests; the service itself always
/// runs against PostgreSQL.
#[derive(Clone, Debug, Default)]
pub struct MemoryQuoteStore {
    quotes: Arc<RwLock<HashMap<String, Quote>>>,
}

impl MemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.quotes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn find_by_mort_id(&self, mort_id: &str) -> Result<Option<Quote>, StoreError> {
        Ok(self.quotes.read().await.get(mort_id).cloned())
    }

    async fn create(&self, quote: &Quote) -> Result<Quote, StoreError> {
        let mut quotes = self.quotes.write().await;
        if quotes.contains_key(&quote.mort_id) {
            return Err(StoreError::DuplicateKey(quote.mort_id.clone()));
        }
        quotes.insert(quote.mort_id.clone(), quote.clone());
        Ok(quote.clone())
    }
}
