use async_trait::async_trait;

use crate::{error::StoreError, schema::api::Quote};

pub mod memory;
pub mod postgres;

pub use memory::MemoryQuoteStore;
pub use postgres::PgQuoteStore;

/// Persistence for quotes. At most one quote exists per mortgage id; there is
/// deliberately no way to update or delete one.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    async fn find_by_mort_id(&self, mort_id: &str) -> Result<Option<Quote>, StoreError>;

    /// Inserts `quote`, failing with [`StoreError::DuplicateKey`] when its
    /// `mort_id` is already taken.
    async fn create(&self, quote: &Quote) -> Result<Quote, StoreError>;
}
