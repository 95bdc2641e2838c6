use std::sync::Arc;

use log::{log, Level};
use serde_json::Value;

use crate::{
    calculator,
    error::QuoteError,
    schema::{api::Quote, upstream::Mortgage},
    store::QuoteStore,
    upstream::{MortgageClient, ServiceCodeClient},
    utils::{non_empty, parse_value},
    worker::{spawn_worker, JobQueue, QuoteJob},
};

pub const RECEIVED_MESSAGE: &str =
    "Insurance quote received. MBR will be notified when it is completed.";

/// The part of quote creation that runs after the caller has been answered:
/// service codes, pricing, persistence and the registry notification.
pub struct QuotePipeline {
    store: Arc<dyn QuoteStore>,
    registry: MortgageClient,
    lookup: ServiceCodeClient,
}

impl QuotePipeline {
    pub fn new(
        store: Arc<dyn QuoteStore>,
        registry: MortgageClient,
        lookup: ServiceCodeClient,
    ) -> Self {
        Self {
            store,
            registry,
            lookup,
        }
    }

    pub async fn process(&self, mut mortgage: Mortgage) -> Result<Quote, QuoteError> {
        let service_codes = self.lookup.fetch_service_codes(&mortgage.house_id).await?;

        if self
            .store
            .find_by_mort_id(&mortgage.mortgage_id)
            .await?
            .is_some()
        {
            return Err(QuoteError::AlreadyQuoted(mortgage.mortgage_id));
        }

        let quote = calculator::calculate(&mortgage, &service_codes);
        let quote = self.store.create(&quote).await?;
        log!(Level::Debug, "Stored insurance quote for {}", quote.mort_id);

        mortgage.insurance_quote = Some(quote.clone().into());
        self.registry.notify(&mortgage).await?;
        Ok(quote)
    }
}

#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
    registry: MortgageClient,
    queue: JobQueue,
}

impl QuoteService {
    /// Wires the service and starts its background worker. Must be called
    /// from within a tokio runtime.
    pub fn start(
        store: Arc<dyn QuoteStore>,
        registry: MortgageClient,
        lookup: ServiceCodeClient,
    ) -> Self {
        let pipeline = QuotePipeline::new(store.clone(), registry.clone(), lookup);
        let (queue, _worker) = spawn_worker(Arc::new(pipeline));
        Self::new(store, registry, queue)
    }

    pub fn new(store: Arc<dyn QuoteStore>, registry: MortgageClient, queue: JobQueue) -> Self {
        Self {
            store,
            registry,
            queue,
        }
    }

    pub async fn get_quote(&self, mort_id: Option<&str>) -> Result<Quote, QuoteError> {
        let mort_id =
            non_empty(mort_id).ok_or_else(|| QuoteError::Validation("mortId is required".into()))?;

        self.store
            .find_by_mort_id(mort_id)
            .await?
            .ok_or_else(|| QuoteError::NotFound(format!("quote for mortgage {mort_id}")))
    }

    /// Validates the request, resolves the mortgage and queues the rest of
    /// the work. Returns as soon as the job is queued.
    pub async fn request_quote(
        &self,
        mort_id: Option<&str>,
        value: Option<&Value>,
    ) -> Result<(), QuoteError> {
        let mort_id =
            non_empty(mort_id).ok_or_else(|| QuoteError::Validation("mortId is required".into()))?;
        // Zero is a valid value here, unlike the legacy service which read it as missing.
        match value.and_then(parse_value) {
            None => return Err(QuoteError::Validation("value is required".into())),
            Some(v) if v < 0.0 => {
                return Err(QuoteError::Validation("value must not be negative".into()))
            }
            Some(_) => {}
        }

        let mortgage = self.registry.fetch_mortgage(mort_id).await?;
        self.queue.submit(QuoteJob { mortgage })
    }
}
