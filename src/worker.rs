use std::sync::Arc;

use log::{log, Level};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{error::QuoteError, schema::upstream::Mortgage, service::QuotePipeline};

/// Background work for one accepted quote request.
#[derive(Debug)]
pub struct QuoteJob {
    pub mortgage: Mortgage,
}

/// Sending half of the quote queue. Submitting hands the job off; nothing
/// about its outcome ever comes back to the submitter.
#[derive(Clone, Debug)]
pub struct JobQueue {
    tx: mpsc::UnboundedSender<QuoteJob>,
}

impl JobQueue {
    pub fn submit(&self, job: QuoteJob) -> Result<(), QuoteError> {
        self.tx.send(job).map_err(|_| QuoteError::QueueClosed)
    }
}

/// Starts the consumer of the quote queue on the current tokio runtime.
/// Every job gets its own task, so a stalled upstream call only holds up
/// the mortgage it belongs to. Jobs are never retried. The consumer stops
/// once every [`JobQueue`] clone is dropped.
pub fn spawn_worker(pipeline: Arc<QuotePipeline>) -> (JobQueue, JoinHandle<()>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(run(pipeline, rx));
    (JobQueue { tx }, handle)
}

async fn run(pipeline: Arc<QuotePipeline>, mut rx: mpsc::UnboundedReceiver<QuoteJob>) {
    while let Some(job) = rx.recv().await {
        tokio::spawn(process(pipeline.clone(), job));
    }
    log!(Level::Debug, "Quote queue closed, worker exiting");
}

async fn process(pipeline: Arc<QuotePipeline>, job: QuoteJob) {
    let mort_id = job.mortgage.mortgage_id.clone();
    match pipeline.process(job.mortgage).await {
        Ok(quote) => log!(
            Level::Info,
            "Insurance quote for {} created and sent to MBR (insured {}, deductible {})",
            mort_id,
            quote.insured_value,
            quote.deductible_value
        ),
        Err(e @ QuoteError::AlreadyQuoted(_)) => {
            log!(Level::Warn, "Skipping insurance quote: {e}")
        }
        Err(e) => log!(
            Level::Error,
            "Failed to create insurance quote for {mort_id}: {e}"
        ),
    }
}
