use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::{DocKey, StoreClient, StoreError, StoreResult, Version, Write, ABSENT};
use crate::domain::{ItemId, MenuItem, Order, OrderId};

/// Bounds the optimistic retry loop of [`run_transaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_backoff: Duration::from_millis(10),
            max_backoff: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    /// Delay before retrying after the given failed attempt (1-based), doubling
    /// each time up to `max_backoff`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_backoff.saturating_mul(factor).min(self.max_backoff)
    }
}

#[derive(Debug, Error)]
pub enum TransactionError<E> {
    #[error("Transaction aborted: {0}")]
    Aborted(E),
    #[error("Transaction gave up after {attempts} conflicting attempts")]
    RetriesExhausted { attempts: u32 },
    #[error(transparent)]
    Store(StoreError),
}

/// One attempt at an atomic read-modify-write.
///
/// Reads go straight to the store and remember the version they saw; writes are
/// only staged. The commit succeeds only if none of the documents read have
/// changed since.
pub struct Transaction {
    store: StoreClient,
    attempt: u32,
    reads: Vec<(DocKey, Version)>,
    writes: Vec<Write>,
}

impl Transaction {
    fn new(store: StoreClient, attempt: u32) -> Self {
        Self {
            store,
            attempt,
            reads: Vec::new(),
            writes: Vec::new(),
        }
    }

    /// 1-based attempt number within the surrounding retry loop.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub async fn get_item(&mut self, id: &ItemId) -> StoreResult<Option<MenuItem>> {
        let doc = self.store.get_item(id.clone()).await?;
        self.record(DocKey::Item(id.clone()), doc.as_ref().map_or(ABSENT, |d| d.version));
        Ok(doc.map(|d| d.value))
    }

    pub async fn get_order(&mut self, id: &OrderId) -> StoreResult<Option<Order>> {
        let doc = self.store.get_order(id.clone()).await?;
        self.record(DocKey::Order(id.clone()), doc.as_ref().map_or(ABSENT, |d| d.version));
        Ok(doc.map(|d| d.value))
    }

    pub fn update_item(&mut self, item: MenuItem) {
        self.writes.push(Write::PutItem(item));
    }

    pub fn create_order(&mut self, order: Order) {
        self.writes.push(Write::PutOrder(order));
    }

    // The first version seen is the one validated at commit.
    fn record(&mut self, key: DocKey, version: Version) {
        if !self.reads.iter().any(|(read, _)| *read == key) {
            self.reads.push((key, version));
        }
    }

    async fn commit(self) -> StoreResult<()> {
        if self.writes.is_empty() {
            return Ok(());
        }
        self.store.commit(self.reads, self.writes).await
    }
}

/// Runs `body` as an optimistic transaction, rerunning it from scratch whenever
/// the commit hits a concurrent modification.
///
/// `body` receives a fresh [`Transaction`] per attempt and hands it back with its
/// result. An `Err` from `body` aborts without committing anything. Store
/// errors other than conflicts are returned immediately.
#[instrument(name = "transaction", skip_all, fields(max_attempts = policy.max_attempts))]
pub async fn run_transaction<T, E, F, Fut>(
    store: &StoreClient,
    policy: &RetryPolicy,
    mut body: F,
) -> Result<T, TransactionError<E>>
where
    F: FnMut(Transaction) -> Fut,
    Fut: Future<Output = Result<(Transaction, T), E>>,
{
    let max_attempts = policy.max_attempts.max(1);

    for attempt in 1..=max_attempts {
        let tx = Transaction::new(store.clone(), attempt);
        let (tx, value) = body(tx).await.map_err(TransactionError::Aborted)?;

        match tx.commit().await {
            Ok(()) => {
                debug!(attempt, "Transaction committed");
                return Ok(value);
            }
            Err(e) if e.is_conflict() => {
                warn!(attempt, error = %e, "Transaction conflicted");
                if attempt < max_attempts {
                    tokio::time::sleep(policy.backoff(attempt)).await;
                }
            }
            Err(e) => return Err(TransactionError::Store(e)),
        }
    }

    Err(TransactionError::RetriesExhausted {
        attempts: max_attempts,
    })
}
