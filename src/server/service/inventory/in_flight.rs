//! Per-account in-flight sync registry.
//!
//! Holds at most one pending sync per account. The first caller starts the sync as a spawned
//! task and every concurrent caller for the same account awaits a clone of the same shared
//! future. The entry is removed by a guard owned by the spawned task, so it is released when the
//! sync settles whether it succeeded, failed, or panicked, and a sync keeps running to completion
//! even if the caller that started it goes away.

use std::{
    collections::HashMap,
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};

use futures::{
    future::{BoxFuture, Shared},
    FutureExt,
};

use crate::server::{
    error::inventory::{InventoryError, SourceErrorKind},
    model::inventory::{AccountId, InventoryItem},
};

/// Result shared between the caller that started a sync and every caller that joined it
pub type SyncResult = Result<Vec<InventoryItem>, InventoryError>;

/// Cloneable handle to a pending sync
pub type SharedSync = Shared<BoxFuture<'static, SyncResult>>;

/// How a caller obtained its pending sync
pub enum Claim {
    /// No sync was pending, the caller's operation was started
    Started(SharedSync),
    /// Another caller's sync for the same account was already pending
    Joined(SharedSync),
}

impl Claim {
    /// Waits for the pending sync, however it was obtained
    pub async fn wait(self) -> SyncResult {
        match self {
            Self::Started(sync) | Self::Joined(sync) => sync.await,
        }
    }
}

struct InFlightEntry {
    id: u64,
    sync: SharedSync,
}

type Entries = Arc<Mutex<HashMap<AccountId, InFlightEntry>>>;

/// Registry of pending syncs keyed by account
#[derive(Clone, Default)]
pub struct InFlightRegistry {
    entries: Entries,
    next_id: Arc<AtomicU64>,
}

impl InFlightRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins the account's pending sync, or starts `operation` as the new pending sync.
    ///
    /// `operation` is only invoked when no sync is pending for the account. It is spawned onto
    /// the tokio runtime, so this must be called from within one.
    pub fn join_or_start<F, Fut>(&self, account_id: &AccountId, operation: F) -> Claim
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = SyncResult> + Send + 'static,
    {
        let mut entries = lock(&self.entries);

        if let Some(entry) = entries.get(account_id) {
            return Claim::Joined(entry.sync.clone());
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let guard = InFlightGuard {
            entries: Arc::clone(&self.entries),
            account_id: account_id.clone(),
            id,
        };

        let operation = operation();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            operation.await
        });

        let task_account_id = account_id.clone();
        let sync = async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(
                        "Inventory sync task for account {} did not complete: {}",
                        task_account_id,
                        e
                    );

                    Err(InventoryError::NoDataAvailable {
                        account_id: task_account_id.to_string(),
                        kind: SourceErrorKind::Transient,
                        message: format!("sync task did not complete: {}", e),
                    })
                }
            }
        }
        .boxed()
        .shared();

        entries.insert(
            account_id.clone(),
            InFlightEntry {
                id,
                sync: sync.clone(),
            },
        );

        Claim::Started(sync)
    }

    /// Whether a sync is currently pending for the account
    pub fn is_in_flight(&self, account_id: &AccountId) -> bool {
        lock(&self.entries).contains_key(account_id)
    }

    /// Number of accounts with a pending sync
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    /// Whether no sync is pending for any account
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Removes its registry entry on drop, unless a newer sync has replaced it
struct InFlightGuard {
    entries: Entries,
    account_id: AccountId,
    id: u64,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut entries = lock(&self.entries);

        if entries
            .get(&self.account_id)
            .is_some_and(|entry| entry.id == self.id)
        {
            entries.remove(&self.account_id);
        }
    }
}

// The map is left consistent by every critical section, so a poisoned lock is still usable
fn lock(
    entries: &Mutex<HashMap<AccountId, InFlightEntry>>,
) -> MutexGuard<'_, HashMap<AccountId, InFlightEntry>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}
