//! Keyed async locks serializing edge mutations per component.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::server::model::kind::ComponentKind;

/// Unheld entries are pruned once the table grows past this many keys.
const PRUNE_THRESHOLD: usize = 1024;

type LockKey = (ComponentKind, i32);

/// Lock table mapping `(kind, id)` to an async mutex.
///
/// Holding the guard for a key means no other attach, detach, update or delete of
/// that component is in progress. Different keys never contend. Clones share the
/// same table.
#[derive(Clone, Default)]
pub struct ComponentLocks {
    locks: Arc<Mutex<HashMap<LockKey, Arc<Mutex<()>>>>>,
}

impl ComponentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to a component.
    ///
    /// The table lock is only held while looking up the per-key mutex, never while
    /// waiting on it.
    pub async fn acquire(&self, kind: ComponentKind, id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;

            if locks.len() >= PRUNE_THRESHOLD {
                // Only the table holds a reference to unused entries.
                locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            }

            locks.entry((kind, id)).or_default().clone()
        };

        lock.lock_owned().await
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }
}
