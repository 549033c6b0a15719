//! Per-key serialization for read-modify-write sequences.
//!
//! Several operations read a row, compute a new value and write it back in separate
//! statements. `KeyLocks` hands out one async mutex per logical key so that two
//! concurrent sequences on the same key run one after the other, while sequences on
//! different keys proceed in parallel. Entries are removed once no guard or waiter
//! refers to them.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Logical key guarded by [`KeyLocks`].
///
/// Each variant scopes the key to one table so unrelated mutations for the same
/// member never wait on each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LockKey {
    /// A member's balance row (`user_balance`).
    Balance { server_id: u64, user_id: u64 },
    /// A member's warning counter (`user_warnings`).
    Warning { server_id: u64, user_id: u64 },
    /// One feature toggle of a server (`feature_settings`).
    Feature { server_id: u64, feature_name: String },
    /// A server registration row (`discord_servers`).
    Server { server_id: u64 },
}

/// Mutex of one key plus the number of guards and waiters registered on it.
#[derive(Default)]
struct LockEntry {
    mutex: Arc<AsyncMutex<()>>,
    users: usize,
}

type LockMap = HashMap<LockKey, LockEntry>;

/// Process-wide map from [`LockKey`] to its async mutex.
///
/// Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct KeyLocks {
    inner: Arc<Mutex<LockMap>>,
}

impl KeyLocks {
    /// Creates an empty lock map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until the caller holds the exclusive guard for `key`.
    ///
    /// The guard is released when the returned [`KeyGuard`] is dropped.
    ///
    /// # Arguments
    /// - `key` - Logical key to serialize on
    ///
    /// # Returns
    /// - `KeyGuard` - Exclusive guard for `key`
    pub async fn lock(&self, key: LockKey) -> KeyGuard {
        let mutex = {
            let mut map = self.map();
            let entry = map.entry(key.clone()).or_default();
            entry.users += 1;
            entry.mutex.clone()
        };

        // Registered before waiting so a cancelled wait still unregisters on drop.
        let mut key_guard = KeyGuard {
            key,
            locks: self.clone(),
            guard: None,
        };
        key_guard.guard = Some(mutex.lock_owned().await);

        key_guard
    }

    /// Number of keys currently locked or awaited.
    pub fn len(&self) -> usize {
        self.map().len()
    }

    /// Whether no key is currently locked or awaited.
    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    fn map(&self) -> std::sync::MutexGuard<'_, LockMap> {
        // The map holds no invariants a panicking holder could break.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn release(&self, key: &LockKey) {
        let mut map = self.map();
        let idle = match map.get_mut(key) {
            Some(entry) => {
                entry.users = entry.users.saturating_sub(1);
                entry.users == 0
            }
            None => false,
        };
        if idle {
            map.remove(key);
        }
    }
}

/// Exclusive guard for one [`LockKey`], obtained from [`KeyLocks::lock`].
///
/// While the lock is still being awaited `guard` is `None`; dropping it in that state
/// only unregisters the waiter.
pub struct KeyGuard {
    key: LockKey,
    locks: KeyLocks,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks.release(&self.key);
    }
}
