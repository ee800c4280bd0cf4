//! Shared holder for the current catalog snapshot.
//!
//! Readers take an `Arc` snapshot and query it without holding any lock.
//! Reloading builds a complete new engine first and only then swaps it in,
//! so a failed reload leaves the current snapshot in place and in-flight
//! readers keep whatever snapshot they already hold.

use crate::catalog::index::CatalogQueryEngine;
use crate::error::CatalogError;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<CatalogQueryEngine>>,
    generation: AtomicU64,
}

impl CatalogHandle {
    pub fn new(engine: CatalogQueryEngine) -> Self {
        Self {
            current: RwLock::new(Arc::new(engine)),
            generation: AtomicU64::new(0),
        }
    }

    /// The catalog as of this call.
    pub fn snapshot(&self) -> Arc<CatalogQueryEngine> {
        // The lock only guards a pointer swap, so a poisoned lock still holds
        // a complete snapshot.
        let guard = self.current.read().unwrap_or_else(|err| err.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the current snapshot; returns the one it replaced.
    pub fn publish(&self, engine: CatalogQueryEngine) -> Arc<CatalogQueryEngine> {
        let next = Arc::new(engine);
        let previous = {
            let mut guard = self.current.write().unwrap_or_else(|err| err.into_inner());
            std::mem::replace(&mut *guard, next)
        };
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(generation, "published catalog snapshot");
        previous
    }

    /// Load `path` and publish it. On failure the current snapshot is kept.
    pub fn reload_from_path(&self, path: &Path) -> Result<Arc<CatalogQueryEngine>, CatalogError> {
        match CatalogQueryEngine::from_path(path) {
            Ok(engine) => {
                self.publish(engine);
                Ok(self.snapshot())
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "catalog reload rejected");
                Err(err)
            }
        }
    }

    /// Number of snapshots published since construction.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
