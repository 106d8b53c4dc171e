//! Session-scoped vector space cache
//!
//! Holds at most one fitted [`VectorSpace`] together with the table snapshot
//! it was fitted from. Lookups with the same snapshot (pointer identity)
//! reuse the cached space; any other snapshot triggers a refit.
//!
//! # Concurrency
//!
//! - Fast path: read lock on the cached entry
//! - Slow path: the rebuild mutex serializes fits, so concurrent callers
//!   wait for the one fit in flight and then observe its result
//! - Fit errors are returned to the caller and never cached

use parking_lot::{Mutex, RwLock};
use quotesearch_core::{RecordTable, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::space::{FitParams, VectorSpace};

#[derive(Debug, Clone)]
struct CachedSpace {
    table: Arc<RecordTable>,
    space: Arc<VectorSpace>,
}

/// Lazily fitted vector space, keyed by table snapshot
#[derive(Debug)]
pub struct VectorSpaceCache {
    params: FitParams,
    slot: RwLock<Option<CachedSpace>>,
    rebuild: Mutex<()>,
    fits: AtomicUsize,
}

impl VectorSpaceCache {
    /// Empty cache that fits with `params`
    pub fn new(params: FitParams) -> Self {
        VectorSpaceCache {
            params,
            slot: RwLock::new(None),
            rebuild: Mutex::new(()),
            fits: AtomicUsize::new(0),
        }
    }

    /// Fit parameters
    pub fn params(&self) -> &FitParams {
        &self.params
    }

    /// Return the space fitted from `table`, fitting it if needed.
    pub fn get_or_fit(&self, table: &Arc<RecordTable>) -> Result<Arc<VectorSpace>> {
        if let Some(space) = self.lookup(table) {
            return Ok(space);
        }

        let _guard = self.rebuild.lock();
        // Double-check: another caller may have fitted while we waited
        if let Some(space) = self.lookup(table) {
            return Ok(space);
        }

        let space = Arc::new(VectorSpace::fit_table(table, &self.params)?);
        self.fits.fetch_add(1, Ordering::Relaxed);
        *self.slot.write() = Some(CachedSpace {
            table: Arc::clone(table),
            space: Arc::clone(&space),
        });
        Ok(space)
    }

    /// Drop the cached space.
    pub fn invalidate(&self) {
        let _guard = self.rebuild.lock();
        *self.slot.write() = None;
    }

    /// True if a space is cached (for any snapshot)
    pub fn is_fitted(&self) -> bool {
        self.slot.read().is_some()
    }

    /// True if the cached space was fitted from `table`
    pub fn is_fitted_for(&self, table: &Arc<RecordTable>) -> bool {
        self.lookup(table).is_some()
    }

    /// Number of successful fits so far
    pub fn fit_count(&self) -> usize {
        self.fits.load(Ordering::Relaxed)
    }

    fn lookup(&self, table: &Arc<RecordTable>) -> Option<Arc<VectorSpace>> {
        self.slot
            .read()
            .as_ref()
            .filter(|cached| Arc::ptr_eq(&cached.table, table))
            .map(|cached| Arc::clone(&cached.space))
    }
}

impl Default for VectorSpaceCache {
    fn default() -> Self {
        Self::new(FitParams::default())
    }
}
