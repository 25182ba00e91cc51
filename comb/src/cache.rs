//! Per-fixed-point table cache.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use curve::{Affine, CurveParams};
use num_bigint::BigUint;

use crate::errors::CombError;
use crate::table::PrecomputedCombTable;

/// Cache key: curve identity, base-point coordinates, window width.
#[derive(Clone, PartialEq, Eq, Hash)]
struct TableKey {
    curve: usize,
    coords: Option<(BigUint, BigUint)>,
    width: usize,
}

impl TableKey {
    fn new(point: &Affine, width: usize) -> Self {
        TableKey {
            curve: point.curve() as *const CurveParams as usize,
            coords: point
                .coordinates()
                .map(|(x, y)| (x.clone(), y.clone())),
            width,
        }
    }
}

type TableSlot = Arc<OnceLock<Result<Arc<PrecomputedCombTable>, CombError>>>;

/// Lazy, memoized store of precomputed comb tables, keyed by fixed point.
///
/// Concurrent first use of the same point builds the table exactly once:
/// callers share a per-key `OnceLock` slot, and `get_or_init` blocks
/// late arrivals until the first build finishes. Built tables are
/// read-only and shared via `Arc` without further locking.
///
/// The cache grows without bound; this is intended for a small, known set
/// of fixed points (typically one generator per curve).
pub struct CombTableCache {
    tables: Mutex<HashMap<TableKey, TableSlot>>,
    builds: AtomicUsize,
}

impl CombTableCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        CombTableCache {
            tables: Mutex::new(HashMap::new()),
            builds: AtomicUsize::new(0),
        }
    }

    /// Fetch the table for a fixed point, building it on first use.
    pub fn get_or_build(
        &self,
        point: &Affine,
        width: usize,
    ) -> Result<Arc<PrecomputedCombTable>, CombError> {
        let slot = {
            let mut tables = self.tables.lock().expect("table cache poisoned");
            tables
                .entry(TableKey::new(point, width))
                .or_default()
                .clone()
        };

        slot.get_or_init(|| {
            self.builds.fetch_add(1, Ordering::Relaxed);
            PrecomputedCombTable::build(point, width).map(Arc::new)
        })
        .clone()
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.tables.lock().expect("table cache poisoned").len()
    }

    /// Whether the cache holds no tables.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of table builds performed.
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

impl Default for CombTableCache {
    fn default() -> Self {
        Self::new()
    }
}
