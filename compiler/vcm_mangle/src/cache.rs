//! Per-callable decision cache.
//!
//! Decisions are deterministic functions of the graph, so memoizing them is
//! purely an optimization. Workers emitting different callables in parallel
//! may share one cache; two workers racing on the same callable both compute
//! it and the later insert wins, which is harmless because both computed the
//! same value.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use vcm_ir::CallableId;

use crate::ManglingDecision;

/// Thread-safe memo table keyed by callable.
#[derive(Default)]
pub struct DecisionCache {
    decisions: RwLock<FxHashMap<CallableId, ManglingDecision>>,
}

impl DecisionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A previously stored decision.
    pub fn get(&self, callable: CallableId) -> Option<ManglingDecision> {
        self.decisions.read().get(&callable).copied()
    }

    /// Return the stored decision for `callable`, computing and storing it
    /// first if absent.
    ///
    /// `compute` runs without any lock held.
    pub fn get_or_compute(
        &self,
        callable: CallableId,
        compute: impl FnOnce() -> ManglingDecision,
    ) -> ManglingDecision {
        if let Some(decision) = self.get(callable) {
            return decision;
        }
        let decision = compute();
        self.decisions.write().insert(callable, decision);
        decision
    }

    pub fn len(&self) -> usize {
        self.decisions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.read().is_empty()
    }

    /// Drop all stored decisions.
    pub fn clear(&self) {
        self.decisions.write().clear();
    }
}

impl std::fmt::Debug for DecisionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionCache")
            .field("len", &self.len())
            .finish()
    }
}

/// Clonable handle to one [`DecisionCache`] shared across worker threads.
#[derive(Clone, Default)]
pub struct SharedDecisionCache(Arc<DecisionCache>);

impl SharedDecisionCache {
    pub fn new() -> Self {
        SharedDecisionCache(Arc::new(DecisionCache::new()))
    }
}

impl std::fmt::Debug for SharedDecisionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedDecisionCache")
            .field("len", &self.0.len())
            .finish()
    }
}

impl std::ops::Deref for SharedDecisionCache {
    type Target = DecisionCache;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
