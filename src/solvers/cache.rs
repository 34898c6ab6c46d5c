use crate::aa::{FrameworkDigest, Semantics};
use crate::error::Result;
use crate::utils::ArgSet;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

type CacheKey = (FrameworkDigest, Semantics);
type CacheSlot = Arc<OnceCell<Arc<Vec<ArgSet>>>>;

/// A cache of computed extensions, shared between computations.
///
/// Entries are keyed by the [content digest](crate::aa::AAFramework::content_digest) of a framework and a semantics,
/// so that a modified framework never hits the entry of its previous version.
///
/// Each entry is computed at most once: concurrent requests for the same key wait for the first computation,
/// and the result is then published as an immutable value.
/// Computations ending with an error are not cached.
///
/// # Example
///
/// ```
/// # use rebuttal::aa::{AAFramework, Semantics};
/// # use rebuttal::solvers::{ExtensionCache, SemanticsEngine};
/// let cache = ExtensionCache::default();
/// let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b")]).unwrap();
/// let engine = SemanticsEngine::new(&af).with_cache(&cache);
/// engine.compute(Semantics::PR).unwrap();
/// engine.compute(Semantics::PR).unwrap();
/// assert_eq!(1, cache.len());
/// ```
#[derive(Default)]
pub struct ExtensionCache {
    slots: RwLock<HashMap<CacheKey, CacheSlot>>,
}

impl ExtensionCache {
    /// Returns the cached extensions for a framework digest and a semantics, if they have been computed.
    pub fn get(&self, digest: FrameworkDigest, semantics: Semantics) -> Option<Arc<Vec<ArgSet>>> {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(digest, semantics))
            .and_then(|slot| slot.get().cloned())
    }

    /// Returns the cached extensions, computing and publishing them if needed.
    ///
    /// If the computation fails, the error is returned and nothing is cached.
    pub fn get_or_try_compute<F>(
        &self,
        digest: FrameworkDigest,
        semantics: Semantics,
        compute: F,
    ) -> Result<Arc<Vec<ArgSet>>>
    where
        F: FnOnce() -> Result<Vec<ArgSet>>,
    {
        let slot = self.slot(digest, semantics);
        slot.get_or_try_init(|| compute().map(Arc::new)).cloned()
    }

    fn slot(&self, digest: FrameworkDigest, semantics: Semantics) -> CacheSlot {
        let key = (digest, semantics);
        if let Some(slot) = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(key).or_default())
    }

    /// Returns the number of computed entries.
    pub fn len(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Returns `true` iff no entry has been computed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all the entries.
    pub fn clear(&self) {
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
