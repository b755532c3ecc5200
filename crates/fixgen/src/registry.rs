// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Implementation discovery for abstract types.
//!
//! Discovery itself is pluggable through [`ImplementationFinder`]; the
//! default [`SubtypeScan`] walks the catalog. Results are memoized in an
//! [`ImplementationCache`] shared by every generator using the catalog.

use crate::types::{TypeCatalog, TypeDescriptor};
use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Resolved candidate list for one abstract type.
pub type Implementations = Arc<[Arc<TypeDescriptor>]>;

/// Discovery mechanism returning the concrete, eligible subtypes of an
/// abstract type.
///
/// Must be idempotent: the result is cached for the catalog's lifetime.
pub trait ImplementationFinder: Send + Sync {
    fn find_implementations(
        &self,
        catalog: &TypeCatalog,
        abstract_type: &TypeDescriptor,
    ) -> Vec<Arc<TypeDescriptor>>;
}

/// Scans every registered composite for concrete, eligible subtypes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubtypeScan;

impl ImplementationFinder for SubtypeScan {
    fn find_implementations(
        &self,
        catalog: &TypeCatalog,
        abstract_type: &TypeDescriptor,
    ) -> Vec<Arc<TypeDescriptor>> {
        catalog
            .composites()
            .filter(|candidate| is_instantiable(candidate))
            .filter(|candidate| catalog.is_subtype_of(candidate, &abstract_type.name))
            .cloned()
            .collect()
    }
}

fn is_instantiable(descriptor: &TypeDescriptor) -> bool {
    descriptor
        .composite()
        .is_some_and(|c| !c.is_abstract && c.eligible)
}

/// Cache hit/miss statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Concurrent populate-once cache of implementation lists.
///
/// The first caller for a type computes and publishes the list while
/// concurrent callers for the same type wait on the shard lock; a published
/// entry is never replaced.
#[derive(Debug, Default)]
pub struct ImplementationCache {
    entries: DashMap<String, Implementations>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ImplementationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached list for `key`, computing it with `build` on first use.
    pub fn get_or_insert_with<F>(&self, key: &str, build: F) -> Implementations
    where
        F: FnOnce() -> Vec<Arc<TypeDescriptor>>,
    {
        if let Some(hit) = self.entries.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(hit.value());
        }

        let entry = self.entries.entry(key.to_string()).or_insert_with(|| {
            self.misses.fetch_add(1, Ordering::Relaxed);
            build().into()
        });
        Arc::clone(entry.value())
    }

    /// Cached list for `key`, if any.
    pub fn get(&self, key: &str) -> Option<Implementations> {
        self.entries.get(key).map(|e| Arc::clone(e.value()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Drop every entry. Only reachable through `&mut TypeCatalog`.
    pub(crate) fn clear(&self) {
        self.entries.clear();
    }
}

/// Finder plus cache, owned by a [`TypeCatalog`].
pub(crate) struct ImplementationRegistry {
    finder: Box<dyn ImplementationFinder>,
    cache: ImplementationCache,
}

impl ImplementationRegistry {
    pub(crate) fn new(finder: Box<dyn ImplementationFinder>) -> Self {
        Self {
            finder,
            cache: ImplementationCache::new(),
        }
    }

    /// Declared implementations win over discovery when the marker lists any.
    pub(crate) fn lookup(
        &self,
        catalog: &TypeCatalog,
        abstract_type: &TypeDescriptor,
    ) -> Implementations {
        self.cache.get_or_insert_with(&abstract_type.name, || {
            let declares = abstract_type
                .composite()
                .is_some_and(|c| !c.permitted.is_empty());
            let found: Vec<_> = if declares {
                catalog
                    .declared_implementations(abstract_type)
                    .into_iter()
                    .filter(|d| is_instantiable(d))
                    .collect()
            } else {
                self.finder.find_implementations(catalog, abstract_type)
            };
            log::debug!(
                "[registry] {} -> [{}]",
                abstract_type.name,
                found
                    .iter()
                    .map(|d| d.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            found
        })
    }

    pub(crate) fn invalidate(&self) {
        self.cache.clear();
    }

    pub(crate) fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl fmt::Debug for ImplementationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationRegistry")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
