//! In-memory shop registry.
//!
//! The registry owns the authoritative shop collection, enforces the
//! case-insensitive name uniqueness invariant, and flushes the full
//! collection through its [`ShopStore`] after every mutation.
//!
//! Lookups hand out copies. Changes to an existing shop go through
//! [`ShopRegistry::update`], which validates, applies, and flushes under a
//! single lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use shoplinker_types::error::{ShopError, StoreError};
use shoplinker_types::shop::{Shop, ShopUpdate};

use crate::repository::shop::ShopStore;

/// The in-memory owner of the shop collection.
///
/// Every operation, including the flush it triggers, runs while holding the
/// collection lock, so concurrent callers observe the read-modify-flush
/// sequence as one step.
pub struct ShopRegistry<S: ShopStore> {
    shops: Mutex<Vec<Shop>>,
    store: Option<S>,
}

impl<S: ShopStore> ShopRegistry<S> {
    /// Create a registry over an initial collection (typically the result
    /// of [`ShopStore::load`]) that flushes through `store`.
    pub fn new(store: S, shops: Vec<Shop>) -> Self {
        tracing::debug!(count = shops.len(), "shop registry initialized");
        Self {
            shops: Mutex::new(shops),
            store: Some(store),
        }
    }

    /// Create a registry with no store attached.
    ///
    /// Mutations still apply in memory; every flush is skipped with a
    /// warning.
    pub fn detached(shops: Vec<Shop>) -> Self {
        Self {
            shops: Mutex::new(shops),
            store: None,
        }
    }

    // Poisoning is recovered: the collection is never left half-modified
    // across a panic point.
    fn lock(&self) -> MutexGuard<'_, Vec<Shop>> {
        self.shops.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, shops: &[Shop]) -> Result<(), StoreError> {
        match &self.store {
            Some(store) => store.save(shops),
            None => Err(StoreError::Unavailable),
        }
    }

    /// Flush after a mutation. The in-memory change stands regardless of
    /// the outcome.
    fn flush_or_log(&self, shops: &[Shop]) {
        match self.persist(shops) {
            Ok(()) => {}
            Err(StoreError::Unavailable) => {
                tracing::warn!("shop store is not attached, unable to save shops");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save shops, changes kept in memory only");
            }
        }
    }

    /// Add a new shop.
    ///
    /// Fails with [`ShopError::NameTaken`] and leaves the collection
    /// untouched if a shop with the same name (ignoring case) exists.
    pub fn add(&self, shop: Shop) -> Result<(), ShopError> {
        let mut shops = self.lock();
        if shops.iter().any(|s| s.matches_name(&shop.name)) {
            return Err(ShopError::NameTaken(shop.name));
        }
        tracing::info!(name = %shop.name, owner = %shop.owner(), "adding shop");
        shops.push(shop);
        self.flush_or_log(&shops);
        Ok(())
    }

    /// Remove the first shop whose name matches, ignoring case, and return it.
    ///
    /// Nothing is flushed when no shop matches.
    pub fn remove_by_name(&self, name: &str) -> Result<Shop, ShopError> {
        self.remove_if(name, |_| Ok(()))
    }

    /// Like [`remove_by_name`](Self::remove_by_name), but `guard` inspects the
    /// matched shop under the same lock and can veto the removal.
    pub fn remove_if<F>(&self, name: &str, guard: F) -> Result<Shop, ShopError>
    where
        F: FnOnce(&Shop) -> Result<(), ShopError>,
    {
        let mut shops = self.lock();
        let index = shops
            .iter()
            .position(|s| s.matches_name(name))
            .ok_or_else(|| ShopError::NotFound(name.to_string()))?;
        guard(&shops[index])?;
        let removed = shops.remove(index);
        tracing::info!(name = %removed.name, "removed shop");
        self.flush_or_log(&shops);
        Ok(removed)
    }

    /// Look up a shop by name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<Shop> {
        self.lock().iter().find(|s| s.matches_name(name)).cloned()
    }

    /// All shops in insertion order.
    pub fn list_all(&self) -> Vec<Shop> {
        self.lock().clone()
    }

    /// Apply `update` to the shop called `name` and flush, in one step.
    ///
    /// A rename may change the casing of the shop's own name but must not
    /// collide with any other shop. An empty update returns the shop as-is
    /// without flushing.
    pub fn update(&self, name: &str, update: ShopUpdate) -> Result<Shop, ShopError> {
        self.update_if(name, update, |_| Ok(()))
    }

    /// [`update`](Self::update) with a `guard` that sees the current shop
    /// under the lock before anything is applied.
    pub fn update_if<F>(&self, name: &str, update: ShopUpdate, guard: F) -> Result<Shop, ShopError>
    where
        F: FnOnce(&Shop) -> Result<(), ShopError>,
    {
        let mut shops = self.lock();
        let index = shops
            .iter()
            .position(|s| s.matches_name(name))
            .ok_or_else(|| ShopError::NotFound(name.to_string()))?;
        guard(&shops[index])?;

        if update.is_empty() {
            return Ok(shops[index].clone());
        }

        if let Some(new_name) = &update.name {
            let taken = shops
                .iter()
                .enumerate()
                .any(|(i, s)| i != index && s.matches_name(new_name));
            if taken {
                return Err(ShopError::NameTaken(new_name.clone()));
            }
        }

        shops[index].apply(update);
        let updated = shops[index].clone();
        tracing::info!(name = %name, now = %updated.name, "updated shop");
        self.flush_or_log(&shops);
        Ok(updated)
    }

    /// Flush the collection unconditionally.
    ///
    /// Kept for hosts that change shops outside [`update`](Self::update) and
    /// only need the current state written. Failures are logged, not returned.
    pub fn notify_updated(&self) {
        let shops = self.lock();
        self.flush_or_log(&shops);
    }

    /// Write the full collection to the store and report the outcome.
    pub fn flush(&self) -> Result<(), StoreError> {
        let shops = self.lock();
        self.persist(&shops)?;
        tracing::debug!(count = shops.len(), "flushed shops");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
