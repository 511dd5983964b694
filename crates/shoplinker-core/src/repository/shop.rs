//! Shop store trait definition.

use shoplinker_types::error::StoreError;
use shoplinker_types::shop::Shop;

/// Persistence port for the whole shop collection.
///
/// The collection is always read and written as one unit: there are no
/// partial loads and no incremental writes. Implementations live in
/// shoplinker-infra (e.g., `JsonShopStore`). Calls are synchronous and
/// block the caller until the file operation completes.
pub trait ShopStore: Send + Sync {
    /// Load the stored collection.
    ///
    /// A store that has never been written returns an empty collection,
    /// not an error.
    fn load(&self) -> Result<Vec<Shop>, StoreError>;

    /// Replace the stored collection with `shops`.
    fn save(&self, shops: &[Shop]) -> Result<(), StoreError>;
}

/// Load the collection, degrading to an empty one on failure.
///
/// Used at startup, where a broken shop file must not keep the host from
/// coming up. The error is logged; the caller only sees the empty list.
pub fn load_or_empty<S: ShopStore>(store: &S) -> Vec<Shop> {
    match store.load() {
        Ok(shops) => shops,
        Err(e) => {
            tracing::error!(error = %e, "failed to load shops, starting with an empty registry");
            Vec::new()
        }
    }
}
