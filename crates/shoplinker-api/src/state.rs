//! Application state wiring the registry, store, and services together.
//!
//! AppState is constructed once at startup and passed by reference to every
//! command handler. The service is generic over the store trait, but
//! AppState pins it to the concrete JSON file store.

use std::path::PathBuf;

use anyhow::Context;

use shoplinker_core::registry::ShopRegistry;
use shoplinker_core::repository::shop::load_or_empty;
use shoplinker_core::service::access::Actor;
use shoplinker_core::service::shop::ShopService;
use shoplinker_infra::config::{load_config, resolve_shops_path};
use shoplinker_infra::filesystem::{load_or_create_identity, resolve_data_dir};
use shoplinker_infra::json_store::JsonShopStore;
use shoplinker_types::config::ShopLinkerConfig;
use shoplinker_types::shop::OwnerId;

/// Concrete type alias for the service generic pinned to the infra store.
pub type ConcreteShopService = ShopService<JsonShopStore>;

/// Shared application state.
pub struct AppState {
    pub shop_service: ConcreteShopService,
    pub config: ShopLinkerConfig,
    pub data_dir: PathBuf,
    pub shops_path: PathBuf,
}

impl AppState {
    /// Initialize the application state from the resolved data directory.
    pub fn init() -> anyhow::Result<Self> {
        Self::init_at(resolve_data_dir())
    }

    /// Load config and shops from `data_dir` and wire the service.
    pub fn init_at(data_dir: PathBuf) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let config = load_config(&data_dir);
        let shops_path = resolve_shops_path(&data_dir, &config);

        let store = JsonShopStore::new(&shops_path);
        let shops = load_or_empty(&store);
        let registry = ShopRegistry::new(store, shops);

        Ok(Self {
            shop_service: ShopService::new(registry),
            config,
            data_dir,
            shops_path,
        })
    }

    /// Resolve who is issuing the command.
    ///
    /// An explicit identity (from `--as` or `SHOPLINKER_ACTOR`) wins; otherwise
    /// the local identity file is used. Identities listed under `admins` in
    /// the config act as operators.
    pub fn actor(&self, explicit: Option<OwnerId>) -> anyhow::Result<Actor> {
        let id = match explicit {
            Some(id) => id,
            None => load_or_create_identity(&self.data_dir)?,
        };
        Ok(if self.config.is_admin(&id) {
            Actor::operator(id)
        } else {
            Actor::player(id)
        })
    }

    /// Final flush of the shop collection before exit.
    pub fn shutdown(&self) -> anyhow::Result<()> {
        self.shop_service
            .shutdown()
            .with_context(|| format!("failed to save shops to {}", self.shops_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplinker_types::shop::{CreateShopRequest, ShopField};
    use tempfile::TempDir;

    fn request(name: &str) -> CreateShopRequest {
        CreateShopRequest {
            name: name.to_string(),
            description: "Swords and armor".to_string(),
            url: None,
        }
    }

    #[test]
    fn init_on_empty_dir_has_no_shops() {
        let tmp = TempDir::new().unwrap();
        let state = AppState::init_at(tmp.path().join("data")).unwrap();
        assert!(state.shop_service.list_shops().is_empty());
        assert!(state.shops_path.ends_with("shoplinker_shops.json"));
    }

    #[test]
    fn shops_persist_across_restarts() {
        let tmp = TempDir::new().unwrap();
        let owner = OwnerId::new();

        let state = AppState::init_at(tmp.path().to_path_buf()).unwrap();
        let actor = state.actor(Some(owner)).unwrap();
        state.shop_service.create_shop(&actor, request("Blacksmith")).unwrap();
        state
            .shop_service
            .modify_shop(&actor, "blacksmith", ShopField::Url, "https://smith.example")
            .unwrap();
        state.shutdown().unwrap();

        let state = AppState::init_at(tmp.path().to_path_buf()).unwrap();
        let shop = state.shop_service.get_shop("BLACKSMITH").unwrap();
        assert_eq!(shop.url, "https://smith.example");
        assert_eq!(shop.owner(), owner);
    }

    #[test]
    fn admins_from_config_are_operators() {
        let tmp = TempDir::new().unwrap();
        let admin = OwnerId::new();
        std::fs::write(
            tmp.path().join("config.toml"),
            format!("shops_file = \"shops.json\"\nadmins = [\"{admin}\"]\n"),
        )
        .unwrap();

        let state = AppState::init_at(tmp.path().to_path_buf()).unwrap();
        assert!(state.shops_path.ends_with("shops.json"));
        assert!(state.actor(Some(admin)).unwrap().elevated);
        assert!(!state.actor(Some(OwnerId::new())).unwrap().elevated);
    }

    #[test]
    fn actor_defaults_to_local_identity() {
        let tmp = TempDir::new().unwrap();
        let state = AppState::init_at(tmp.path().to_path_buf()).unwrap();

        let first = state.actor(None).unwrap();
        let second = state.actor(None).unwrap();
        assert_eq!(first.id, second.id);
        assert!(!first.elevated);
    }
}
