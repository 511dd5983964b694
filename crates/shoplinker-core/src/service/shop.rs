//! Shop command service.
//!
//! Implements the player-facing use cases (add, remove, modify, list) on
//! top of [`ShopRegistry`]: input validation and ownership checks happen
//! here, the registry only enforces name uniqueness.

use shoplinker_types::error::{ShopError, StoreError};
use shoplinker_types::shop::{
    CreateShopRequest, Shop, ShopField, ShopUpdate, validate_name, validate_url,
};

use crate::registry::ShopRegistry;
use crate::repository::shop::ShopStore;
use crate::service::access::Actor;

/// Service orchestrating shop commands.
///
/// Generic over the store trait to maintain clean architecture --
/// shoplinker-core never depends on shoplinker-infra.
pub struct ShopService<S: ShopStore> {
    registry: ShopRegistry<S>,
}

impl<S: ShopStore> ShopService<S> {
    pub fn new(registry: ShopRegistry<S>) -> Self {
        Self { registry }
    }

    /// Create a shop owned by `actor`.
    ///
    /// The name must not be blank and the URL, when given, must use an
    /// http(s) scheme.
    pub fn create_shop(&self, actor: &Actor, request: CreateShopRequest) -> Result<Shop, ShopError> {
        let name = request.name.trim().to_string();
        validate_name(&name)?;

        let url = request.url.map(|u| u.trim().to_string()).unwrap_or_default();
        validate_url(&url)?;

        let shop = Shop::new(name, request.description, url, actor.id);
        self.registry.add(shop.clone())?;
        Ok(shop)
    }

    /// The shop called `name`, provided `actor` may manage it.
    ///
    /// A snapshot for callers that want to check before prompting; the
    /// mutating methods repeat the check under the registry lock.
    pub fn managed_shop(&self, actor: &Actor, name: &str) -> Result<Shop, ShopError> {
        let shop = self.get_shop(name)?;
        authorize(actor, &shop, "inspect")?;
        Ok(shop)
    }

    /// Remove a shop the actor owns (or any shop, for operators).
    pub fn remove_shop(&self, actor: &Actor, name: &str) -> Result<Shop, ShopError> {
        self.registry
            .remove_if(name, |shop| authorize(actor, shop, "remove"))
    }

    /// Change one field of a shop the actor may manage.
    pub fn modify_shop(
        &self,
        actor: &Actor,
        name: &str,
        field: ShopField,
        value: &str,
    ) -> Result<Shop, ShopError> {
        let value = match field {
            ShopField::Name | ShopField::Url => value.trim(),
            ShopField::Description => value,
        };

        self.registry
            .update_if(name, ShopUpdate::field(field, value), |shop| {
                authorize(actor, shop, "modify")?;
                match field {
                    ShopField::Name => validate_name(value),
                    ShopField::Url => validate_url(value),
                    ShopField::Description => Ok(()),
                }
            })
    }

    pub fn get_shop(&self, name: &str) -> Result<Shop, ShopError> {
        self.registry
            .find_by_name(name)
            .ok_or_else(|| ShopError::NotFound(name.to_string()))
    }

    pub fn list_shops(&self) -> Vec<Shop> {
        self.registry.list_all()
    }

    /// Final flush before the host exits.
    pub fn shutdown(&self) -> Result<(), StoreError> {
        tracing::info!(count = self.registry.len(), "saving shops before shutdown");
        self.registry.flush()
    }
}

fn authorize(actor: &Actor, shop: &Shop, action: &str) -> Result<(), ShopError> {
    if actor.can_manage(shop) {
        Ok(())
    } else {
        tracing::debug!(shop = %shop.name, actor = %actor.id, action, "denied");
        Err(ShopError::PermissionDenied)
    }
}
