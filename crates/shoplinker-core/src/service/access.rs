//! Ownership-based access rules for shop commands.

use shoplinker_types::shop::{OwnerId, Shop};

/// The identity issuing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: OwnerId,
    /// Operators may manage every shop, not only their own.
    pub elevated: bool,
}

impl Actor {
    pub fn player(id: OwnerId) -> Self {
        Self {
            id,
            elevated: false,
        }
    }

    pub fn operator(id: OwnerId) -> Self {
        Self { id, elevated: true }
    }

    /// Whether this actor may remove or modify `shop`.
    pub fn can_manage(&self, shop: &Shop) -> bool {
        self.elevated || shop.owner() == self.id
    }
}
