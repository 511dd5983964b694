//! Global configuration types for ShopLinker.
//!
//! `ShopLinkerConfig` represents the top-level `config.toml` that controls
//! where the shop file lives and which identities act as operators.

use serde::{Deserialize, Serialize};

use crate::shop::OwnerId;

/// Default file name for the persisted shop collection.
pub const DEFAULT_SHOPS_FILE: &str = "shoplinker_shops.json";

/// Top-level configuration for ShopLinker.
///
/// Loaded from `~/.shoplinker/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopLinkerConfig {
    /// Shop collection file, relative to the data directory unless absolute.
    #[serde(default = "default_shops_file")]
    pub shops_file: String,

    /// Identities allowed to manage every shop, not just their own.
    #[serde(default)]
    pub admins: Vec<OwnerId>,
}

fn default_shops_file() -> String {
    DEFAULT_SHOPS_FILE.to_string()
}

impl Default for ShopLinkerConfig {
    fn default() -> Self {
        Self {
            shops_file: default_shops_file(),
            admins: Vec::new(),
        }
    }
}

impl ShopLinkerConfig {
    pub fn is_admin(&self, id: &OwnerId) -> bool {
        self.admins.contains(id)
    }
}
