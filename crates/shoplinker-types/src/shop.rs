use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::error::ShopError;

/// Identity of the player (or operator) that owns a shop, wrapping a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub Uuid);

impl OwnerId {
    /// Create a new random OwnerId (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an OwnerId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OwnerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// A named shop entry.
///
/// The name is the registry key and is compared case-insensitively. The
/// owner is fixed at creation; everything else can be modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub description: String,
    /// Empty, or an `http://` / `https://` link.
    pub url: String,
    #[serde(rename = "owner_uuid", alias = "ownerUUID")]
    owner: OwnerId,
}

impl Shop {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        owner: OwnerId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            owner,
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Whether this shop's name matches `name`, ignoring case.
    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Whether the shop carries a clickable link.
    pub fn has_link(&self) -> bool {
        !self.url.is_empty() && validate_url(&self.url).is_ok()
    }

    /// Apply every populated field of `update` to this shop.
    pub fn apply(&mut self, update: ShopUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(url) = update.url {
            self.url = url;
        }
    }
}

/// Case-insensitive shop name comparison.
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Request to create a new shop. The owner is the acting player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShopRequest {
    pub name: String,
    pub description: String,
    pub url: Option<String>,
}

/// Field changes applied to an existing shop in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl ShopUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.url.is_none()
    }

    /// Build an update that changes a single field.
    pub fn field(field: ShopField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            ShopField::Name => Self {
                name: value,
                ..Default::default()
            },
            ShopField::Description => Self {
                description: value,
                ..Default::default()
            },
            ShopField::Url => Self {
                url: value,
                ..Default::default()
            },
        }
    }
}

/// The modifiable fields of a shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopField {
    Name,
    Description,
    Url,
}

impl fmt::Display for ShopField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopField::Name => write!(f, "name"),
            ShopField::Description => write!(f, "description"),
            ShopField::Url => write!(f, "url"),
        }
    }
}

impl FromStr for ShopField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ShopField::Name),
            "description" => Ok(ShopField::Description),
            "url" => Ok(ShopField::Url),
            other => Err(format!("invalid shop field: '{other}'")),
        }
    }
}

/// Check a shop URL: empty, or starting with `http://` or `https://`.
///
/// ```
/// use shoplinker_types::shop::validate_url;
///
/// assert!(validate_url("").is_ok());
/// assert!(validate_url("https://example.com/shop").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<(), ShopError> {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ShopError::InvalidUrl(url.to_string()))
    }
}

/// Check a shop name: must contain something besides whitespace.
pub fn validate_name(name: &str) -> Result<(), ShopError> {
    if name.trim().is_empty() {
        return Err(ShopError::InvalidName("name cannot be empty".to_string()));
    }
    Ok(())
}
