use std::path::PathBuf;

use thiserror::Error;

/// Errors related to shop operations.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("shop '{0}' not found")]
    NotFound(String),

    #[error("shop name '{0}' is already taken")]
    NameTaken(String),

    #[error("invalid shop name: {0}")]
    InvalidName(String),

    #[error("invalid url '{0}': must be empty or start with http:// or https://")]
    InvalidUrl(String),

    #[error("you do not have permission to manage this shop")]
    PermissionDenied,
}

/// Errors from loading or saving the shop collection (used by the
/// `ShopStore` port in shoplinker-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt shop file {} ({message}), moved to {}", .path.display(), .quarantined.display())]
    Corrupt {
        path: PathBuf,
        quarantined: PathBuf,
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("no shop store attached")]
    Unavailable,
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_error_display() {
        let err = ShopError::NameTaken("Blacksmith".to_string());
        assert_eq!(err.to_string(), "shop name 'Blacksmith' is already taken");
    }

    #[test]
    fn test_store_error_display_includes_paths() {
        let err = StoreError::Corrupt {
            path: PathBuf::from("/data/shops.json"),
            quarantined: PathBuf::from("/data/shops.json.corrupt-1"),
            message: "expected value".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/shops.json"));
        assert!(msg.contains("corrupt-1"));
        assert!(msg.contains("expected value"));
    }
}
