//! Shared domain types for ShopLinker.
//!
//! This crate contains the core domain types used across ShopLinker:
//! Shop, OwnerId, the update/request types, configuration, and the
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod config;
pub mod error;
pub mod shop;
