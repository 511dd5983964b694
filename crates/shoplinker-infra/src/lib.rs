//! Infrastructure layer for ShopLinker.
//!
//! Contains the implementation of the `ShopStore` port defined in
//! `shoplinker-core` (a JSON file with atomic replace and corrupt-file
//! quarantine), the config loader, and data directory helpers.

pub mod config;
pub mod filesystem;
pub mod json_store;
