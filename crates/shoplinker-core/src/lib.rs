//! Shop registry, persistence port, and command services for ShopLinker.
//!
//! This crate defines the "ports" (store traits) that the infrastructure
//! layer implements. It depends only on `shoplinker-types` -- never on
//! `shoplinker-infra` or any file/IO crate.

pub mod registry;
pub mod repository;
pub mod service;
