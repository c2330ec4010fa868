//! Vitrina Core — shared configuration, errors, and asset fetching.
//!
//! This crate provides the foundational types used across all Vitrina crates.
//! It has no internal Vitrina dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`config`]: `vitrina.toml` model, file resolution, env overrides
//! - [`error`]: Error types and Result alias
//! - [`source`]: Reading catalog assets from local paths or HTTP URLs
//! - [`util`]: Identifier helpers

pub mod config;
pub mod error;
pub mod source;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{
    CatalogConfig, ContactConfig, ImageConfig, ResolverStrategy, SiteConfig, VitrinaConfig,
};
pub use error::{Error, Result};
pub use source::{AssetFetcher, AssetLocation};
pub use util::ids::{assign_page_slugs, page_slug};
