//! Product image discovery for Vitrina.
//!
//! Given a product id, an [`ImageResolver`] decides which image files exist
//! and returns them as an ordered [`Gallery`] whose first entry is the main
//! image. Two strategies are available behind the same trait:
//!
//! - **Manifest**: filenames are looked up in a preloaded `images.json`
//! - **Probe**: candidate URLs are checked with HTTP `HEAD` requests or
//!   filesystem lookups
//!
//! Use [`create_resolver`] to build the one selected in `[images]` config.
//!
//! # Modules
//!
//! - [`gallery`]: The non-empty [`Gallery`] type
//! - [`manifest`]: Loading the filename manifest
//! - [`mock`]: [`MockProbe`](mock::MockProbe) for tests
//! - [`naming`]: `{id}.{ext}` / `{id}-{n}.{ext}` conventions
//! - [`probe`]: [`ImageProbe`] trait with HTTP and filesystem probes
//! - [`resolver`]: [`ImageResolver`] trait, both strategies, and the factory

pub mod gallery;
pub mod manifest;
pub mod mock;
pub mod naming;
pub mod probe;
pub mod resolver;

pub use gallery::Gallery;
pub use manifest::Manifest;
pub use naming::{ImageNaming, Slot};
pub use probe::{FsProbe, HttpProbe, ImageProbe, probe_for_base};
pub use resolver::{ImageResolver, ManifestResolver, ProbeResolver, create_resolver};
