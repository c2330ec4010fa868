//! Vitrina product catalog — umbrella crate.
//!
//! Re-exports all Vitrina components and adds the page controllers and
//! the static site builder on top of them.

#![doc = include_str!("../README.md")]

pub use vitrina_catalog as catalog;
pub use vitrina_core as core;
pub use vitrina_images as images;
pub use vitrina_render as render;

pub mod pages;
pub mod site;

pub use pages::{DetailPage, ListingPage};
pub use site::{BuildReport, build_site};
