//! Integration test modules.

mod detail_flow;
mod gallery_cache;
mod listing_flow;
mod site_build;
