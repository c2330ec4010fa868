//! Common helpers for image resolution tests.

use std::path::Path;

use vitrina_core::{ImageConfig, ResolverStrategy};

/// Placeholder URL used throughout the tests.
pub const PLACEHOLDER: &str = "images/placeholder.svg";

/// Probe-strategy image config with the given base and extensions.
pub fn probe_config(base: &str, extensions: &[&str]) -> ImageConfig {
    ImageConfig {
        base: base.to_string(),
        placeholder: PLACEHOLDER.to_string(),
        strategy: ResolverStrategy::Probe,
        manifest: None,
        extensions: extensions.iter().map(|e| e.to_string()).collect(),
        ..ImageConfig::default()
    }
}

/// Create empty image files under `dir`.
pub fn touch_images(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"img").unwrap();
    }
}
