//! Image resolver trait and factory.
//!
//! # Resolvers
//!
//! - [`ManifestResolver`]: looks filenames up in a preloaded manifest, no I/O
//!   per product
//! - [`ProbeResolver`]: checks every candidate with an [`ImageProbe`],
//!   concurrently
//!
//! Both apply the same rules: the main image must exist, additional images
//! are taken in ascending index order up to the first gap, and an empty
//! result becomes the placeholder.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrina_core::{AssetFetcher, ImageConfig};
//! use vitrina_images::create_resolver;
//!
//! let fetcher = AssetFetcher::new()?;
//! let resolver = create_resolver(&ImageConfig::default(), &fetcher).await;
//! let gallery = resolver.resolve("7").await;
//! println!("main image: {}", gallery.main());
//! ```

use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};
use vitrina_core::{AssetFetcher, ImageConfig, ResolverStrategy};

use crate::gallery::Gallery;
use crate::manifest::Manifest;
use crate::naming::{ImageNaming, sequential_prefix};
use crate::probe::{ImageProbe, probe_for_base};

/// Resolves a product id to its image gallery.
///
/// Resolution never fails: anything that goes wrong degrades to fewer
/// images, and ultimately to the placeholder.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    /// Resolve the gallery for `id`.
    async fn resolve(&self, id: &str) -> Gallery;

    /// Resolver name for diagnostics.
    fn name(&self) -> &str;
}

/// Build the resolver selected by configuration.
///
/// Selection logic:
/// 1. `strategy = "manifest"` with a loadable manifest → [`ManifestResolver`]
/// 2. Otherwise → [`ProbeResolver`], with an HTTP or filesystem probe
///    depending on the image base
///
/// A manifest that cannot be loaded is logged as a warning, not returned
/// as an error.
pub async fn create_resolver(
    config: &ImageConfig,
    fetcher: &AssetFetcher,
) -> Box<dyn ImageResolver> {
    if config.strategy == ResolverStrategy::Manifest {
        match config.manifest.as_deref() {
            Some(location) => match Manifest::load(fetcher, location).await {
                Ok(manifest) => return Box::new(ManifestResolver::new(manifest, config)),
                Err(e) => {
                    log::warn!("Failed to load image manifest: {e}, falling back to probing");
                }
            },
            None => log::warn!("No image manifest configured, falling back to probing"),
        }
    }

    let probe = probe_for_base(&config.base, fetcher.client());
    Box::new(ProbeResolver::new(probe, config))
}

// ============================================================================
// Manifest
// ============================================================================

/// Resolves galleries against a manifest of known filenames.
#[derive(Debug, Clone)]
pub struct ManifestResolver {
    manifest: Manifest,
    naming: ImageNaming,
    base: String,
    placeholder: String,
}

impl ManifestResolver {
    /// Create a resolver from a loaded manifest and image settings.
    pub fn new(manifest: Manifest, config: &ImageConfig) -> Self {
        Self {
            manifest,
            naming: ImageNaming::from_config(config),
            base: config.base.clone(),
            placeholder: config.placeholder.clone(),
        }
    }

    /// Resolve without going through the async trait.
    pub fn resolve_now(&self, id: &str) -> Gallery {
        let mut found = Vec::new();
        for slot in self.naming.slots() {
            let hit = self
                .naming
                .candidates(id, slot)
                .into_iter()
                .find(|name| self.manifest.contains(name));
            let stop = hit.is_none();
            found.push(hit.map(|name| format!("{}{name}", self.base)));
            if stop {
                break;
            }
        }

        let images = sequential_prefix(found);
        if images.is_empty() {
            log::debug!("No manifest images for product {id}");
        }
        Gallery::new(images, &self.placeholder)
    }
}

#[async_trait]
impl ImageResolver for ManifestResolver {
    async fn resolve(&self, id: &str) -> Gallery {
        self.resolve_now(id)
    }

    fn name(&self) -> &str {
        "manifest"
    }
}

// ============================================================================
// Probe
// ============================================================================

/// Resolves galleries by probing every candidate URL.
///
/// All candidates for one product are checked concurrently. Each result is
/// tagged with its slot and extension position, so the gallery order never
/// depends on which check finishes first.
pub struct ProbeResolver {
    probe: Box<dyn ImageProbe>,
    naming: ImageNaming,
    base: String,
    placeholder: String,
}

impl ProbeResolver {
    /// Create a resolver around a probe and image settings.
    pub fn new(probe: Box<dyn ImageProbe>, config: &ImageConfig) -> Self {
        Self {
            probe,
            naming: ImageNaming::from_config(config),
            base: config.base.clone(),
            placeholder: config.placeholder.clone(),
        }
    }
}

impl std::fmt::Debug for ProbeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeResolver")
            .field("probe", &self.probe.name())
            .field("naming", &self.naming)
            .field("base", &self.base)
            .finish()
    }
}

#[async_trait]
impl ImageResolver for ProbeResolver {
    async fn resolve(&self, id: &str) -> Gallery {
        let slots = self.naming.slots();
        let ext_count = self.naming.extensions().len();

        let mut checks: FuturesUnordered<_> = slots
            .iter()
            .enumerate()
            .flat_map(|(slot_idx, slot)| {
                self.naming
                    .candidates(id, *slot)
                    .into_iter()
                    .enumerate()
                    .map(move |(ext_idx, name)| (slot_idx, ext_idx, name))
            })
            .map(|(slot_idx, ext_idx, name)| {
                let url = format!("{}{name}", self.base);
                async move {
                    let exists = self.probe.exists(&url).await;
                    (slot_idx, ext_idx, url, exists)
                }
            })
            .collect();

        // hits[slot][ext]
        let mut hits: Vec<Vec<Option<String>>> = vec![vec![None; ext_count]; slots.len()];
        while let Some((slot_idx, ext_idx, url, exists)) = checks.next().await {
            if exists {
                hits[slot_idx][ext_idx] = Some(url);
            }
        }

        let found = hits
            .into_iter()
            .map(|per_ext| per_ext.into_iter().flatten().next())
            .collect();
        let images = sequential_prefix(found);
        if images.is_empty() {
            log::debug!("No images found by {} probe for product {id}", self.probe.name());
        }
        Gallery::new(images, &self.placeholder)
    }

    fn name(&self) -> &str {
        "probe"
    }
}
