//! Existence checks for candidate image URLs.
//!
//! A probe answers a single question: does this image exist? Failures of
//! any kind (network error, non-success status, missing file) are reported
//! as "no" and never abort resolution.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use vitrina_core::AssetLocation;

/// Checks whether an image URL resolves to an existing asset.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// Returns `true` if the asset at `url` exists.
    async fn exists(&self, url: &str) -> bool;

    /// Probe name for diagnostics.
    fn name(&self) -> &str;
}

#[async_trait]
impl<P: ImageProbe + ?Sized> ImageProbe for Arc<P> {
    async fn exists(&self, url: &str) -> bool {
        (**self).exists(url).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Probes remote images with HTTP `HEAD` requests.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Create a probe sharing an existing HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageProbe for HttpProbe {
    async fn exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                log::trace!("HEAD {url} -> {}", response.status());
                ok
            }
            Err(e) => {
                log::debug!("HEAD {url} failed: {e}");
                false
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Probes images on the local filesystem.
///
/// URLs are treated as paths relative to `root`.
#[derive(Debug, Clone, Default)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    /// Probe paths relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ImageProbe for FsProbe {
    async fn exists(&self, url: &str) -> bool {
        let path = self.root.join(url);
        match tokio::fs::metadata(&path).await {
            Ok(meta) => meta.is_file(),
            Err(_) => false,
        }
    }

    fn name(&self) -> &str {
        "fs"
    }
}

/// Pick the probe matching an image base: HTTP for URLs, filesystem
/// otherwise.
pub fn probe_for_base(base: &str, client: &reqwest::Client) -> Box<dyn ImageProbe> {
    if AssetLocation::parse(base).is_remote() {
        Box::new(HttpProbe::new(client.clone()))
    } else {
        Box::new(FsProbe::default())
    }
}
