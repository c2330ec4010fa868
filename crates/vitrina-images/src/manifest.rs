//! The image manifest: a JSON array of image filenames known to exist.
//!
//! ```json
//! ["7.webp", "7-1.webp", "12.webp"]
//! ```

use std::collections::HashSet;

use vitrina_core::{AssetFetcher, Error, Result};

/// Set of known image filenames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    files: HashSet<String>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let files: Vec<String> = serde_json::from_str(text)
            .map_err(|e| Error::parse(format!("image manifest: {e}")))?;
        Ok(files.into_iter().collect())
    }

    /// Fetch and parse a manifest from a local path or URL.
    pub async fn load(fetcher: &AssetFetcher, location: &str) -> Result<Self> {
        let text = fetcher.fetch_text(location).await?;
        let manifest = Self::from_json(&text)?;
        log::debug!("Loaded image manifest with {} entries", manifest.len());
        Ok(manifest)
    }

    /// Returns `true` if `filename` is listed.
    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains(filename)
    }

    /// Number of listed filenames.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if nothing is listed.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Manifest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().map(Into::into).collect(),
        }
    }
}
