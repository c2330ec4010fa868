//! Reading catalog assets from local files or HTTP URLs.
//!
//! The products CSV and the image manifest may live next to the site on
//! disk or behind a URL. [`AssetFetcher`] hides the difference:
//!
//! ```rust,ignore
//! use vitrina_core::AssetFetcher;
//!
//! let fetcher = AssetFetcher::new()?;
//! let csv = fetcher.fetch_text("products.csv").await?;
//! let remote = fetcher.fetch_text("https://example.com/products.csv").await?;
//! ```

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("vitrina/", env!("CARGO_PKG_VERSION"));

/// Where an asset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocation {
    /// Path on the local filesystem.
    Local(PathBuf),
    /// Absolute http(s) URL.
    Remote(String),
}

impl AssetLocation {
    /// Classify a location string. Anything starting with `http://` or
    /// `https://` is remote; everything else is a local path.
    pub fn parse(location: &str) -> Self {
        let lower = location.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(location.trim().to_string())
        } else {
            Self::Local(PathBuf::from(location))
        }
    }

    /// Returns `true` for http(s) locations.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl std::fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// Fetches text assets from disk or over HTTP.
///
/// Cheap to clone; the underlying HTTP client pools connections.
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    client: reqwest::Client,
}

impl AssetFetcher {
    /// Create a fetcher with a default HTTP client.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::fetch("http client", e.to_string()))?;
        Ok(Self { client })
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// The HTTP client, for callers that issue their own requests.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Read an asset as text.
    ///
    /// Remote assets must answer with a success status; anything else is
    /// an [`Error::HttpStatus`].
    pub async fn fetch_text(&self, location: &str) -> Result<String> {
        match AssetLocation::parse(location) {
            AssetLocation::Local(path) => {
                log::debug!("Reading local asset {}", path.display());
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| Error::io_with_path(e, &path))
            }
            AssetLocation::Remote(url) => {
                log::debug!("Fetching remote asset {url}");
                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| Error::fetch(&url, e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(Error::HttpStatus {
                        location: url,
                        status: status.as_u16(),
                    });
                }

                response
                    .text()
                    .await
                    .map_err(|e| Error::fetch(&url, e.to_string()))
            }
        }
    }

    /// Read an asset and deserialize it as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, location: &str) -> Result<T> {
        let text = self.fetch_text(location).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local() {
        assert_eq!(
            AssetLocation::parse("products.csv"),
            AssetLocation::Local(PathBuf::from("products.csv"))
        );
        assert_eq!(
            AssetLocation::parse("../images/images.json"),
            AssetLocation::Local(PathBuf::from("../images/images.json"))
        );
    }

    #[test]
    fn test_parse_remote() {
        let loc = AssetLocation::parse("https://raw.githubusercontent.com/x/y/main/products.csv");
        assert!(loc.is_remote());
        assert!(AssetLocation::parse("HTTP://example.com/a.csv").is_remote());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AssetLocation::parse("https://example.com/a.csv").to_string(),
            "https://example.com/a.csv"
        );
        assert_eq!(AssetLocation::parse("a/b.csv").to_string(), "a/b.csv");
    }

    #[tokio::test]
    async fn test_fetch_local_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("products.csv");
        std::fs::write(&path, "ID,Product Name\n1,Serum\n").unwrap();

        let fetcher = AssetFetcher::new().unwrap();
        let text = fetcher.fetch_text(path.to_str().unwrap()).await.unwrap();
        assert!(text.contains("Serum"));
    }

    #[tokio::test]
    async fn test_fetch_local_missing() {
        let fetcher = AssetFetcher::new().unwrap();
        let err = fetcher
            .fetch_text("/nonexistent/vitrina/products.csv")
            .await
            .unwrap_err();
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_fetch_local_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("images.json");
        std::fs::write(&path, r#"["7.webp", "7-1.webp"]"#).unwrap();

        let fetcher = AssetFetcher::new().unwrap();
        let names: Vec<String> = fetcher.fetch_json(path.to_str().unwrap()).await.unwrap();
        assert_eq!(names, vec!["7.webp", "7-1.webp"]);
    }

    #[tokio::test]
    async fn test_fetch_local_bad_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("images.json");
        std::fs::write(&path, "not json").unwrap();

        let fetcher = AssetFetcher::new().unwrap();
        let result: Result<Vec<String>> = fetcher.fetch_json(path.to_str().unwrap()).await;
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
