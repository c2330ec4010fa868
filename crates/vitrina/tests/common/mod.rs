//! Common test utilities for Vitrina integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vitrina::core::{AssetFetcher, ResolverStrategy, VitrinaConfig};

/// A small catalog with one malformed row (line 5).
pub const PRODUCTS_CSV: &str = "\
ID,Product Name,Product Type,Brand,Selling Price CRC,Presentation,Description
1,Hydra Serum,Skin Care,Nivea,₡8500,30 ml,Serum ligero de uso diario
2,Body Lotion,Body,Eucerin,₡9900,400 ml,
3,\"Night Cream, Rich\",Skin Care,Eucerin,₡12000,50 ml,Crema de noche
4,Broken,Row
5,Lip Balm,Lips,Nivea,₡2500,4.8 g,";

/// Manifest matching [`PRODUCTS_CSV`]: product 1 has three images,
/// product 3 one, the rest none.
pub const MANIFEST_JSON: &str = r#"["1.webp", "1-1.webp", "1-2.webp", "1-4.webp", "3.webp"]"#;

/// A catalog and manifest on disk plus a config pointing at them.
pub struct TestHarness {
    pub dir: TempDir,
    pub config: VitrinaConfig,
    pub fetcher: AssetFetcher,
}

impl TestHarness {
    /// Harness with the default catalog and a manifest-based resolver.
    pub fn new() -> Self {
        Self::with_csv(PRODUCTS_CSV)
    }

    /// Harness with a custom catalog.
    pub fn with_csv(csv: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("products.csv"), csv).unwrap();
        std::fs::write(dir.path().join("images.json"), MANIFEST_JSON).unwrap();

        let mut config = VitrinaConfig::default();
        config.catalog.source = path_str(&dir.path().join("products.csv"));
        config.images.strategy = ResolverStrategy::Manifest;
        config.images.manifest = Some(path_str(&dir.path().join("images.json")));

        Self {
            dir,
            config,
            fetcher: AssetFetcher::new().unwrap(),
        }
    }

    /// Point the catalog source at a file that does not exist.
    pub fn without_catalog(mut self) -> Self {
        self.config.catalog.source = path_str(&self.dir.path().join("missing.csv"));
        self
    }

    /// Fresh output directory inside the harness.
    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("site")
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
