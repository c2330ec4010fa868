//! Resolution against real directories.

use vitrina_core::{AssetFetcher, ImageConfig, ResolverStrategy};
use vitrina_images::{FsProbe, ImageResolver, ProbeResolver, create_resolver};

use crate::common::{PLACEHOLDER, probe_config, touch_images};

#[tokio::test]
async fn test_fs_probe_resolution() {
    let dir = tempfile::tempdir().unwrap();
    touch_images(dir.path(), &["12.webp", "12-1.webp", "12-2.webp", "12-4.webp"]);

    let resolver = ProbeResolver::new(
        Box::new(FsProbe::new(dir.path())),
        &probe_config("", &["webp"]),
    );
    let gallery = resolver.resolve("12").await;
    assert_eq!(gallery.images(), ["12.webp", "12-1.webp", "12-2.webp"]);

    let gallery = resolver.resolve("13").await;
    assert_eq!(gallery.images(), [PLACEHOLDER]);
}

#[tokio::test]
async fn test_manifest_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("images.json");
    std::fs::write(&manifest, r#"["7.webp", "7-1.webp", "7-3.webp"]"#).unwrap();

    let config = ImageConfig {
        base: String::new(),
        placeholder: PLACEHOLDER.to_string(),
        strategy: ResolverStrategy::Manifest,
        manifest: Some(manifest.to_string_lossy().into_owned()),
        ..ImageConfig::default()
    };
    let fetcher = AssetFetcher::new().unwrap();
    let resolver = create_resolver(&config, &fetcher).await;

    assert_eq!(resolver.name(), "manifest");
    assert_eq!(resolver.resolve("7").await.images(), ["7.webp", "7-1.webp"]);
    assert_eq!(resolver.resolve("9").await.images(), [PLACEHOLDER]);
}

#[tokio::test]
async fn test_broken_manifest_falls_back_to_probe() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("images.json");
    std::fs::write(&manifest, "not json").unwrap();

    let config = ImageConfig {
        manifest: Some(manifest.to_string_lossy().into_owned()),
        ..ImageConfig::default()
    };
    let fetcher = AssetFetcher::new().unwrap();
    let resolver = create_resolver(&config, &fetcher).await;
    assert_eq!(resolver.name(), "probe");
}
