//! End-to-end command runs.

use std::path::Path;

use clap::Parser;
use tempfile::TempDir;
use vitrina_cli::cli::Cli;

const CSV: &str = "\
ID,Product Name,Product Type,Brand,Selling Price CRC,Presentation,Description
1,Hydra Serum,Skin Care,Nivea,₡8500,30 ml,Serum ligero
2,Body Lotion,Body,Eucerin,₡9900,400 ml,";

/// Catalog plus a `vitrina.toml` pointing at it; returns the config path.
fn setup(dir: &Path) -> String {
    let csv = dir.join("products.csv");
    std::fs::write(&csv, CSV).unwrap();
    let config = dir.join("vitrina.toml");
    std::fs::write(
        &config,
        format!(
            "[catalog]\nsource = {:?}\n\n[images]\nstrategy = \"probe\"\n",
            csv.to_string_lossy()
        ),
    )
    .unwrap();
    config.to_string_lossy().into_owned()
}

async fn run(args: &[&str]) -> anyhow::Result<()> {
    let cli = Cli::try_parse_from(std::iter::once("vitrina").chain(args.iter().copied()))?;
    vitrina_cli::run(cli).await
}

#[tokio::test]
async fn test_build_command_writes_site() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());
    let out = dir.path().join("public");

    run(&["--config", &config, "build", "--out", out.to_str().unwrap()])
        .await
        .unwrap();

    assert!(out.join("index.html").is_file());
    assert!(out.join("product/1.html").is_file());
    assert!(out.join("product/2.html").is_file());
}

#[tokio::test]
async fn test_export_command_filters() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());
    let out = dir.path().join("export.csv");

    run(&[
        "export",
        "--config",
        &config,
        "--search",
        "lotion",
        "--out",
        out.to_str().unwrap(),
    ])
    .await
    .unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("Body Lotion"));
    assert!(!written.contains("Hydra Serum"));
}

#[tokio::test]
async fn test_show_unknown_product_fails() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());
    let err = run(&["--config", &config, "show", "404"]).await.unwrap_err();
    assert!(err.to_string().contains("Producto no encontrado"));
}

#[tokio::test]
async fn test_missing_catalog_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("vitrina.toml");
    std::fs::write(&config, "[catalog]\nsource = \"/no/such/products.csv\"\n").unwrap();

    let result = run(&["--config", config.to_str().unwrap(), "list"]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_config_get_reads_file() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());
    run(&["--config", &config, "config", "get", "images.strategy"])
        .await
        .unwrap();
    assert!(run(&["--config", &config, "config", "get", "images.nope"]).await.is_err());
}
