//! Static site output.

use vitrina::build_site;
use vitrina::site::{SCRIPT_FILE, STYLESHEET_FILE};

use crate::common::TestHarness;

#[tokio::test]
async fn test_build_writes_all_pages() {
    let h = TestHarness::new();
    let out = h.out_dir();
    let report = build_site(&h.config, &h.fetcher, &out).await.unwrap();

    assert_eq!(report.detail_pages, 4);
    assert_eq!(report.dropped_rows, 1);
    assert_eq!(report.without_images, 2);
    assert!(report.skipped.is_empty());

    for file in ["index.html", STYLESHEET_FILE, SCRIPT_FILE] {
        assert!(out.join(file).is_file(), "{file} missing");
    }
    for id in ["1", "2", "3", "5"] {
        assert!(out.join("product").join(format!("{id}.html")).is_file());
    }
}

#[tokio::test]
async fn test_index_lists_every_product() {
    let h = TestHarness::new();
    let out = h.out_dir();
    build_site(&h.config, &h.fetcher, &out).await.unwrap();

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert_eq!(index.matches("class=\"product-card\"").count(), 4);
    assert!(index.contains("<title>Crystal Beauty</title>"));
    assert!(index.contains("href=\"styles.css\""));
    assert!(index.contains("Night Cream, Rich"));
}

#[tokio::test]
async fn test_detail_pages_resolve_from_site_root() {
    let h = TestHarness::new();
    let out = h.out_dir();
    build_site(&h.config, &h.fetcher, &out).await.unwrap();

    let page = std::fs::read_to_string(out.join("product/1.html")).unwrap();
    assert!(page.contains("<base href=\"../\">"));
    assert!(page.contains("src=\"images/1-2.webp\""));
    assert!(page.contains("Hydra Serum - Crystal Beauty"));
}

#[tokio::test]
async fn test_colliding_ids_link_to_their_own_pages() {
    let csv = "\
ID,Product Name,Product Type,Brand,Selling Price CRC,Presentation
AB,Alpha,Body,Nivea,₡1,1 ml
ab,Beta,Body,Nivea,₡2,2 ml";
    let h = TestHarness::with_csv(csv);
    let out = h.out_dir();
    let report = build_site(&h.config, &h.fetcher, &out).await.unwrap();

    assert_eq!(report.detail_pages, 2);
    assert!(report.skipped.is_empty());

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert_eq!(index.matches("href=\"product/ab.html\"").count(), 1);
    assert_eq!(index.matches("href=\"product/ab-2.html\"").count(), 1);

    let alpha = std::fs::read_to_string(out.join("product/ab.html")).unwrap();
    let beta = std::fs::read_to_string(out.join("product/ab-2.html")).unwrap();
    assert!(alpha.contains("Alpha") && !alpha.contains("Beta"));
    assert!(beta.contains("Beta") && !beta.contains("Alpha"));
}

#[tokio::test]
async fn test_repeated_id_keeps_first_page() {
    let csv = "\
ID,Product Name,Product Type,Brand,Selling Price CRC,Presentation
A1,First,Body,Nivea,₡1,1 ml
A1,Second,Body,Nivea,₡2,2 ml";
    let h = TestHarness::with_csv(csv);
    let out = h.out_dir();
    let report = build_site(&h.config, &h.fetcher, &out).await.unwrap();

    assert_eq!(report.detail_pages, 1);
    assert_eq!(report.skipped, ["A1"]);
    let page = std::fs::read_to_string(out.join("product/a1.html")).unwrap();
    assert!(page.contains("First"));
}

#[tokio::test]
async fn test_missing_catalog_fails_build() {
    let h = TestHarness::new().without_catalog();
    let err = build_site(&h.config, &h.fetcher, h.out_dir()).await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(!h.out_dir().exists());
}
