//! Probe resolver behavior with a controllable mock probe.

use std::sync::Arc;
use std::time::Duration;

use vitrina_images::mock::MockProbe;
use vitrina_images::{ImageResolver, ProbeResolver};

use crate::common::{PLACEHOLDER, probe_config};

fn resolver(probe: Arc<MockProbe>, extensions: &[&str]) -> ProbeResolver {
    ProbeResolver::new(Box::new(probe), &probe_config("img/", extensions))
}

#[tokio::test]
async fn test_out_of_order_completion_keeps_candidate_order() {
    let probe = Arc::new(
        MockProbe::new(["img/7.jpg", "img/7-1.jpg", "img/7-2.jpg", "img/7-3.jpg"])
            .with_delay("img/7.jpg", Duration::from_millis(60))
            .with_delay("img/7-1.jpg", Duration::from_millis(40))
            .with_delay("img/7-2.jpg", Duration::from_millis(20)),
    );
    let gallery = resolver(probe.clone(), &["jpg"]).resolve("7").await;

    assert_eq!(
        gallery.images(),
        ["img/7.jpg", "img/7-1.jpg", "img/7-2.jpg", "img/7-3.jpg"]
    );

    let order = probe.completion_order();
    let pos = |u: &str| order.iter().position(|o| o == u).unwrap();
    assert!(pos("img/7-3.jpg") < pos("img/7.jpg"), "mock delays should reorder completion");
}

#[tokio::test]
async fn test_all_candidates_probed_concurrently() {
    let probe = Arc::new(MockProbe::new(["img/1.jpg"]));
    resolver(probe.clone(), &["jpg", "png"]).resolve("1").await;
    // main + 5 extras, two extensions each
    assert_eq!(probe.calls(), 12);
}

#[tokio::test]
async fn test_gap_ends_discovery() {
    let probe = Arc::new(MockProbe::new(["img/7.jpg", "img/7-1.jpg", "img/7-3.jpg"]));
    let gallery = resolver(probe, &["jpg"]).resolve("7").await;
    assert_eq!(gallery.images(), ["img/7.jpg", "img/7-1.jpg"]);
}

#[tokio::test]
async fn test_missing_main_yields_placeholder() {
    let probe = Arc::new(MockProbe::new(["img/9-1.jpg", "img/9-2.jpg"]));
    let gallery = resolver(probe, &["jpg"]).resolve("9").await;
    assert_eq!(gallery.images(), [PLACEHOLDER]);
    assert!(gallery.is_placeholder());
}

#[tokio::test]
async fn test_first_extension_wins_per_slot() {
    let probe = Arc::new(MockProbe::new([
        "img/4.png",
        "img/4.jpg",
        "img/4-1.png",
    ]));
    let gallery = resolver(probe, &["jpg", "png"]).resolve("4").await;
    assert_eq!(gallery.images(), ["img/4.jpg", "img/4-1.png"]);
}

#[tokio::test]
async fn test_unreachable_http_probe_degrades_to_placeholder() {
    let config = probe_config("http://127.0.0.1:9/images/", &["jpg"]);
    let resolver = ProbeResolver::new(
        Box::new(vitrina_images::HttpProbe::new(reqwest::Client::new())),
        &config,
    );
    let gallery = resolver.resolve("7").await;
    assert!(gallery.is_placeholder());
}
