//! In-memory probe for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::probe::ImageProbe;

/// Probe answering from a fixed set of URLs.
///
/// Individual URLs can be delayed to force out-of-order completion, and
/// every call is counted.
#[derive(Debug, Default)]
pub struct MockProbe {
    existing: HashSet<String>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl MockProbe {
    /// Probe reporting exactly `urls` as existing.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            existing: urls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Delay the answer for `url`.
    pub fn with_delay(mut self, url: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(url.into(), delay);
        self
    }

    /// Number of `exists` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// URLs in the order their checks completed.
    pub fn completion_order(&self) -> Vec<String> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ImageProbe for MockProbe {
    async fn exists(&self, url: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(url.to_string());
        }
        self.existing.contains(url)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
