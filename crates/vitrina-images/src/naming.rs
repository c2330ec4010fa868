//! Image filename conventions.
//!
//! Every product has a main image named after its id and up to a handful of
//! additional images with a numeric suffix:
//!
//! ```text
//! 7.webp  7-1.webp  7-2.webp  ...  7-5.webp
//! ```
//!
//! Additional images must be numbered without gaps. Discovery stops at the
//! first missing index.

use vitrina_core::ImageConfig;

/// One image position for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// `{id}.{ext}`
    Main,
    /// `{id}-{n}.{ext}`
    Extra(u32),
}

/// How candidate filenames are built for a product id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNaming {
    extensions: Vec<String>,
    first_extra: u32,
    last_extra: u32,
}

impl Default for ImageNaming {
    fn default() -> Self {
        Self::from_config(&ImageConfig::default())
    }
}

impl ImageNaming {
    /// Naming with explicit extensions and extra-index range.
    pub fn new<I, S>(extensions: I, first_extra: u32, last_extra: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            first_extra,
            last_extra,
        }
    }

    /// Naming taken from the `[images]` config section.
    pub fn from_config(config: &ImageConfig) -> Self {
        Self::new(
            config.extensions.iter().cloned(),
            config.first_extra_index,
            config.last_extra_index,
        )
    }

    /// Extensions in preference order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Slots in discovery order: main first, then ascending extras.
    pub fn slots(&self) -> Vec<Slot> {
        std::iter::once(Slot::Main)
            .chain((self.first_extra..=self.last_extra).map(Slot::Extra))
            .collect()
    }

    /// Filename for one slot and extension.
    pub fn filename(&self, id: &str, slot: Slot, extension: &str) -> String {
        match slot {
            Slot::Main => format!("{id}.{extension}"),
            Slot::Extra(n) => format!("{id}-{n}.{extension}"),
        }
    }

    /// Candidate filenames for one slot, in extension preference order.
    pub fn candidates(&self, id: &str, slot: Slot) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| self.filename(id, slot, ext))
            .collect()
    }
}

/// Keep the main image and the gap-free run of extras that follows it.
///
/// `found` holds, per slot in discovery order, the chosen filename or
/// `None`. A missing main image yields an empty list.
pub(crate) fn sequential_prefix(found: Vec<Option<String>>) -> Vec<String> {
    found.into_iter().map_while(|f| f).collect()
}
