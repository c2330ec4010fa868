//! Resolved image galleries.

use serde::Serialize;

/// Ordered, non-empty list of image URLs for one product.
///
/// Index 0 is the main image. A gallery built without any content image
/// holds exactly the placeholder URL and reports [`is_placeholder`].
///
/// [`is_placeholder`]: Gallery::is_placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gallery {
    images: Vec<String>,
    placeholder: bool,
}

impl Gallery {
    /// Build a gallery from discovered images, falling back to
    /// `placeholder` when none were found.
    pub fn new(images: Vec<String>, placeholder: &str) -> Self {
        if images.is_empty() {
            Self::placeholder(placeholder)
        } else {
            Self {
                images,
                placeholder: false,
            }
        }
    }

    /// A gallery holding only the placeholder image.
    pub fn placeholder(url: &str) -> Self {
        Self {
            images: vec![url.to_string()],
            placeholder: true,
        }
    }

    /// The main image URL.
    pub fn main(&self) -> &str {
        &self.images[0]
    }

    /// Returns `true` when no content image was found.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Number of images; always at least one.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` when the gallery warrants a slider or thumbnail strip.
    pub fn has_multiple(&self) -> bool {
        self.images.len() > 1
    }

    /// Image at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    /// All image URLs in order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Iterate over image URLs in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.images.iter().map(String::as_str)
    }
}
