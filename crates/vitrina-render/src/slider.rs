//! Gallery slider state.
//!
//! The active index lives in `[0, len - 1]`. Arrows move one step and stop
//! at either end; dots jump directly; a horizontal swipe longer than
//! [`SWIPE_THRESHOLD`] counts as an arrow press.

/// Minimum horizontal travel, in pixels, for a swipe to register.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Active-image state for one gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    index: usize,
    len: usize,
}

impl Slider {
    /// Slider over `len` images, starting at the first. A zero length is
    /// treated as one.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    /// Active index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `i` is the active index.
    pub fn is_active(&self, i: usize) -> bool {
        self.index == i
    }

    /// Move forward one image. Returns `false` at the last image.
    pub fn next(&mut self) -> bool {
        self.go_to(self.index + 1)
    }

    /// Move back one image. Returns `false` at the first image.
    pub fn prev(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(i) => self.go_to(i),
            None => false,
        }
    }

    /// Jump to image `i`. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, i: usize) -> bool {
        if i >= self.len || i == self.index {
            return false;
        }
        self.index = i;
        true
    }

    /// Apply a horizontal swipe from `start_x` to `end_x`.
    ///
    /// Swiping left (finger moving toward smaller x) advances.
    pub fn swipe(&mut self, start_x: f64, end_x: f64) -> bool {
        let travel = start_x - end_x;
        if travel > SWIPE_THRESHOLD {
            self.next()
        } else if travel < -SWIPE_THRESHOLD {
            self.prev()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let s = Slider::new(3);
        assert_eq!(s.index(), 0);
        assert!(s.is_active(0));
    }

    #[test]
    fn test_next_clamps_at_end() {
        let mut s = Slider::new(3);
        assert!(s.next());
        assert!(s.next());
        assert_eq!(s.index(), 2);
        assert!(!s.next());
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn test_prev_clamps_at_start() {
        let mut s = Slider::new(3);
        assert!(!s.prev());
        assert_eq!(s.index(), 0);
        s.go_to(2);
        assert!(s.prev());
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut s = Slider::new(2);
        s.go_to(1);
        assert!(!s.go_to(5));
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn test_swipe_threshold() {
        let mut s = Slider::new(3);
        assert!(!s.swipe(100.0, 50.0));
        assert_eq!(s.index(), 0);
        assert!(s.swipe(100.0, 49.0));
        assert_eq!(s.index(), 1);
        assert!(s.swipe(0.0, 80.0));
        assert_eq!(s.index(), 0);
        assert!(!s.swipe(0.0, 80.0));
    }

    #[test]
    fn test_single_image_never_moves() {
        let mut s = Slider::new(0);
        assert_eq!(s.len(), 1);
        assert!(!s.next());
        assert!(!s.prev());
        assert!(!s.swipe(200.0, 0.0));
    }
}
