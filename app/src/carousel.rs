//! Slideshow state for the project gallery.

/// Position within a gallery of `len` images plus the full-screen overlay flag.
///
/// Every movement wraps around, so `index < len` whenever `len > 0`. An empty
/// gallery has no current image and ignores navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    expanded: bool,
}

impl Carousel {
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            expanded: false,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn current(&self) -> Option<usize> {
        if self.len == 0 { None } else { Some(self.index) }
    }

    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`, wrapped into range.
    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }

    /// Starts over with a gallery of a new size.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn open(&mut self) {
        if self.len > 0 {
            self.expanded = true;
        }
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }

    /// Applies a keyboard key. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" if self.len > 0 => self.previous(),
            "ArrowRight" if self.len > 0 => self.next(),
            "Escape" if self.expanded => self.close(),
            _ => return false,
        }
        true
    }

    /// One-based position such as `2 / 5`.
    pub fn position_label(&self) -> String {
        match self.current() {
            Some(index) => format!("{} / {}", index + 1, self.len),
            None => "0 / 0".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_start() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), Some(2));
        carousel.next();
        assert_eq!(carousel.current(), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_end() {
        let mut carousel = Carousel::new(4);
        carousel.previous();
        assert_eq!(carousel.current(), Some(3));
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        for len in 1..6 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.select(start);
                carousel.next();
                carousel.previous();
                assert_eq!(carousel.current(), Some(start));
                carousel.previous();
                carousel.next();
                assert_eq!(carousel.current(), Some(start));
            }
        }
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut carousel = Carousel::new(3);
        for step in 0..20 {
            if step % 3 == 0 {
                carousel.previous();
            } else {
                carousel.next();
            }
            assert!(carousel.current().is_some_and(|i| i < carousel.len()));
        }
        carousel.select(7);
        assert_eq!(carousel.current(), Some(1));
    }

    #[test]
    fn test_empty_gallery_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        carousel.select(3);
        carousel.open();
        assert!(carousel.is_empty());
        assert_eq!(carousel.current(), None);
        assert!(!carousel.is_expanded());
        assert!(!carousel.handle_key("ArrowRight"));
        assert_eq!(carousel.position_label(), "0 / 0");
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.handle_key("ArrowLeft"));
        assert_eq!(carousel.position_label(), "5 / 5");
        assert!(carousel.handle_key("ArrowRight"));
        assert_eq!(carousel.position_label(), "1 / 5");
        assert!(!carousel.handle_key("Enter"));
        assert!(!carousel.handle_key("Escape"));
    }

    #[test]
    fn test_overlay_open_close() {
        let mut carousel = Carousel::new(2);
        carousel.open();
        assert!(carousel.is_expanded());
        assert!(carousel.handle_key("Escape"));
        assert!(!carousel.is_expanded());
        carousel.open();
        carousel.reset(4);
        assert!(!carousel.is_expanded());
        assert_eq!(carousel.current(), Some(0));
    }
}
