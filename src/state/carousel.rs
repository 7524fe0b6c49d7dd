//! CarouselState - Slide Index with Wraparound

/// Active-slide state for a carousel
#[derive(Debug, Clone)]
pub struct CarouselState {
    index: usize,
    count: usize,
    paused: bool,
}

impl CarouselState {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Move to the next slide, wrapping at the end
    pub fn next(&mut self) {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
    }

    /// Move to the previous slide, wrapping at the start
    pub fn prev(&mut self) {
        if self.count > 0 {
            self.index = (self.index + self.count - 1) % self.count;
        }
    }

    /// Jump to a slide, clamped into range
    pub fn go_to(&mut self, index: usize) {
        if self.count > 0 {
            self.index = index.min(self.count - 1);
        }
    }

    /// Timer tick: advances unless the user has paused interaction
    pub fn auto_advance(&mut self) {
        if !self.paused {
            self.next();
        }
    }

    /// Pause auto-advance (user is interacting)
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first_slide() {
        let mut carousel = CarouselState::new(3);
        carousel.go_to(2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last_slide() {
        let mut carousel = CarouselState::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_auto_advance_respects_pause() {
        let mut carousel = CarouselState::new(3);
        carousel.pause();
        carousel.auto_advance();
        assert_eq!(carousel.index(), 0);

        carousel.resume();
        carousel.auto_advance();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = CarouselState::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
    }
}
