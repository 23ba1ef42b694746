//! Slide index bookkeeping for the carousel widget.
//!
//! `current` is the index of the leftmost visible slide. With more than one
//! slide shown at a time, the last valid position is the one that still
//! fills the viewport (`len - slides_to_show`).

use crate::config::CarouselSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    len: usize,
    infinite: bool,
    slides_to_show: usize,
    slides_to_scroll: usize,
}

impl CarouselState {
    pub fn new(len: usize, settings: &CarouselSettings) -> Self {
        Self {
            current: 0,
            len,
            infinite: settings.infinite,
            slides_to_show: settings.slides_to_show.max(1),
            slides_to_scroll: settings.slides_to_scroll.max(1),
        }
    }

    /// Zero-based index of the leftmost visible slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of distinct track positions, one dot each.
    pub fn positions(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.len.saturating_sub(self.slides_to_show) + 1
        }
    }

    fn last_position(&self) -> usize {
        self.positions().saturating_sub(1)
    }

    pub fn next(&mut self) {
        let positions = self.positions();
        if positions == 0 {
            return;
        }
        let target = self.current + self.slides_to_scroll;
        self.current = if target < positions {
            target
        } else if self.infinite {
            target % positions
        } else {
            self.last_position()
        };
    }

    pub fn prev(&mut self) {
        let positions = self.positions();
        if positions == 0 {
            return;
        }
        let step = self.slides_to_scroll % positions;
        self.current = if self.current >= self.slides_to_scroll {
            self.current - self.slides_to_scroll
        } else if self.infinite {
            (self.current + positions - step) % positions
        } else {
            0
        };
    }

    /// Jump to a position (dot indicator). Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.positions() {
            self.current = index;
        }
    }

    /// Width of one slide, in percent of the viewport.
    pub fn slide_width_percent(&self) -> f64 {
        100.0 / self.slides_to_show as f64
    }

    /// Horizontal offset of the slide track, in percent of the viewport.
    pub fn track_offset_percent(&self) -> f64 {
        self.current as f64 * self.slide_width_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looping(len: usize) -> CarouselState {
        CarouselState::new(len, &CarouselSettings::default())
    }

    fn bounded(len: usize) -> CarouselState {
        let settings = CarouselSettings {
            infinite: false,
            ..Default::default()
        };
        CarouselState::new(len, &settings)
    }

    fn showing(len: usize, slides_to_show: usize, infinite: bool) -> CarouselState {
        let settings = CarouselSettings {
            slides_to_show,
            infinite,
            ..Default::default()
        };
        CarouselState::new(len, &settings)
    }

    #[test]
    fn three_nexts_return_to_first_slide() {
        let mut c = looping(3);
        let mut visited = vec![c.current()];
        for _ in 0..3 {
            c.next();
            visited.push(c.current());
        }
        assert_eq!(visited, vec![0, 1, 2, 0]);
    }

    #[test]
    fn prev_wraps_backwards_when_infinite() {
        let mut c = looping(3);
        c.prev();
        assert_eq!(c.current(), 2);
        c.prev();
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn bounded_carousel_clamps() {
        let mut c = bounded(3);
        c.prev();
        assert_eq!(c.current(), 0);
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = looping(3);
        c.go_to(2);
        assert_eq!(c.current(), 2);
        c.go_to(3);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn multi_slide_step_wraps() {
        let settings = CarouselSettings {
            slides_to_scroll: 2,
            ..Default::default()
        };
        let mut c = CarouselState::new(3, &settings);
        c.next();
        assert_eq!(c.current(), 2);
        c.next();
        assert_eq!(c.current(), 1);
        c.prev();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = looping(0);
        assert_eq!(c.positions(), 0);
        c.next();
        c.prev();
        c.go_to(0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn one_slide_shown_gives_full_width_pages() {
        let mut c = looping(3);
        assert_eq!(c.positions(), 3);
        assert_eq!(c.slide_width_percent(), 100.0);
        c.next();
        assert_eq!(c.track_offset_percent(), 100.0);
    }

    #[test]
    fn two_shown_halves_width_and_offset() {
        let mut c = showing(3, 2, true);
        assert_eq!(c.slide_width_percent(), 50.0);
        assert_eq!(c.positions(), 2);
        c.next();
        assert_eq!(c.current(), 1);
        assert_eq!(c.track_offset_percent(), 50.0);
    }

    #[test]
    fn bounded_stops_at_last_full_page() {
        let mut c = showing(3, 2, false);
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.current(), 1);
        c.go_to(2);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn infinite_multi_show_wraps_to_start() {
        let mut c = showing(3, 2, true);
        c.next();
        c.next();
        assert_eq!(c.current(), 0);
        c.prev();
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn showing_more_than_available_is_one_page() {
        let mut c = showing(2, 4, true);
        assert_eq!(c.positions(), 1);
        c.next();
        assert_eq!(c.current(), 0);
    }
}
