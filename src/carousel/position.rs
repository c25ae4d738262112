//! Carousel Position Module
//! Scroll state of the pager, kept as a continuous value in page units.

use crate::state::StateError;

/// Scroll state of a pager with a fixed page count.
///
/// `scroll` is measured in pages and clamped to `[0, page_count - 1]`.
/// The page closest to the viewport centre and the fractional progress
/// toward its neighbour are derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselPosition {
    page_count: usize,
    scroll: f32,
}

impl Default for CarouselPosition {
    fn default() -> Self {
        Self::new(3)
    }
}

impl CarouselPosition {
    /// Create a pager position on page 0. A page count of 0 is treated as 1.
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count: page_count.max(1),
            scroll: 0.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    fn max_scroll(&self) -> f32 {
        (self.page_count - 1) as f32
    }

    /// Index of the page closest to the viewport centre.
    pub fn current_page(&self) -> usize {
        (self.scroll.round() as usize).min(self.page_count - 1)
    }

    /// Progress from the current page toward a neighbour, in `[-0.5, 0.5]`.
    /// Negative when scrolling toward a lower index.
    pub fn current_offset_fraction(&self) -> f32 {
        self.scroll - self.current_page() as f32
    }

    /// Set the position from a page index and an offset fraction.
    /// Returns whether the position changed.
    pub fn set(&mut self, current_page: usize, fraction: f32) -> Result<bool, StateError> {
        if current_page >= self.page_count {
            return Err(StateError::PageOutOfRange {
                page: current_page,
                count: self.page_count,
            });
        }
        if !(-1.0..=1.0).contains(&fraction) {
            return Err(StateError::OffsetOutOfRange(fraction));
        }
        Ok(self.settle_to(current_page as f32 + fraction))
    }

    /// Jump straight to a page.
    pub fn scroll_to_page(&mut self, page: usize) -> Result<bool, StateError> {
        self.set(page, 0.0)
    }

    /// Move by `delta_pages` (positive toward higher indices), clamped to the
    /// page range. Returns whether the position changed.
    pub fn drag_by(&mut self, delta_pages: f32) -> bool {
        self.settle_to(self.scroll + delta_pages)
    }

    /// Place the scroll at an absolute value, clamped to the page range.
    pub fn settle_to(&mut self, scroll: f32) -> bool {
        if !scroll.is_finite() {
            return false;
        }
        let clamped = scroll.clamp(0.0, self.max_scroll());
        let changed = clamped != self.scroll;
        self.scroll = clamped;
        changed
    }

    /// Whether the pager rests exactly on a page.
    pub fn is_settled(&self) -> bool {
        self.current_offset_fraction() == 0.0
    }

    /// Page the pager should settle on after a drag that started on
    /// `drag_start_page` is released with horizontal pointer velocity
    /// `release_velocity` (points per second, positive = finger moving right).
    ///
    /// A fling above `fling_threshold` moves to the next page in the fling
    /// direction; anything slower snaps to the nearest page. The result is
    /// at most one page away from `drag_start_page`.
    pub fn settle_target(
        &self,
        drag_start_page: usize,
        release_velocity: f32,
        fling_threshold: f32,
    ) -> usize {
        let target = if release_velocity.abs() > fling_threshold {
            if release_velocity < 0.0 {
                // Finger moving left scrolls toward higher pages.
                self.scroll.floor() as usize + 1
            } else {
                (self.scroll.ceil() as usize).saturating_sub(1)
            }
        } else {
            self.current_page()
        };

        let lowest = drag_start_page.saturating_sub(1);
        let highest = (drag_start_page + 1).min(self.page_count - 1);
        target.clamp(lowest, highest.max(lowest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page() {
        let pos = CarouselPosition::new(3);
        assert_eq!(pos.current_page(), 0);
        assert_eq!(pos.current_offset_fraction(), 0.0);
        assert!(pos.is_settled());
    }

    #[test]
    fn zero_pages_means_one() {
        let mut pos = CarouselPosition::new(0);
        assert_eq!(pos.page_count(), 1);
        assert!(!pos.drag_by(0.7));
        assert_eq!(pos.current_page(), 0);
    }

    #[test]
    fn derives_page_and_fraction_from_scroll() {
        let mut pos = CarouselPosition::new(3);
        pos.drag_by(1.3);
        assert_eq!(pos.current_page(), 1);
        assert!((pos.current_offset_fraction() - 0.3).abs() < 1e-5);

        pos.drag_by(0.4);
        assert_eq!(pos.current_page(), 2);
        assert!((pos.current_offset_fraction() + 0.3).abs() < 1e-5);

        let sum = pos.current_page() as f32 + pos.current_offset_fraction();
        assert!((sum - pos.scroll()).abs() < 1e-6);
    }

    #[test]
    fn drag_clamps_to_page_range() {
        let mut pos = CarouselPosition::new(3);
        assert!(!pos.drag_by(-0.5));
        assert_eq!(pos.scroll(), 0.0);

        assert!(pos.drag_by(10.0));
        assert_eq!(pos.scroll(), 2.0);
        assert_eq!(pos.current_page(), 2);
    }

    #[test]
    fn set_validates_inputs() {
        let mut pos = CarouselPosition::new(3);
        assert_eq!(
            pos.set(3, 0.0),
            Err(StateError::PageOutOfRange { page: 3, count: 3 })
        );
        assert_eq!(pos.set(1, 1.5), Err(StateError::OffsetOutOfRange(1.5)));
        assert_eq!(pos.scroll(), 0.0);

        assert_eq!(pos.set(1, 0.5), Ok(true));
        assert_eq!(pos.current_page(), 2);
        assert!((pos.current_offset_fraction() + 0.5).abs() < 1e-6);
        assert_eq!(pos.set(1, 0.5), Ok(false));
    }

    #[test]
    fn scroll_to_page_lands_on_page() {
        let mut pos = CarouselPosition::new(3);
        assert_eq!(pos.scroll_to_page(2), Ok(true));
        assert!(pos.is_settled());
        assert_eq!(pos.current_page(), 2);
    }

    #[test]
    fn non_finite_scroll_is_ignored() {
        let mut pos = CarouselPosition::new(3);
        assert!(!pos.settle_to(f32::NAN));
        assert_eq!(pos.scroll(), 0.0);
    }

    #[test]
    fn slow_release_snaps_to_nearest() {
        let mut pos = CarouselPosition::new(3);
        pos.settle_to(0.4);
        assert_eq!(pos.settle_target(0, -100.0, 400.0), 0);
        pos.settle_to(0.6);
        assert_eq!(pos.settle_target(0, 100.0, 400.0), 1);
    }

    #[test]
    fn fling_moves_one_page_in_fling_direction() {
        let mut pos = CarouselPosition::new(3);
        pos.settle_to(0.2);
        assert_eq!(pos.settle_target(0, -900.0, 400.0), 1);

        pos.settle_to(1.8);
        assert_eq!(pos.settle_target(2, 900.0, 400.0), 1);
    }

    #[test]
    fn fling_never_leaves_page_range_or_skips_pages() {
        let mut pos = CarouselPosition::new(3);
        pos.settle_to(2.0);
        assert_eq!(pos.settle_target(2, -900.0, 400.0), 2);

        pos.settle_to(0.0);
        assert_eq!(pos.settle_target(0, 900.0, 400.0), 0);

        // Dragged almost two pages then flung further: stays within one page of start.
        let mut long = CarouselPosition::new(5);
        long.settle_to(1.9);
        assert_eq!(long.settle_target(0, -900.0, 400.0), 1);
    }
}
