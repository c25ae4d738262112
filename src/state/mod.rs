//! State module - Transient UI state of the storefront screen

mod error;

pub use error::StateError;

use crate::carousel::CarouselPosition;

/// Index of the highlighted category chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    selected: usize,
    count: usize,
}

impl CategorySelection {
    /// Selection over `count` categories, starting on the first one.
    pub fn new(count: usize) -> Self {
        Self { selected: 0, count }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Select a category. Returns whether the selection changed.
    pub fn select(&mut self, index: usize) -> Result<bool, StateError> {
        if index >= self.count {
            return Err(StateError::CategoryOutOfRange {
                index,
                count: self.count,
            });
        }
        let changed = self.selected != index;
        self.selected = index;
        Ok(changed)
    }
}

/// All mutable state of the screen. Setters report whether anything
/// visible changed so the caller knows to repaint.
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub category: CategorySelection,
    pub carousel: CarouselPosition,
}

impl ScreenState {
    pub fn new(category_count: usize, page_count: usize) -> Self {
        Self {
            category: CategorySelection::new(category_count),
            carousel: CarouselPosition::new(page_count),
        }
    }

    /// Handle a tap on chip `index`.
    pub fn select_category(&mut self, index: usize) -> Result<bool, StateError> {
        let changed = self.category.select(index)?;
        if changed {
            log::debug!("Category selected: {}", index);
        }
        Ok(changed)
    }

    /// Move the carousel by a drag of `delta_pages`.
    pub fn drag_carousel(&mut self, delta_pages: f32) -> bool {
        self.carousel.drag_by(delta_pages)
    }

    /// Place the carousel at an absolute scroll value (settle animation).
    pub fn settle_carousel(&mut self, scroll: f32) -> bool {
        let previous_page = self.carousel.current_page();
        let changed = self.carousel.settle_to(scroll);
        if self.carousel.current_page() != previous_page {
            log::debug!(
                "Carousel page {} -> {}",
                previous_page,
                self.carousel.current_page()
            );
        }
        changed
    }

    /// Set the carousel from a page index and offset fraction.
    pub fn set_carousel(&mut self, current_page: usize, fraction: f32) -> Result<bool, StateError> {
        self.carousel.set(current_page, fraction)
    }
}
