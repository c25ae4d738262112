//! Product Pager Widget
//! Horizontally draggable carousel of product cards with the fanned
//! rotation/scale effect. Non-current cards are drawn first so the
//! centred card always sits on top.

use crate::carousel::{page_transform, PageTransform, SnapAnimator, TransformParams};
use crate::config::AppConfig;
use crate::content::{CARD_SIZE, PAGER_CONTENT_PADDING, PAGER_TOP_PADDING, PAGE_SPACING};
use crate::gui::artwork::ArtworkTextures;
use crate::gui::card::{hits_button, paint_card};
use crate::gui::card_space::CardSpace;
use crate::state::ScreenState;
use egui::{pos2, vec2, Pos2, Rect, Sense};

/// Distance between adjacent page centres for a viewport of `width`.
pub fn page_stride(width: f32) -> f32 {
    let page_width = width - 2.0 * PAGER_CONTENT_PADDING;
    (page_width + PAGE_SPACING).max(1.0)
}

/// Horizontal centre of `page` for a viewport centred at `center_x`.
pub fn page_center_x(center_x: f32, page: usize, scroll: f32, stride: f32) -> f32 {
    center_x + (page as f32 - scroll) * stride
}

/// Pages with their transforms, in paint order (lowest stacking layer first).
pub fn paint_order(
    current_page: usize,
    current_offset_fraction: f32,
    page_count: usize,
    params: &TransformParams,
) -> Vec<(usize, PageTransform)> {
    let mut pages: Vec<(usize, PageTransform)> = (0..page_count)
        .map(|page| {
            (
                page,
                page_transform(current_page, current_offset_fraction, page, params),
            )
        })
        .collect();
    pages.sort_by_key(|(_, tf)| tf.z_index);
    pages
}

/// Actions triggered by the pager
#[derive(Debug, Clone, PartialEq)]
pub enum PagerAction {
    None,
    AddToCart(usize),
}

/// Carousel widget. Owns only gesture bookkeeping; the scroll position
/// itself lives in `ScreenState`.
pub struct Pager {
    animator: SnapAnimator,
    drag_start_page: Option<usize>,
    params: TransformParams,
    fling_threshold: f32,
}

impl Pager {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            animator: SnapAnimator::new(config.settle_duration()),
            drag_start_page: None,
            params: config.transform,
            fling_threshold: config.fling_velocity_threshold,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Draw the pager and handle drag, fling and button clicks
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut ScreenState,
        textures: &ArtworkTextures,
    ) -> PagerAction {
        let mut action = PagerAction::None;

        let size = vec2(ui.available_width(), PAGER_TOP_PADDING + CARD_SIZE[1]);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let stride = page_stride(rect.width());

        if response.drag_started() {
            self.animator.cancel();
            self.drag_start_page = Some(state.carousel.current_page());
        }

        if response.dragged() {
            let dx = response.drag_delta().x;
            if dx != 0.0 {
                state.drag_carousel(-dx / stride);
            }
        }

        if response.drag_stopped() {
            let velocity = ui.input(|i| i.pointer.velocity().x);
            let start = self
                .drag_start_page
                .take()
                .unwrap_or_else(|| state.carousel.current_page());
            let target = state
                .carousel
                .settle_target(start, velocity, self.fling_threshold);
            log::debug!(
                "Pager released at {:.2} (velocity {:.0}), settling on page {}",
                state.carousel.scroll(),
                velocity,
                target
            );
            self.animator.start(state.carousel.scroll(), target as f32);
        }

        if let Some(next) = self.animator.tick() {
            state.settle_carousel(next);
            ui.ctx().request_repaint();
        }

        let scroll = state.carousel.scroll();
        let card_center_y = rect.top() + PAGER_TOP_PADDING + CARD_SIZE[1] / 2.0;
        let card_size = vec2(CARD_SIZE[0], CARD_SIZE[1]);
        let space_for = |page: usize, transform: &PageTransform| {
            let center = pos2(
                page_center_x(rect.center().x, page, scroll, stride),
                card_center_y,
            );
            CardSpace::new(center, card_size, transform)
        };

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let current = state.carousel.current_page();
                let transform = page_transform(
                    current,
                    state.carousel.current_offset_fraction(),
                    current,
                    &self.params,
                );
                if hits_button(&space_for(current, &transform), pointer) {
                    action = PagerAction::AddToCart(current);
                }
            }
        }

        let painter = ui.painter_at(rect);
        for (page, transform) in paint_order(
            state.carousel.current_page(),
            state.carousel.current_offset_fraction(),
            state.carousel.page_count(),
            &self.params,
        ) {
            let space = space_for(page, &transform);
            if !is_visible(rect, space.to_screen(space.local_rect().center())) {
                continue;
            }
            paint_card(&painter, &space, &transform, textures);
        }

        action
    }
}

/// Cards whose centre is more than a card width outside the viewport are skipped.
fn is_visible(viewport: Rect, card_center: Pos2) -> bool {
    (card_center.x - viewport.center().x).abs() <= viewport.width() / 2.0 + CARD_SIZE[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_accounts_for_padding_and_overlap() {
        // 412 wide: page 304, overlap -100.
        assert_eq!(page_stride(412.0), 204.0);
        assert_eq!(page_stride(10.0), 1.0);
    }

    #[test]
    fn centred_page_sits_on_viewport_centre() {
        assert_eq!(page_center_x(206.0, 1, 1.0, 204.0), 206.0);
        assert_eq!(page_center_x(206.0, 2, 1.0, 204.0), 410.0);
        assert_eq!(page_center_x(206.0, 0, 0.5, 204.0), 104.0);
    }

    #[test]
    fn current_page_is_painted_last() {
        let params = TransformParams::default();
        for current in 0..3 {
            let order = paint_order(current, 0.0, 3, &params);
            assert_eq!(order.len(), 3);
            let (last_page, last_tf) = order[2];
            assert_eq!(last_page, current);
            assert!(last_tf.is_focused());
            assert!(order[..2].iter().all(|(_, tf)| !tf.is_focused()));
        }
    }

    #[test]
    fn far_cards_are_culled() {
        let viewport = Rect::from_min_size(Pos2::ZERO, vec2(412.0, 494.0));
        assert!(is_visible(viewport, pos2(410.0, 200.0)));
        assert!(!is_visible(viewport, pos2(1200.0, 200.0)));
    }
}
