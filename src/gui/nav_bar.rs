//! Bottom navigation bar. Decorative only: none of its icons react to input.

use crate::content::{
    CHIP_SELECTED, NAV_BAR_HEIGHT, NAV_PILL_SIZE, SCREEN_PADDING, SURFACE, TEXT_PRIMARY,
};
use egui::{pos2, vec2, Align2, FontId, Rect, Sense};

const NAV_ICONS: [&str; 3] = ["🏠", "🔍", "♡"];
const NAV_ICON_SPACING: f32 = 44.0;
const NAV_ICON_SIZE: f32 = 22.0;
const NAV_PILL_LABEL: &str = "🛒 Cart";

pub fn show(ui: &mut egui::Ui) {
    let size = vec2(ui.available_width(), NAV_BAR_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, 24.0, SURFACE);

    let mid_y = rect.center().y;
    for (i, icon) in NAV_ICONS.iter().enumerate() {
        painter.text(
            pos2(
                rect.left() + SCREEN_PADDING + NAV_ICON_SIZE / 2.0 + i as f32 * NAV_ICON_SPACING,
                mid_y,
            ),
            Align2::CENTER_CENTER,
            icon,
            FontId::proportional(NAV_ICON_SIZE),
            TEXT_PRIMARY,
        );
    }

    let pill = Rect::from_center_size(
        pos2(rect.right() - SCREEN_PADDING - NAV_PILL_SIZE[0] / 2.0, mid_y),
        vec2(NAV_PILL_SIZE[0], NAV_PILL_SIZE[1]),
    );
    painter.rect_filled(pill, pill.height() / 2.0, CHIP_SELECTED);
    painter.text(
        pill.center(),
        Align2::CENTER_CENTER,
        NAV_PILL_LABEL,
        FontId::proportional(16.0),
        TEXT_PRIMARY,
    );
}
