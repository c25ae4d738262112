//! Category Chip Selector Widget
//! Horizontally scrollable row of pill-shaped category chips.

use crate::content::{
    CATEGORIES, CHIP_FONT_SIZE, CHIP_INNER_SIZE, CHIP_SELECTED, CHIP_SIZE, CHIP_SPACING,
    SURFACE, TEXT_PRIMARY,
};
use crate::state::CategorySelection;
use egui::{vec2, Align2, FontId, Rect, ScrollArea, Sense};

/// Actions triggered by the chip row
#[derive(Debug, Clone, PartialEq)]
pub enum ChipSelectorAction {
    None,
    Selected(usize),
}

pub struct ChipSelector;

impl ChipSelector {
    /// Draw the chip row. Highlights the chip in `selection`; the caller
    /// applies any reported tap to the state.
    pub fn show(ui: &mut egui::Ui, selection: &CategorySelection) -> ChipSelectorAction {
        let mut action = ChipSelectorAction::None;

        ScrollArea::horizontal()
            .id_salt("category_chips")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = CHIP_SPACING;
                    for (index, label) in CATEGORIES.iter().enumerate() {
                        if Self::chip(ui, label, selection.is_selected(index)) {
                            action = ChipSelectorAction::Selected(index);
                        }
                    }
                });
            });

        action
    }

    /// Draw a single chip, returning whether it was clicked.
    fn chip(ui: &mut egui::Ui, label: &str, selected: bool) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(vec2(CHIP_SIZE[0], CHIP_SIZE[1]), Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, rect.height() / 2.0, SURFACE);

            let inner = Rect::from_center_size(
                rect.center(),
                vec2(CHIP_INNER_SIZE[0], CHIP_INNER_SIZE[1]),
            );
            let fill = if selected { CHIP_SELECTED } else { SURFACE };
            painter.rect_filled(inner, inner.height() / 2.0, fill);

            painter.text(
                inner.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(CHIP_FONT_SIZE),
                TEXT_PRIMARY,
            );
        }

        response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
    }
}
