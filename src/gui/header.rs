//! Static header titles above the chip row and the pager.

use crate::content::{COLLECTIONS_TITLE, HEADLINE, SCREEN_PADDING, SECTION_GAP, TEXT_PRIMARY};
use egui::RichText;

pub fn headline(ui: &mut egui::Ui) {
    section(ui, |ui| {
        ui.label(
            RichText::new(HEADLINE)
                .size(30.0)
                .strong()
                .color(TEXT_PRIMARY),
        );
    });
}

pub fn collections_title(ui: &mut egui::Ui) {
    section(ui, |ui| {
        ui.label(
            RichText::new(COLLECTIONS_TITLE)
                .size(22.0)
                .strong()
                .color(TEXT_PRIMARY),
        );
    });
}

/// Block inset from the left edge with the standard gap above it.
pub fn section(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.add_space(SECTION_GAP);
    ui.horizontal(|ui| {
        ui.add_space(SCREEN_PADDING);
        ui.vertical(add_contents);
    });
}
