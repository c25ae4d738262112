//! Plant Store Main Application
//! Single screen: headers, category chips, product pager and navigation bar.

use crate::config::AppConfig;
use crate::content::{ARTWORK_SIZE, BACKGROUND, CATEGORIES, NAV_BAR_TOP_GAP};
use crate::gui::artwork::ArtworkTextures;
use crate::gui::{header, nav_bar, ChipSelector, ChipSelectorAction, Pager, PagerAction};
use crate::state::ScreenState;
use egui::{CentralPanel, Frame, TopBottomPanel};

/// Main application window.
pub struct PlantStoreApp {
    state: ScreenState,
    pager: Pager,
    artwork: ArtworkTextures,
}

impl PlantStoreApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        Self {
            state: ScreenState::new(CATEGORIES.len(), config.page_count),
            pager: Pager::new(config),
            artwork: ArtworkTextures::load(
                &cc.egui_ctx,
                ARTWORK_SIZE,
                config.transform.blur_radius,
            ),
        }
    }

    /// Handle a chip tap
    fn handle_chip_action(&mut self, action: ChipSelectorAction, ctx: &egui::Context) {
        if let ChipSelectorAction::Selected(index) = action {
            match self.state.select_category(index) {
                Ok(true) => ctx.request_repaint(),
                Ok(false) => {}
                Err(e) => log::warn!("Ignoring chip tap: {}", e),
            }
        }
    }
}

impl eframe::App for PlantStoreApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Bottom panel - Navigation bar
        TopBottomPanel::bottom("nav_bar")
            .show_separator_line(false)
            .frame(Frame::none().fill(BACKGROUND).inner_margin(0.0))
            .show(ctx, |ui| {
                ui.add_space(NAV_BAR_TOP_GAP);
                nav_bar::show(ui);
            });

        // Central panel - Headers, chips and pager
        CentralPanel::default()
            .frame(Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                header::headline(ui);

                let mut chip_action = ChipSelectorAction::None;
                header::section(ui, |ui| {
                    chip_action = ChipSelector::show(ui, &self.state.category);
                });
                self.handle_chip_action(chip_action, ctx);

                header::collections_title(ui);

                if let PagerAction::AddToCart(page) =
                    self.pager.show(ui, &mut self.state, &self.artwork)
                {
                    // Placeholder: the button has no behaviour yet.
                    log::info!("Add to Cart tapped for page {}", page);
                }
            });

        if self.pager.is_animating() {
            ctx.request_repaint();
        }
    }
}
