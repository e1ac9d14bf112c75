//! UI module - page layout and rendering components

pub mod components;

use crate::cards::CARDS;
use crate::config::Config;
use crate::constants::TAGLINE;
use crate::theme;

/// Render the full landing page into the central panel.
///
/// Pure function of the resolved configuration and the fixed card list;
/// repainting with the same `Config` always produces the same frame.
pub fn render_page(ui: &mut egui::Ui, config: &Config) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Center a column clamped to the content max width
            let panel_w = ui.available_width();
            let content_w = panel_w.min(theme::CONTENT_MAX_WIDTH);
            let margin = ((panel_w - content_w) / 2.0).max(0.0);

            ui.horizontal(|ui| {
                ui.add_space(margin);
                ui.vertical(|ui| {
                    ui.set_width(content_w);

                    ui.label(
                        egui::RichText::new(&config.app_title)
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new(TAGLINE)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_SECONDARY),
                    );

                    ui.add_space(theme::SPACING_MD);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("API Base URL:")
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_SECONDARY),
                        );
                        components::code_chip(ui, &config.api_base_url);
                    });

                    ui.add_space(theme::SPACING_XL);
                    render_card_grid(ui, content_w);
                });
            });
        });
}

/// Responsive card grid: as many columns as fit at the minimum card width,
/// cards stretched evenly across the content column, list order preserved.
fn render_card_grid(ui: &mut egui::Ui, width: f32) {
    let spacing = theme::SPACING_XL;
    let num_cols = ((width + spacing) / (theme::CARD_MIN_WIDTH + spacing))
        .floor()
        .max(1.0)
        .min(CARDS.len() as f32);
    let card_w = ((width - spacing * (num_cols - 1.0)) / num_cols).floor();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
        for card in &CARDS {
            ui.allocate_ui(egui::vec2(card_w, theme::CARD_MIN_HEIGHT), |ui| {
                ui.set_min_size(egui::vec2(card_w, theme::CARD_MIN_HEIGHT));
                ui.set_max_width(card_w);
                components::card(ui, card);
            });
        }
    });
}
