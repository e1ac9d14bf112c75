//! Reusable UI components
//!
//! Standalone widgets used by the landing page: the architecture summary
//! card and the monospace inline code chip.

use crate::cards::Card;
use crate::theme;
use eframe::egui;

/// Phosphor icon shown next to each card title
fn card_icon(title: &str) -> &'static str {
    match title {
        "Frontend" => egui_phosphor::regular::MONITOR,
        "Backend" => egui_phosphor::regular::CLOUD,
        "Database" => egui_phosphor::regular::DATABASE,
        "Testing" => egui_phosphor::regular::FLASK,
        _ => egui_phosphor::regular::SQUARE,
    }
}

/// Render one architecture summary card: title subheading, emphasized
/// value, muted description.
pub fn card(ui: &mut egui::Ui, card: &Card) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_height(theme::CARD_MIN_HEIGHT - 2.0 * theme::SPACING_XL);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(card_icon(card.title))
                    .size(theme::FONT_HEADING)
                    .color(theme::ACCENT),
            );
            ui.label(
                egui::RichText::new(card.title)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
        });
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(card.value)
                .size(theme::FONT_BODY)
                .strong()
                .color(theme::ACCENT_LIGHT),
        );
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(card.desc)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
    });
}

/// Monospace inline chip, used for the API base URL
pub fn code_chip(ui: &mut egui::Ui, text: &str) {
    theme::code_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_MONO)
                .monospace()
                .color(theme::ACCENT_LIGHT),
        );
    });
}
