use eframe::egui::{self, RichText};
use gozlemevi_store::DayGroup;

use super::cards::{wish_card, CardStyle};
use super::theme::GozlemeviPalette;
use crate::attachment::ImageCache;

/// Archive of every wish, one section per day.
pub fn show_gallery(
    ui: &mut egui::Ui,
    groups: &[DayGroup<'_>],
    palette: &GozlemeviPalette,
    images: &mut ImageCache,
) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("🗓  Hatıralar Arşivi")
                .size(34.0)
                .strong()
                .color(palette.accent),
        );
        ui.label(RichText::new("Tüm güzel anlar ve dilekler burada saklı").color(palette.text_soft));
    });
    ui.add_space(24.0);

    if groups.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(RichText::new("⭐").size(56.0));
            ui.label(RichText::new("Henüz hiç hatıra eklenmemiş...").color(palette.text_muted));
            ui.label(RichText::new("İlk dileği sen ekle!").small().color(palette.text_muted));
        });
        return;
    }

    for group in groups {
        ui.vertical_centered(|ui| {
            egui::Frame::none()
                .fill(palette.panel_solid)
                .rounding(egui::Rounding::same(16.0))
                .stroke(egui::Stroke::new(1.0, palette.border_strong))
                .inner_margin(egui::Margin::symmetric(18.0, 6.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(group.date).strong().color(palette.accent));
                        ui.label(
                            RichText::new(format!("({} dilek)", group.wishes.len()))
                                .color(palette.text_muted),
                        );
                    });
                });
        });
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for wish in &group.wishes {
                wish_card(ui, wish, CardStyle::Compact, palette, images);
            }
        });
        ui.add_space(32.0);
    }
}
