use eframe::egui::{self, RichText};
use gozlemevi_store::WishStats;

use super::theme::GozlemeviPalette;

pub fn show_stats(ui: &mut egui::Ui, stats: WishStats, palette: &GozlemeviPalette) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Toplam İstatistikler")
                .size(24.0)
                .strong()
                .color(palette.accent),
        );
    });
    ui.add_space(16.0);
    ui.columns(3, |columns| {
        stat_tile(&mut columns[0], stats.total, "Toplam Dilek", palette);
        stat_tile(&mut columns[1], stats.with_image, "Paylaşılan Anı", palette);
        stat_tile(&mut columns[2], stats.active_days, "Aktif Gün", palette);
    });
}

fn stat_tile(ui: &mut egui::Ui, value: usize, label: &str, palette: &GozlemeviPalette) {
    palette.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value.to_string()).size(30.0).strong().color(palette.accent));
            ui.label(RichText::new(label).color(palette.text_soft));
        });
    });
}
