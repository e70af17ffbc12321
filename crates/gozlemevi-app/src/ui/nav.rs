use eframe::egui::{self, Align, Layout, RichText};

use super::theme::GozlemeviPalette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Memories,
}

pub fn show_nav(ctx: &egui::Context, palette: &GozlemeviPalette, view: &mut View, wish_count: usize) {
    egui::TopBottomPanel::top("gozlemevi_nav")
        .frame(
            egui::Frame::none()
                .fill(palette.panel)
                .stroke(egui::Stroke::new(1.0, palette.border))
                .inner_margin(egui::Margin::symmetric(24.0, 14.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("★").size(30.0).color(palette.accent));
                ui.vertical(|ui| {
                    ui.label(RichText::new("Gözlemevi").strong().size(20.0).color(palette.accent));
                    ui.label(RichText::new("Dijital Hatıra Defteri").small().color(palette.text_muted));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let memories = if wish_count > 0 {
                        format!("Hatıralar  {wish_count}")
                    } else {
                        "Hatıralar".to_owned()
                    };
                    nav_button(ui, palette, view, View::Memories, &memories);
                    nav_button(ui, palette, view, View::Home, "Ana Sayfa");
                });
            });
        });
}

fn nav_button(ui: &mut egui::Ui, palette: &GozlemeviPalette, view: &mut View, target: View, label: &str) {
    let selected = *view == target;
    let color = if selected {
        palette.accent
    } else {
        palette.text_muted
    };
    if ui
        .add(egui::SelectableLabel::new(selected, RichText::new(label).color(color)))
        .clicked()
    {
        *view = target;
    }
}
