use eframe::egui::{self, RichText};
use gozlemevi_store::Wish;

use super::theme::GozlemeviPalette;
use crate::attachment::{wish_image_key, ImageCache};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Large card on the home view, with the date in the footer.
    Featured,
    /// Small archive tile; the date is shown by the group header instead.
    Compact,
}

impl CardStyle {
    fn width(self) -> f32 {
        match self {
            Self::Featured => 300.0,
            Self::Compact => 220.0,
        }
    }

    fn image_height(self) -> f32 {
        match self {
            Self::Featured => 128.0,
            Self::Compact => 96.0,
        }
    }
}

pub fn wish_card(
    ui: &mut egui::Ui,
    wish: &Wish,
    style: CardStyle,
    palette: &GozlemeviPalette,
    images: &mut ImageCache,
) {
    ui.allocate_ui(egui::vec2(style.width(), 0.0), |ui| {
        palette.card_frame().show(ui, |ui| {
            ui.set_width(style.width() - 32.0);
            if let Some(uri) = &wish.image {
                if let Some(image) = images.image(&wish_image_key(&wish.id, uri), uri) {
                    ui.add(
                        image
                            .max_height(style.image_height())
                            .max_width(ui.available_width())
                            .rounding(8.0),
                    );
                }
            }
            let body = RichText::new(format!("\"{}\"", wish.message)).color(palette.text_primary);
            let body = match style {
                CardStyle::Featured => body,
                CardStyle::Compact => body.small(),
            };
            ui.add(egui::Label::new(body).wrap(true));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("☺ {}", wish.name)).strong().small().color(palette.accent));
                if style == CardStyle::Featured {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(&wish.date).small().color(palette.text_muted));
                    });
                }
            });
        });
    });
}

/// Today's wishes under the form.
pub fn show_today(
    ui: &mut egui::Ui,
    wishes: &[&Wish],
    palette: &GozlemeviPalette,
    images: &mut ImageCache,
) {
    if wishes.is_empty() {
        return;
    }
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("★  Yıldızlar Arasındaki Dilekler  ★")
                .size(28.0)
                .strong()
                .color(palette.accent),
        );
        ui.label(RichText::new("Günün toplanan güzel dilekleri").color(palette.text_soft));
    });
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        for wish in wishes {
            wish_card(ui, wish, CardStyle::Featured, palette, images);
        }
    });
}
