use std::path::PathBuf;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align, Layout, RichText};
use gozlemevi_store::{
    Clock, DraftError, Wish, WishDraft, MAX_MESSAGE_CHARS, MAX_NAME_CHARS,
};
use tracing::{debug, warn};

use super::theme::GozlemeviPalette;
use crate::attachment::{attach_image, ImageCache};

/// How long a submitted wish shows as "sending" before it is committed.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug)]
struct PendingWish {
    wish: Wish,
    ready_at: Instant,
}

/// Wish form state. The form never touches the collection: a finished
/// submission is handed out through [`WishForm::take_ready`].
#[derive(Debug, Default)]
pub struct WishForm {
    name: String,
    message: String,
    image_path: String,
    image: Option<String>,
    preview_serial: u64,
    error: Option<String>,
    pending: Option<PendingWish>,
}

impl WishForm {
    pub fn draft(&self) -> WishDraft {
        WishDraft {
            name: self.name.clone(),
            message: self.message.clone(),
            image: self.image.clone(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.draft().is_submittable()
    }

    /// Validates the current input and starts the send delay.
    pub fn begin_submit(&mut self, clock: &impl Clock, now: Instant) -> Result<(), DraftError> {
        if self.is_submitting() {
            return Ok(());
        }
        let wish = Wish::from_draft(self.draft(), clock)?;
        debug!(id = %wish.id, "wish submission started");
        self.error = None;
        self.pending = Some(PendingWish {
            wish,
            ready_at: now + SUBMIT_DELAY,
        });
        Ok(())
    }

    /// Time left before the pending submission completes.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.ready_at.saturating_duration_since(now))
    }

    /// Returns the submitted wish once its delay has elapsed and resets the form.
    pub fn take_ready(&mut self, now: Instant) -> Option<Wish> {
        if self.pending.as_ref()?.ready_at > now {
            return None;
        }
        let pending = self.pending.take()?;
        self.name.clear();
        self.message.clear();
        self.image_path.clear();
        self.image = None;
        Some(pending.wish)
    }

    fn attach(&mut self, images: &mut ImageCache, ctx: &egui::Context) {
        let path = PathBuf::from(self.image_path.trim());
        match attach_image(&path) {
            Ok(uri) => {
                self.clear_image(images, ctx);
                self.image = Some(uri);
                self.error = None;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "image attachment failed");
                self.error = Some(format!("{err:#}"));
            }
        }
    }

    fn clear_image(&mut self, images: &mut ImageCache, ctx: &egui::Context) {
        images.forget(ctx, &self.preview_key());
        self.preview_serial += 1;
        self.image = None;
    }

    fn preview_key(&self) -> String {
        format!("draft/{}", self.preview_serial)
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        palette: &GozlemeviPalette,
        images: &mut ImageCache,
        clock: &impl Clock,
    ) {
        palette.card_frame().show(ui, |ui| {
            ui.set_max_width(480.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("★  Gökyüzü Dileğin  ★")
                        .size(24.0)
                        .strong()
                        .color(palette.accent),
                );
                ui.label(RichText::new("Dileklerini yıldızlar arasına yazdır").color(palette.text_soft));
            });
            ui.add_space(12.0);

            let editable = !self.is_submitting();
            ui.label(RichText::new("İsmin").color(palette.accent));
            ui.add_enabled(
                editable,
                egui::TextEdit::singleline(&mut self.name)
                    .hint_text("Adını yaz...")
                    .char_limit(MAX_NAME_CHARS)
                    .desired_width(f32::INFINITY),
            );

            ui.label(RichText::new("Gökyüzü Dileğin").color(palette.accent));
            ui.add_enabled(
                editable,
                egui::TextEdit::multiline(&mut self.message)
                    .hint_text("Dileklerini, hayallerini ya da güzel düşüncelerini yaz...")
                    .char_limit(MAX_MESSAGE_CHARS)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.label(
                    RichText::new(format!(
                        "{}/{MAX_MESSAGE_CHARS}",
                        self.message.chars().count()
                    ))
                    .small()
                    .color(palette.text_muted),
                );
            });

            ui.label(RichText::new("Güzel Bir Anı (İsteğe Bağlı)").color(palette.accent));
            self.show_attachment(ui, palette, images, editable);

            if let Some(error) = &self.error {
                ui.label(RichText::new(error).small().color(palette.danger));
            }

            ui.add_space(8.0);
            let label = if self.is_submitting() {
                "Gönderiliyor..."
            } else {
                "➤  Yıldızlar Arasına Gönder"
            };
            let button = egui::Button::new(RichText::new(label).strong().color(palette.sky_edge))
                .fill(palette.accent)
                .min_size(egui::vec2(ui.available_width(), 40.0));
            if ui.add_enabled(self.can_submit(), button).clicked() {
                if let Err(err) = self.begin_submit(clock, Instant::now()) {
                    self.error = Some(err.to_string());
                }
            }
            if self.is_submitting() {
                ui.vertical_centered(|ui| ui.add(egui::Spinner::new().color(palette.accent)));
            }
        });
    }

    fn show_attachment(
        &mut self,
        ui: &mut egui::Ui,
        palette: &GozlemeviPalette,
        images: &mut ImageCache,
        editable: bool,
    ) {
        if let Some(uri) = self.image.clone() {
            let key = self.preview_key();
            if let Some(image) = images.image(&key, &uri) {
                ui.add(image.max_height(128.0).rounding(8.0));
            }
            if ui
                .add_enabled(editable, egui::Button::new(RichText::new("× Kaldır").color(palette.danger)))
                .clicked()
            {
                self.clear_image(images, ui.ctx());
            }
            return;
        }
        ui.label(
            RichText::new("Çiçek, manzara ya da güzel bir anını paylaş")
                .small()
                .color(palette.text_muted),
        );
        ui.horizontal(|ui| {
            ui.add_enabled(
                editable,
                egui::TextEdit::singleline(&mut self.image_path)
                    .hint_text("/yol/anı.jpg")
                    .desired_width(ui.available_width() - 110.0),
            );
            let can_attach = editable && !self.image_path.trim().is_empty();
            if ui.add_enabled(can_attach, egui::Button::new("Görsel Seç")).clicked() {
                self.attach(images, ui.ctx());
            }
        });
    }
}
