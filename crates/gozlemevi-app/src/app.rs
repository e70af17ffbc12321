use std::time::Instant;

use eframe::egui::{self, RichText};
use eframe::{App, CreationContext};
use gozlemevi_store::{SlotStorage, SubscriptionId, SystemClock, WishBook};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::attachment::ImageCache;
use crate::ui::cards::show_today;
use crate::ui::gallery::show_gallery;
use crate::ui::nav::show_nav;
use crate::ui::sky::Sky;
use crate::ui::stats::show_stats;
use crate::ui::{GozlemeviTheme, View, WishForm};

pub struct AppOptions {
    pub storage: Box<dyn SlotStorage>,
    pub storage_key: String,
    pub star_seed: Option<u64>,
}

pub struct GozlemeviApp {
    theme: GozlemeviTheme,
    book: WishBook<Box<dyn SlotStorage>>,
    view: View,
    form: WishForm,
    images: ImageCache,
    sky: Sky,
    clock: SystemClock,
    book_subscription: SubscriptionId,
}

impl GozlemeviApp {
    pub fn new(cc: &CreationContext<'_>, options: AppOptions) -> Self {
        let ctx = cc.egui_ctx.clone();
        let theme = GozlemeviTheme::init(&ctx);

        let mut book = WishBook::open_with_key(options.storage, options.storage_key);
        info!(key = book.key(), wishes = book.len(), "wish book opened");
        let repaint = ctx.clone();
        let book_subscription = book.subscribe(move |wishes| {
            debug!(wishes = wishes.len(), "wish book changed");
            repaint.request_repaint();
        });

        let rng = match options.star_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            theme,
            book,
            view: View::default(),
            form: WishForm::default(),
            images: ImageCache::default(),
            sky: Sky::new(rng),
            clock: SystemClock,
            book_subscription,
        }
    }

    fn commit_ready_submission(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if let Some(wish) = self.form.take_ready(now) {
            info!(id = %wish.id, name = %wish.name, "wish added");
            self.book.append(wish);
        }
        if let Some(remaining) = self.form.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    fn show_home(&mut self, ui: &mut egui::Ui) {
        let palette = self.theme.palette();
        ui.add_space(56.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Gökyüzüne Dokunun")
                    .size(44.0)
                    .strong()
                    .color(palette.accent),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Dileklerinizi, hayallerinizi ve güzel anılarınızı yıldızlar arasına yazın.\n\
                     Her dilek, gökyüzünde ebedi bir ışık olsun.",
                )
                .size(18.0)
                .color(palette.text_soft),
            );
        });
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            self.form.show(ui, palette, &mut self.images, &self.clock);
        });

        let today = self.book.today(&self.clock);
        if !today.is_empty() {
            ui.add_space(56.0);
            show_today(ui, &today, palette, &mut self.images);
        }

        ui.add_space(56.0);
        show_stats(ui, self.book.stats(), palette);
    }

    fn show_footer(&self, ctx: &egui::Context) {
        let palette = self.theme.palette();
        egui::TopBottomPanel::bottom("gozlemevi_footer")
            .frame(
                egui::Frame::none()
                    .fill(palette.panel)
                    .stroke(egui::Stroke::new(1.0, palette.border))
                    .inner_margin(egui::Margin::symmetric(24.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("★  Gözlemevi Dijital Hatıra Defteri  ★")
                            .strong()
                            .color(palette.accent),
                    );
                    ui.label(
                        RichText::new("Her dilek bir yıldız, her anı bir ışık ✨")
                            .small()
                            .color(palette.text_muted),
                    );
                });
            });
    }
}

impl App for GozlemeviApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sky.drive_and_paint(ctx, self.theme.palette());
        self.commit_ready_submission(ctx);

        show_nav(ctx, self.theme.palette(), &mut self.view, self.book.len());
        self.show_footer(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(egui::Margin::symmetric(24.0, 0.0)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.view {
                        View::Home => self.show_home(ui),
                        View::Memories => {
                            let groups = self.book.archive();
                            show_gallery(ui, &groups, self.theme.palette(), &mut self.images);
                        }
                    });
            });
    }
}

impl Drop for GozlemeviApp {
    fn drop(&mut self) {
        self.sky.stop();
        self.book.unsubscribe(self.book_subscription);
    }
}
