use eframe::egui::epaint::Margin;
use eframe::egui::{self, Color32, Context, FontId, Rounding, Stroke, TextStyle};

#[derive(Clone)]
pub struct GozlemeviPalette {
    pub sky_edge: Color32,
    pub sky_center: Color32,
    pub panel: Color32,
    pub panel_solid: Color32,
    pub field: Color32,
    pub border: Color32,
    pub border_strong: Color32,
    pub accent: Color32,
    pub accent_alt: Color32,
    pub accent_soft: Color32,
    pub text_primary: Color32,
    pub text_soft: Color32,
    pub text_muted: Color32,
    pub danger: Color32,
}

impl GozlemeviPalette {
    pub fn new() -> Self {
        Self {
            sky_edge: Color32::from_rgb(15, 23, 42),
            sky_center: Color32::from_rgb(30, 41, 59),
            panel: Color32::from_rgba_unmultiplied(15, 23, 42, 204),
            panel_solid: Color32::from_rgb(30, 41, 59),
            field: Color32::from_rgba_unmultiplied(30, 41, 59, 128),
            border: Color32::from_rgba_unmultiplied(250, 204, 21, 51),
            border_strong: Color32::from_rgba_unmultiplied(250, 204, 21, 102),
            accent: Color32::from_rgb(250, 204, 21),
            accent_alt: Color32::from_rgb(245, 158, 11),
            accent_soft: Color32::from_rgba_unmultiplied(250, 204, 21, 51),
            text_primary: Color32::from_rgb(241, 245, 249),
            text_soft: Color32::from_rgb(203, 213, 225),
            text_muted: Color32::from_rgb(148, 163, 184),
            danger: Color32::from_rgb(239, 68, 68),
        }
    }

    /// Translucent card frame used by the form, wish cards and stat tiles.
    pub fn card_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.panel)
            .rounding(Rounding::same(14.0))
            .stroke(Stroke::new(1.0, self.border))
            .inner_margin(Margin::same(16.0))
    }
}

impl Default for GozlemeviPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct GozlemeviTheme {
    palette: GozlemeviPalette,
}

impl GozlemeviTheme {
    pub fn init(ctx: &Context) -> Self {
        let palette = GozlemeviPalette::new();
        let mut style = (*ctx.style()).clone();
        let mut visuals = style.visuals.clone();
        visuals.dark_mode = true;
        visuals.override_text_color = Some(palette.text_primary);
        visuals.panel_fill = Color32::TRANSPARENT;
        visuals.window_fill = palette.panel_solid;
        visuals.window_stroke = Stroke::new(1.0, palette.border);
        visuals.window_rounding = Rounding::same(14.0);
        visuals.extreme_bg_color = palette.field;
        visuals.widgets.noninteractive.bg_fill = palette.panel;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_soft);
        visuals.widgets.inactive.bg_fill = palette.accent_soft;
        visuals.widgets.inactive.weak_bg_fill = palette.accent_soft;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, palette.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.accent);
        visuals.widgets.inactive.rounding = Rounding::same(8.0);
        visuals.widgets.hovered.bg_fill = palette.border_strong;
        visuals.widgets.hovered.weak_bg_fill = palette.border_strong;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.accent);
        visuals.widgets.hovered.rounding = Rounding::same(8.0);
        visuals.widgets.active.bg_fill = palette.accent_alt;
        visuals.widgets.active.weak_bg_fill = palette.accent_alt;
        visuals.widgets.active.fg_stroke = Stroke::new(1.2, palette.sky_edge);
        visuals.widgets.active.rounding = Rounding::same(8.0);
        visuals.selection.bg_fill = palette.accent_soft;
        visuals.selection.stroke = Stroke::new(1.0, palette.accent);
        visuals.hyperlink_color = palette.accent;
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.window_margin = Margin::same(12.0);
        style.text_styles = [
            (TextStyle::Heading, FontId::proportional(30.0)),
            (TextStyle::Body, FontId::proportional(16.0)),
            (TextStyle::Button, FontId::proportional(16.0)),
            (TextStyle::Small, FontId::proportional(12.0)),
            (TextStyle::Monospace, FontId::monospace(14.0)),
        ]
        .into();
        ctx.set_style(style);
        Self { palette }
    }

    pub fn palette(&self) -> &GozlemeviPalette {
        &self.palette
    }
}
