use eframe::egui::{self, pos2, LayerId, Mesh, Painter, Rect, Shape};
use gozlemevi_starfield::{EguiFrameHost, ShapeSurface, StarfieldRenderer};
use rand::rngs::StdRng;
use tracing::debug;

use super::theme::GozlemeviPalette;

/// Night sky behind every panel.
///
/// The star field is scattered on the first pass, once egui reports the real
/// screen size; before that `screen_rect` is only a placeholder.
pub struct Sky {
    renderer: StarfieldRenderer<ShapeSurface>,
    host: Option<EguiFrameHost>,
    rng: StdRng,
}

impl Sky {
    pub fn new(rng: StdRng) -> Self {
        Self {
            renderer: StarfieldRenderer::new(),
            host: None,
            rng,
        }
    }

    pub fn renderer(&self) -> &StarfieldRenderer<ShapeSurface> {
        &self.renderer
    }

    /// Delivers this pass's frame to the star field and paints the sky.
    pub fn drive_and_paint(&mut self, ctx: &egui::Context, palette: &GozlemeviPalette) {
        let (screen, time) = ctx.input(|i| (i.screen_rect(), i.time));
        if self.host.is_none() {
            let mut host = EguiFrameHost::new(ctx.clone(), screen.size());
            self.renderer
                .start(Some(ShapeSurface::new()), &mut host, &mut self.rng);
            debug!(width = screen.width(), height = screen.height(), "star field started");
            self.host = Some(host);
        }

        if let Some(host) = self.host.as_mut() {
            let pass = host.begin_pass(screen.size(), time);
            if pass.resized {
                self.renderer.resize(&*host);
            }
            if let Some(token) = pass.due {
                self.renderer.tick(token, pass.elapsed_ms, host);
            }
        }

        let painter = ctx.layer_painter(LayerId::background());
        paint_gradient(&painter, screen, palette);
        if let Some(surface) = self.renderer.surface() {
            painter.extend(surface.shapes().iter().cloned());
        }
    }

    pub fn stop(&mut self) {
        if let Some(host) = self.host.as_mut() {
            self.renderer.stop(host);
        }
    }
}

fn paint_gradient(painter: &Painter, rect: Rect, palette: &GozlemeviPalette) {
    let stops = [
        (0.0, palette.sky_edge),
        (0.5, palette.sky_center),
        (1.0, palette.sky_edge),
    ];
    let mut mesh = Mesh::default();
    for (index, (t, color)) in stops.iter().enumerate() {
        let y = rect.top() + rect.height() * t;
        mesh.colored_vertex(pos2(rect.left(), y), *color);
        mesh.colored_vertex(pos2(rect.right(), y), *color);
        if index > 0 {
            let base = index as u32 * 2;
            mesh.add_triangle(base - 2, base - 1, base);
            mesh.add_triangle(base - 1, base + 1, base);
        }
    }
    painter.add(Shape::mesh(mesh));
}
