use egui::{Color32, Pos2, Shape, Vec2};

/// Drawing target owned by a running renderer.
pub trait Surface {
    fn size(&self) -> Vec2;
    fn resize(&mut self, size: Vec2);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Pos2, radius: f32, tint: Color32, opacity: f32);
}

/// Collects the frame as egui shapes for painting on a background layer.
#[derive(Debug, Clone, Default)]
pub struct ShapeSurface {
    size: Vec2,
    shapes: Vec<Shape>,
}

impl ShapeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Surface for ShapeSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, tint: Color32, opacity: f32) {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        let color = Color32::from_rgba_unmultiplied(tint.r(), tint.g(), tint.b(), alpha);
        self.shapes.push(Shape::circle_filled(center, radius, color));
    }
}
