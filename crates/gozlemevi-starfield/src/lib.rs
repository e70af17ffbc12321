//! Animated twinkling star field drawn behind the Gözlemevi views.

pub mod egui_host;
pub mod host;
pub mod renderer;
pub mod star;
pub mod surface;

pub use egui_host::EguiFrameHost;
pub use host::{FrameHost, FrameToken, ResizeToken};
pub use renderer::{RendererPhase, StarfieldRenderer};
pub use star::{twinkle, Star, STAR_COUNT, STAR_TINT};
pub use surface::{ShapeSurface, Surface};
