use egui::Vec2;

/// Handle for one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Handle for an installed viewport-resize observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeToken(pub u64);

/// The display-refresh scheduler and viewport the renderer runs against.
///
/// Frames are delivered one at a time by calling
/// [`StarfieldRenderer::tick`](crate::StarfieldRenderer::tick) with the token
/// returned from [`FrameHost::request_frame`].
pub trait FrameHost {
    fn viewport(&self) -> Vec2;
    fn request_frame(&mut self) -> FrameToken;
    fn cancel_frame(&mut self, token: FrameToken);
    fn observe_resize(&mut self) -> ResizeToken;
    fn unobserve_resize(&mut self, token: ResizeToken);
}
