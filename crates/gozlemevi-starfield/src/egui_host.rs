use egui::{Context, Vec2};

use crate::host::{FrameHost, FrameToken, ResizeToken};

/// What the host has to deliver during one egui pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostPass {
    /// An observed viewport size change since the previous pass.
    pub resized: bool,
    /// Frame requested during an earlier pass and due now.
    pub due: Option<FrameToken>,
    pub elapsed_ms: f64,
}

/// Maps frame requests onto egui repaints and resize observation onto
/// screen-rect changes between passes.
#[derive(Debug, Clone)]
pub struct EguiFrameHost {
    ctx: Context,
    viewport: Vec2,
    next_token: u64,
    pending: Option<FrameToken>,
    observer: Option<ResizeToken>,
}

impl EguiFrameHost {
    pub fn new(ctx: Context, viewport: Vec2) -> Self {
        Self {
            ctx,
            viewport,
            next_token: 0,
            pending: None,
            observer: None,
        }
    }

    /// Call at the start of every pass with the current screen size and
    /// `egui::InputState::time` in seconds.
    pub fn begin_pass(&mut self, viewport: Vec2, time_s: f64) -> HostPass {
        let resized = self.observer.is_some() && viewport != self.viewport;
        self.viewport = viewport;
        HostPass {
            resized,
            due: self.pending.take(),
            elapsed_ms: time_s * 1_000.0,
        }
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_observing_resize(&self) -> bool {
        self.observer.is_some()
    }

    fn next(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }
}

impl FrameHost for EguiFrameHost {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next());
        self.pending = Some(token);
        self.ctx.request_repaint();
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }

    fn observe_resize(&mut self) -> ResizeToken {
        let token = ResizeToken(self.next());
        self.observer = Some(token);
        token
    }

    fn unobserve_resize(&mut self, token: ResizeToken) {
        if self.observer == Some(token) {
            self.observer = None;
        }
    }
}
