use rand::Rng;
use tracing::{debug, trace};

use crate::host::{FrameHost, FrameToken, ResizeToken};
use crate::star::{Star, GLOW_OPACITY_SCALE, GLOW_RADIUS_SCALE, GLOW_THRESHOLD, STAR_COUNT, STAR_TINT};
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererPhase {
    Uninitialized,
    Running,
    Stopped,
}

#[derive(Debug)]
struct Running<S> {
    surface: S,
    stars: Vec<Star>,
    pending: Option<FrameToken>,
    resize: ResizeToken,
}

#[derive(Debug)]
enum State<S> {
    Uninitialized,
    Running(Running<S>),
    Stopped,
}

/// Self-rescheduling star field animation.
///
/// `Uninitialized → start → Running → stop → Stopped`. Only one frame is ever
/// outstanding; a tick for any other token is ignored.
#[derive(Debug)]
pub struct StarfieldRenderer<S> {
    state: State<S>,
}

impl<S> Default for StarfieldRenderer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StarfieldRenderer<S> {
    pub fn new() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    pub fn phase(&self) -> RendererPhase {
        match self.state {
            State::Uninitialized => RendererPhase::Uninitialized,
            State::Running(_) => RendererPhase::Running,
            State::Stopped => RendererPhase::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    pub fn stars(&self) -> &[Star] {
        match &self.state {
            State::Running(running) => &running.stars,
            _ => &[],
        }
    }

    pub fn surface(&self) -> Option<&S> {
        match &self.state {
            State::Running(running) => Some(&running.surface),
            _ => None,
        }
    }

    /// Frame the loop is waiting on, if any.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        match &self.state {
            State::Running(running) => running.pending,
            _ => None,
        }
    }
}

impl<S: Surface> StarfieldRenderer<S> {
    /// Takes ownership of `surface`, sizes it to the viewport, scatters
    /// [`STAR_COUNT`] stars and requests the first frame.
    ///
    /// Without a surface nothing is allocated and the renderer stays
    /// uninitialized. Returns whether the loop was started by this call.
    pub fn start<H, R>(&mut self, surface: Option<S>, host: &mut H, rng: &mut R) -> bool
    where
        H: FrameHost + ?Sized,
        R: Rng + ?Sized,
    {
        if !matches!(self.state, State::Uninitialized) {
            trace!(phase = ?self.phase(), "starfield start ignored");
            return false;
        }
        let Some(mut surface) = surface else {
            debug!("starfield start skipped: no drawing surface");
            return false;
        };
        let viewport = host.viewport();
        surface.resize(viewport);
        let stars = Star::field(rng, viewport, STAR_COUNT);
        let resize = host.observe_resize();
        let pending = Some(host.request_frame());
        debug!(width = viewport.x, height = viewport.y, stars = stars.len(), "starfield started");
        self.state = State::Running(Running {
            surface,
            stars,
            pending,
            resize,
        });
        true
    }

    /// Renders one frame for `token` and schedules the next one.
    pub fn tick<H: FrameHost + ?Sized>(&mut self, token: FrameToken, elapsed_ms: f64, host: &mut H) {
        let State::Running(running) = &mut self.state else {
            return;
        };
        if running.pending != Some(token) {
            trace!(?token, pending = ?running.pending, "stale starfield frame dropped");
            return;
        }
        running.pending = None;
        draw_frame(&mut running.surface, &running.stars, elapsed_ms);
        running.pending = Some(host.request_frame());
    }

    /// Follows the viewport size. Star positions are kept as they are, so
    /// shrinking the window can leave some stars outside the visible area.
    pub fn resize<H: FrameHost + ?Sized>(&mut self, host: &H) {
        if let State::Running(running) = &mut self.state {
            let viewport = host.viewport();
            running.surface.resize(viewport);
            trace!(width = viewport.x, height = viewport.y, "starfield resized");
        }
    }

    /// Cancels the pending frame and removes the resize observer. Safe to
    /// call in any phase; before `start` it leaves the renderer untouched.
    pub fn stop<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if !self.is_running() {
            return;
        }
        if let State::Running(running) = std::mem::replace(&mut self.state, State::Stopped) {
            if let Some(token) = running.pending {
                host.cancel_frame(token);
            }
            host.unobserve_resize(running.resize);
            debug!("starfield stopped");
        }
    }
}

fn draw_frame<S: Surface>(surface: &mut S, stars: &[Star], elapsed_ms: f64) {
    surface.clear();
    for star in stars {
        let opacity = star.opacity_at(elapsed_ms);
        surface.fill_circle(star.position, star.radius, STAR_TINT, opacity);
        if opacity > GLOW_THRESHOLD {
            surface.fill_circle(
                star.position,
                star.radius * GLOW_RADIUS_SCALE,
                STAR_TINT,
                opacity * GLOW_OPACITY_SCALE,
            );
        }
    }
}
