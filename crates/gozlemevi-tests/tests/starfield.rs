use egui::{Context, Vec2};
use gozlemevi_starfield::{
    EguiFrameHost, FrameHost, RendererPhase, ShapeSurface, StarfieldRenderer, STAR_COUNT,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn host() -> EguiFrameHost {
    EguiFrameHost::new(Context::default(), Vec2::new(1024.0, 768.0))
}

#[test]
fn full_lifecycle_leaves_nothing_scheduled() {
    let mut host = host();
    let mut renderer = StarfieldRenderer::new();
    renderer.stop(&mut host);
    assert_eq!(renderer.phase(), RendererPhase::Uninitialized);

    assert!(renderer.start(
        Some(ShapeSurface::new()),
        &mut host,
        &mut StdRng::seed_from_u64(2026)
    ));
    assert_eq!(renderer.stars().len(), STAR_COUNT);

    let mut time = 0.0;
    for _ in 0..5 {
        let pass = host.begin_pass(host.viewport(), time);
        renderer.tick(pass.due.unwrap(), pass.elapsed_ms, &mut host);
        time += 1.0 / 60.0;
    }

    renderer.stop(&mut host);
    renderer.stop(&mut host);
    assert_eq!(renderer.phase(), RendererPhase::Stopped);
    assert!(!host.has_pending_frame());
    assert!(!host.is_observing_resize());
    assert_eq!(host.begin_pass(host.viewport(), time).due, None);
}

#[test]
fn drawn_opacities_stay_within_twinkle_band() {
    let mut host = host();
    let mut renderer = StarfieldRenderer::new();
    renderer.start(
        Some(ShapeSurface::new()),
        &mut host,
        &mut StdRng::seed_from_u64(5),
    );
    let stars = renderer.stars().to_vec();
    for step in 0..50 {
        let elapsed = f64::from(step) * 97.0;
        for star in &stars {
            let opacity = star.opacity_at(elapsed);
            assert!(opacity >= 0.4 * star.opacity - 1e-6);
            assert!(opacity <= star.opacity + 1e-6);
        }
    }
}
