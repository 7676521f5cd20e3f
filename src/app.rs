//! The drawing application
//!
//! Owns one surface and the scene drawn on it. The host calls [`DrawingApp::redraw`]
//! once per frame and reschedules it for as long as it returns
//! [`FrameControl::Continue`].

use std::cell::Cell;
use std::rc::Rc;

use crate::renderer::Surface;
use crate::settings::Settings;
use crate::sim::{Actor, BACKGROUND, Circle, MotionTuning, PaletteColor, Scene};

/// What the host should do after a frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Request another frame
    Continue,
    /// The loop was stopped; do not reschedule
    Stop,
}

/// Cancels a running frame loop
///
/// Cheap to clone; all clones share one flag. Single-threaded only.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Circles animated on one surface
pub struct DrawingApp<S: Surface> {
    surface: S,
    scene: Scene,
    tuning: MotionTuning,
    stop: StopHandle,
    /// Frames drawn so far
    frames: u64,
}

impl<S: Surface> DrawingApp<S> {
    /// Take over `surface` and spawn the startup batch
    pub fn new(surface: S, settings: &Settings, seed: u64) -> Self {
        let mut app = Self {
            surface,
            scene: Scene::new(seed),
            tuning: settings.tuning,
            stop: StopHandle::default(),
            frames: 0,
        };
        app.add_circles(settings.initial_circles, settings.initial_actor);

        log::info!(
            "Drawing app started: {}x{} canvas, seed {}",
            app.surface.width(),
            app.surface.height(),
            seed
        );
        app
    }

    /// Spawn `count` circles of one color driven by `actor`
    pub fn add_circles(&mut self, count: usize, actor: Actor) -> usize {
        let bounds = self.surface.bounds();
        self.scene.add_circles(count, actor, bounds)
    }

    /// Next round-robin palette color
    pub fn next_color(&mut self) -> PaletteColor {
        self.scene.next_color()
    }

    /// Frame callback: clear, then draw and advance every circle in order
    pub fn redraw(&mut self) -> FrameControl {
        if self.stop.is_stopped() {
            return FrameControl::Stop;
        }

        let bounds = self.surface.bounds();
        self.surface.set_fill(BACKGROUND);
        self.surface.fill_rect(0.0, 0.0, bounds.width, bounds.height);

        for circle in self.scene.circles_mut() {
            self.surface.set_fill(circle.color());
            self.surface.fill_circle(circle.pos, circle.radius());
            circle.advance(bounds, &self.tuning);
        }

        self.frames += 1;
        FrameControl::Continue
    }

    /// Stop the loop at the next frame
    pub fn stop(&self) {
        if !self.stop.is_stopped() {
            log::info!("Drawing app stopped after {} frames", self.frames);
        }
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    pub fn circles(&self) -> &[Circle] {
        self.scene.circles()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn seed(&self) -> u64 {
        self.scene.seed()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Framebuffer;
    use glam::Vec2;

    /// Records draw calls instead of rasterizing
    #[derive(Default)]
    struct Recorder {
        width: u32,
        height: u32,
        fill: Option<PaletteColor>,
        rects: Vec<PaletteColor>,
        circles: Vec<(PaletteColor, Vec2, f32)>,
    }

    impl Surface for Recorder {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn set_fill(&mut self, color: PaletteColor) {
            self.fill = Some(color);
        }
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
            self.rects.extend(self.fill);
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32) {
            if let Some(fill) = self.fill {
                self.circles.push((fill, center, radius));
            }
        }
    }

    fn recorder(width: u32, height: u32) -> Recorder {
        Recorder {
            width,
            height,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_spawns_initial_batch() {
        let app = DrawingApp::new(Framebuffer::new(200, 100), &Settings::default(), 12345);
        assert_eq!(app.circles().len(), 10);
        assert!(app.circles().iter().all(|c| c.color() == PaletteColor::Red));
        assert!(app.circles().iter().all(|c| c.actor() == Actor::Bounce));
        assert_eq!(app.frame_count(), 0);
    }

    #[test]
    fn test_color_cycle_across_calls() {
        let settings = Settings {
            initial_circles: 0,
            ..Default::default()
        };
        let mut app = DrawingApp::new(recorder(100, 100), &settings, 1);
        // Startup batch consumed Red even though it was empty
        app.add_circles(1, Actor::Bounce);
        app.add_circles(1, Actor::Bounce);
        app.add_circles(1, Actor::Gravity);
        app.add_circles(1, Actor::Bounce);

        let colors: Vec<PaletteColor> = app.circles().iter().map(|c| c.color()).collect();
        assert_eq!(
            colors,
            vec![
                PaletteColor::Green,
                PaletteColor::Blue,
                PaletteColor::Red,
                PaletteColor::Green
            ]
        );
    }

    #[test]
    fn test_redraw_draws_then_moves() {
        let mut app = DrawingApp::new(recorder(300, 300), &Settings::default(), 5);
        let before: Vec<Vec2> = app.circles().iter().map(|c| c.pos).collect();

        assert_eq!(app.redraw(), FrameControl::Continue);

        let drawn: Vec<Vec2> = app.surface().circles.iter().map(|&(_, p, _)| p).collect();
        assert_eq!(drawn, before);
        assert_eq!(app.surface().rects, vec![BACKGROUND]);
        for (c, old) in app.circles().iter().zip(&before) {
            assert_ne!(c.pos, *old);
        }
    }

    #[test]
    fn test_redraw_keeps_circle_count() {
        let mut app = DrawingApp::new(Framebuffer::new(64, 64), &Settings::default(), 9);
        app.add_circles(5, Actor::Gravity);

        for _ in 0..100 {
            app.redraw();
        }
        assert_eq!(app.circles().len(), 15);
        assert_eq!(app.frame_count(), 100);
    }

    #[test]
    fn test_redraw_paints_background_and_circles() {
        let settings = Settings {
            initial_circles: 0,
            ..Default::default()
        };
        let mut app = DrawingApp::new(Framebuffer::new(100, 100), &settings, 3);
        app.add_circles(3, Actor::Bounce);
        app.redraw();

        let fb = app.surface();
        assert!(fb.pixels().contains(&0xFFFFFF));
        assert!(fb.pixels().contains(&PaletteColor::Green.rgb()));
        assert!(!fb.pixels().contains(&0));
    }

    #[test]
    fn test_bounds_follow_surface_resize() {
        let settings = Settings {
            initial_circles: 0,
            ..Default::default()
        };
        let mut app = DrawingApp::new(Framebuffer::new(10, 10), &settings, 3);
        app.surface_mut().resize(1000, 1000);
        app.add_circles(50, Actor::Bounce);

        assert!(app.circles().iter().any(|c| c.pos.x >= 10.0 || c.pos.y >= 10.0));
    }

    #[test]
    fn test_redraw_rereads_bounds_each_frame() {
        let mut app = DrawingApp::new(Framebuffer::new(1000, 1000), &Settings::default(), 4);
        assert!(app.circles().iter().all(|c| c.vel.x > 0.0));

        // Shrunk canvas: circles far outside must start heading back
        app.surface_mut().resize(10, 10);
        app.redraw();
        assert!(app.circles().iter().any(|c| c.vel.x < 0.0));
        assert!(
            app.circles()
                .iter()
                .filter(|c| c.pos.x > 10.0)
                .all(|c| c.vel.x < 0.0)
        );
    }

    #[test]
    fn test_oversized_stored_batch_starts_with_default() {
        let settings =
            Settings::from_json(r#"{"initial_circles":18446744073709551615}"#).unwrap();
        let app = DrawingApp::new(recorder(100, 100), &settings, 8);
        assert_eq!(app.circles().len(), 10);
    }

    #[test]
    fn test_stop_handle_halts_frames() {
        let mut app = DrawingApp::new(recorder(50, 50), &Settings::default(), 2);
        let handle = app.stop_handle();
        app.redraw();

        handle.stop();
        assert!(app.is_stopped());
        assert_eq!(app.redraw(), FrameControl::Stop);
        assert_eq!(app.frame_count(), 1);
        assert_eq!(app.surface().rects.len(), 1);
    }
}
