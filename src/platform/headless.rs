//! Native frame loop
//!
//! Stands in for `requestAnimationFrame`: one request is issued on start and
//! each frame that returns [`FrameControl::Continue`] issues the next one.

use std::thread;
use std::time::{Duration, Instant};

use crate::app::{DrawingApp, FrameControl};
use crate::renderer::Surface;

#[derive(Debug, Clone)]
pub struct HeadlessLoop {
    /// Minimum time between frames (None = as fast as possible)
    frame_interval: Option<Duration>,
    /// Stop after this many frame callbacks
    max_frames: Option<u64>,
    /// Frame requests issued
    requests: u64,
    /// Frame callbacks invoked
    frames: u64,
}

impl HeadlessLoop {
    /// Loop paced to `target_fps` (0 = unpaced)
    pub fn new(target_fps: u32) -> Self {
        let frame_interval =
            (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / target_fps as f64));
        Self {
            frame_interval,
            max_frames: None,
            requests: 0,
            frames: 0,
        }
    }

    pub fn unpaced() -> Self {
        Self::new(0)
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn requests(&self) -> u64 {
        self.requests
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Drive `app` until it stops or the frame limit is reached.
    /// Returns the number of frame callbacks invoked.
    ///
    /// Counters restart on every call and describe the latest run only.
    pub fn run<S: Surface>(&mut self, app: &mut DrawingApp<S>) -> u64 {
        self.frames = 0;
        self.requests = 1;
        let mut pending = true;

        while pending {
            if self.max_frames.is_some_and(|max| self.frames >= max) {
                break;
            }

            let started = Instant::now();
            self.frames += 1;
            pending = app.redraw() == FrameControl::Continue;
            if pending {
                self.requests += 1;
            }

            if let Some(interval) = self.frame_interval {
                let elapsed = started.elapsed();
                if elapsed < interval {
                    thread::sleep(interval - elapsed);
                }
            }
        }

        log::debug!(
            "Headless loop finished: {} frames, {} requests",
            self.frames,
            self.requests
        );
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Framebuffer;
    use crate::settings::Settings;

    #[test]
    fn test_requests_are_frames_plus_one() {
        let mut app = DrawingApp::new(Framebuffer::new(32, 32), &Settings::default(), 1);
        let mut host = HeadlessLoop::unpaced().with_max_frames(7);

        assert_eq!(host.run(&mut app), 7);
        assert_eq!(host.requests(), 8);
        assert_eq!(app.frame_count(), 7);
        assert_eq!(app.circles().len(), 10);
    }

    #[test]
    fn test_stopped_app_ends_loop() {
        let mut app = DrawingApp::new(Framebuffer::new(32, 32), &Settings::default(), 1);
        app.stop();
        let mut host = HeadlessLoop::unpaced();

        // The pending request is served once and not renewed
        assert_eq!(host.run(&mut app), 1);
        assert_eq!(host.requests(), 1);
        assert_eq!(app.frame_count(), 0);
    }

    #[test]
    fn test_run_twice_restarts_counts() {
        let mut app = DrawingApp::new(Framebuffer::new(32, 32), &Settings::default(), 1);
        let mut host = HeadlessLoop::unpaced().with_max_frames(3);

        assert_eq!(host.run(&mut app), 3);
        assert_eq!(host.run(&mut app), 3);
        assert_eq!(host.frames(), 3);
        assert_eq!(host.requests(), 4);
        assert_eq!(app.frame_count(), 6);
    }

    #[test]
    fn test_paced_loop_sleeps() {
        let mut app = DrawingApp::new(Framebuffer::new(8, 8), &Settings::default(), 1);
        let mut host = HeadlessLoop::new(200).with_max_frames(4);

        let started = Instant::now();
        host.run(&mut app);
        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}
