//! Frames-per-second sampling
//!
//! Frames are counted in windows of (by default) one second of wall-clock
//! time. When a window closes the rate is computed from the real elapsed
//! time of that window, emitted once, and the window restarts. There is no
//! smoothing across windows.

use bevy::prelude::*;
use showcase_config::ViewerConfig;
use showcase_ipc::{FpsTier, ViewerToUi};

use crate::frame_clock::FrameClock;
use crate::session::ViewerSession;
use crate::OutboundUiMessages;

/// Windowed frame counter
#[derive(Debug, Clone)]
pub struct FpsSampler {
    window_ms: f64,
    window_start: Option<f64>,
    frame_count: u32,
}

impl FpsSampler {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            window_start: None,
            frame_count: 0,
        }
    }

    /// Count one frame rendered at `now_ms`.
    ///
    /// Returns the rounded rate when this frame closes the window. The first
    /// frame only opens a window.
    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now_ms);
            return None;
        };

        self.frame_count += 1;
        let elapsed = now_ms - start;

        // A zero-length window can't produce a rate; keep accumulating
        if elapsed <= 0.0 || elapsed < self.window_ms {
            return None;
        }

        let fps = (f64::from(self.frame_count) * 1000.0 / elapsed).round() as u32;
        self.frame_count = 0;
        self.window_start = Some(now_ms);
        Some(fps)
    }

    /// Frames counted in the open window
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }
}

impl Default for FpsSampler {
    fn default() -> Self {
        Self::new(showcase_config::DEFAULT_FPS_WINDOW_MS)
    }
}

/// Sampler owned by the render loop
#[derive(Resource, Debug)]
pub struct FpsMonitor {
    pub sampler: FpsSampler,
}

impl FromWorld for FpsMonitor {
    fn from_world(world: &mut World) -> Self {
        let window_ms = world
            .get_resource::<ViewerConfig>()
            .map(|config| config.fps_window_ms)
            .unwrap_or(showcase_config::DEFAULT_FPS_WINDOW_MS);
        Self {
            sampler: FpsSampler::new(window_ms),
        }
    }
}

pub struct FpsPlugin;

impl Plugin for FpsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FpsMonitor>()
            .add_systems(Update, sample_fps);
    }
}

fn sample_fps(
    clock: Res<FrameClock>,
    mut monitor: ResMut<FpsMonitor>,
    mut session: ResMut<ViewerSession>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if let Some(fps) = monitor.sampler.tick(clock.now_ms()) {
        session.record_fps(fps);
        outbound.send(ViewerToUi::FpsUpdated {
            fps,
            tier: FpsTier::from_fps(fps),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn run(spacing_ms: f64, frames: u32) -> Vec<u32> {
        let mut sampler = FpsSampler::new(1000.0);
        let mut emitted = Vec::new();
        for i in 0..=frames {
            if let Some(fps) = sampler.tick(f64::from(i) * spacing_ms) {
                emitted.push(fps);
            }
        }
        emitted
    }

    #[test]
    fn test_sixty_hz_emits_sixty() {
        // 61 intervals of 16.6ms is the first to cross one second
        assert_eq!(run(16.6, 61), vec![60]);
    }

    #[test]
    fn test_thirty_hz_emits_thirty() {
        assert_eq!(run(33.3, 31), vec![30]);
    }

    #[test]
    fn test_window_resets_after_emission() {
        let mut sampler = FpsSampler::new(1000.0);
        sampler.tick(0.0);
        for i in 1..=10 {
            sampler.tick(f64::from(i) * 100.0);
        }
        assert_eq!(sampler.frame_count(), 0);
        assert_eq!(sampler.tick(1100.0), None);
        assert_eq!(sampler.frame_count(), 1);
    }

    #[test]
    fn test_uses_actual_elapsed_time() {
        // A throttled consumer delivers 10 frames over two seconds
        let mut sampler = FpsSampler::new(1000.0);
        sampler.tick(0.0);
        let mut emitted = None;
        for i in 1..=10 {
            emitted = sampler.tick(f64::from(i) * 200.0).or(emitted);
        }
        // Window closes at 1000ms with 5 frames
        assert_eq!(emitted, Some(5));

        let mut sampler = FpsSampler::new(1000.0);
        sampler.tick(0.0);
        assert_eq!(sampler.tick(2000.0), Some(1));
    }

    #[test]
    fn test_zero_elapsed_never_divides() {
        let mut sampler = FpsSampler::new(0.0);
        sampler.tick(5.0);
        assert_eq!(sampler.tick(5.0), None);
        assert_eq!(sampler.tick(5.0), None);
        assert_eq!(sampler.tick(15.0), Some(300));
    }

    #[test]
    fn test_emission_updates_session_and_ui() {
        let mut world = World::new();
        world.init_resource::<FrameClock>();
        world.init_resource::<FpsMonitor>();
        world.init_resource::<ViewerSession>();
        world.init_resource::<OutboundUiMessages>();

        let mut emitted = Vec::new();
        for i in 0..=31 {
            world
                .resource_mut::<FrameClock>()
                .sample(f64::from(i) * 33.3, 0.0, 0.0333);
            world.run_system_once(sample_fps).unwrap();
            emitted.extend(world.resource_mut::<OutboundUiMessages>().drain());
        }

        assert_eq!(emitted.len(), 1);
        assert!(matches!(
            emitted[0],
            ViewerToUi::FpsUpdated {
                fps: 30,
                tier: FpsTier::Fair
            }
        ));
        assert_eq!(world.resource::<ViewerSession>().fps, 30);
    }

    #[test]
    fn test_no_emission_inside_window() {
        let mut world = World::new();
        world.init_resource::<FrameClock>();
        world.init_resource::<FpsMonitor>();
        world.init_resource::<ViewerSession>();
        world.init_resource::<OutboundUiMessages>();

        for i in 0..10 {
            world
                .resource_mut::<FrameClock>()
                .sample(f64::from(i) * 16.6, 0.0, 0.0166);
            world.run_system_once(sample_fps).unwrap();
        }
        assert!(world.resource::<OutboundUiMessages>().messages.is_empty());
        assert_eq!(world.resource::<ViewerSession>().fps, 60);
    }
}
