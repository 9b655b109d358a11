//! Per-frame time source
//!
//! Sampled once at the start of every frame. Everything that runs per frame
//! (FPS sampling, model animation, hotspot pulse, camera damping) reads this
//! resource instead of `Time`, so all of them agree on "now" within a frame.

use bevy::prelude::*;
use bevy::time::{Real, TimeSystems};

/// Time of the current frame
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct FrameClock {
    now_ms: f64,
    elapsed_secs: f32,
    delta_secs: f32,
    frame: u64,
}

impl FrameClock {
    /// Record the time of a new frame
    pub fn sample(&mut self, now_ms: f64, elapsed_secs: f32, delta_secs: f32) {
        self.now_ms = now_ms;
        self.elapsed_secs = elapsed_secs;
        self.delta_secs = delta_secs;
        self.frame += 1;
    }

    /// Wall-clock milliseconds since startup
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Animation time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    pub fn delta_secs(&self) -> f32 {
        self.delta_secs
    }

    /// Number of frames sampled so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

pub struct FrameClockPlugin;

impl Plugin for FrameClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameClock>()
            .add_systems(First, sample_frame_clock.after(TimeSystems));
    }
}

fn sample_frame_clock(mut clock: ResMut<FrameClock>, real: Res<Time<Real>>, time: Res<Time>) {
    clock.sample(
        real.elapsed_secs_f64() * 1000.0,
        time.elapsed_secs(),
        time.delta_secs(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts_frames() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.frame(), 0);
        clock.sample(16.0, 0.016, 0.016);
        clock.sample(33.0, 0.033, 0.017);
        assert_eq!(clock.frame(), 2);
        assert_eq!(clock.now_ms(), 33.0);
        assert_eq!(clock.elapsed_secs(), 0.033);
    }

    #[test]
    fn test_samples_time_of_current_frame() {
        use bevy::time::{TimePlugin, TimeUpdateStrategy};
        use std::time::Duration;

        let mut app = App::new();
        app.add_plugins((TimePlugin, FrameClockPlugin))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)));

        for _ in 0..3 {
            app.update();
            let time = app.world().resource::<Time>();
            let clock = app.world().resource::<FrameClock>();
            assert_eq!(clock.elapsed_secs(), time.elapsed_secs());
            assert_eq!(clock.delta_secs(), time.delta_secs());
        }
        assert_eq!(app.world().resource::<FrameClock>().frame(), 3);
    }
}
