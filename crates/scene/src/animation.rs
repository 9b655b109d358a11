//! Procedural motion of the demo model
//!
//! Rotations are pure functions of elapsed time, so the pose at any
//! timestamp is reproducible and independent of frame rate.

use bevy::prelude::*;

use crate::frame_clock::FrameClock;

/// Sub-object of the demo model driven by the animation
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatedPart {
    /// Whole model group: gentle yaw sway
    Group,
    /// Central sphere: pitch and roll
    CoreSphere,
    /// Orbiting torus: pitch and yaw
    Torus,
}

/// Rotation angles (radians) of the animated parts at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPose {
    pub group_yaw: f32,
    pub sphere_pitch: f32,
    pub sphere_roll: f32,
    pub torus_pitch: f32,
    pub torus_yaw: f32,
}

impl ModelPose {
    pub fn at(t: f32) -> Self {
        Self {
            group_yaw: (t * 0.5).sin() * 0.2,
            sphere_pitch: t * 0.3,
            sphere_roll: t * 0.2,
            torus_pitch: t * 0.4,
            torus_yaw: t * 0.6,
        }
    }

    pub fn rotation_of(&self, part: AnimatedPart) -> Quat {
        match part {
            AnimatedPart::Group => Quat::from_rotation_y(self.group_yaw),
            AnimatedPart::CoreSphere => {
                Quat::from_euler(EulerRot::XYZ, self.sphere_pitch, 0.0, self.sphere_roll)
            }
            AnimatedPart::Torus => {
                Quat::from_euler(EulerRot::XYZ, self.torus_pitch, self.torus_yaw, 0.0)
            }
        }
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (drive_model_animation, drive_float_group));
    }
}

/// Hover group between the model root and its parts
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct FloatGroup;

const FLOAT_SPEED: f32 = 2.0;
const FLOAT_ROTATION_INTENSITY: f32 = 0.2;
const FLOAT_INTENSITY: f32 = 0.3;
const FLOAT_RANGE: (f32, f32) = (-0.1, 0.1);
/// Fixed phase so the hover motion replays identically
const FLOAT_PHASE_SECS: f32 = 0.0;

/// Bob and wobble of the hover group at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPose {
    /// Euler XYZ angles in radians
    pub tilt: Vec3,
    /// Vertical offset in world units
    pub lift: f32,
}

impl FloatPose {
    pub fn at(t: f32) -> Self {
        let phase = (t + FLOAT_PHASE_SECS) / 4.0 * FLOAT_SPEED;
        let (sin, cos) = phase.sin_cos();

        // sin/10 spans [-0.1, 0.1]; remap onto the configured range
        let (low, high) = FLOAT_RANGE;
        let bob = low + (sin / 10.0 + 0.1) / 0.2 * (high - low);

        Self {
            tilt: Vec3::new(cos / 8.0, sin / 8.0, sin / 20.0) * FLOAT_ROTATION_INTENSITY,
            lift: bob * FLOAT_INTENSITY,
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_xyz(0.0, self.lift, 0.0).with_rotation(Quat::from_euler(
            EulerRot::XYZ,
            self.tilt.x,
            self.tilt.y,
            self.tilt.z,
        ))
    }
}

fn drive_float_group(
    clock: Res<FrameClock>,
    mut groups: Query<&mut Transform, With<FloatGroup>>,
) {
    let pose = FloatPose::at(clock.elapsed_secs());
    for mut transform in groups.iter_mut() {
        *transform = pose.transform();
    }
}

fn drive_model_animation(
    clock: Res<FrameClock>,
    mut parts: Query<(&AnimatedPart, &mut Transform)>,
) {
    let pose = ModelPose::at(clock.elapsed_secs());
    for (part, mut transform) in parts.iter_mut() {
        transform.rotation = pose.rotation_of(*part);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose_at_zero() {
        let pose = ModelPose::at(0.0);
        for part in [AnimatedPart::Group, AnimatedPart::CoreSphere, AnimatedPart::Torus] {
            assert!(pose.rotation_of(part).abs_diff_eq(Quat::IDENTITY, 1e-6));
        }
    }

    #[test]
    fn test_pose_is_pure() {
        let t = 12.345;
        assert_eq!(ModelPose::at(t), ModelPose::at(t));
        assert_eq!(
            ModelPose::at(t).rotation_of(AnimatedPart::Torus),
            ModelPose::at(t).rotation_of(AnimatedPart::Torus)
        );
    }

    #[test]
    fn test_pose_values() {
        let t = 2.0;
        let pose = ModelPose::at(t);
        assert!((pose.group_yaw - (1.0f32).sin() * 0.2).abs() < 1e-6);
        assert!((pose.sphere_pitch - 0.6).abs() < 1e-6);
        assert!((pose.sphere_roll - 0.4).abs() < 1e-6);
        assert!((pose.torus_pitch - 0.8).abs() < 1e-6);
        assert!((pose.torus_yaw - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_group_sway_is_bounded() {
        for i in 0..1000 {
            let yaw = ModelPose::at(i as f32 * 0.37).group_yaw;
            assert!(yaw.abs() <= 0.2 + 1e-6);
        }
    }

    #[test]
    fn test_float_pose_replays() {
        for t in [0.0, 0.5, 7.25, 123.0] {
            assert_eq!(FloatPose::at(t), FloatPose::at(t));
        }
        // One full period is 4π seconds at speed 2
        let period = 4.0 * std::f32::consts::PI;
        let a = FloatPose::at(1.5);
        let b = FloatPose::at(1.5 + period);
        assert!((a.lift - b.lift).abs() < 1e-4);
        assert!(a.tilt.abs_diff_eq(b.tilt, 1e-4));
    }

    #[test]
    fn test_float_pose_values() {
        let rest = FloatPose::at(0.0);
        assert!(rest.lift.abs() < 1e-6);
        assert!(rest.tilt.abs_diff_eq(Vec3::new(0.025, 0.0, 0.0), 1e-6));

        // Peak of the bob: phase π/2
        let peak = FloatPose::at(std::f32::consts::PI);
        assert!((peak.lift - 0.03).abs() < 1e-6);
        assert!((peak.tilt.y - 0.025).abs() < 1e-6);
        assert!((peak.tilt.z - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_float_lift_is_bounded() {
        for i in 0..1000 {
            let lift = FloatPose::at(i as f32 * 0.29).lift;
            assert!(lift.abs() <= 0.1 * FLOAT_INTENSITY + 1e-6);
        }
    }
}
