//! Orbit camera controller
//!
//! Controls:
//! - Left mouse drag: Orbit around target
//! - Right mouse drag (or Shift + left drag): Pan
//! - Scroll wheel: Dolly (zoom)
//!
//! Orbit and pan input is queued and eased in by the damping factor each
//! frame. While auto-rotate is on the camera circles the target at a constant
//! angular speed.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseButton, MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use showcase_ipc::CameraCommand;

use crate::frame_clock::FrameClock;
use crate::session::ViewerSession;

/// Pixel scroll deltas per line-equivalent
const PIXELS_PER_LINE: f32 = 100.0;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Camera orbit controller state
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera orbits around
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Horizontal angle (yaw) in radians
    pub yaw: f32,
    /// Vertical angle (pitch) in radians
    pub pitch: f32,
    /// Orbit sensitivity (radians per pixel)
    pub orbit_sensitivity: f32,
    /// Pan sensitivity (units per pixel, scaled by distance)
    pub pan_sensitivity: f32,
    /// Zoom sensitivity (distance units per scroll line)
    pub zoom_sensitivity: f32,
    /// Minimum distance from target
    pub min_distance: f32,
    /// Maximum distance from target
    pub max_distance: f32,
    /// Fraction of queued input applied per frame (1.0 = no damping)
    pub damping: f32,
    /// Revolutions per minute while auto-rotating
    pub auto_rotate_speed: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_pan: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Default position: (0, 0, 5) looking at origin
        Self {
            target: Vec3::ZERO,
            distance: 5.0,
            yaw: 0.0,
            pitch: 0.0,
            orbit_sensitivity: 0.005,
            pan_sensitivity: 0.002,
            zoom_sensitivity: 1.0,
            min_distance: 2.0,
            max_distance: 20.0,
            damping: 0.05,
            auto_rotate_speed: 1.0,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_pan: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    /// Calculate camera position from orbit parameters
    pub fn calculate_position(&self) -> Vec3 {
        // Spherical to Cartesian conversion
        // Note: pitch is angle from horizontal, yaw is angle around Y axis
        let horizontal_distance = self.distance * self.pitch.cos();
        let y = self.distance * self.pitch.sin();
        let x = horizontal_distance * self.yaw.sin();
        let z = horizontal_distance * self.yaw.cos();

        self.target + Vec3::new(x, y, z)
    }

    /// Queue an orbit by a screen-space drag in pixels
    pub fn orbit(&mut self, delta: Vec2) {
        self.pending_yaw -= delta.x * self.orbit_sensitivity;
        self.pending_pitch += delta.y * self.orbit_sensitivity;
    }

    /// Queue a pan by a screen-space drag in pixels, in the camera plane
    /// given by `rotation`
    pub fn pan(&mut self, delta: Vec2, rotation: Quat) {
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;

        // Scale pan by distance so it feels consistent at different zoom levels
        let pan_scale = self.pan_sensitivity * self.distance;

        // Negative to feel like dragging the scene
        self.pending_pan += (-right * delta.x + up * delta.y) * pan_scale;
    }

    /// Dolly by scroll lines (positive = closer)
    pub fn zoom(&mut self, lines: f32) {
        // Scale zoom speed by current distance for consistent feel
        let zoom_amount = lines * self.zoom_sensitivity * (self.distance * 0.1);
        self.distance = (self.distance - zoom_amount).clamp(self.min_distance, self.max_distance);
    }

    pub fn apply_command(&mut self, command: CameraCommand, rotation: Quat) {
        match command {
            CameraCommand::Orbit { delta_x, delta_y } => self.orbit(Vec2::new(delta_x, delta_y)),
            CameraCommand::Pan { delta_x, delta_y } => {
                self.pan(Vec2::new(delta_x, delta_y), rotation)
            }
            CameraCommand::Zoom { delta } => self.zoom(delta),
            CameraCommand::Reset => self.reset(),
        }
    }

    /// Advance one frame of `dt` seconds
    pub fn advance(&mut self, dt: f32, auto_rotate: bool) {
        if auto_rotate {
            self.yaw += auto_rotate_angle(dt, self.auto_rotate_speed);
        }

        let damping = self.damping.clamp(0.0, 1.0);

        let yaw_step = self.pending_yaw * damping;
        self.yaw += yaw_step;
        self.pending_yaw -= yaw_step;

        let pitch_step = self.pending_pitch * damping;
        // Clamp pitch to prevent flipping (just below straight up/down)
        self.pitch = (self.pitch + pitch_step).clamp(-1.5, 1.5);
        self.pending_pitch -= pitch_step;

        let pan_step = self.pending_pan * damping;
        self.target += pan_step;
        self.pending_pan -= pan_step;
    }

    /// Reset to default view, dropping queued input
    pub fn reset(&mut self) {
        *self = Self {
            orbit_sensitivity: self.orbit_sensitivity,
            pan_sensitivity: self.pan_sensitivity,
            zoom_sensitivity: self.zoom_sensitivity,
            ..Self::default()
        };
    }
}

/// Yaw covered in `dt` seconds at `speed` revolutions per minute
pub fn auto_rotate_angle(dt: f32, speed: f32) -> f32 {
    std::f32::consts::TAU / 60.0 * speed * dt
}

/// Plugin for orbit camera controls
pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        // drag and zoom feed the controller before the transform update
        app.add_systems(Startup, spawn_camera).add_systems(
            Update,
            (
                camera_drag_system,
                camera_zoom_system,
                update_camera_transform
                    .after(camera_drag_system)
                    .after(camera_zoom_system),
            ),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    // TonyMcMapFace requires tonemapping_luts which needs zstd (not available in WASM)
    let orbit_camera = OrbitCamera::default();
    let camera_position = orbit_camera.calculate_position();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 50f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(camera_position).looking_at(orbit_camera.target, Vec3::Y),
        Tonemapping::Reinhard,
        MainCamera,
        orbit_camera,
    ));
}

/// Handle orbit (left drag) and pan (right drag or shift + left drag)
fn camera_drag_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    key_input: Res<ButtonInput<KeyCode>>,
    mut motion_events: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut OrbitCamera, &Transform)>,
) {
    let mut delta = Vec2::ZERO;
    for event in motion_events.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO {
        return;
    }

    let shift_held =
        key_input.pressed(KeyCode::ShiftLeft) || key_input.pressed(KeyCode::ShiftRight);
    let left = mouse_button.pressed(MouseButton::Left);
    let panning = mouse_button.pressed(MouseButton::Right) || (left && shift_held);

    for (mut orbit, transform) in camera_query.iter_mut() {
        if panning {
            orbit.pan(delta, transform.rotation);
        } else if left {
            orbit.orbit(delta);
        }
    }
}

/// Handle zoom (scroll wheel)
fn camera_zoom_system(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut OrbitCamera>,
) {
    let mut scroll_delta = 0.0;
    for event in scroll_events.read() {
        scroll_delta += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_LINE,
        };
    }

    if scroll_delta == 0.0 {
        return;
    }

    for mut orbit in camera_query.iter_mut() {
        orbit.zoom(scroll_delta);
    }
}

/// Advance damping and auto-rotate, then update the camera transform
fn update_camera_transform(
    clock: Res<FrameClock>,
    session: Res<ViewerSession>,
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    for (mut orbit, mut transform) in camera_query.iter_mut() {
        orbit.advance(clock.delta_secs(), session.auto_rotate);
        let position = orbit.calculate_position();
        *transform = Transform::from_translation(position).looking_at(orbit.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position() {
        let orbit = OrbitCamera::default();
        assert!(orbit.calculate_position().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
    }

    #[test]
    fn test_damping_eases_in_orbit() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(-100.0, 0.0));
        let total = 100.0 * orbit.orbit_sensitivity;

        orbit.advance(0.016, false);
        assert!((orbit.yaw - total * 0.05).abs() < 1e-6);

        for _ in 0..500 {
            orbit.advance(0.016, false);
        }
        assert!((orbit.yaw - total).abs() < 1e-4);
    }

    #[test]
    fn test_auto_rotate_full_turn_per_minute() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..600 {
            orbit.advance(0.1, true);
        }
        assert!((orbit.yaw - std::f32::consts::TAU).abs() < 1e-3);

        let mut still = OrbitCamera::default();
        still.advance(1.0, false);
        assert_eq!(still.yaw, 0.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.zoom(1000.0);
        assert_eq!(orbit.distance, orbit.min_distance);
        orbit.zoom(-1000.0);
        assert_eq!(orbit.distance, orbit.max_distance);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.damping = 1.0;
        orbit.orbit(Vec2::new(0.0, 10_000.0));
        orbit.advance(0.016, false);
        assert_eq!(orbit.pitch, 1.5);
    }

    #[test]
    fn test_reset_drops_pending_input() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(50.0, 20.0));
        orbit.pan(Vec2::new(10.0, 0.0), Quat::IDENTITY);
        orbit.zoom(2.0);
        orbit.advance(0.016, true);

        orbit.apply_command(CameraCommand::Reset, Quat::IDENTITY);
        assert_eq!(orbit, OrbitCamera::default());
        orbit.advance(0.016, false);
        assert!(orbit.calculate_position().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
    }

    #[test]
    fn test_pan_moves_target_opposite_drag() {
        let mut orbit = OrbitCamera::default();
        orbit.damping = 1.0;
        orbit.pan(Vec2::new(10.0, 0.0), Quat::IDENTITY);
        orbit.advance(0.016, false);
        assert!(orbit.target.x < 0.0);
        assert_eq!(orbit.target.y, 0.0);
    }
}
