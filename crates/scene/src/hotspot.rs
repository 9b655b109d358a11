//! Hotspot annotations
//!
//! Each hotspot is a small pulsing marker anchored in the scene with its own
//! hover/click state. Hovering is momentary; clicking toggles a sticky open
//! state. The annotation panel itself is drawn by the UI shell, which is told
//! whether it is visible and where to anchor it on screen.

#[cfg(feature = "picking")]
use bevy::picking::prelude::*;
use bevy::prelude::*;
use showcase_ipc::{HotspotInfo, ViewerToUi};

use crate::camera::MainCamera;
use crate::frame_clock::FrameClock;
use crate::view_mode::hex;
use crate::OutboundUiMessages;

/// Height of the annotation anchor and connector above the marker
const CONNECTOR_LENGTH: f32 = 0.3;

/// Colour used when a record has none
pub const DEFAULT_HOTSPOT_COLOR: u32 = 0x4fc3f7;

/// Static hotspot descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotRecord {
    pub id: &'static str,
    pub position: Vec3,
    pub title: &'static str,
    pub description: &'static str,
    pub color: Option<u32>,
}

impl HotspotRecord {
    pub fn color(&self) -> u32 {
        self.color.unwrap_or(DEFAULT_HOTSPOT_COLOR)
    }

    pub fn info(&self) -> HotspotInfo {
        HotspotInfo {
            id: self.id.to_string(),
            position: self.position.to_array(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            color: format!("#{:06x}", self.color()),
        }
    }
}

pub const HOTSPOTS: [HotspotRecord; 3] = [
    HotspotRecord {
        id: "feature-1",
        position: Vec3::new(1.2, 0.8, 0.5),
        title: "Premium Materials",
        description: "High-quality PBR materials with realistic lighting",
        color: Some(0x4fc3f7),
    },
    HotspotRecord {
        id: "feature-2",
        position: Vec3::new(-1.5, -0.5, 1.0),
        title: "Advanced Geometry",
        description: "Complex mesh topology with smooth surfaces",
        color: Some(0x26c6da),
    },
    HotspotRecord {
        id: "feature-3",
        position: Vec3::new(0.8, -1.2, -0.8),
        title: "Interactive Elements",
        description: "Touch-responsive 3D interactions",
        color: Some(0x00e5ff),
    },
];

/// Descriptors of all hotspots for the UI
pub fn hotspot_infos() -> Vec<HotspotInfo> {
    HOTSPOTS.iter().map(HotspotRecord::info).collect()
}

/// Pointer input routed to one hotspot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Enter,
    Leave,
    Click,
}

/// Interaction state of one hotspot
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HotspotState {
    pub hovered: bool,
    pub clicked: bool,
}

impl HotspotState {
    pub fn apply(&mut self, action: PointerAction) {
        match action {
            PointerAction::Enter => self.hovered = true,
            PointerAction::Leave => self.hovered = false,
            PointerAction::Click => self.clicked = !self.clicked,
        }
    }

    /// Annotation panel and connector are shown
    pub fn is_visible(&self) -> bool {
        self.hovered || self.clicked
    }

    pub fn marker_scale(&self, t: f32) -> f32 {
        let scale = pulse_scale(t);
        if self.hovered { scale * 1.3 } else { scale }
    }

    pub fn marker_emissive_intensity(&self) -> f32 {
        if self.hovered { 0.6 } else { 0.3 }
    }

    pub fn marker_opacity(&self) -> f32 {
        if self.hovered { 0.9 } else { 0.7 }
    }

    pub fn ring_opacity(&self) -> f32 {
        if self.hovered { 0.5 } else { 0.2 }
    }
}

/// Gentle breathing scale shared by all markers
pub fn pulse_scale(t: f32) -> f32 {
    1.0 + (t * 2.0).sin() * 0.1
}

/// Root of one hotspot
#[derive(Component, Debug, Clone)]
pub struct Hotspot {
    pub record: HotspotRecord,
}

/// Child entities making up a hotspot
#[derive(Component, Debug, Clone, Copy)]
pub struct HotspotParts {
    pub marker: Entity,
    pub ring: Entity,
    pub connector: Entity,
}

/// Pickable marker sphere; points back at its hotspot root
#[derive(Component, Debug, Clone, Copy)]
pub struct HotspotMarker {
    pub hotspot: Entity,
}

/// Last annotation state sent to the UI
#[derive(Component, Debug, Default, Clone, PartialEq)]
struct AnnotationSync {
    visible: bool,
    screen_position: Option<[f32; 2]>,
}

pub struct HotspotPlugin;

impl Plugin for HotspotPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hotspots).add_systems(
            Update,
            (
                pulse_hotspot_markers,
                update_hotspot_visuals,
                report_annotations,
            ),
        );

        #[cfg(feature = "picking")]
        {
            app.add_plugins(MeshPickingPlugin)
                .add_systems(Update, handle_hotspot_pointer.before(update_hotspot_visuals));
        }
    }
}

fn spawn_hotspots(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let marker_mesh = meshes.add(Sphere::new(0.05).mesh().uv(16, 16));
    let ring_mesh = meshes.add(Annulus::new(0.08, 0.12));
    let connector_mesh = meshes.add(Cylinder::new(0.004, CONNECTOR_LENGTH));

    for record in HOTSPOTS {
        let state = HotspotState::default();
        let [r, g, b] = hex(record.color());
        let color = Color::srgb(r, g, b);
        let linear = LinearRgba::from(color);

        let marker_material = materials.add(StandardMaterial {
            base_color: color.with_alpha(state.marker_opacity()),
            emissive: linear * state.marker_emissive_intensity(),
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        let ring_material = materials.add(StandardMaterial {
            base_color: color.with_alpha(state.ring_opacity()),
            unlit: true,
            double_sided: true,
            cull_mode: None,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        let connector_material = materials.add(StandardMaterial {
            base_color: color.with_alpha(0.6),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        let root = commands
            .spawn((
                Transform::from_translation(record.position),
                Visibility::default(),
                Name::new(format!("Hotspot {}", record.id)),
                state,
                AnnotationSync::default(),
            ))
            .id();

        let marker = commands
            .spawn((
                Mesh3d(marker_mesh.clone()),
                MeshMaterial3d(marker_material),
                Transform::default(),
                HotspotMarker { hotspot: root },
                ChildOf(root),
            ))
            .id();

        // Annulus faces +Z; lay it flat like a halo
        let ring = commands
            .spawn((
                Mesh3d(ring_mesh.clone()),
                MeshMaterial3d(ring_material),
                Transform::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                ChildOf(root),
            ))
            .id();

        let connector = commands
            .spawn((
                Mesh3d(connector_mesh.clone()),
                MeshMaterial3d(connector_material),
                Transform::from_xyz(0.0, CONNECTOR_LENGTH / 2.0, 0.0),
                Visibility::Hidden,
                ChildOf(root),
            ))
            .id();

        #[cfg(feature = "picking")]
        {
            commands.entity(ring).insert(Pickable::IGNORE);
            commands.entity(connector).insert(Pickable::IGNORE);
        }

        commands.entity(root).insert((
            Hotspot { record },
            HotspotParts {
                marker,
                ring,
                connector,
            },
        ));
    }

    info!("Spawned {} hotspots", HOTSPOTS.len());
}

/// Apply a pointer action on `entity` to the hotspot it marks.
///
/// Returns false when `entity` is not a live marker or its hotspot is gone.
#[cfg_attr(not(feature = "picking"), allow(dead_code))]
fn route_pointer_action(
    markers: &Query<&HotspotMarker>,
    states: &mut Query<&mut HotspotState>,
    entity: Entity,
    action: PointerAction,
) -> bool {
    let Ok(marker) = markers.get(entity) else {
        return false;
    };
    let Ok(mut state) = states.get_mut(marker.hotspot) else {
        return false;
    };
    state.apply(action);
    debug!("Hotspot {:?} {:?} -> {:?}", marker.hotspot, action, *state);
    true
}

/// Route pointer events on markers to their hotspot's state
#[cfg(feature = "picking")]
fn handle_hotspot_pointer(
    mut over_events: MessageReader<Pointer<Over>>,
    mut out_events: MessageReader<Pointer<Out>>,
    mut click_events: MessageReader<Pointer<Click>>,
    markers: Query<&HotspotMarker>,
    mut states: Query<&mut HotspotState>,
) {
    let actions = over_events
        .read()
        .map(|event| (event.entity, PointerAction::Enter))
        .chain(out_events.read().map(|event| (event.entity, PointerAction::Leave)))
        .chain(
            click_events
                .read()
                .filter(|event| event.button == PointerButton::Primary)
                .map(|event| (event.entity, PointerAction::Click)),
        )
        .collect::<Vec<_>>();

    for (entity, action) in actions {
        route_pointer_action(&markers, &mut states, entity, action);
    }
}

fn pulse_hotspot_markers(
    clock: Res<FrameClock>,
    hotspots: Query<(&HotspotState, &HotspotParts)>,
    mut transforms: Query<&mut Transform, With<HotspotMarker>>,
) {
    let t = clock.elapsed_secs();
    for (state, parts) in hotspots.iter() {
        if let Ok(mut transform) = transforms.get_mut(parts.marker) {
            transform.scale = Vec3::splat(state.marker_scale(t));
        }
    }
}

fn update_hotspot_visuals(
    hotspots: Query<(&Hotspot, &HotspotState, &HotspotParts), Changed<HotspotState>>,
    material_handles: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut visibility: Query<&mut Visibility>,
) {
    for (hotspot, state, parts) in hotspots.iter() {
        let [r, g, b] = hex(hotspot.record.color());
        let color = Color::srgb(r, g, b);

        if let Ok(handle) = material_handles.get(parts.marker) {
            if let Some(mut material) = materials.get_mut(&handle.0) {
                material.base_color = color.with_alpha(state.marker_opacity());
                material.emissive = LinearRgba::from(color) * state.marker_emissive_intensity();
            }
        }
        if let Ok(handle) = material_handles.get(parts.ring) {
            if let Some(mut material) = materials.get_mut(&handle.0) {
                material.base_color = color.with_alpha(state.ring_opacity());
            }
        }
        if let Ok(mut connector) = visibility.get_mut(parts.connector) {
            *connector = if state.is_visible() {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

/// Tell the UI where visible annotation panels go and when they close
fn report_annotations(
    mut hotspots: Query<(&Hotspot, &HotspotState, &GlobalTransform, &mut AnnotationSync)>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    let camera = camera_query.single().ok();

    for (hotspot, state, transform, mut sync) in hotspots.iter_mut() {
        let visible = state.is_visible();
        let screen_position = if visible {
            camera.and_then(|(camera, camera_transform)| {
                let anchor = transform.translation() + Vec3::Y * CONNECTOR_LENGTH;
                camera
                    .world_to_viewport(camera_transform, anchor)
                    .ok()
                    .map(|p| [p.x.round(), p.y.round()])
            })
        } else {
            None
        };

        let next = AnnotationSync {
            visible,
            screen_position,
        };
        if *sync == next {
            continue;
        }
        *sync = next;
        outbound.send(ViewerToUi::HotspotAnnotation {
            id: hotspot.record.id.to_string(),
            visible,
            screen_position,
        });
    }
}
