//! Material synchronization on view mode change
//!
//! Walks the demo model from its root once per view mode change and writes
//! the resolved parameters into every `StandardMaterial` it finds. Writing
//! through `Assets::get_mut` marks the asset modified, which makes the
//! renderer re-upload it on the next frame. Nodes without a usable standard
//! material are skipped.

use bevy::prelude::*;
use showcase_ipc::ViewMode;

use crate::session::ViewerSession;
use crate::view_mode::{resolve, resolve_part, MaterialParams, ModelPart};
use crate::wireframe;

/// Root entity of the model whose materials follow the view mode
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRoot(pub Entity);

/// Parameters currently applied to a render node
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct AppliedMaterial(pub MaterialParams);

/// Last view mode pushed into the scene
#[derive(Resource, Debug, Default)]
pub struct MaterialSyncState {
    pub applied: Option<ViewMode>,
}

/// Outcome of one synchronization pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Nodes whose material was rewritten
    pub updated: usize,
    /// Mesh nodes without a usable standard material
    pub skipped: usize,
}

/// Overwrite a material's view-mode attributes.
///
/// Applying the same parameters twice leaves the material unchanged.
pub fn apply_params(material: &mut StandardMaterial, params: &MaterialParams) {
    let [r, g, b] = params.color;
    material.base_color = Color::srgba(r, g, b, params.opacity);
    material.perceptual_roughness = params.roughness;
    material.metallic = params.metalness;
    material.alpha_mode = if params.transparent {
        AlphaMode::Blend
    } else {
        AlphaMode::Opaque
    };

    let [r, g, b] = params.emissive;
    let emissive = LinearRgba::from(Color::srgb(r, g, b));
    let intensity = params.emissive_intensity;
    material.emissive = LinearRgba::rgb(
        emissive.red * intensity,
        emissive.green * intensity,
        emissive.blue * intensity,
    );
}

/// Apply `mode` to every render node under `root`.
pub fn synchronize(world: &mut World, root: Entity, mode: ViewMode) -> SyncReport {
    let mut report = SyncReport::default();
    let mut targets = Vec::new();
    let mut stack = vec![root];

    while let Some(entity) = stack.pop() {
        let Ok(node) = world.get_entity(entity) else {
            continue;
        };
        if let Some(children) = node.get::<Children>() {
            stack.extend(children.iter());
        }

        match node.get::<MeshMaterial3d<StandardMaterial>>() {
            Some(material) => {
                targets.push((entity, material.0.id(), node.get::<ModelPart>().copied()));
            }
            None if node.contains::<Mesh3d>() => report.skipped += 1,
            None => {}
        }
    }

    for (entity, material_id, part) in targets {
        let params = match part {
            Some(part) => resolve_part(mode, part),
            None => resolve(mode),
        };

        let Some(mut materials) = world.get_resource_mut::<Assets<StandardMaterial>>() else {
            warn!("No StandardMaterial assets; skipping material sync");
            report.skipped += 1;
            continue;
        };
        match materials.get_mut(material_id) {
            Some(mut material) => apply_params(&mut material, &params),
            None => {
                debug!("Material {:?} of {:?} not found, skipping", material_id, entity);
                report.skipped += 1;
                continue;
            }
        }

        world.entity_mut(entity).insert(AppliedMaterial(params));
        wireframe::set_wireframe(world, entity, &params);
        report.updated += 1;
    }

    report
}

pub struct MaterialSyncPlugin;

impl Plugin for MaterialSyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MaterialSyncState>()
            .add_systems(PostUpdate, sync_view_mode_materials);
    }
}

/// Re-apply materials when the session's view mode differs from the last
/// applied one
pub(crate) fn sync_view_mode_materials(world: &mut World) {
    let Some(root) = world.get_resource::<ModelRoot>().map(|root| root.0) else {
        return;
    };
    let Some(mode) = world.get_resource::<ViewerSession>().map(|s| s.view_mode) else {
        return;
    };
    if world.resource::<MaterialSyncState>().applied == Some(mode) {
        return;
    }

    let report = synchronize(world, root, mode);
    world.resource_mut::<MaterialSyncState>().applied = Some(mode);
    info!(
        "Applied {} view mode to {} meshes ({} skipped)",
        mode, report.updated, report.skipped
    );
}
