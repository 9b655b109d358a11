//! Procedurally generated demo model
//!
//! A central sphere with an orbiting torus, a small satellite sphere and
//! three floating cubes. The parts hang off a hover group under one root
//! that material sync and the animation driver work from.

use bevy::prelude::*;

use crate::animation::{AnimatedPart, FloatGroup, FloatPose};
use crate::material_sync::{apply_params, ModelRoot};
use crate::session::ViewerSession;
use crate::view_mode::{resolve_part, ModelPart};

/// Cube edge length and position, largest first
const CUBES: [(f32, Vec3); 3] = [
    (0.4, Vec3::new(1.5, 2.0, -1.0)),
    (0.3, Vec3::new(-1.8, -1.5, 1.2)),
    (0.2, Vec3::new(2.2, -1.2, -0.8)),
];

pub struct DemoModelPlugin;

impl Plugin for DemoModelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_demo_model);
    }
}

fn spawn_demo_model(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    session: Res<ViewerSession>,
) {
    let mode = session.view_mode;
    let mut material_for = |part: ModelPart| {
        let mut material = StandardMaterial::default();
        apply_params(&mut material, &resolve_part(mode, part));
        materials.add(material)
    };

    let core_material = material_for(ModelPart::CoreSphere);
    let torus_material = material_for(ModelPart::Torus);
    let satellite_material = material_for(ModelPart::SatelliteSphere);
    let cube_materials: Vec<_> = (0..CUBES.len() as u8)
        .map(|index| material_for(ModelPart::Cube(index)))
        .collect();

    let root = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            AnimatedPart::Group,
            Name::new("Demo Model"),
        ))
        .id();

    let float = commands
        .spawn((
            FloatPose::at(0.0).transform(),
            Visibility::default(),
            FloatGroup,
            Name::new("Float"),
            ChildOf(root),
        ))
        .id();

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(1.0).mesh().uv(64, 32))),
        MeshMaterial3d(core_material),
        Transform::default(),
        ModelPart::CoreSphere,
        AnimatedPart::CoreSphere,
        Name::new("Core Sphere"),
        ChildOf(float),
    ));

    // Tube radius 0.15 around a 0.4 ring
    commands.spawn((
        Mesh3d(meshes.add(Torus::new(0.25, 0.55))),
        MeshMaterial3d(torus_material),
        Transform::from_xyz(2.5, 0.0, 0.0),
        ModelPart::Torus,
        AnimatedPart::Torus,
        Name::new("Torus"),
        ChildOf(float),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.3).mesh().uv(32, 16))),
        MeshMaterial3d(satellite_material),
        Transform::from_xyz(-2.0, 1.0, 0.0),
        ModelPart::SatelliteSphere,
        Name::new("Satellite Sphere"),
        ChildOf(float),
    ));

    for (index, ((size, position), material)) in CUBES.iter().zip(cube_materials).enumerate() {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(*size, *size, *size))),
            MeshMaterial3d(material),
            Transform::from_translation(*position),
            ModelPart::Cube(index as u8),
            Name::new(format!("Cube {}", index)),
            ChildOf(float),
        ));
    }

    commands.insert_resource(ModelRoot(root));
    info!("Demo model spawned in {} mode", mode);
}
