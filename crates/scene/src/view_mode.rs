//! View mode to material parameter resolution
//!
//! Every mode resolves to a complete record. Emissive is always set, to black
//! at zero intensity outside solid mode, so switching away from solid never
//! leaves a stale glow behind.

use bevy::prelude::*;
use showcase_ipc::ViewMode;

/// Convert a `0xRRGGBB` colour to sRGB components
pub const fn hex(rgb: u32) -> [f32; 3] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    ]
}

const NO_EMISSIVE: [f32; 3] = [0.0, 0.0, 0.0];

/// Surface attributes applied to a mesh for one view mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    pub roughness: f32,
    pub metalness: f32,
    pub wireframe: bool,
    pub transparent: bool,
    pub opacity: f32,
    /// sRGB base colour
    pub color: [f32; 3],
    /// sRGB emissive colour
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
}

/// Role of a mesh inside the demo model, used for per-part colour overrides
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelPart {
    CoreSphere,
    Torus,
    SatelliteSphere,
    /// Floating cube by index (0 = largest)
    Cube(u8),
}

/// (wireframe colour, other modes colour) for each floating cube
const CUBE_PALETTE: [(u32, u32); 3] = [
    (0x00e5ff, 0x01579b),
    (0x18ffff, 0x0288d1),
    (0x84ffff, 0x0277bd),
];

/// Base material record for a view mode
pub fn resolve(mode: ViewMode) -> MaterialParams {
    let base = MaterialParams {
        roughness: 0.2,
        metalness: 0.8,
        wireframe: false,
        transparent: false,
        opacity: 1.0,
        color: hex(0x64b5f6),
        emissive: NO_EMISSIVE,
        emissive_intensity: 0.0,
    };

    match mode {
        ViewMode::Solid => MaterialParams {
            color: hex(0x2196f3),
            emissive: hex(0x0d47a1),
            emissive_intensity: 0.1,
            ..base
        },
        ViewMode::Wireframe => MaterialParams {
            wireframe: true,
            transparent: true,
            opacity: 0.8,
            color: hex(0x4fc3f7),
            ..base
        },
        ViewMode::Textured => MaterialParams {
            roughness: 0.3,
            metalness: 0.6,
            color: hex(0x1976d2),
            ..base
        },
        ViewMode::Normal => base,
    }
}

/// Material record for one part of the demo model
pub fn resolve_part(mode: ViewMode, part: ModelPart) -> MaterialParams {
    let base = resolve(mode);
    let wireframe = mode == ViewMode::Wireframe;
    let pick = |wire: u32, other: u32| hex(if wireframe { wire } else { other });

    match part {
        ModelPart::CoreSphere => base,
        ModelPart::Torus => MaterialParams {
            color: pick(0x29b6f6, 0x1565c0),
            ..base
        },
        ModelPart::SatelliteSphere => {
            let (emissive, emissive_intensity) = if mode == ViewMode::Solid {
                (hex(0x004d40), 0.2)
            } else {
                (NO_EMISSIVE, 0.0)
            };
            MaterialParams {
                color: pick(0x26c6da, 0x0277bd),
                emissive,
                emissive_intensity,
                ..base
            }
        }
        ModelPart::Cube(index) => {
            let (wire, other) = CUBE_PALETTE[usize::from(index) % CUBE_PALETTE.len()];
            MaterialParams {
                color: pick(wire, other),
                ..base
            }
        }
    }
}
