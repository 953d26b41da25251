//! Shelf generator
//!
//! A three-tier wooden shelf: one box per tier plus mirrored side supports.
//! Tiers step up in height and back in depth; every dimension is a fixed
//! constant of the scene.

use cgmath::Vector3;

use crate::gfx::mesh::PrimitiveKind;
use crate::gfx::transform::Placement;

use super::instructions::{DrawInstruction, Finish};

fn plank(scale: Vector3<f32>, position: Vector3<f32>) -> DrawInstruction {
    DrawInstruction {
        placement: Placement::upright(scale, position),
        finish: Finish::Textured {
            tag: "shelf".to_string(),
            uv_scale: (1.0, 1.0),
        },
        material: Some("shelf".to_string()),
        primitive: PrimitiveKind::Box,
    }
}

/// The full shelf: three tiers, two side supports each.
pub fn shelf() -> Vec<DrawInstruction> {
    vec![
        // Tiers, front to back
        plank(Vector3::new(10.0, 1.0, 2.0), Vector3::new(0.0, 0.5, 3.0)),
        plank(Vector3::new(10.0, 2.0, 2.0), Vector3::new(0.0, 1.0, 1.0)),
        plank(Vector3::new(10.0, 3.0, 2.0), Vector3::new(0.0, 1.5, -1.0)),
        // Side supports, mirrored left/right per tier
        plank(Vector3::new(0.3, 1.3, 2.2), Vector3::new(5.0, 0.65, 3.0)),
        plank(Vector3::new(0.3, 1.3, 2.2), Vector3::new(-5.0, 0.65, 3.0)),
        plank(Vector3::new(0.3, 2.3, 2.2), Vector3::new(5.0, 1.15, 1.0)),
        plank(Vector3::new(0.3, 2.3, 2.2), Vector3::new(-5.0, 1.15, 1.0)),
        plank(Vector3::new(0.3, 3.3, 2.2), Vector3::new(5.0, 1.65, -1.0)),
        plank(Vector3::new(0.3, 3.3, 2.2), Vector3::new(-5.0, 1.65, -1.0)),
    ]
}
