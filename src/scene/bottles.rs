//! Bottle generators
//!
//! Three parameterized hot-sauce bottle variants. Each takes a placement
//! offset, a uniform scale factor, and the texture tag of the contained
//! liquid, and emits its primitives stacked along the vertical axis.
//! Vertical offsets are multiplied by the scale factor so sub-parts stay
//! contiguous at any size; x/z offsets position the bottle in scene space
//! unscaled.

use cgmath::Vector3;

use crate::gfx::mesh::PrimitiveKind;
use crate::gfx::transform::Placement;

use super::instructions::{DrawInstruction, Finish};

/// Semi-transparent tint for glass parts, drawn untextured.
const GLASS_TINT: [f32; 4] = [0.7, 0.7, 0.8, 0.3];

/// Liquid surfaces tile their texture heavily so no macro detail survives
/// up close; sauces read as a homogeneous blend.
const LIQUID_UV: (f32, f32) = (50.0, 50.0);

fn glass(scale: Vector3<f32>, position: Vector3<f32>, primitive: PrimitiveKind) -> DrawInstruction {
    DrawInstruction {
        placement: Placement::upright(scale, position),
        finish: Finish::Flat(GLASS_TINT),
        material: Some("glass".to_string()),
        primitive,
    }
}

fn liquid(scale: Vector3<f32>, position: Vector3<f32>, tag: &str) -> DrawInstruction {
    DrawInstruction {
        placement: Placement::upright(scale, position),
        finish: Finish::Textured {
            tag: tag.to_string(),
            uv_scale: LIQUID_UV,
        },
        material: None,
        primitive: PrimitiveKind::Cylinder,
    }
}

/// The baseline bottle: liquid core, glass base, tapered glass shoulder,
/// plastic lid, and a straight glass neck.
pub fn classic_bottle(x: f32, y: f32, z: f32, s: f32, liquid_tag: &str) -> Vec<DrawInstruction> {
    vec![
        liquid(
            Vector3::new(s * 0.7, s * 2.8, s * 0.7),
            Vector3::new(x, s * (0.2 + y), z),
            liquid_tag,
        ),
        glass(
            Vector3::new(s * 0.8, s * 3.0, s * 0.8),
            Vector3::new(x, s * y, z),
            PrimitiveKind::Cylinder,
        ),
        glass(
            Vector3::new(s * 0.8, s * 1.0, s * 0.8),
            Vector3::new(x, s * (3.0 + y), z),
            PrimitiveKind::TaperedCylinder,
        ),
        DrawInstruction {
            placement: Placement::upright(
                Vector3::new(s * 0.5, s * 0.7, s * 0.5),
                Vector3::new(x, s * (4.8 + y), z),
            ),
            finish: Finish::Textured {
                tag: "lid".to_string(),
                uv_scale: (1.0, 1.0),
            },
            material: Some("plastic".to_string()),
            primitive: PrimitiveKind::Cylinder,
        },
        glass(
            Vector3::new(s * 0.4, s * 1.0, s * 0.4),
            Vector3::new(x, s * (4.0 + y), z),
            PrimitiveKind::Cylinder,
        ),
    ]
}

/// A classic bottle with a tilted plastic ring around the neck.
pub fn ring_neck_bottle(x: f32, y: f32, z: f32, s: f32, liquid_tag: &str) -> Vec<DrawInstruction> {
    let mut instructions = classic_bottle(x, y, z, s, liquid_tag);
    instructions.push(DrawInstruction {
        placement: Placement::new(
            Vector3::new(s * 0.6, s * 0.4, s * 0.6),
            Vector3::new(-67.0, 0.0, 13.0),
            Vector3::new(x, s * (y + 4.2), z),
        ),
        finish: Finish::Textured {
            tag: "lid".to_string(),
            uv_scale: (1.0, 1.0),
        },
        material: Some("plastic".to_string()),
        primitive: PrimitiveKind::Torus,
    });
    instructions
}

/// A wider-bodied bottle with a pointed red-plastic nozzle instead of a
/// glass neck: two tapered segments narrow toward a small tip.
pub fn nozzle_bottle(x: f32, y: f32, z: f32, s: f32, liquid_tag: &str) -> Vec<DrawInstruction> {
    let red_plastic = |scale: Vector3<f32>, position: Vector3<f32>| DrawInstruction {
        placement: Placement::upright(scale, position),
        finish: Finish::Textured {
            tag: "redplastic".to_string(),
            uv_scale: LIQUID_UV,
        },
        material: Some("plastic".to_string()),
        primitive: PrimitiveKind::TaperedCylinder,
    };

    vec![
        liquid(
            Vector3::new(s * 1.0, s * 2.8, s * 1.0),
            Vector3::new(x, s * (0.2 + y), z),
            liquid_tag,
        ),
        glass(
            Vector3::new(s * 1.1, s * 3.0, s * 1.1),
            Vector3::new(x, s * y, z),
            PrimitiveKind::Cylinder,
        ),
        red_plastic(
            Vector3::new(s * 1.0, s * 1.0, s * 1.0),
            Vector3::new(x, s * (3.0 + y), z),
        ),
        red_plastic(
            Vector3::new(s * 0.4, s * 1.3, s * 0.4),
            Vector3::new(x, s * (4.0 + y), z),
        ),
        red_plastic(
            Vector3::new(s * 0.1, s * 0.1, s * 0.1),
            Vector3::new(x, s * (5.33 + y), z),
        ),
    ]
}
