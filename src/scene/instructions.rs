//! Draw instructions
//!
//! The contract a compound-object generator fulfills: an ordered list of
//! (placement, surface finish, material, primitive) tuples. Keeping the list
//! as plain data decouples geometry composition from GPU calls, so
//! instruction sequences can be inspected and tested without a graphics
//! context.

use crate::gfx::mesh::{MeshProvider, PrimitiveKind};
use crate::gfx::shading::ShaderBindings;
use crate::gfx::transform::{model_matrix, Placement};

/// Surface appearance for one draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Finish {
    /// Sample the texture registered under `tag`, tiled by `uv_scale`.
    Textured { tag: String, uv_scale: (f32, f32) },
    /// Flat RGBA color, no texture sampling.
    Flat([f32; 4]),
}

/// One primitive draw within a compound object.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction {
    pub placement: Placement,
    pub finish: Finish,
    /// Material tag to push before drawing. `None` leaves the previously
    /// pushed material in effect.
    pub material: Option<String>,
    pub primitive: PrimitiveKind,
}

/// Execute an instruction list: compose each transform, push the surface
/// state, and issue one draw per instruction.
pub fn submit(
    instructions: &[DrawInstruction],
    bindings: &mut ShaderBindings<'_>,
    meshes: &mut dyn MeshProvider,
) {
    for instruction in instructions {
        bindings.push_transform(model_matrix(&instruction.placement));
        match &instruction.finish {
            Finish::Textured { tag, uv_scale } => {
                bindings.push_uv_scale(uv_scale.0, uv_scale.1);
                bindings.push_texture(tag);
            }
            Finish::Flat([r, g, b, a]) => bindings.push_flat_color(*r, *g, *b, *a),
        }
        if let Some(tag) = &instruction.material {
            bindings.push_material(tag);
        }
        meshes.draw(instruction.primitive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::headless::{RecordingMeshes, RecordingShader, UniformValue};
    use crate::gfx::resources::SceneResources;
    use crate::gfx::shader::uniforms;
    use cgmath::Vector3;

    #[test]
    fn submit_pushes_state_then_draws_in_order() {
        let resources = SceneResources::new();
        let mut shader = RecordingShader::default();
        let mut meshes = RecordingMeshes::default();

        let instructions = vec![
            DrawInstruction {
                placement: Placement::upright(
                    Vector3::new(1.0, 1.0, 1.0),
                    Vector3::new(0.0, 0.0, 0.0),
                ),
                finish: Finish::Flat([0.7, 0.7, 0.8, 0.3]),
                material: None,
                primitive: PrimitiveKind::Cylinder,
            },
            DrawInstruction {
                placement: Placement::upright(
                    Vector3::new(2.0, 1.0, 2.0),
                    Vector3::new(0.0, 3.0, 0.0),
                ),
                finish: Finish::Textured {
                    tag: "lid".to_string(),
                    uv_scale: (1.0, 1.0),
                },
                material: None,
                primitive: PrimitiveKind::Torus,
            },
        ];

        submit(&instructions, &mut ShaderBindings::new(&mut shader, &resources), &mut meshes);

        assert_eq!(
            meshes.drawn,
            vec![PrimitiveKind::Cylinder, PrimitiveKind::Torus]
        );
        // The textured draw re-enabled sampling after the flat one
        assert_eq!(
            shader.last(uniforms::USE_TEXTURE),
            Some(&UniformValue::Bool(true))
        );
        assert_eq!(
            shader.last(uniforms::UV_SCALE),
            Some(&UniformValue::Vec2([1.0, 1.0]))
        );
    }
}
