//! Shader-binding facade
//!
//! Thin pass-through between resolved scene resources and the external
//! shader interface. Stateless between calls: every push uploads exactly
//! what it is given, and failures degrade to safe visuals (no texture, or
//! the previously pushed material) rather than propagating errors.

use cgmath::{Matrix4, Vector2, Vector4};
use log::warn;

use super::resources::SceneResources;
use super::shader::{uniforms, ShaderInterface, NO_TEXTURE_SLOT};

/// Pushes transforms, colors, texture selections, and materials into the
/// external shader for the next draw.
pub struct ShaderBindings<'a> {
    shader: &'a mut dyn ShaderInterface,
    resources: &'a SceneResources,
}

impl<'a> ShaderBindings<'a> {
    pub fn new(shader: &'a mut dyn ShaderInterface, resources: &'a SceneResources) -> Self {
        Self { shader, resources }
    }

    /// Upload the model matrix for the next draw.
    pub fn push_transform(&mut self, model: Matrix4<f32>) {
        self.shader.set_mat4(uniforms::MODEL, model);
    }

    /// Disable texture sampling and upload a flat RGBA color.
    pub fn push_flat_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.shader.set_bool(uniforms::USE_TEXTURE, false);
        self.shader
            .set_vec4(uniforms::OBJECT_COLOR, Vector4::new(r, g, b, a));
    }

    /// Enable texture sampling and select the unit registered for `tag`.
    ///
    /// An unregistered tag uploads the [`NO_TEXTURE_SLOT`] sentinel, which
    /// the shader renders as untextured rather than sampling unit 0.
    pub fn push_texture(&mut self, tag: &str) {
        self.shader.set_bool(uniforms::USE_TEXTURE, true);
        let slot = match self.resources.textures.slot(tag) {
            Some(slot) => slot as i32,
            None => {
                warn!("texture tag {tag:?} is not registered; drawing untextured");
                NO_TEXTURE_SLOT
            }
        };
        self.shader.set_sampler(uniforms::OBJECT_TEXTURE, slot);
    }

    /// Upload the texture-coordinate tiling factor. Values above 1 tile the
    /// texture across the surface.
    pub fn push_uv_scale(&mut self, u: f32, v: f32) {
        self.shader.set_vec2(uniforms::UV_SCALE, Vector2::new(u, v));
    }

    /// Resolve `tag` and upload its diffuse/specular/shininess fields.
    ///
    /// Does nothing when no materials are registered at all. An unknown tag
    /// uploads nothing either, leaving the previously pushed material in
    /// effect; partial or stale field mixes are never produced.
    pub fn push_material(&mut self, tag: &str) {
        if self.resources.materials.is_empty() {
            return;
        }
        match self.resources.materials.resolve(tag) {
            Some(material) => {
                self.shader
                    .set_vec3(uniforms::MATERIAL_DIFFUSE, material.diffuse_color);
                self.shader
                    .set_vec3(uniforms::MATERIAL_SPECULAR, material.specular_color);
                self.shader
                    .set_float(uniforms::MATERIAL_SHININESS, material.shininess);
            }
            None => warn!("material tag {tag:?} is not registered; keeping previous material"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::headless::{RecordingShader, UniformValue};
    use crate::gfx::resources::MaterialEntry;
    use cgmath::Vector3;

    fn resources_with_glass() -> SceneResources {
        let mut resources = SceneResources::new();
        resources.materials.register(MaterialEntry::new(
            "glass",
            Vector3::new(0.2, 0.2, 0.2),
            Vector3::new(1.0, 1.0, 1.0),
            95.0,
        ));
        resources
    }

    #[test]
    fn flat_color_disables_texturing() {
        let resources = SceneResources::new();
        let mut shader = RecordingShader::default();

        ShaderBindings::new(&mut shader, &resources).push_flat_color(0.7, 0.7, 0.8, 0.3);

        assert_eq!(
            shader.last(uniforms::USE_TEXTURE),
            Some(&UniformValue::Bool(false))
        );
        assert_eq!(
            shader.last(uniforms::OBJECT_COLOR),
            Some(&UniformValue::Vec4([0.7, 0.7, 0.8, 0.3]))
        );
    }

    #[test]
    fn unresolved_texture_pushes_the_sentinel() {
        let resources = SceneResources::new();
        let mut shader = RecordingShader::default();

        ShaderBindings::new(&mut shader, &resources).push_texture("sauce1");

        assert_eq!(
            shader.last(uniforms::USE_TEXTURE),
            Some(&UniformValue::Bool(true))
        );
        assert_eq!(
            shader.last(uniforms::OBJECT_TEXTURE),
            Some(&UniformValue::Sampler(NO_TEXTURE_SLOT))
        );
    }

    #[test]
    fn material_push_uploads_all_three_fields() {
        let resources = resources_with_glass();
        let mut shader = RecordingShader::default();

        ShaderBindings::new(&mut shader, &resources).push_material("glass");

        assert_eq!(
            shader.last(uniforms::MATERIAL_DIFFUSE),
            Some(&UniformValue::Vec3([0.2, 0.2, 0.2]))
        );
        assert_eq!(
            shader.last(uniforms::MATERIAL_SPECULAR),
            Some(&UniformValue::Vec3([1.0, 1.0, 1.0]))
        );
        assert_eq!(
            shader.last(uniforms::MATERIAL_SHININESS),
            Some(&UniformValue::Float(95.0))
        );
    }

    #[test]
    fn material_push_is_a_noop_with_no_materials_registered() {
        let resources = SceneResources::new();
        let mut shader = RecordingShader::default();

        ShaderBindings::new(&mut shader, &resources).push_material("glass");

        assert!(shader.calls.is_empty());
    }

    #[test]
    fn unknown_material_uploads_nothing() {
        // Registry non-empty but tag unmatched: no uniforms move, so the
        // previously pushed material stays in effect instead of a stale or
        // partial field mix.
        let resources = resources_with_glass();
        let mut shader = RecordingShader::default();

        ShaderBindings::new(&mut shader, &resources).push_material("chrome");

        assert!(shader.calls.is_empty());
    }
}
