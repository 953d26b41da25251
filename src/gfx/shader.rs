//! External shader interface
//!
//! The shader program is compiled and owned elsewhere; this crate only
//! pushes uniform values into it by name. The names are part of the shader's
//! contract and must match the GLSL source exactly.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Uniform names fixed by the external shader program.
pub mod uniforms {
    pub const MODEL: &str = "model";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";
    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";
}

/// Sampler slot pushed when a texture tag cannot be resolved. The shader
/// treats a negative slot as "no valid sample"; it must never fall back to
/// unit 0.
pub const NO_TEXTURE_SLOT: i32 = -1;

/// Set-uniform operations on the external shader program.
pub trait ShaderInterface {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);

    /// Select the texture unit an integer sampler uniform reads from.
    fn set_sampler(&mut self, name: &str, slot: i32);
}
