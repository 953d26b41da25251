//! Recording backends
//!
//! Implementations of the external interfaces that record what was pushed
//! instead of touching a GPU. Used by the test suite and for driving the
//! scene layer in headless environments.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

use super::device::{TextureDevice, TextureHandle};
use super::mesh::{MeshProvider, PrimitiveKind};
use super::shader::ShaderInterface;
use crate::assets::ImageData;

/// A single recorded uniform upload.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Mat4([[f32; 4]; 4]),
    Sampler(i32),
}

/// Shader interface that records every `set_*` call in order.
#[derive(Debug, Default)]
pub struct RecordingShader {
    pub calls: Vec<(String, UniformValue)>,
}

impl RecordingShader {
    fn record(&mut self, name: &str, value: UniformValue) {
        self.calls.push((name.to_string(), value));
    }

    /// Most recent value uploaded to `name`, if any.
    pub fn last(&self, name: &str) -> Option<&UniformValue> {
        self.calls
            .iter()
            .rev()
            .find(|(uploaded, _)| uploaded == name)
            .map(|(_, value)| value)
    }
}

impl ShaderInterface for RecordingShader {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.record(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.record(name, UniformValue::Vec2(value.into()));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.record(name, UniformValue::Vec3(value.into()));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.record(name, UniformValue::Vec4(value.into()));
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.record(name, UniformValue::Mat4(value.into()));
    }

    fn set_sampler(&mut self, name: &str, slot: i32) {
        self.record(name, UniformValue::Sampler(slot));
    }
}

/// Mesh provider that records load and draw calls in order.
#[derive(Debug, Default)]
pub struct RecordingMeshes {
    pub loaded: Vec<PrimitiveKind>,
    pub drawn: Vec<PrimitiveKind>,
}

impl MeshProvider for RecordingMeshes {
    fn load(&mut self, kind: PrimitiveKind) {
        self.loaded.push(kind);
    }

    fn draw(&mut self, kind: PrimitiveKind) {
        self.drawn.push(kind);
    }
}

/// Texture device that hands out sequential handles and records bindings.
#[derive(Debug, Default)]
pub struct HeadlessDevice {
    created: u32,
    pub bound: Vec<(u32, TextureHandle)>,
}

impl TextureDevice for HeadlessDevice {
    fn create_texture(&mut self, _image: &ImageData, _label: &str) -> TextureHandle {
        let handle = TextureHandle::new(self.created);
        self.created += 1;
        handle
    }

    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        self.bound.push((unit, handle));
    }
}
