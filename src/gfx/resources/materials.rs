//! Material registry
//!
//! Phong-style material property sets, registered once and looked up by tag
//! while rendering.

use cgmath::Vector3;

/// Material properties uploaded to the shader's `material` uniform block.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialEntry {
    pub tag: String,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    /// Specular exponent, >= 0.
    pub shininess: f32,
}

impl MaterialEntry {
    pub fn new(
        tag: &str,
        diffuse_color: Vector3<f32>,
        specular_color: Vector3<f32>,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.to_string(),
            diffuse_color,
            specular_color,
            shininess,
        }
    }
}

/// Append-only material registry.
///
/// Duplicate tags are permitted; lookups return the first match, so later
/// duplicates are shadowed rather than replacing the original.
#[derive(Default)]
pub struct MaterialRegistry {
    entries: Vec<MaterialEntry>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: MaterialEntry) {
        self.entries.push(entry);
    }

    /// First entry registered under `tag`, or `None` when the tag is
    /// unknown (including when no materials are registered at all).
    pub fn resolve(&self, tag: &str) -> Option<&MaterialEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
