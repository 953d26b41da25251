//! Tag-keyed scene resources
//!
//! Textures and materials are registered once during scene preparation and
//! resolved by symbolic tag while rendering. Registries live in a single
//! [`SceneResources`] context passed explicitly wherever lookups happen;
//! there is no global state.

pub mod materials;
pub mod textures;

pub use materials::{MaterialEntry, MaterialRegistry};
pub use textures::{TextureEntry, TextureRegistry};

/// All tag-resolvable resources for one scene.
///
/// Mutated only during preparation; read-only on the render path.
#[derive(Default)]
pub struct SceneResources {
    pub textures: TextureRegistry,
    pub materials: MaterialRegistry,
}

impl SceneResources {
    pub fn new() -> Self {
        Self::default()
    }
}
