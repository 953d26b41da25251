// src/lib.rs
//! Scoville
//!
//! A procedural still-life scene assembler: a shelf of hot-sauce bottles
//! composed from a small vocabulary of primitive meshes, textures, and
//! materials. The crate owns resource registration, transform composition,
//! and compound-object generation; windowing, shader compilation, and mesh
//! geometry live behind external traits.

pub mod assets;
pub mod gfx;
pub mod scene;

// Re-export the main entry point for convenience
pub use scene::assembler::SceneAssembler;
