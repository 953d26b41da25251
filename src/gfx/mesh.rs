//! Primitive mesh vocabulary
//!
//! The crate never generates geometry; it asks an external provider to load
//! and draw one of five fixed primitive kinds.

/// The fixed geometry vocabulary supplied by the external mesh provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Plane,
    Box,
    Cylinder,
    TaperedCylinder,
    Torus,
}

impl PrimitiveKind {
    /// Every primitive kind the scene draws.
    pub const ALL: [PrimitiveKind; 5] = [
        PrimitiveKind::Plane,
        PrimitiveKind::Box,
        PrimitiveKind::Cylinder,
        PrimitiveKind::TaperedCylinder,
        PrimitiveKind::Torus,
    ];
}

/// External source of primitive meshes: one preparation call and one draw
/// call per kind. A mesh only needs loading once no matter how often it is
/// drawn.
pub trait MeshProvider {
    fn load(&mut self, kind: PrimitiveKind);
    fn draw(&mut self, kind: PrimitiveKind);
}
