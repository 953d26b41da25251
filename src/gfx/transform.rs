//! Model-matrix composition
//!
//! Converts independent scale / rotation / translation parameters into a
//! single model matrix, recomputed on every call.

use cgmath::{Deg, Matrix4, Vector3};

/// Per-draw transform parameters. Ephemeral: no identity persists between
/// draws and nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: Vector3<f32>,
    /// Per-axis rotation in degrees, applied X then Y then Z.
    pub rotation_deg: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Placement {
    pub fn new(scale: Vector3<f32>, rotation_deg: Vector3<f32>, position: Vector3<f32>) -> Self {
        Self {
            scale,
            rotation_deg,
            position,
        }
    }

    /// Axis-aligned placement with no rotation.
    pub fn upright(scale: Vector3<f32>, position: Vector3<f32>) -> Self {
        Self::new(scale, Vector3::new(0.0, 0.0, 0.0), position)
    }
}

/// Compose the model matrix as `Translation * RotZ * RotY * RotX * Scale`.
///
/// The order is a contract: translation outermost, scale innermost,
/// rotations applied X-then-Y-then-Z to a point. Changing it moves every
/// object in the scene.
pub fn model_matrix(placement: &Placement) -> Matrix4<f32> {
    let scale = Matrix4::from_nonuniform_scale(
        placement.scale.x,
        placement.scale.y,
        placement.scale.z,
    );
    let rotation_x = Matrix4::from_angle_x(Deg(placement.rotation_deg.x));
    let rotation_y = Matrix4::from_angle_y(Deg(placement.rotation_deg.y));
    let rotation_z = Matrix4::from_angle_z(Deg(placement.rotation_deg.z));
    let translation = Matrix4::from_translation(placement.position);

    translation * rotation_z * rotation_y * rotation_x * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    const EPS: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn translation_only_keeps_identity_basis() {
        let placement = Placement::upright(
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(3.0, -2.0, 7.5),
        );
        let m: [[f32; 4]; 4] = model_matrix(&placement).into();

        // Translation column
        assert_close(m[3][0], 3.0);
        assert_close(m[3][1], -2.0);
        assert_close(m[3][2], 7.5);
        // Upper-left 3x3 block is the identity
        for col in 0..3 {
            for row in 0..3 {
                let expected = if col == row { 1.0 } else { 0.0 };
                assert_close(m[col][row], expected);
            }
        }
    }

    #[test]
    fn scale_applies_before_rotation() {
        // X-extent of 2 rotated 90 degrees about Y lands on -Z.
        let placement = Placement::new(
            Vector3::new(2.0, 1.0, 1.0),
            Vector3::new(0.0, 90.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
        );
        let mapped = model_matrix(&placement) * Vector4::new(1.0, 0.0, 0.0, 1.0);

        assert_close(mapped.x, 0.0);
        assert_close(mapped.y, 0.0);
        assert_close(mapped.z, -2.0);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let placement = Placement::new(
            Vector3::new(0.4, 1.3, 0.4),
            Vector3::new(-67.0, 0.0, 13.0),
            Vector3::new(2.0, 1.68, 1.0),
        );
        assert_eq!(model_matrix(&placement), model_matrix(&placement));
    }
}
