//! Transform matrix utilities for physics objects
//!
//! Converts a body's position and orientation into the column-major 4x4
//! matrix a renderer or engine collaborator writes back to its scene graph.

use crate::types::Vec3;
use glam::{Mat4, Quat, Vec3 as GlamVec3};

/// Identity orientation as an `[x, y, z, w]` quaternion.
pub const IDENTITY_ORIENTATION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Convert position and quaternion to a 4x4 transformation matrix
#[must_use]
pub fn to_transform_matrix(position: Vec3, orientation: [f32; 4]) -> [[f32; 4]; 4] {
    let pos = GlamVec3::new(position.x, position.y, position.z);
    let quat = Quat::from_xyzw(orientation[0], orientation[1], orientation[2], orientation[3]);
    Mat4::from_rotation_translation(quat, pos).to_cols_array_2d()
}

/// Recover the translation column of a matrix built by [`to_transform_matrix`].
#[must_use]
pub fn translation_of(matrix: &[[f32; 4]; 4]) -> Vec3 {
    let (_, _, t) = Mat4::from_cols_array_2d(matrix).to_scale_rotation_translation();
    Vec3::new(t.x, t.y, t.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let transform = to_transform_matrix(Vec3::ZERO, IDENTITY_ORIENTATION);

        assert_eq!(transform[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(transform[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(transform[2], [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(transform[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_translation_only() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let transform = to_transform_matrix(pos, IDENTITY_ORIENTATION);

        // Translation should be in the last column
        assert_eq!(transform[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(translation_of(&transform), pos);
    }
}
