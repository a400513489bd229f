//! Accumulated pointer-drag rotation state
//!
//! A single 4x4 rotation matrix, updated incrementally from drag deltas and
//! handed to the renderer each frame. Vertical drag rotates about the X axis,
//! horizontal drag about the Y axis; each incremental rotation is
//! post-multiplied onto the accumulated matrix.
//!
//! Accumulated floating-point drift over very long sessions is a known,
//! unaddressed limitation; [`DragRotation::reset`] restores the exact
//! identity at any time.

use std::f64::consts::PI;

use glam::DMat4;

/// Accumulated rotation driven by pointer-drag deltas
///
/// # Example
///
/// ```rust
/// use platonic_sphere::DragRotation;
///
/// let mut rotation = DragRotation::new();
/// rotation.drag(120.0, -45.0, 640.0, 480.0);
/// let matrix = rotation.matrix(); // feed to the renderer
/// rotation.reset();
/// assert_eq!(rotation.matrix(), glam::DMat4::IDENTITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DragRotation {
    matrix: DMat4,
}

impl DragRotation {
    /// Create a new rotation state at the identity
    pub fn new() -> Self {
        Self {
            matrix: DMat4::IDENTITY,
        }
    }

    /// Apply a pointer-drag delta, in pixels, over the given viewport
    ///
    /// A drag across the full viewport height rotates a half turn about the
    /// X axis; across the full width, a half turn about the Y axis. The two
    /// single-axis rotations are composed in that order. Degenerate viewport
    /// dimensions are ignored.
    pub fn drag(&mut self, dx: f64, dy: f64, viewport_width: f64, viewport_height: f64) {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return;
        }
        self.rotate_about_x(-PI * dy / viewport_height);
        self.rotate_about_y(-PI * dx / viewport_width);
    }

    /// Compose a rotation about the X axis onto the accumulated state
    pub fn rotate_about_x(&mut self, angle: f64) {
        self.matrix *= DMat4::from_rotation_x(angle);
    }

    /// Compose a rotation about the Y axis onto the accumulated state
    pub fn rotate_about_y(&mut self, angle: f64) {
        self.matrix *= DMat4::from_rotation_y(angle);
    }

    /// Restore the exact identity rotation
    pub fn reset(&mut self) {
        self.matrix = DMat4::IDENTITY;
    }

    /// Get the current accumulated rotation matrix
    #[inline]
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }
}

impl Default for DragRotation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_starts_at_identity() {
        assert_eq!(DragRotation::new().matrix(), DMat4::IDENTITY);
    }

    #[test]
    fn test_zero_drag_is_noop() {
        let mut rotation = DragRotation::new();
        rotation.drag(37.0, -12.0, 640.0, 480.0);
        let before = rotation.matrix();

        rotation.drag(0.0, 0.0, 640.0, 480.0);
        assert_eq!(rotation.matrix(), before);
    }

    #[test]
    fn test_reset_restores_exact_identity() {
        let mut rotation = DragRotation::new();
        for i in 0..50 {
            rotation.drag(i as f64 * 3.0, i as f64 * -2.0, 640.0, 480.0);
        }
        assert_ne!(rotation.matrix(), DMat4::IDENTITY);

        rotation.reset();
        assert_eq!(rotation.matrix(), DMat4::IDENTITY);
    }

    #[test]
    fn test_drag_is_post_multiplied() {
        let mut rotation = DragRotation::new();
        rotation.drag(100.0, 40.0, 640.0, 480.0);
        rotation.drag(-30.0, 10.0, 640.0, 480.0);

        let step = |dx: f64, dy: f64| {
            DMat4::from_rotation_x(-PI * dy / 480.0) * DMat4::from_rotation_y(-PI * dx / 640.0)
        };
        let expected = step(100.0, 40.0) * step(-30.0, 10.0);

        assert!(rotation.matrix().abs_diff_eq(expected, EPSILON));
    }

    #[test]
    fn test_stays_orthonormal() {
        let mut rotation = DragRotation::new();
        for i in 0..500 {
            rotation.drag((i % 17) as f64 - 8.0, (i % 11) as f64 - 5.0, 640.0, 480.0);
        }

        let m = rotation.matrix();
        let product = m.transpose() * m;
        assert!(product.abs_diff_eq(DMat4::IDENTITY, EPSILON));
        assert!((m.determinant() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_viewport_ignored() {
        let mut rotation = DragRotation::new();
        rotation.drag(50.0, 50.0, 0.0, 480.0);
        rotation.drag(50.0, 50.0, 640.0, -1.0);
        assert_eq!(rotation.matrix(), DMat4::IDENTITY);
    }
}
