use crate::math::ConstEval;
use crate::matrix::aliases::Matrix4;
use crate::matrix::vector::Vector3;
use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;

use super::Transform;

/// 3D transform: translation, quaternion rotation, and per-axis scale.
///
/// The default is the identity. The rotation is used as given; it should
/// be a unit quaternion for `matrix()` to be a pure rotation-and-scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D<T = f32> {
    pub translation: Vector3<T>,
    pub rotation: Quaternion<T>,
    pub scale: Vector3<T>,
}

impl<T: Copy> Transform3D<T> {
    pub const fn new(translation: Vector3<T>, rotation: Quaternion<T>, scale: Vector3<T>) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }
}

impl<T: FloatScalar> Transform3D<T> {
    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), Quaternion::identity(), Vector3::one())
    }

    /// Local matrix: `translation × rotation × scale`.
    pub fn matrix(&self) -> Matrix4<T> {
        Matrix4::translation(self.translation)
            * Matrix4::from_quaternion(&self.rotation)
            * Matrix4::scale(self.scale)
    }
}

impl<T: FloatScalar> Default for Transform3D<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> Transform for Transform3D<T> {
    type Matrix = Matrix4<T>;

    fn matrix(&self) -> Matrix4<T> {
        Transform3D::matrix(self)
    }
}

macro_rules! impl_const_transform3d {
    ($($t:ty),*) => {
        $(
            impl ConstEval<Transform3D<$t>> {
                pub const fn matrix(self) -> ConstEval<Matrix4<$t>> {
                    let tr = self.0;
                    ConstEval::<Matrix4<$t>>::translation(tr.translation)
                        .mul(ConstEval::<Matrix4<$t>>::from_quaternion(tr.rotation))
                        .mul(ConstEval::<Matrix4<$t>>::scale(tr.scale))
                }

                pub const fn world_matrix(self, parent_world: Matrix4<$t>) -> ConstEval<Matrix4<$t>> {
                    ConstEval(parent_world).mul(self.matrix())
                }
            }
        )*
    };
}

impl_const_transform3d!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq failed: {a} vs {b}, diff = {}",
            (a - b).abs()
        );
    }

    fn assert_point(t: &Transform3D<f64>, p: [f64; 3], expected: [f64; 3]) {
        let q = t.matrix().transform_point(&Vector3::from_array(p));
        for i in 0..3 {
            approx_eq(q[i], expected[i], 1e-12);
        }
    }

    #[test]
    fn default_is_identity() {
        let t = Transform3D::<f64>::default();
        assert_eq!(t.rotation, Quaternion::identity());
        assert_eq!(t.scale, Vector3::one());
        assert_eq!(t.matrix(), Matrix4::identity());
    }

    #[test]
    fn local_translate() {
        let mut t = Transform3D::default();
        t.translation = Vector3::from_array([5.0, 2.0, -2.0]);
        assert_point(&t, [-1.0, 2.0, -5.0], [4.0, 4.0, -7.0]);
    }

    #[test]
    fn local_rotate() {
        let mut t = Transform3D::default();
        t.rotation = Quaternion::from_axis_angle(Vector3::up(), FRAC_PI_2);
        assert_point(&t, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);

        t.translation = Vector3::from_array([5.0, 2.0, -1.0]);
        assert_point(&t, [0.0, 0.0, 0.0], [5.0, 2.0, -1.0]);
        assert_point(&t, [5.0, 2.0, -1.0], [4.0, 4.0, -6.0]);
    }

    #[test]
    fn local_scale() {
        let mut t = Transform3D::default();
        t.scale = Vector3::from_array([2.0, 3.0, 4.0]);
        assert_point(&t, [1.0, 1.0, 1.0], [2.0, 3.0, 4.0]);

        t.translation = Vector3::from_array([-2.0, -1.0, 3.0]);
        assert_point(&t, [1.0, 1.0, 1.0], [0.0, 2.0, 7.0]);
    }

    #[test]
    fn const_matrix_matches_runtime() {
        let t = Transform3D::<f64>::new(
            Vector3::from_array([17.0, -32.0, 14.0]),
            Quaternion::from_axis_angle(Vector3::from_array([3.0, 7.0, -5.0]).normalized(), 1.4536),
            Vector3::from_array([34.0, 56.0, -12.0]),
        );
        // no transcendental calls on this path, so the results are bit-identical
        assert_eq!(ConstEval(t).matrix().get(), t.matrix());

        let parent = Matrix4::rotation_x(0.3);
        assert_eq!(ConstEval(t).world_matrix(parent).get(), parent * t.matrix());
    }
}
