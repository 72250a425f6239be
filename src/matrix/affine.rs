//! Homogeneous transform factories for [`Matrix3`] (2D) and [`Matrix4`] (3D).
//!
//! Points are transformed with `w = 1` and directions with `w = 0`. All
//! rotations are counter-clockwise for positive angles, in radians.
//!
//! The `extract_*` probes recover translation, rotation and scale from a
//! composed matrix by pushing canonical points through it. They are exact
//! for translate·rotate·scale products and approximate once skew creeps in
//! (a rotated parent over a non-uniformly scaled child, for example).

use num_traits::Signed;

use crate::math::{series, ConstEval};
use crate::matrix::aliases::{Matrix3, Matrix4};
use crate::matrix::vector::{Vector2, Vector3, Vector4};
use crate::quaternion::Quaternion;
use crate::traits::{FloatScalar, Scalar};

// ── 2D ──────────────────────────────────────────────────────────────

impl<T: Scalar> Matrix3<T> {
    pub fn translation(v: Vector2<T>) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new([[l, o, v.x()], [o, l, v.y()], [o, o, l]])
    }

    pub fn scale(v: Vector2<T>) -> Self {
        Self::from_diag(&Vector3::from_vector2(v, T::one()))
    }

    /// Maps a point (`w = 1`): translation applies.
    pub fn transform_point(&self, p: &Vector2<T>) -> Vector2<T> {
        self.vecmul(&Vector3::from_vector2(*p, T::one())).truncate()
    }

    /// Maps a direction (`w = 0`): translation does not apply.
    pub fn transform_vector(&self, v: &Vector2<T>) -> Vector2<T> {
        self.vecmul(&Vector3::from_vector2(*v, T::zero())).truncate()
    }

    /// Image of the origin.
    pub fn extract_translation(&self) -> Vector2<T> {
        self.transform_point(&Vector2::zeros())
    }

    /// Image of `(1, 1)` relative to the image of the origin.
    pub fn extract_scale(&self) -> Vector2<T> {
        self.transform_point(&Vector2::one()) - self.extract_translation()
    }
}

impl<T: Scalar + Signed> Matrix3<T> {
    /// Mirror across the Y axis (negates X).
    pub fn reflection_x() -> Self {
        let l = T::one();
        Self::from_diag(&Vector3::from_array([-l, l, l]))
    }

    /// Mirror across the X axis (negates Y).
    pub fn reflection_y() -> Self {
        let l = T::one();
        Self::from_diag(&Vector3::from_array([l, -l, l]))
    }
}

impl<T: FloatScalar> Matrix3<T> {
    /// Rotation about the origin.
    ///
    /// ```
    /// use vlk_common::{Matrix3, Vector3};
    /// let r = Matrix3::rotation(core::f64::consts::FRAC_PI_2);
    /// let v = r.vecmul(&Vector3::from_array([1.0, 1.0, 1.0]));
    /// assert!((v[0] + 1.0).abs() < 1e-12 && (v[1] - 1.0).abs() < 1e-12);
    /// assert_eq!(v[2], 1.0);
    /// ```
    pub fn rotation(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, l) = (T::zero(), T::one());
        Self::new([[c, -s, o], [s, c, o], [o, o, l]])
    }

    /// Angle of the image of the +X direction: `atan2(dir.y, dir.x)`.
    pub fn extract_rotation(&self) -> T {
        let x = Vector2::from_array([T::one(), T::zero()]);
        let dir = self.transform_point(&x) - self.extract_translation();
        dir.y().atan2(dir.x())
    }
}

// ── 3D ──────────────────────────────────────────────────────────────

impl<T: Scalar> Matrix4<T> {
    pub fn translation(v: Vector3<T>) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new([
            [l, o, o, v.x()],
            [o, l, o, v.y()],
            [o, o, l, v.z()],
            [o, o, o, l],
        ])
    }

    pub fn scale(v: Vector3<T>) -> Self {
        Self::from_diag(&Vector4::from_vector3(v, T::one()))
    }

    /// Embed a 3×3 linear block in the upper-left corner of the identity.
    pub fn from_linear(m: &Matrix3<T>) -> Self {
        let mut out = Self::identity();
        for c in 0..3 {
            for r in 0..3 {
                out[(r, c)] = m[(r, c)];
            }
        }
        out
    }

    /// Maps a point (`w = 1`): translation applies.
    pub fn transform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        self.vecmul(&Vector4::from_vector3(*p, T::one())).truncate()
    }

    /// Maps a direction (`w = 0`): translation does not apply.
    pub fn transform_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        self.vecmul(&Vector4::from_vector3(*v, T::zero())).truncate()
    }

    /// Image of the origin.
    pub fn extract_translation(&self) -> Vector3<T> {
        self.transform_point(&Vector3::zeros())
    }

    /// Image of `(1, 1, 1)` relative to the image of the origin.
    pub fn extract_scale(&self) -> Vector3<T> {
        self.transform_point(&Vector3::one()) - self.extract_translation()
    }
}

impl<T: Scalar + Signed> Matrix4<T> {
    /// Negates X.
    pub fn reflection_x() -> Self {
        let l = T::one();
        Self::from_diag(&Vector4::from_array([-l, l, l, l]))
    }

    /// Negates Y.
    pub fn reflection_y() -> Self {
        let l = T::one();
        Self::from_diag(&Vector4::from_array([l, -l, l, l]))
    }

    /// Negates Z.
    pub fn reflection_z() -> Self {
        let l = T::one();
        Self::from_diag(&Vector4::from_array([l, l, -l, l]))
    }
}

impl<T: FloatScalar> Matrix4<T> {
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, l) = (T::zero(), T::one());
        Self::from_linear(&Matrix3::new([[l, o, o], [o, c, -s], [o, s, c]]))
    }

    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, l) = (T::zero(), T::one());
        Self::from_linear(&Matrix3::new([[c, o, s], [o, l, o], [-s, o, c]]))
    }

    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, l) = (T::zero(), T::one());
        Self::from_linear(&Matrix3::new([[c, -s, o], [s, c, o], [o, o, l]]))
    }

    /// Rotation by per-axis angles, composed as `Ry · Rz · Rx`: X is
    /// applied first, then Z, then Y.
    pub fn rotation_euler(euler: Vector3<T>) -> Self {
        let (sx, cx) = (euler.x().sin(), euler.x().cos());
        let (sy, cy) = (euler.y().sin(), euler.y().cos());
        let (sz, cz) = (euler.z().sin(), euler.z().cos());
        Self::from_linear(&Matrix3::new([
            [cy * cz, sy * sx - cy * sz * cx, cy * sz * sx + sy * cx],
            [sz, cz * cx, -(cz * sx)],
            [-(sy * cz), sy * sz * cx + cy * sx, cy * cx - sy * sz * sx],
        ]))
    }

    /// Rotation of `angle` about a unit `axis` (Rodrigues' formula).
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let t = T::one() - c;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        Self::from_linear(&Matrix3::new([
            [t * x * x + c, t * x * y - z * s, t * x * z + y * s],
            [t * x * y + z * s, t * y * y + c, t * y * z - x * s],
            [t * x * z - y * s, t * y * z + x * s, t * z * z + c],
        ]))
    }

    /// Rotation equivalent to a unit quaternion.
    pub fn from_quaternion(q: &Quaternion<T>) -> Self {
        Self::from_linear(&q.to_rotation_matrix())
    }

    /// Rotation recovered from the normalized images of the basis vectors.
    pub fn extract_rotation(&self) -> Quaternion<T> {
        let mut basis = Matrix3::zeros();
        for c in 0..3 {
            let mut e = Vector3::zeros();
            e[c] = T::one();
            let image = (self.transform_point(&e) - self.extract_translation()).normalized();
            for r in 0..3 {
                basis[(r, c)] = image[r];
            }
        }
        Quaternion::from_rotation_matrix(&basis)
    }
}

// ── Compile-time forms ──────────────────────────────────────────────

macro_rules! impl_const_affine {
    ($($t:ty),*) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl ConstEval<Matrix3<$t>> {
                pub const fn translation(v: Vector2<$t>) -> Self {
                    ConstEval(Matrix3::new([[1.0, 0.0, v.x()], [0.0, 1.0, v.y()], [0.0, 0.0, 1.0]]))
                }

                pub const fn rotation(angle: $t) -> Self {
                    let s = series::sin(angle as f64) as $t;
                    let c = series::cos(angle as f64) as $t;
                    ConstEval(Matrix3::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]))
                }

                pub const fn scale(v: Vector2<$t>) -> Self {
                    ConstEval(Matrix3::new([[v.x(), 0.0, 0.0], [0.0, v.y(), 0.0], [0.0, 0.0, 1.0]]))
                }

                pub const fn reflection_x() -> Self {
                    ConstEval(Matrix3::new([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]))
                }

                pub const fn reflection_y() -> Self {
                    ConstEval(Matrix3::new([[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]))
                }

                pub const fn transform_point(self, p: Vector2<$t>) -> Vector2<$t> {
                    self.vecmul(ConstEval(Vector3::from_vector2(p, 1.0))).0.truncate()
                }

                pub const fn transform_vector(self, v: Vector2<$t>) -> Vector2<$t> {
                    self.vecmul(ConstEval(Vector3::from_vector2(v, 0.0))).0.truncate()
                }

                pub const fn extract_translation(self) -> Vector2<$t> {
                    self.transform_point(Vector2::from_array([0.0, 0.0]))
                }

                pub const fn extract_scale(self) -> Vector2<$t> {
                    let one = self.transform_point(Vector2::from_array([1.0, 1.0]));
                    ConstEval(one).sub(ConstEval(self.extract_translation())).0
                }

                pub const fn extract_rotation(self) -> $t {
                    let x = self.transform_point(Vector2::from_array([1.0, 0.0]));
                    let dir = ConstEval(x).sub(ConstEval(self.extract_translation())).0;
                    series::atan2(dir.y() as f64, dir.x() as f64) as $t
                }
            }

            #[allow(clippy::unnecessary_cast)]
            impl ConstEval<Matrix4<$t>> {
                const fn linear(m: [[$t; 3]; 3]) -> Self {
                    ConstEval(Matrix4::new([
                        [m[0][0], m[0][1], m[0][2], 0.0],
                        [m[1][0], m[1][1], m[1][2], 0.0],
                        [m[2][0], m[2][1], m[2][2], 0.0],
                        [0.0, 0.0, 0.0, 1.0],
                    ]))
                }

                const fn sin_cos(angle: $t) -> ($t, $t) {
                    (series::sin(angle as f64) as $t, series::cos(angle as f64) as $t)
                }

                pub const fn translation(v: Vector3<$t>) -> Self {
                    ConstEval(Matrix4::new([
                        [1.0, 0.0, 0.0, v.x()],
                        [0.0, 1.0, 0.0, v.y()],
                        [0.0, 0.0, 1.0, v.z()],
                        [0.0, 0.0, 0.0, 1.0],
                    ]))
                }

                pub const fn scale(v: Vector3<$t>) -> Self {
                    Self::linear([[v.x(), 0.0, 0.0], [0.0, v.y(), 0.0], [0.0, 0.0, v.z()]])
                }

                pub const fn reflection_x() -> Self {
                    Self::scale(Vector3::from_array([-1.0, 1.0, 1.0]))
                }

                pub const fn reflection_y() -> Self {
                    Self::scale(Vector3::from_array([1.0, -1.0, 1.0]))
                }

                pub const fn reflection_z() -> Self {
                    Self::scale(Vector3::from_array([1.0, 1.0, -1.0]))
                }

                pub const fn rotation_x(angle: $t) -> Self {
                    let (s, c) = Self::sin_cos(angle);
                    Self::linear([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
                }

                pub const fn rotation_y(angle: $t) -> Self {
                    let (s, c) = Self::sin_cos(angle);
                    Self::linear([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
                }

                pub const fn rotation_z(angle: $t) -> Self {
                    let (s, c) = Self::sin_cos(angle);
                    Self::linear([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
                }

                pub const fn rotation_euler(euler: Vector3<$t>) -> Self {
                    let (sx, cx) = Self::sin_cos(euler.x());
                    let (sy, cy) = Self::sin_cos(euler.y());
                    let (sz, cz) = Self::sin_cos(euler.z());
                    Self::linear([
                        [cy * cz, sy * sx - cy * sz * cx, cy * sz * sx + sy * cx],
                        [sz, cz * cx, -(cz * sx)],
                        [-(sy * cz), sy * sz * cx + cy * sx, cy * cx - sy * sz * sx],
                    ])
                }

                pub const fn from_axis_angle(axis: Vector3<$t>, angle: $t) -> Self {
                    let (s, c) = Self::sin_cos(angle);
                    let t = 1.0 - c;
                    let (x, y, z) = (axis.x(), axis.y(), axis.z());
                    Self::linear([
                        [t * x * x + c, t * x * y - z * s, t * x * z + y * s],
                        [t * x * y + z * s, t * y * y + c, t * y * z - x * s],
                        [t * x * z - y * s, t * y * z + x * s, t * z * z + c],
                    ])
                }

                pub const fn from_quaternion(q: Quaternion<$t>) -> Self {
                    let m = ConstEval(q).to_rotation_matrix().0;
                    let mut rows = [[0.0; 3]; 3];
                    let mut r = 0;
                    while r < 3 {
                        let mut c = 0;
                        while c < 3 {
                            rows[r][c] = m.data[c][r];
                            c += 1;
                        }
                        r += 1;
                    }
                    Self::linear(rows)
                }

                pub const fn transform_point(self, p: Vector3<$t>) -> Vector3<$t> {
                    self.vecmul(ConstEval(Vector4::from_vector3(p, 1.0))).0.truncate()
                }

                pub const fn transform_vector(self, v: Vector3<$t>) -> Vector3<$t> {
                    self.vecmul(ConstEval(Vector4::from_vector3(v, 0.0))).0.truncate()
                }

                pub const fn extract_translation(self) -> Vector3<$t> {
                    self.transform_point(Vector3::from_array([0.0, 0.0, 0.0]))
                }

                pub const fn extract_scale(self) -> Vector3<$t> {
                    let one = self.transform_point(Vector3::from_array([1.0, 1.0, 1.0]));
                    ConstEval(one).sub(ConstEval(self.extract_translation())).0
                }

                pub const fn extract_rotation(self) -> ConstEval<Quaternion<$t>> {
                    let origin = self.extract_translation();
                    let mut basis = Matrix3::new([[0.0; 3]; 3]);
                    let mut c = 0;
                    while c < 3 {
                        let mut e = [0.0; 3];
                        e[c] = 1.0;
                        let p = self.transform_point(Vector3::from_array(e));
                        let image = ConstEval(p).sub(ConstEval(origin)).normalized().0;
                        let mut r = 0;
                        while r < 3 {
                            basis.data[c][r] = image.data[r][0];
                            r += 1;
                        }
                        c += 1;
                    }
                    ConstEval::<Quaternion<$t>>::from_rotation_matrix(basis)
                }
            }
        )*
    };
}

impl_const_affine!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq failed: {a} vs {b}, diff = {}",
            (a - b).abs()
        );
    }

    fn vec_approx_eq<const N: usize>(a: [f64; N], b: [f64; N], tol: f64) {
        for i in 0..N {
            approx_eq(a[i], b[i], tol);
        }
    }

    // ── 2D ──────────────────────────────────────────────────────

    #[test]
    fn rotation_quarter_turn() {
        let r = Matrix3::rotation(FRAC_PI_2);
        let v = r.vecmul(&Vector3::from_array([1.0, 1.0, 1.0]));
        vec_approx_eq(v.to_array(), [-1.0, 1.0, 1.0], 1e-12);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = Matrix3::translation(Vector2::from_array([3, -2]));
        let p = Vector2::from_array([1, 1]);
        assert_eq!(t.transform_point(&p).to_array(), [4, -1]);
        assert_eq!(t.transform_vector(&p), p);
    }

    #[test]
    fn scale_and_reflections_2d() {
        let s = Matrix3::scale(Vector2::from_array([2.0, 0.5]));
        let p = Vector2::from_array([3.0, 4.0]);
        assert_eq!(s.transform_point(&p).to_array(), [6.0, 2.0]);
        assert_eq!(Matrix3::reflection_x().transform_point(&p).to_array(), [-3.0, 4.0]);
        assert_eq!(Matrix3::reflection_y().transform_point(&p).to_array(), [3.0, -4.0]);
        assert_eq!(Matrix3::<f64>::reflection_x().determinant(), -1.0);
    }

    #[test]
    fn extract_2d() {
        let m = Matrix3::translation(Vector2::from_array([5.0, -1.0]))
            * Matrix3::rotation(FRAC_PI_3)
            * Matrix3::scale(Vector2::from_array([2.0, 2.0]));
        vec_approx_eq(m.extract_translation().to_array(), [5.0, -1.0], 1e-12);
        approx_eq(m.extract_rotation(), FRAC_PI_3, 1e-12);
        approx_eq(m.extract_scale().length(), 8.0_f64.sqrt(), 1e-12);
    }

    // ── 3D ──────────────────────────────────────────────────────

    #[test]
    fn axis_rotations() {
        let p = Vector3::from_array([1.0, 2.0, 3.0]);
        let x = Matrix4::rotation_x(FRAC_PI_2).transform_point(&p);
        vec_approx_eq(x.to_array(), [1.0, -3.0, 2.0], 1e-12);
        let y = Matrix4::rotation_y(FRAC_PI_2).transform_point(&p);
        vec_approx_eq(y.to_array(), [3.0, 2.0, -1.0], 1e-12);
        let z = Matrix4::rotation_z(FRAC_PI_2).transform_point(&p);
        vec_approx_eq(z.to_array(), [-2.0, 1.0, 3.0], 1e-12);
    }

    #[test]
    fn euler_is_y_z_x() {
        let e = Vector3::from_array([0.3, -1.1, 0.7]);
        let composed =
            Matrix4::rotation_y(e.y()) * Matrix4::rotation_z(e.z()) * Matrix4::rotation_x(e.x());
        assert!(Matrix4::rotation_euler(e).max_abs_diff(&composed) < 1e-12);
    }

    #[test]
    fn axis_angle_matches_axis_rotations() {
        for angle in [-2.0, -0.4, 0.0, 0.9, PI] {
            let rx = Matrix4::from_axis_angle(Vector3::right(), angle);
            assert!(rx.max_abs_diff(&Matrix4::rotation_x(angle)) < 1e-12);
            let ry = Matrix4::from_axis_angle(Vector3::up(), angle);
            assert!(ry.max_abs_diff(&Matrix4::rotation_y(angle)) < 1e-12);
            let rz = Matrix4::from_axis_angle(Vector3::backward(), angle);
            assert!(rz.max_abs_diff(&Matrix4::rotation_z(angle)) < 1e-12);
        }
    }

    #[test]
    fn axis_angle_is_orthonormal() {
        let axis = Vector3::from_array([1.0, -2.0, 0.5]).normalized();
        let m = Matrix4::from_axis_angle(axis, 1.3);
        assert!((m * m.transpose()).max_abs_diff(&Matrix4::identity()) < 1e-12);
        approx_eq(m.determinant(), 1.0, 1e-12);
        // the axis is fixed
        vec_approx_eq(m.transform_vector(&axis).to_array(), axis.to_array(), 1e-12);
    }

    #[test]
    fn quaternion_matches_axis_angle() {
        let axis = Vector3::from_array([0.0, 0.6, 0.8]);
        let q = Quaternion::from_axis_angle(axis, 2.1);
        let m = Matrix4::from_quaternion(&q);
        assert!(m.max_abs_diff(&Matrix4::from_axis_angle(axis, 2.1)) < 1e-12);
    }

    #[test]
    fn reflections_3d() {
        let p = Vector3::from_array([1, 2, 3]);
        assert_eq!(Matrix4::reflection_x().transform_point(&p).to_array(), [-1, 2, 3]);
        assert_eq!(Matrix4::reflection_y().transform_point(&p).to_array(), [1, -2, 3]);
        assert_eq!(Matrix4::reflection_z().transform_point(&p).to_array(), [1, 2, -3]);
    }

    #[test]
    fn extract_3d() {
        let q = Quaternion::from_axis_angle(Vector3::from_array([0.0, 0.0, 1.0]), 0.8);
        let m = Matrix4::translation(Vector3::from_array([1.0, 2.0, 3.0]))
            * Matrix4::from_quaternion(&q)
            * Matrix4::scale(Vector3::from_array([2.0, 3.0, 4.0]));
        vec_approx_eq(m.extract_translation().to_array(), [1.0, 2.0, 3.0], 1e-12);
        let r = m.extract_rotation();
        approx_eq(r.dot(&q).abs(), 1.0, 1e-12);
    }

    // ── Compile-time forms ──────────────────────────────────────

    #[test]
    fn const_2d_matches_runtime() {
        const R: Matrix3<f64> = ConstEval::<Matrix3<f64>>::rotation(1.2).get();
        assert!(R.max_abs_diff(&Matrix3::rotation(1.2)) < 1e-10);

        let t = Vector2::from_array([2.0, -3.0]);
        let s = Vector2::from_array([0.5, 4.0]);
        assert_eq!(ConstEval::<Matrix3<f64>>::translation(t).get(), Matrix3::translation(t));
        assert_eq!(ConstEval::<Matrix3<f64>>::scale(s).get(), Matrix3::scale(s));
        assert_eq!(ConstEval::<Matrix3<f64>>::reflection_x().get(), Matrix3::reflection_x());
        assert_eq!(ConstEval::<Matrix3<f64>>::reflection_y().get(), Matrix3::reflection_y());

        let m = Matrix3::translation(t) * Matrix3::rotation(1.2) * Matrix3::scale(s);
        let cm = ConstEval(m);
        assert_eq!(cm.extract_translation(), m.extract_translation());
        assert_eq!(cm.extract_scale(), m.extract_scale());
        approx_eq(cm.extract_rotation(), m.extract_rotation(), 1e-10);
        assert_eq!(cm.transform_vector(s), m.transform_vector(&s));
    }

    #[test]
    fn const_3d_matches_runtime() {
        let e = Vector3::from_array([0.3, -1.1, 0.7]);
        let axis = Vector3::from_array([0.0, 0.6, 0.8]);
        type C = ConstEval<Matrix4<f64>>;

        assert!(C::rotation_x(0.4).get().max_abs_diff(&Matrix4::rotation_x(0.4)) < 1e-10);
        assert!(C::rotation_y(0.4).get().max_abs_diff(&Matrix4::rotation_y(0.4)) < 1e-10);
        assert!(C::rotation_z(0.4).get().max_abs_diff(&Matrix4::rotation_z(0.4)) < 1e-10);
        assert!(C::rotation_euler(e).get().max_abs_diff(&Matrix4::rotation_euler(e)) < 1e-10);
        assert!(
            C::from_axis_angle(axis, 2.1)
                .get()
                .max_abs_diff(&Matrix4::from_axis_angle(axis, 2.1))
                < 1e-10
        );
        let q = Quaternion::from_axis_angle(axis, 2.1);
        assert_eq!(C::from_quaternion(q).get(), Matrix4::from_quaternion(&q));
        assert_eq!(C::translation(e).get(), Matrix4::translation(e));
        assert_eq!(C::scale(e).get(), Matrix4::scale(e));
        assert_eq!(C::reflection_z().get(), Matrix4::reflection_z());

        let m = Matrix4::translation(e) * Matrix4::from_quaternion(&q);
        let r = ConstEval(m).extract_rotation().get();
        approx_eq(r.dot(&m.extract_rotation()).abs(), 1.0, 1e-10);
        assert_eq!(ConstEval(m).extract_scale(), m.extract_scale());
        assert_eq!(ConstEval(m).transform_point(e), m.transform_point(&e));
    }
}
