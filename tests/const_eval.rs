//! Everything here is evaluated by the compiler: the `const` items fail to
//! build if any of the const paths stop being constant-evaluable.

use vlk_common::math::{self, ConstEval, HALF_PI, PI, TWO_PI};
use vlk_common::{Matrix3, Matrix4, Quaternion, Transform2D, Vector2, Vector3};

const TOL: f64 = 1e-4;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}",
        (a - b).abs()
    );
}

// ── Scalars ─────────────────────────────────────────────────────────

const STEP: f64 = 0.01;
const SAMPLES: usize = (2.0 * TWO_PI / STEP) as usize + 1;

/// `[x, sin x, cos x]` over `[-2π, 2π]`, computed at compile time.
const TABLE: [[f64; 3]; SAMPLES] = {
    let mut out = [[0.0; 3]; SAMPLES];
    let mut i = 0;
    while i < SAMPLES {
        let x = -TWO_PI + i as f64 * STEP;
        out[i] = [x, ConstEval(x).sin().get(), ConstEval(x).cos().get()];
        i += 1;
    }
    out
};

#[test]
fn sin_cos_table_matches_runtime() {
    for [x, s, c] in TABLE {
        approx_eq(s, math::sin(x), TOL);
        approx_eq(c, math::cos(x), TOL);
    }
}

const ROOT_TWO: f64 = ConstEval(2.0_f64).sqrt().get();
const ANGLE: f64 = ConstEval(1.0_f64).atan2(ConstEval(-1.0)).get();
const CUBE: f64 = ConstEval(1.5_f64).pow(ConstEval(3.0)).get();
const WRAPPED: f64 = ConstEval(7.5_f64).fmod(ConstEval(2.0)).get();
const ROUNDED: [f64; 4] = [
    ConstEval(-2.5_f64).round().get(),
    ConstEval(-2.5_f64).floor().get(),
    ConstEval(-2.5_f64).ceil().get(),
    ConstEval(-2.5_f64).trunc().get(),
];
const SIGNS: [f32; 3] = [
    ConstEval(-4.0_f32).sign().get(),
    ConstEval(0.0_f32).sign().get(),
    ConstEval(9.0_f32).sign().get(),
];

#[test]
fn scalar_items() {
    approx_eq(ROOT_TWO, core::f64::consts::SQRT_2, 1e-12);
    approx_eq(ANGLE, 3.0 * PI / 4.0, 1e-9);
    approx_eq(CUBE, 3.375, 1e-6);
    approx_eq(WRAPPED, 1.5, 1e-9);
    assert_eq!(ROUNDED, [-3.0, -3.0, -2.0, -2.0]);
    assert_eq!(SIGNS, [-1.0, 0.0, 1.0]);
}

// ── Matrices ────────────────────────────────────────────────────────

const M: Matrix4<f64> = Matrix4::new([
    [0.0, 1.0, 2.0, -2.0],
    [9.0, 8.0, 7.0, 0.0],
    [3.0, 4.0, 5.0, 4.0],
    [2.0, 6.0, 1.0, -7.0],
]);
const M_DET: f64 = ConstEval(M).determinant().get();
const M_INV: Matrix4<f64> = ConstEval(M).inverse().get();
const M_ROUND_TRIP: Matrix4<f64> = ConstEval(M).mul(ConstEval(M_INV)).get();

#[test]
fn determinant_and_inverse() {
    approx_eq(M_DET, -540.0, 1e-9);
    approx_eq(M_DET, M.determinant(), 1e-9);
    assert!(M_ROUND_TRIP.max_abs_diff(&Matrix4::identity()) < TOL);
    assert!(M_INV.max_abs_diff(&M.inverse()) < 1e-12);
}

const QUARTER: Matrix3<f64> = ConstEval::<Matrix3<f64>>::rotation(HALF_PI).get();
const ROTATED: Vector3<f64> = ConstEval(QUARTER)
    .vecmul(ConstEval(Vector3::from_array([1.0, 1.0, 1.0])))
    .get();

#[test]
fn quarter_turn() {
    approx_eq(ROTATED.x(), -1.0, TOL);
    approx_eq(ROTATED.y(), 1.0, TOL);
    assert_eq!(ROTATED.z(), 1.0);
    assert!(QUARTER.max_abs_diff(&Matrix3::rotation(HALF_PI)) < 1e-12);
}

const EULER: Matrix4<f64> =
    ConstEval::<Matrix4<f64>>::rotation_euler(Vector3::from_array([0.1, 0.2, 0.3])).get();
const AXIS: Matrix4<f64> =
    ConstEval::<Matrix4<f64>>::from_axis_angle(Vector3::from_array([0.0, 0.0, 1.0]), 0.7).get();

#[test]
fn rotations_3d() {
    let euler = Vector3::from_array([0.1, 0.2, 0.3]);
    assert!(EULER.max_abs_diff(&Matrix4::rotation_euler(euler)) < 1e-12);
    assert!(AXIS.max_abs_diff(&Matrix4::rotation_z(0.7)) < 1e-12);
}

// ── Vectors, quaternions, transforms ────────────────────────────────

const UNIT: Vector3<f64> = ConstEval(Vector3::from_array([3.0_f64, 0.0, 4.0])).normalized().get();
const CROSS: Vector3<f64> = ConstEval(Vector3::from_array([1.0_f64, 0.0, 0.0]))
    .cross(ConstEval(Vector3::from_array([0.0, 1.0, 0.0])))
    .get();
const PERP: Vector2<f64> = ConstEval(Vector2::from_array([2.0_f64, 5.0])).perpendicular().get();

#[test]
fn vector_items() {
    approx_eq(UNIT.x(), 0.6, 1e-12);
    approx_eq(UNIT.z(), 0.8, 1e-12);
    assert_eq!(CROSS, Vector3::from_array([0.0, 0.0, 1.0]));
    assert_eq!(PERP, Vector2::from_array([5.0, -2.0]));
}

const SPIN: Quaternion<f64> = ConstEval::<Quaternion<f64>>::rotation_z(HALF_PI).get();
const SPUN: Vector3<f64> = ConstEval(SPIN).rotate(Vector3::from_array([1.0, 0.0, 0.0]));

#[test]
fn quaternion_items() {
    approx_eq(SPIN.dot(&Quaternion::rotation_z(HALF_PI)), 1.0, 1e-12);
    approx_eq(SPUN.x(), 0.0, 1e-12);
    approx_eq(SPUN.y(), 1.0, 1e-12);
}

const LOCAL: Transform2D<f64> = Transform2D::new(
    Vector2::from_array([5.0, 2.0]),
    HALF_PI,
    Vector2::from_array([0.5, 2.0]),
);
const LOCAL_POINT: Vector2<f64> = ConstEval(LOCAL)
    .matrix()
    .transform_point(Vector2::from_array([1.0, 3.0]));

#[test]
fn transform_items() {
    approx_eq(LOCAL_POINT.x(), -1.0, 1e-12);
    approx_eq(LOCAL_POINT.y(), 2.5, 1e-12);
    assert!(ConstEval(LOCAL).matrix().get().max_abs_diff(&LOCAL.matrix()) < 1e-12);
}
