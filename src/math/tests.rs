use super::*;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

/// Samples `[lo, hi]` at `step`.
fn sweep(lo: f64, hi: f64, step: f64) -> impl Iterator<Item = f64> {
    let n = ((hi - lo) / step) as usize;
    (0..=n).map(move |i| lo + i as f64 * step)
}

const TOL: f64 = 1e-4;

// =====================================================================
// runtime vs const equivalence
// =====================================================================

#[test]
fn sin_cos_agree_over_two_turns() {
    for x in sweep(-TWO_PI, TWO_PI, 0.001) {
        approx_eq(ConstEval(x).sin().get(), sin(x), TOL);
        approx_eq(ConstEval(x).cos().get(), cos(x), TOL);
    }
}

#[test]
fn tan_agrees_away_from_asymptotes() {
    for x in sweep(-1.4, 1.4, 0.001) {
        approx_eq(ConstEval(x).tan().get(), tan(x), TOL);
    }
}

#[test]
fn inverse_trig_agrees() {
    for x in sweep(-1.0, 1.0, 0.001) {
        approx_eq(ConstEval(x).asin().get(), asin(x), TOL);
        approx_eq(ConstEval(x).acos().get(), acos(x), TOL);
    }
    for x in sweep(-50.0, 50.0, 0.01) {
        approx_eq(ConstEval(x).atan().get(), atan(x), TOL);
    }
}

#[test]
fn atan2_agrees_on_circle() {
    for theta in sweep(-3.14, 3.14, 0.001) {
        let (y, x) = (2.5 * theta.sin(), 2.5 * theta.cos());
        approx_eq(ConstEval(y).atan2(ConstEval(x)).get(), atan2(y, x), TOL);
    }
}

#[test]
fn sqrt_and_pow_agree() {
    for x in sweep(0.0, 100.0, 0.01) {
        approx_eq(ConstEval(x).sqrt().get(), sqrt(x), TOL);
    }
    for b in sweep(0.1, 10.0, 0.1) {
        for e in [0.5, 1.0, 2.0, 3.0, 0.25] {
            approx_eq(ConstEval(b).pow(ConstEval(e)).get(), pow(b, e), TOL);
        }
    }
}

#[test]
fn fmod_agrees_away_from_multiples() {
    // a/b never lands close to an integer for these samples
    for a in sweep(-10.0, 10.0, 0.25) {
        let a = a + 0.1;
        approx_eq(ConstEval(a).fmod(ConstEval(1.5)).get(), fmod(a, 1.5), TOL);
    }
}

#[test]
fn rounding_agrees() {
    for x in sweep(-20.0, 20.0, 0.05) {
        let x = x + 0.013;
        assert_eq!(ConstEval(x).ceil().get(), ceil(x), "ceil({x})");
        assert_eq!(ConstEval(x).floor().get(), floor(x), "floor({x})");
        assert_eq!(ConstEval(x).trunc().get(), trunc(x), "trunc({x})");
        assert_eq!(ConstEval(x).round().get(), round(x), "round({x})");
        assert_eq!(ConstEval(x).abs().get(), abs(x), "abs({x})");
        assert_eq!(ConstEval(x).sign().get(), sign(x), "sign({x})");
    }
}

#[test]
fn half_way_rounding_matches() {
    for x in [-3.5f64, -2.5, -0.5, 0.5, 1.5, 2.5] {
        assert_eq!(ConstEval(x).round().get(), round(x));
    }
}

#[test]
fn f32_paths_agree() {
    for i in -600..=600 {
        let x = i as f32 * 0.01;
        assert!((ConstEval(x).sin().get() - sin(x)).abs() < 1e-4);
        assert!((ConstEval(x).cos().get() - cos(x)).abs() < 1e-4);
    }
}

// =====================================================================
// sign
// =====================================================================

#[test]
fn sign_exact_values() {
    assert_eq!(sign(-0.001_f64), -1.0);
    assert_eq!(sign(1e-300_f64), 1.0);
    assert_eq!(sign(0.0_f64), 0.0);
    assert_eq!(sign(-0.0_f64), 0.0);
    assert_eq!(sign(f64::NAN), 0.0);
    assert_eq!(sign(f64::NEG_INFINITY), -1.0);
}

#[test]
fn sign_integers() {
    assert_eq!(sign(-12_i32), -1);
    assert_eq!(sign(0_i64), 0);
    assert_eq!(sign(9_u8), 1);
}

// =====================================================================
// constants
// =====================================================================

#[test]
fn generic_constants() {
    approx_eq(pi::<f64>(), PI, 1e-15);
    approx_eq(two_pi::<f64>(), TWO_PI, 1e-15);
    approx_eq(half_pi::<f64>(), HALF_PI, 1e-15);
    assert!((two_pi::<f32>() - core::f32::consts::TAU).abs() < 1e-6);
}
