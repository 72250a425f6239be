//! `const fn` implementations of the scalar functions over `f64`.
//!
//! Built from arithmetic, comparisons, casts and sign tests only, so
//! every function here can run inside a `const` item. They are far slower
//! than the platform routines and are reached through
//! [`ConstEval`](super::ConstEval) rather than called directly.
//!
//! Accuracy is close to `f64` precision on moderate arguments. Known
//! limitations:
//!
//! - [`tan`] is `sin / cos` and degrades near its asymptotes.
//! - [`pow`] is `exp(e · ln b)`: NaN for negative bases (even with integral
//!   exponents), and not guaranteed for negative exponents.
//! - [`fmod`] is `a − trunc(a / b) · b` and loses accuracy as `b → 0`.

use core::f64::consts::{FRAC_PI_2, LN_2, PI, SQRT_2, TAU};

/// Every `f64` at or above this magnitude is an integer.
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

const SIN_TERMS: u32 = 12;
const LOG_TERMS: u32 = 40;
const EXP_TERMS: u32 = 24;
const NEWTON_STEPS: u32 = 10;

// ── Rounding and sign ───────────────────────────────────────────────

pub const fn abs(x: f64) -> f64 {
    if x.is_sign_negative() {
        -x
    } else {
        x
    }
}

pub const fn sign(x: f64) -> f64 {
    ((0.0 < x) as i32 - (x < 0.0) as i32) as f64
}

pub const fn trunc(x: f64) -> f64 {
    if x.is_nan() || abs(x) >= INTEGRAL_LIMIT {
        return x;
    }
    let t = x as i64 as f64;
    if t == 0.0 && x.is_sign_negative() {
        -0.0
    } else {
        t
    }
}

pub const fn floor(x: f64) -> f64 {
    let t = trunc(x);
    if x < t {
        t - 1.0
    } else {
        t
    }
}

pub const fn ceil(x: f64) -> f64 {
    let t = trunc(x);
    if x > t {
        t + 1.0
    } else {
        t
    }
}

/// Rounds half-way cases away from zero.
pub const fn round(x: f64) -> f64 {
    let t = trunc(x);
    let frac = x - t;
    if frac >= 0.5 {
        t + 1.0
    } else if frac <= -0.5 {
        t - 1.0
    } else {
        t
    }
}

pub const fn fmod(a: f64, b: f64) -> f64 {
    if b.is_infinite() && a.is_finite() {
        return a;
    }
    a - trunc(a / b) * b
}

// ── Roots, exponentials, logarithms ─────────────────────────────────

pub const fn sqrt(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x.is_infinite() {
        return x;
    }

    // x = m · 4^k with m in [0.25, 4), so sqrt(x) = sqrt(m) · 2^k.
    let mut m = x;
    let mut scale = 1.0;
    while m >= 4.0 {
        m *= 0.25;
        scale *= 2.0;
    }
    while m < 0.25 {
        m *= 4.0;
        scale *= 0.5;
    }

    let mut r = 1.0;
    let mut i = 0;
    while i < NEWTON_STEPS {
        r = 0.5 * (r + m / r);
        i += 1;
    }
    r * scale
}

const fn scale_pow2(mut v: f64, mut k: i32) -> f64 {
    while k > 0 {
        v *= 2.0;
        k -= 1;
    }
    while k < 0 {
        v *= 0.5;
        k += 1;
    }
    v
}

pub const fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > 709.782_712_893_384 {
        return f64::INFINITY;
    }
    if x < -745.133_219_101_941_2 {
        return 0.0;
    }

    // x = k·ln2 + r, |r| <= ln2 / 2
    let k = round(x / LN_2);
    let r = x - k * LN_2;

    let mut term = 1.0;
    let mut sum = 1.0;
    let mut n = 1;
    while n < EXP_TERMS {
        term *= r / n as f64;
        sum += term;
        n += 1;
    }
    scale_pow2(sum, k as i32)
}

pub const fn ln(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x.is_infinite() {
        return x;
    }

    // x = m · 2^e with m in [1/√2, √2]
    let mut m = x;
    let mut e = 0i32;
    while m >= 2.0 {
        m *= 0.5;
        e += 1;
    }
    while m < 1.0 {
        m *= 2.0;
        e -= 1;
    }
    if m > SQRT_2 {
        m *= 0.5;
        e += 1;
    }

    // ln(m) = 2·atanh(s), s = (m − 1) / (m + 1), |s| < 0.172
    let s = (m - 1.0) / (m + 1.0);
    let s2 = s * s;
    let mut term = s;
    let mut sum = 0.0;
    let mut n = 1;
    while n < LOG_TERMS {
        sum += term / n as f64;
        term *= s2;
        n += 2;
    }
    2.0 * sum + e as f64 * LN_2
}

pub const fn pow(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        return 1.0;
    }
    if base == 0.0 {
        return if exponent > 0.0 { 0.0 } else { f64::INFINITY };
    }
    exp(exponent * ln(base))
}

// ── Trigonometry ────────────────────────────────────────────────────

/// Reduces `x` into `[-π, π]`.
const fn reduce_angle(x: f64) -> f64 {
    x - round(x / TAU) * TAU
}

/// Taylor series, accurate on `[-π/2, π/2]`.
const fn sin_series(r: f64) -> f64 {
    let r2 = r * r;
    let mut term = r;
    let mut sum = r;
    let mut n = 1;
    while n < SIN_TERMS {
        term *= -r2 / ((2 * n) * (2 * n + 1)) as f64;
        sum += term;
        n += 1;
    }
    sum
}

/// Taylor series, accurate on `[0, π/2]`.
const fn cos_series(r: f64) -> f64 {
    let r2 = r * r;
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut n = 1;
    while n < SIN_TERMS {
        term *= -r2 / ((2 * n - 1) * (2 * n)) as f64;
        sum += term;
        n += 1;
    }
    sum
}

pub const fn sin(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let r = reduce_angle(x);
    if r > FRAC_PI_2 {
        sin_series(PI - r)
    } else if r < -FRAC_PI_2 {
        sin_series(-PI - r)
    } else {
        sin_series(r)
    }
}

pub const fn cos(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let r = abs(reduce_angle(x));
    if r > FRAC_PI_2 {
        -cos_series(PI - r)
    } else {
        cos_series(r)
    }
}

pub const fn tan(x: f64) -> f64 {
    sin(x) / cos(x)
}

/// Arctangent for `|x| <= 1`.
const fn atan_unit(x: f64) -> f64 {
    // atan(x) = 2·atan(x / (1 + √(1 + x²))), applied twice: |h| <= tan(π/16)
    let h = x / (1.0 + sqrt(1.0 + x * x));
    let h = h / (1.0 + sqrt(1.0 + h * h));

    let h2 = h * h;
    let mut term = h;
    let mut sum = 0.0;
    let mut n = 1;
    while n < LOG_TERMS {
        sum += term / n as f64;
        term *= -h2;
        n += 2;
    }
    4.0 * sum
}

pub const fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return if x > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    }
    if abs(x) > 1.0 {
        let a = FRAC_PI_2 - atan_unit(1.0 / abs(x));
        return if x < 0.0 { -a } else { a };
    }
    atan_unit(x)
}

pub const fn atan2(y: f64, x: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x > 0.0 {
        atan(y / x)
    } else if x < 0.0 {
        if y.is_sign_negative() {
            atan(y / x) - PI
        } else {
            atan(y / x) + PI
        }
    } else if y > 0.0 {
        FRAC_PI_2
    } else if y < 0.0 {
        -FRAC_PI_2
    } else if x.is_sign_negative() {
        if y.is_sign_negative() {
            -PI
        } else {
            PI
        }
    } else {
        y
    }
}

pub const fn asin(x: f64) -> f64 {
    if x.is_nan() || abs(x) > 1.0 {
        return f64::NAN;
    }
    atan2(x, sqrt((1.0 - x) * (1.0 + x)))
}

pub const fn acos(x: f64) -> f64 {
    if x.is_nan() || abs(x) > 1.0 {
        return f64::NAN;
    }
    atan2(sqrt((1.0 - x) * (1.0 + x)), x)
}
