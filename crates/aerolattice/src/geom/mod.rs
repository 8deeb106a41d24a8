//! Spacing, interpolation, and small geometric helpers.
//!
//! Purpose
//! - One home for the sampling rules (cosine/sine/uniform) shared by the
//!   airfoil resampler and the wing paneller. Cosine spacing clusters
//!   samples at both endpoints, which drives the pressure recovery near the
//!   leading and trailing edges of a panelled section.
//! - Keep helpers tiny, `#[inline]`, and allocation-light.

mod transform;

pub use transform::RigidTransform;

use nalgebra::{Vector2, Vector3};

/// Linear interpolation `(1 - mu) * x1 + mu * x2`.
#[inline]
pub fn weighted(x1: f64, x2: f64, mu: f64) -> f64 {
    (1.0 - mu) * x1 + mu * x2
}

/// Component-wise weighted combination of two points with an independent
/// weight per axis. A zero weight keeps the first point's component.
#[inline]
pub fn weighted_point(
    p1: Vector3<f64>,
    p2: Vector3<f64>,
    wx: f64,
    wy: f64,
    wz: f64,
) -> Vector3<f64> {
    Vector3::new(
        weighted(p1.x, p2.x, wx),
        weighted(p1.y, p2.y, wy),
        weighted(p1.z, p2.z, wz),
    )
}

/// Linear interpolation of two points by a single parameter.
#[inline]
pub fn lerp3(p1: Vector3<f64>, p2: Vector3<f64>, mu: f64) -> Vector3<f64> {
    p1 + (p2 - p1) * mu
}

/// Sums of adjacent entries (length N → N-1).
pub fn forward_sum(xs: &[f64]) -> Vec<f64> {
    xs.windows(2).map(|w| w[0] + w[1]).collect()
}

/// Differences of adjacent entries (length N → N-1).
pub fn forward_diff(xs: &[f64]) -> Vec<f64> {
    xs.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Ratios of adjacent entries `x[k+1] / x[k]` (length N → N-1).
pub fn forward_ratio(xs: &[f64]) -> Vec<f64> {
    xs.windows(2).map(|w| w[1] / w[0]).collect()
}

/// Rotation of a 2D point about the origin by `theta`.
#[inline]
pub fn rotate2d(p: Vector2<f64>, theta: f64) -> Vector2<f64> {
    let (s, c) = theta.sin_cos();
    Vector2::new(p.x * c - p.y * s, p.x * s + p.y * c)
}

/// Cosine-spaced samples over `[a, b]`: clusters at both endpoints.
///
/// `x_i = (a+b)/2 + (b-a)/2 · cos(π (n-1-i)/(n-1))`, ascending from `a`
/// to `b`. Requires `n >= 2`.
pub fn cosine_spacing(a: f64, b: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2, "need at least two samples");
    let mid = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    (0..n)
        .map(|i| {
            mid + half * (std::f64::consts::PI * (n - 1 - i) as f64 / (n - 1) as f64).cos()
        })
        .collect()
}

/// Sine-spaced samples over `[a, b]`: clusters at `b` only.
pub fn sine_spacing(a: f64, b: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2, "need at least two samples");
    (0..n)
        .map(|i| {
            a + (b - a) * (std::f64::consts::FRAC_PI_2 * i as f64 / (n - 1) as f64).sin()
        })
        .collect()
}

/// Uniformly spaced samples over `[a, b]`.
pub fn uniform_spacing(a: f64, b: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2, "need at least two samples");
    (0..n)
        .map(|i| a + (b - a) * i as f64 / (n - 1) as f64)
        .collect()
}

/// Piecewise-linear interpolation of samples `(xs, ys)` at `x`.
///
/// `xs` must be ascending; `x` outside the range clamps to the end values.
pub fn interp1(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(!xs.is_empty());
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[xs.len() - 1] {
        return ys[ys.len() - 1];
    }
    // partition_point: first index with xs[k] > x, so the bracket is [k-1, k]
    let k = xs.partition_point(|&v| v <= x);
    let (x0, x1) = (xs[k - 1], xs[k]);
    let mu = if x1 > x0 { (x - x0) / (x1 - x0) } else { 0.0 };
    weighted(ys[k - 1], ys[k], mu)
}

/// Resample a polyline by linear interpolation onto cosine-spaced x
/// stations spanning its x-extent. The input must have ascending x.
pub fn cosine_interp(points: &[Vector2<f64>], n: usize) -> Vec<Vector2<f64>> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    cosine_spacing(xs[0], xs[xs.len() - 1], n)
        .into_iter()
        .map(|x| Vector2::new(x, interp1(&xs, &ys, x)))
        .collect()
}
