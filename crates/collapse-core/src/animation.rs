#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Remaps a linear fraction before it is used for interpolation.
///
/// Curves take `t` in `[0, 1]`; they are not required to be monotonic or to
/// stay inside `[0, 1]` (springs overshoot).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// `1 - (1 - t)^2`, the default curve for title text size.
    Decelerate,
    /// Material standard curve, cubic bezier (0.4, 0.0, 0.2, 1.0).
    FastOutSlowIn,
    Spring {
        damping: f32,
        stiffness: f32,
    },
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(f32) -> f32),
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut | Easing::Decelerate => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::Spring { damping, stiffness } => {
                let omega = (stiffness / damping).sqrt();
                let zeta = damping / (2.0 * (stiffness * damping).sqrt());

                if zeta < 1.0 {
                    // Underdamped
                    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                    let t = t * 2.0;
                    1.0 - ((-zeta * omega * t).exp() * (omega_d * t).cos())
                } else {
                    t * (2.0 - t)
                }
            }
            Easing::Custom(f) => f(t),
        }
    }
}

/// Solves the bezier x(s) = t by bisection, then returns y(s).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let coord = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    let mut s = t;
    for _ in 0..32 {
        let x = coord(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    coord(y1, y2, s)
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for crate::Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self.blend(*other, t)
    }
}

/// `start + (end - start) * f`, where `f` is `fraction` remapped through
/// `easing` when one is given. The fraction is expected to be clamped by the
/// caller.
pub fn interpolate(start: f32, end: f32, fraction: f32, easing: Option<Easing>) -> f32 {
    let t = match easing {
        Some(e) => e.interpolate(fraction),
        None => fraction,
    };
    start.interpolate(&end, t)
}
