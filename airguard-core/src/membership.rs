//! Membership Functions
//!
//! ## Shapes
//!
//! ### Trapezoid
//!
//! ```text
//!   1 |      b_______c
//!     |     /         \
//!     |    /           \
//!   0 |___a             d___
//! ```
//!
//! Degree is 0 below `a`, rises linearly from `a` to `b`, is 1 between `b`
//! and `c`, falls linearly from `c` to `d` and is 0 above `d`. When `a = b`
//! (or `c = d`) the edge is vertical: the degree at that point is 1. This is
//! how the shoulders at the ends of a universe are written, e.g.
//! `Trapezoid(0, 0, 5, 12)` for clean air.
//!
//! ### Gaussian
//!
//! ```text
//! μ(x) = exp(-(x - mean)² / (2·σ²))
//! ```
//!
//! Never exactly 0 in exact arithmetic, but underflows to 0.0 once the
//! exponent drops below roughly -745. Rules built only from Gaussian clauses
//! can therefore stop firing for readings far outside any realistic range.
//!
//! ## Evaluation
//!
//! Both shapes are closed-form and evaluated directly at the crisp value;
//! inputs need no discretization. Values outside a variable's universe are
//! evaluated as-is and the formulas saturate at 0 or 1. NaN evaluates to 0
//! so the degree is always in `[0, 1]`.
//!
//! The `const` constructors do not validate. `degree` stays in `[0, 1]` for
//! unvalidated parameters too: a Gaussian with `sigma <= 0` is a crisp spike
//! at `mean`, and a trapezoid with misordered corners is clamped.

use crate::traits::Validatable;

/// Membership function of a single linguistic label
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "snake_case"))]
pub enum MembershipFunction {
    /// Piecewise-linear trapezoid, requires `a <= b <= c <= d`
    Trapezoid {
        /// Left foot
        a: f64,
        /// Left shoulder
        b: f64,
        /// Right shoulder
        c: f64,
        /// Right foot
        d: f64,
    },
    /// Gaussian bell, requires `sigma > 0`
    Gaussian {
        /// Centre of the bell
        mean: f64,
        /// Standard deviation
        sigma: f64,
    },
}

impl MembershipFunction {
    /// Trapezoid with feet `a`, `d` and shoulders `b`, `c`
    pub const fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Trapezoid { a, b, c, d }
    }

    /// Gaussian bell centred on `mean`
    pub const fn gaussian(mean: f64, sigma: f64) -> Self {
        Self::Gaussian { mean, sigma }
    }

    /// Degree of membership of `x`, always in `[0, 1]`
    pub fn degree(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }

        let mu = match *self {
            Self::Trapezoid { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x >= b && x <= c {
                    1.0
                } else if x < b {
                    // a <= x < b, so b > a
                    (x - a) / (b - a)
                } else {
                    // c < x <= d, so d > c
                    (d - x) / (d - c)
                }
            }
            Self::Gaussian { mean, sigma } if sigma > 0.0 => {
                let diff = x - mean;
                libm::exp(-(diff * diff) / (2.0 * sigma * sigma))
            }
            Self::Gaussian { mean, .. } => {
                if x == mean {
                    1.0
                } else {
                    0.0
                }
            }
        };

        if mu.is_nan() {
            0.0
        } else {
            mu.clamp(0.0, 1.0)
        }
    }

    /// Check the shape invariants
    ///
    /// Returns the reason on failure; the caller attaches variable and label.
    pub fn validate(&self) -> Result<(), &'static str> {
        match *self {
            Self::Trapezoid { a, b, c, d } => {
                if !(a.is_valid() && b.is_valid() && c.is_valid() && d.is_valid()) {
                    return Err("trapezoid parameters must be finite");
                }
                if !(a <= b && b <= c && c <= d) {
                    return Err("trapezoid requires a <= b <= c <= d");
                }
                Ok(())
            }
            Self::Gaussian { mean, sigma } => {
                if !(mean.is_valid() && sigma.is_valid()) {
                    return Err("gaussian parameters must be finite");
                }
                if sigma <= 0.0 {
                    return Err("gaussian sigma must be positive");
                }
                Ok(())
            }
        }
    }

    /// Interval outside which the degree is 0
    ///
    /// Gaussians have unbounded support.
    pub fn support(&self) -> (f64, f64) {
        match *self {
            Self::Trapezoid { a, d, .. } => (a, d),
            Self::Gaussian { .. } => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }

    /// Centre of the region where the degree is 1
    pub fn peak(&self) -> f64 {
        match *self {
            Self::Trapezoid { b, c, .. } => 0.5 * (b + c),
            Self::Gaussian { mean, .. } => mean,
        }
    }
}
