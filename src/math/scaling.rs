//! Input normalization and expansion-origin selection.
//!
//! ## Purpose
//!
//! This module maps raw sample coordinates onto `[-1, 1]` before the design
//! matrix is built, and decides about which point the returned polynomial is
//! expanded.
//!
//! ## Design notes
//!
//! * **Range based**: `center = (min + max) / 2`, `scale = (max - min) / 2`,
//!   computed independently per dimension.
//! * **Degenerate ranges**: A zero range keeps `scale = 1` so the map stays
//!   invertible; the solver then reports the rank deficiency.
//!
//! ## Key concepts
//!
//! * **Normalization**: `u = (x - center) / scale`. Powers of `u` stay in
//!   `[-1, 1]`, which keeps the Vandermonde columns comparable in size.
//! * **Centering**: Coefficients are reported about an origin. Plain monomial
//!   coefficients are kept while re-expanding about zero amplifies rounding
//!   errors by at most `eps^(-1/4)` (about 8e3 for `f64`). Further from zero
//!   the origin is the data center; a monomial expansion there would need
//!   huge, cancelling coefficients.
//!
//! ## Invariants
//!
//! * `scale > 0` and finite for finite input.

// External dependencies
use num_traits::Float;

// ============================================================================
// Normalization
// ============================================================================

/// Affine map from sample coordinates onto `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization<T> {
    /// Midpoint of the sample range.
    pub center: T,
    /// Half-width of the sample range (`1` for a degenerate range).
    pub scale: T,
}

impl<T: Float> Normalization<T> {
    /// The identity map (`center = 0`, `scale = 1`).
    pub fn identity() -> Self {
        Self {
            center: T::zero(),
            scale: T::one(),
        }
    }

    /// Compute the normalization of a set of finite samples.
    pub fn from_samples(values: &[T]) -> Self {
        let Some(&first) = values.first() else {
            return Self::identity();
        };

        let mut min = first;
        let mut max = first;
        for &v in &values[1..] {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        // Halve before subtracting so `max - min` cannot overflow
        let two = T::one() + T::one();
        let half_range = max / two - min / two;
        let center = min + half_range;
        let scale = if half_range > T::zero() {
            half_range
        } else {
            T::one()
        };

        Self { center, scale }
    }

    /// Map a raw coordinate onto the normalized axis.
    #[inline]
    pub fn apply(&self, value: T) -> T {
        (value - self.center) / self.scale
    }

    /// True when the sample range reaches zero, i.e. `|center| <= scale`.
    #[inline]
    pub fn straddles_zero(&self) -> bool {
        self.center.abs() <= self.scale
    }

    /// Error amplification `(1 + |center| / scale)^degree` incurred when a
    /// degree-`degree` fit over this range is expanded about zero.
    #[inline]
    pub fn monomial_growth(&self, degree: usize) -> T {
        let exponent = i32::try_from(degree).unwrap_or(i32::MAX);
        (T::one() + self.center.abs() / self.scale).powi(exponent)
    }
}

// ============================================================================
// Centering Policy
// ============================================================================

/// Policy selecting the origin about which fitted coefficients are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Centering {
    /// Expand about zero unless that costs more than a quarter of the working
    /// precision, i.e. `monomial_growth(degree) > eps^(-1/4)`; then expand
    /// about the sample center (default).
    #[default]
    Auto,

    /// Always expand about the sample center.
    Always,

    /// Always expand about zero (plain monomial coefficients).
    Never,
}

impl Centering {
    /// Select the expansion origin for a degree-`degree` fit over samples
    /// with the given normalization.
    #[inline]
    pub fn origin<T: Float>(&self, norm: &Normalization<T>, degree: usize) -> T {
        match self {
            Centering::Auto if Self::monomial_is_accurate(norm, degree) => T::zero(),
            Centering::Auto | Centering::Always => norm.center,
            Centering::Never => T::zero(),
        }
    }

    /// Select the expansion origin of a tensor-product fit.
    ///
    /// `Auto` weighs the combined growth of both axes, since a 2D
    /// re-expansion multiplies them. When the product is too large, every
    /// axis that does not straddle zero moves to its center.
    pub fn origin_2d<T: Float>(
        &self,
        norm_x: &Normalization<T>,
        degree_x: usize,
        norm_y: &Normalization<T>,
        degree_y: usize,
    ) -> (T, T) {
        match self {
            Centering::Auto => {
                let growth = |norm: &Normalization<T>, degree: usize| {
                    if norm.straddles_zero() {
                        T::one()
                    } else {
                        norm.monomial_growth(degree)
                    }
                };
                if growth(norm_x, degree_x) * growth(norm_y, degree_y) <= growth_limit() {
                    (T::zero(), T::zero())
                } else {
                    let pick = |norm: &Normalization<T>| {
                        if norm.straddles_zero() {
                            T::zero()
                        } else {
                            norm.center
                        }
                    };
                    (pick(norm_x), pick(norm_y))
                }
            }
            _ => (
                self.origin(norm_x, degree_x),
                self.origin(norm_y, degree_y),
            ),
        }
    }

    fn monomial_is_accurate<T: Float>(norm: &Normalization<T>, degree: usize) -> bool {
        norm.straddles_zero() || norm.monomial_growth(degree) <= growth_limit()
    }
}

/// Largest tolerated monomial growth, `eps^(-1/4)`.
#[inline]
fn growth_limit<T: Float>() -> T {
    T::one() / T::epsilon().sqrt().sqrt()
}
