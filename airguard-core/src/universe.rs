//! Bounded, sampled numeric domains
//!
//! A [`Universe`] is the domain of a linguistic variable. The output
//! universe is sampled at `resolution` evenly spaced points (the same
//! layout as a `linspace`); aggregation and defuzzification operate on
//! those points.

use crate::{
    constants::capacity::MAX_UNIVERSE_SAMPLES,
    errors::{ModelError, ModelResult},
    traits::Validatable,
};

/// Bounded domain with a fixed sampling resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    resolution: usize,
}

impl Universe {
    /// Create a universe over `[min, max]` with `resolution` sample points
    ///
    /// Requires finite bounds, `min < max` and
    /// `2 <= resolution <= MAX_UNIVERSE_SAMPLES`.
    pub fn new(min: f64, max: f64, resolution: usize) -> ModelResult<Self> {
        let invalid = |reason| ModelError::InvalidUniverse { min, max, resolution, reason };

        if !min.is_valid() || !max.is_valid() {
            return Err(invalid("bounds must be finite"));
        }
        if min >= max {
            return Err(invalid("min must be below max"));
        }
        if resolution < 2 {
            return Err(invalid("need at least two samples"));
        }
        if resolution > MAX_UNIVERSE_SAMPLES {
            return Err(invalid("too many samples"));
        }

        Ok(Self { min, max, resolution })
    }

    /// Lower bound
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of sample points
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Distance between neighbouring samples
    pub fn step(&self) -> f64 {
        (self.max - self.min) / (self.resolution - 1) as f64
    }

    /// Centre of the universe
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Sample point `i`
    ///
    /// The last index maps exactly to `max`; indices past it saturate there.
    pub fn sample(&self, i: usize) -> f64 {
        if i + 1 >= self.resolution {
            self.max
        } else {
            self.min + self.step() * i as f64
        }
    }

    /// All sample points, in ascending order
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.resolution).map(move |i| self.sample(i))
    }

    /// Whether `x` lies within the bounds (inclusive)
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Clamp `x` into the bounds
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.min).min(self.max)
    }

    /// Same bounds, different sampling
    pub fn with_resolution(&self, resolution: usize) -> ModelResult<Self> {
        Self::new(self.min, self.max, resolution)
    }
}
