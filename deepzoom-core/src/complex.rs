//! Arbitrary-precision decimal complex numbers.
//!
//! Components are `DBig` (base-10 `FBig`), so decimal coordinates such as
//! `-1.769233641266822788211` are represented exactly before the first
//! rounding step. Every operation rounds through the [`Precision`] it is given.

use std::fmt;
use std::str::FromStr;

use dashu_float::DBig;

use crate::error::CoreError;
use crate::precision::Precision;

/// Complex number with decimal arbitrary-precision components.
#[derive(Clone, Debug, PartialEq)]
pub struct HighPrecisionComplex {
    re: DBig,
    im: DBig,
}

/// A point of the fractal plane, e.g. the center a reference orbit is computed around.
pub type Coordinate = HighPrecisionComplex;

impl HighPrecisionComplex {
    pub fn zero() -> Self {
        Self {
            re: DBig::ZERO,
            im: DBig::ZERO,
        }
    }

    /// Build from components, rounding each to `precision`.
    pub fn new(re: DBig, im: DBig, precision: &Precision) -> Self {
        Self {
            re: precision.round(re),
            im: precision.round(im),
        }
    }

    /// Parse decimal strings exactly, then round to `precision`.
    pub fn from_strings(re: &str, im: &str, precision: &Precision) -> Result<Self, CoreError> {
        Ok(Self::new(parse_decimal(re)?, parse_decimal(im)?, precision))
    }

    pub fn re(&self) -> &DBig {
        &self.re
    }

    pub fn im(&self) -> &DBig {
        &self.im
    }

    pub fn add(&self, other: &Self, precision: &Precision) -> Self {
        Self {
            re: precision.add(&self.re, &other.re),
            im: precision.add(&self.im, &other.im),
        }
    }

    pub fn sub(&self, other: &Self, precision: &Precision) -> Self {
        Self {
            re: precision.sub(&self.re, &other.re),
            im: precision.sub(&self.im, &other.im),
        }
    }

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
    pub fn multiply(&self, other: &Self, precision: &Precision) -> Self {
        let ac = precision.mul(&self.re, &other.re);
        let bd = precision.mul(&self.im, &other.im);
        let ad = precision.mul(&self.re, &other.im);
        let bc = precision.mul(&self.im, &other.re);
        Self {
            re: precision.sub(&ac, &bd),
            im: precision.add(&ad, &bc),
        }
    }

    /// `(a + bi)^2 = (a^2 - b^2) + 2ab·i`
    pub fn square(&self, precision: &Precision) -> Self {
        let a_sq = precision.sqr(&self.re);
        let b_sq = precision.sqr(&self.im);
        let ab = precision.mul(&self.re, &self.im);
        Self {
            re: precision.sub(&a_sq, &b_sq),
            im: precision.add(&ab, &ab),
        }
    }

    /// Narrow both components to f32.
    ///
    /// Magnitudes beyond f32 range come back as ±infinity. That is how an
    /// escaping orbit announces itself, not an error.
    pub fn to_single(&self) -> (f32, f32) {
        (self.re.to_f32().value(), self.im.to_f32().value())
    }
}

impl Default for HighPrecisionComplex {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for HighPrecisionComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

fn parse_decimal(text: &str) -> Result<DBig, CoreError> {
    DBig::from_str(text.trim()).map_err(|source| CoreError::InvalidCoordinate {
        text: text.to_string(),
        source,
    })
}
