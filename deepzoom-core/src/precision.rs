//! Working precision for reference orbit arithmetic.
//!
//! A [`Precision`] is a number of significant decimal digits plus the rule
//! used to break rounding ties. It is handed to every high-precision
//! operation; nothing reads it from ambient state, so one orbit is always
//! computed under a single rounding context from its first term to its last.

use dashu_float::round::mode::{HalfAway, HalfEven};
use dashu_float::{Context, DBig};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default working precision, in significant decimal digits.
pub const DEFAULT_PRECISION_DIGITS: usize = 128;

/// Digits kept beyond the magnification's order of magnitude.
pub const GUARD_DIGITS: usize = 20;

/// How a value exactly halfway between two representable results is rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Ties round away from zero: 2.5 -> 3, -2.5 -> -3.
    #[default]
    HalfUp,
    /// Ties round to the even neighbour: 2.5 -> 2, 3.5 -> 4.
    HalfEven,
}

/// Rounding context for decimal arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Precision {
    digits: usize,
    tie_break: TieBreak,
}

impl Precision {
    /// Create a rounding context. Zero digits would mean unlimited
    /// precision, which makes orbit cost grow without bound, so it is rejected.
    pub fn new(digits: usize, tie_break: TieBreak) -> Result<Self, CoreError> {
        if digits == 0 {
            return Err(CoreError::ZeroPrecision);
        }
        Ok(Self { digits, tie_break })
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Smallest digit count considered sufficient for `magnification`:
    /// `ceil(log10(magnification)) + GUARD_DIGITS + 1`.
    pub fn required_digits(magnification: f64) -> usize {
        let order = if magnification.is_finite() && magnification > 1.0 {
            magnification.log10().ceil() as usize
        } else {
            0
        };
        order + GUARD_DIGITS + 1
    }

    /// Whether this precision exceeds `log10(magnification) + GUARD_DIGITS`.
    ///
    /// Too few digits never fails generation; it shows up as staircasing in
    /// the rendered image. Callers decide whether to warn.
    pub fn is_sufficient_for(&self, magnification: f64) -> bool {
        self.digits >= Self::required_digits(magnification)
    }

    /// Round an exact value to this precision.
    pub fn round(&self, value: DBig) -> DBig {
        match self.tie_break {
            TieBreak::HalfUp => value.with_precision(self.digits).value(),
            TieBreak::HalfEven => value
                .with_rounding::<HalfEven>()
                .with_precision(self.digits)
                .value()
                .with_rounding::<HalfAway>(),
        }
    }

    pub fn add(&self, a: &DBig, b: &DBig) -> DBig {
        match self.tie_break {
            TieBreak::HalfUp => self.half_up().add(a.repr(), b.repr()).value(),
            TieBreak::HalfEven => self
                .half_even()
                .add(a.repr(), b.repr())
                .value()
                .with_rounding::<HalfAway>(),
        }
    }

    pub fn sub(&self, a: &DBig, b: &DBig) -> DBig {
        match self.tie_break {
            TieBreak::HalfUp => self.half_up().sub(a.repr(), b.repr()).value(),
            TieBreak::HalfEven => self
                .half_even()
                .sub(a.repr(), b.repr())
                .value()
                .with_rounding::<HalfAway>(),
        }
    }

    pub fn mul(&self, a: &DBig, b: &DBig) -> DBig {
        match self.tie_break {
            TieBreak::HalfUp => self.half_up().mul(a.repr(), b.repr()).value(),
            TieBreak::HalfEven => self
                .half_even()
                .mul(a.repr(), b.repr())
                .value()
                .with_rounding::<HalfAway>(),
        }
    }

    pub fn sqr(&self, a: &DBig) -> DBig {
        match self.tie_break {
            TieBreak::HalfUp => self.half_up().sqr(a.repr()).value(),
            TieBreak::HalfEven => self
                .half_even()
                .sqr(a.repr())
                .value()
                .with_rounding::<HalfAway>(),
        }
    }

    fn half_up(&self) -> Context<HalfAway> {
        Context::new(self.digits)
    }

    fn half_even(&self) -> Context<HalfEven> {
        Context::new(self.digits)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            digits: DEFAULT_PRECISION_DIGITS,
            tie_break: TieBreak::HalfUp,
        }
    }
}
