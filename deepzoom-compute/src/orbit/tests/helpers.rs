use deepzoom_core::{Coordinate, Precision, TieBreak};

use crate::orbit::{ReferenceOrbit, ReferenceOrbitGenerator};

/// Deep-zoom view center with a minibrot at its heart.
pub const MINIBROT_RE: &str = "-1.769233641266822788211";
pub const MINIBROT_IM: &str = "0.003412911653518676758";

pub fn precision(digits: usize) -> Precision {
    Precision::new(digits, TieBreak::HalfUp).unwrap()
}

pub fn orbit_at(re: &str, im: &str, max_iterations: u32, digits: usize) -> ReferenceOrbit {
    let precision = precision(digits);
    let center = Coordinate::from_strings(re, im, &precision).unwrap();
    ReferenceOrbitGenerator::new(center, max_iterations, precision)
        .unwrap()
        .generate()
}
