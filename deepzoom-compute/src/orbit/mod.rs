//! Reference orbit generation and the packed orbit table.
//!
//! A reference orbit is computed once at high precision around the view
//! center; every pixel then iterates only its f32 offset from it.

mod buffer;
mod pixel;
mod reference_orbit;

pub use buffer::{OrbitBuffer, Uniforms, FLOATS_PER_SAMPLE};
pub use pixel::{compute_pixel_perturbation, PixelOrbit, ESCAPE_RADIUS_SQ};
pub use reference_orbit::{OrbitProgress, ReferenceOrbit, ReferenceOrbitGenerator};

#[cfg(test)]
mod tests;
