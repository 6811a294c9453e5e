//! Reference orbit computation for perturbation rendering.
//!
//! The orbit is iterated at full decimal precision but stored as f32 pairs,
//! which is what the per-pixel delta iteration reads.

use deepzoom_core::{Coordinate, CoreError, Precision};

/// Progress is reported every this many iterations, and once at the end.
const PROGRESS_STRIDE: u32 = 1024;

/// Snapshot passed to the progress callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitProgress {
    /// Orbit samples filled so far, including clamped ones.
    pub completed: u32,
    pub total: u32,
}

impl OrbitProgress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }
}

/// A pre-computed reference orbit, narrowed to f32.
#[derive(Clone, Debug)]
pub struct ReferenceOrbit {
    center: Coordinate,
    precision: Precision,
    samples: Vec<(f32, f32)>,
    escape_index: u32,
}

impl ReferenceOrbit {
    /// The point the orbit iterates around: `z_{i+1} = z_i^2 + center`.
    pub fn center(&self) -> &Coordinate {
        &self.center
    }

    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    /// `z_0 … z_{n-1}`; entries from `escape_index` on repeat the frozen pair.
    pub fn samples(&self) -> &[(f32, f32)] {
        &self.samples
    }

    /// First index whose narrowed sample is not finite, or `len()` if the
    /// orbit stayed finite.
    pub fn escape_index(&self) -> u32 {
        self.escape_index
    }

    pub fn escaped(&self) -> bool {
        (self.escape_index as usize) < self.samples.len()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Builds a [`ReferenceOrbit`] for one center at one working precision.
#[derive(Clone, Debug)]
pub struct ReferenceOrbitGenerator {
    center: Coordinate,
    max_iterations: u32,
    precision: Precision,
}

impl ReferenceOrbitGenerator {
    pub fn new(
        center: Coordinate,
        max_iterations: u32,
        precision: Precision,
    ) -> Result<Self, CoreError> {
        if max_iterations == 0 {
            return Err(CoreError::InvalidParameters(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            center,
            max_iterations,
            precision,
        })
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn generate(&self) -> ReferenceOrbit {
        self.generate_with_progress(|_| {})
    }

    /// Iterate `z = z^2 + center` from zero, narrowing each term to f32.
    ///
    /// Once a narrowed term is not finite the high-precision loop stops and
    /// that pair is repeated to the end of the orbit. Usually both components
    /// overflow on the same step; on the real axis the imaginary part stays
    /// zero, so a single overflowed component is enough.
    pub fn generate_with_progress<F>(&self, mut on_progress: F) -> ReferenceOrbit
    where
        F: FnMut(OrbitProgress),
    {
        let total = self.max_iterations;
        let mut samples = Vec::with_capacity(total as usize);
        samples.push((0.0_f32, 0.0_f32));

        let mut z = Coordinate::zero();
        let mut escape_index = total;

        for i in 1..total {
            z = z.square(&self.precision).add(&self.center, &self.precision);
            let narrowed = z.to_single();
            samples.push(narrowed);

            if !(narrowed.0.is_finite() && narrowed.1.is_finite()) {
                escape_index = i;
                samples.resize(total as usize, narrowed);
                log::debug!("Reference orbit escaped at iteration {i} of {total}");
                break;
            }

            if i % PROGRESS_STRIDE == 0 {
                on_progress(OrbitProgress {
                    completed: i + 1,
                    total,
                });
            }
        }

        on_progress(OrbitProgress {
            completed: total,
            total,
        });

        log::debug!(
            "Reference orbit: {} samples at {} digits, escape index {}",
            samples.len(),
            self.precision.digits(),
            escape_index
        );

        ReferenceOrbit {
            center: self.center.clone(),
            precision: self.precision,
            samples,
            escape_index,
        }
    }
}
