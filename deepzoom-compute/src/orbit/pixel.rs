//! Per-pixel perturbation iteration in f32.
//!
//! Mirrors the loop in the WGSL fragment shader so the CPU presenter and the
//! GPU presenter agree up to float rounding order.

use super::OrbitBuffer;

/// Bailout on `|z|^2`. Radius 256 keeps the smooth-iteration estimate stable.
pub const ESCAPE_RADIUS_SQ: f32 = 65536.0;

/// Outcome of iterating one sample point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelOrbit {
    /// Iteration at which `|z|^2` first exceeded the bailout, or the
    /// iteration limit if it never did.
    pub iterations: u32,
    pub escaped: bool,
    /// `|z|^2` at escape, 0 otherwise.
    pub final_z_norm_sq: f32,
}

/// Iterate `δ_{n+1} = 2·Z_n·δ_n + δ_n² + δc` against the reference orbit.
///
/// Stops at the reference's escape index: past it the stored orbit no
/// longer describes a real trajectory.
pub fn compute_pixel_perturbation(
    orbit: &OrbitBuffer,
    delta_c: (f32, f32),
    max_iterations: u32,
) -> PixelOrbit {
    let limit = max_iterations
        .min(orbit.escape_index())
        .min(orbit.len() as u32);
    let table = orbit.as_floats();
    let (dc_re, dc_im) = delta_c;
    let (mut dz_re, mut dz_im) = (0.0_f32, 0.0_f32);

    for n in 0..limit {
        let at = OrbitBuffer::offset(n as usize);
        let (z_ref_re, z_ref_im) = (table[at], table[at + 1]);

        let z_re = z_ref_re + dz_re;
        let z_im = z_ref_im + dz_im;
        let z_norm_sq = z_re * z_re + z_im * z_im;
        if z_norm_sq > ESCAPE_RADIUS_SQ {
            return PixelOrbit {
                iterations: n,
                escaped: true,
                final_z_norm_sq: z_norm_sq,
            };
        }

        let next_re =
            2.0 * (z_ref_re * dz_re - z_ref_im * dz_im) + (dz_re * dz_re - dz_im * dz_im) + dc_re;
        let next_im = 2.0 * (z_ref_re * dz_im + z_ref_im * dz_re) + 2.0 * dz_re * dz_im + dc_im;
        dz_re = next_re;
        dz_im = next_im;
    }

    PixelOrbit {
        iterations: limit,
        escaped: false,
        final_z_norm_sq: 0.0,
    }
}
