//! Smooth-iteration coloring through a fixed cosine palette.

use std::f32::consts::TAU;

use crate::orbit::PixelOrbit;

/// Palette cycles per unit of smooth iteration count.
pub const PALETTE_FREQUENCY: f32 = 0.02;

/// Per-channel phase offsets of the cosine palette.
pub const PALETTE_PHASE: [f32; 3] = [0.0, 0.1, 0.2];

/// Continuous iteration count `n + 1 - log2(ln|z|)`, `None` for interior points.
pub fn smooth_iteration(result: &PixelOrbit) -> Option<f32> {
    if !result.escaped {
        return None;
    }
    let log_z = 0.5 * result.final_z_norm_sq.ln();
    Some(result.iterations as f32 + 1.0 - log_z.log2())
}

/// Linear RGB in `[0, 1]`.
pub fn colorize(result: &PixelOrbit) -> [f32; 3] {
    let Some(mu) = smooth_iteration(result) else {
        return [0.0; 3];
    };
    let t = mu * PALETTE_FREQUENCY;
    PALETTE_PHASE.map(|phase| 0.5 + 0.5 * (TAU * (t + phase)).cos())
}

pub fn to_rgba8(color: [f32; 3]) -> [u8; 4] {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    [r, g, b, u8::MAX]
}
