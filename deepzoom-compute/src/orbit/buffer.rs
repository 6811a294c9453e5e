//! Orbit table and uniform block as the fragment shader reads them.
//!
//! The orbit is a flat run of f32 values `re_0, im_0, re_1, im_1, …`, bound
//! as `array<vec2<f32>>` in a read-only storage buffer at binding 1. The
//! uniform block sits at binding 0.

use bytemuck::{Pod, Zeroable};
use deepzoom_core::RenderParameters;

use super::ReferenceOrbit;
use crate::error::OrbitBufferError;

/// f32 values per orbit sample.
pub const FLOATS_PER_SAMPLE: usize = 2;

/// Packed, read-only orbit table.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitBuffer {
    data: Vec<f32>,
    escape_index: u32,
}

impl OrbitBuffer {
    pub fn pack(orbit: &ReferenceOrbit) -> Self {
        let mut data = Vec::with_capacity(orbit.len() * FLOATS_PER_SAMPLE);
        for &(re, im) in orbit.samples() {
            data.push(re);
            data.push(im);
        }
        Self {
            data,
            escape_index: orbit.escape_index(),
        }
    }

    /// Offset of sample `i` in the flat table.
    pub const fn offset(i: usize) -> usize {
        FLOATS_PER_SAMPLE * i
    }

    pub fn sample(&self, i: usize) -> Option<(f32, f32)> {
        let at = Self::offset(i);
        match self.data.get(at..at + FLOATS_PER_SAMPLE) {
            Some(&[re, im]) => Some((re, im)),
            _ => None,
        }
    }

    pub fn unpack(&self) -> Vec<(f32, f32)> {
        self.data
            .chunks_exact(FLOATS_PER_SAMPLE)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len() / FLOATS_PER_SAMPLE
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn escape_index(&self) -> u32 {
        self.escape_index
    }

    pub fn as_floats(&self) -> &[f32] {
        &self.data
    }

    /// Raw bytes for upload, native endian.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Check that `params` index this table exactly.
    pub fn validate(&self, params: &RenderParameters) -> Result<(), OrbitBufferError> {
        if self.is_empty() {
            return Err(OrbitBufferError::Empty);
        }
        if self.len() != params.max_iterations as usize {
            return Err(OrbitBufferError::IterationMismatch {
                orbit_len: self.len(),
                max_iterations: params.max_iterations,
            });
        }
        Ok(())
    }
}

/// Uniform block at binding 0. Layout matches `Uniforms` in the WGSL shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub resolution: [f32; 2],
    pub magnification: f32,
    pub max_iterations: u32,
    pub antialias_level: u32,
    pub escape_index: u32,
    pub _pad: [u32; 2],
}

impl Uniforms {
    pub fn new(orbit: &OrbitBuffer, params: &RenderParameters) -> Self {
        Self {
            resolution: [params.width as f32, params.height as f32],
            magnification: params.magnification,
            max_iterations: params.max_iterations,
            antialias_level: params.antialias_level,
            escape_index: orbit.escape_index(),
            _pad: [0; 2],
        }
    }
}
