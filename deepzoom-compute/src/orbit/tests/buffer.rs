use std::mem::{offset_of, size_of};

use super::helpers::{orbit_at, MINIBROT_IM, MINIBROT_RE};
use crate::error::OrbitBufferError;
use crate::orbit::{OrbitBuffer, Uniforms};
use deepzoom_core::RenderParameters;

#[test]
fn pack_interleaves_re_and_im() {
    let orbit = orbit_at("-1", "0", 4, 16);
    let buffer = OrbitBuffer::pack(&orbit);

    assert_eq!(buffer.as_floats(), &[0.0_f32, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0, 0.0]);
    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer.as_bytes().len(), 4 * 2 * 4);
}

#[test]
fn unpack_restores_every_sample() {
    let orbit = orbit_at(MINIBROT_RE, MINIBROT_IM, 300, 128);
    let buffer = OrbitBuffer::pack(&orbit);

    assert_eq!(buffer.unpack(), orbit.samples());
    for (i, &sample) in orbit.samples().iter().enumerate() {
        assert_eq!(OrbitBuffer::offset(i), 2 * i);
        assert_eq!(buffer.sample(i), Some(sample));
    }
    assert_eq!(buffer.sample(300), None);
}

#[test]
fn pack_carries_clamped_tail() {
    let orbit = orbit_at("2", "0", 16, 32);
    let buffer = OrbitBuffer::pack(&orbit);

    assert_eq!(buffer.escape_index(), 8);
    assert_eq!(buffer.sample(15), Some((f32::INFINITY, 0.0)));
}

#[test]
fn bytes_are_native_endian_floats() {
    let orbit = orbit_at("-1", "0", 2, 16);
    let buffer = OrbitBuffer::pack(&orbit);
    let bytes = buffer.as_bytes();

    assert_eq!(&bytes[8..12], &(-1.0_f32).to_ne_bytes());
}

#[test]
fn validate_accepts_matching_iterations() {
    let buffer = OrbitBuffer::pack(&orbit_at("-0.5", "0", 64, 32));
    let params = RenderParameters::new(8, 8, 1.0, 64, 1).unwrap();
    assert!(buffer.validate(&params).is_ok());
}

#[test]
fn validate_rejects_iteration_mismatch() {
    let buffer = OrbitBuffer::pack(&orbit_at("-0.5", "0", 64, 32));
    let params = RenderParameters::new(8, 8, 1.0, 65, 1).unwrap();

    let err = buffer.validate(&params).unwrap_err();
    assert!(matches!(
        err,
        OrbitBufferError::IterationMismatch {
            orbit_len: 64,
            max_iterations: 65
        }
    ));
}

#[test]
fn uniform_layout_is_fixed() {
    assert_eq!(size_of::<Uniforms>(), 32);
    assert_eq!(offset_of!(Uniforms, resolution), 0);
    assert_eq!(offset_of!(Uniforms, magnification), 8);
    assert_eq!(offset_of!(Uniforms, max_iterations), 12);
    assert_eq!(offset_of!(Uniforms, antialias_level), 16);
    assert_eq!(offset_of!(Uniforms, escape_index), 20);
}

#[test]
fn uniforms_mirror_parameters_and_orbit() {
    let buffer = OrbitBuffer::pack(&orbit_at("2", "0", 16, 32));
    let params = RenderParameters::new(1920, 1080, 1e8, 16, 3).unwrap();
    let uniforms = Uniforms::new(&buffer, &params);

    assert_eq!(uniforms.resolution, [1920.0, 1080.0]);
    assert_eq!(uniforms.magnification, 1e8);
    assert_eq!(uniforms.max_iterations, 16);
    assert_eq!(uniforms.antialias_level, 3);
    assert_eq!(uniforms.escape_index, 8);
    assert_eq!(bytemuck::bytes_of(&uniforms).len(), 32);
}
