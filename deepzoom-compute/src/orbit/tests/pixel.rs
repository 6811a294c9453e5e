use super::helpers::orbit_at;
use crate::orbit::{compute_pixel_perturbation, OrbitBuffer, ESCAPE_RADIUS_SQ};

/// Plain f32 iteration of `z = z^2 + c` with the same bailout.
fn compute_direct(c: (f32, f32), max_iterations: u32) -> (u32, bool) {
    let (mut x, mut y) = (0.0_f32, 0.0_f32);
    for n in 0..max_iterations {
        if x * x + y * y > ESCAPE_RADIUS_SQ {
            return (n, true);
        }
        let nx = x * x - y * y + c.0;
        y = 2.0 * x * y + c.1;
        x = nx;
    }
    (max_iterations, false)
}

#[test]
fn zero_delta_follows_reference() {
    let buffer = OrbitBuffer::pack(&orbit_at("-0.5", "0.1", 200, 64));
    let result = compute_pixel_perturbation(&buffer, (0.0, 0.0), 200);

    assert!(!result.escaped);
    assert_eq!(result.iterations, 200);
    assert_eq!(result.final_z_norm_sq, 0.0);
}

#[test]
fn matches_direct_iteration_at_shallow_zoom() {
    let buffer = OrbitBuffer::pack(&orbit_at("-0.5", "0", 500, 32));

    for &delta in &[(0.3_f32, 0.0_f32), (0.2, 0.5), (1.0, 0.0), (1.0, 1.0), (-1.0, 0.0)] {
        let c = (-0.5 + delta.0, delta.1);
        let perturbed = compute_pixel_perturbation(&buffer, delta, 500);
        let (n, escaped) = compute_direct(c, 500);

        assert_eq!(perturbed.escaped, escaped, "c = {c:?}");
        if escaped {
            assert!(
                perturbed.iterations.abs_diff(n) <= 1,
                "c = {c:?}: {} vs {n}",
                perturbed.iterations
            );
            assert!(perturbed.final_z_norm_sq > ESCAPE_RADIUS_SQ);
        }
    }
}

#[test]
fn far_point_escapes_immediately() {
    let buffer = OrbitBuffer::pack(&orbit_at("0", "0", 100, 16));
    // z_1 = 300 exceeds radius 256 on the first check after one step.
    let result = compute_pixel_perturbation(&buffer, (300.0, 0.0), 100);

    assert!(result.escaped);
    assert_eq!(result.iterations, 1);
}

#[test]
fn stops_at_reference_escape_index() {
    // Reference c = 2 overflows at index 8; the pixel must never read the clamped tail.
    let buffer = OrbitBuffer::pack(&orbit_at("2", "0", 64, 32));
    let result = compute_pixel_perturbation(&buffer, (-1e-3, 0.0), 64);

    assert!(result.iterations <= 8);
    assert!(result.final_z_norm_sq.is_finite());
}

#[test]
fn respects_iteration_cap_below_orbit_length() {
    let buffer = OrbitBuffer::pack(&orbit_at("-0.5", "0", 100, 16));
    let result = compute_pixel_perturbation(&buffer, (0.0, 0.0), 10);

    assert!(!result.escaped);
    assert_eq!(result.iterations, 10);
}
