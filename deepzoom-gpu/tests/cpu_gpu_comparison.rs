//! The fragment shader and the CPU presenter run the same loop; their frames
//! should agree once both are put in top-left order.

use deepzoom_compute::{
    Coordinate, CpuPresenter, OrbitBuffer, PixelBuffer, Precision, Presenter,
    ReferenceOrbitGenerator, RenderParameters, TieBreak,
};
use deepzoom_gpu::{GpuAvailability, GpuContext, GpuPresenter};

const MINIBROT_RE: &str = "-1.769233641266822788211";
const MINIBROT_IM: &str = "0.003412911653518676758";

fn packed_orbit(re: &str, im: &str, max_iterations: u32) -> OrbitBuffer {
    let precision = Precision::new(128, TieBreak::HalfUp).unwrap();
    let center = Coordinate::from_strings(re, im, &precision).unwrap();
    let orbit = ReferenceOrbitGenerator::new(center, max_iterations, precision)
        .unwrap()
        .generate();
    OrbitBuffer::pack(&orbit)
}

fn gpu_presenter() -> Option<GpuPresenter> {
    match pollster::block_on(GpuContext::try_init()) {
        GpuAvailability::Available(ctx) => Some(GpuPresenter::new(ctx)),
        GpuAvailability::Unavailable(reason) => {
            println!("Skipping test: no GPU available ({reason})");
            None
        }
    }
}

/// Fraction of pixels whose channels differ by more than `tolerance`.
fn mismatch_fraction(a: &PixelBuffer, b: &PixelBuffer, tolerance: u8) -> f64 {
    let mut mismatched = 0;
    for y in 0..a.height() {
        for x in 0..a.width() {
            let pa = a.pixel(x, y);
            let pb = b.pixel(x, y);
            if pa.iter().zip(pb).any(|(&ca, cb)| ca.abs_diff(cb) > tolerance) {
                mismatched += 1;
            }
        }
    }
    mismatched as f64 / (a.width() * a.height()) as f64
}

fn assert_frames_agree(orbit: &OrbitBuffer, params: &RenderParameters) {
    let Some(mut gpu) = gpu_presenter() else {
        return;
    };
    let gpu_frame = gpu.render_frame(orbit, params).unwrap();
    let cpu_frame = CpuPresenter::new().render_frame(orbit, params).unwrap();

    let fraction = mismatch_fraction(&gpu_frame, &cpu_frame, 8);
    assert!(fraction < 0.05, "{:.1}% of pixels differ", fraction * 100.0);
}

#[test]
fn shallow_view_matches_cpu() {
    let orbit = packed_orbit("-0.5", "0", 256);
    let params = RenderParameters::new(48, 32, 0.8, 256, 1).unwrap();
    assert_frames_agree(&orbit, &params);
}

#[test]
fn off_axis_view_is_not_mirrored() {
    // Asymmetric about the real axis, so a missing flip would show up.
    let orbit = packed_orbit("-0.1", "0.8", 256);
    let params = RenderParameters::new(40, 30, 8.0, 256, 1).unwrap();
    assert_frames_agree(&orbit, &params);
}

#[test]
fn deep_zoom_with_antialiasing_matches_cpu() {
    let orbit = packed_orbit(MINIBROT_RE, MINIBROT_IM, 2000);
    let params = RenderParameters::new(32, 18, 1e8, 2000, 2).unwrap();
    assert_frames_agree(&orbit, &params);
}
