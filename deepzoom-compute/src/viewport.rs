//! Mapping from framebuffer positions to offsets from the reference center.

use deepzoom_core::RenderParameters;

/// Offset `δc` of a point inside pixel `(px, py)` from the orbit center.
///
/// `py` counts up from the bottom row, so the imaginary axis points up.
/// `(sub_x, sub_y)` selects one of the `antialias_level²` sub-samples; with
/// one sample per pixel this is the pixel center. The view is two units tall
/// at magnification 1.
pub fn pixel_delta(
    params: &RenderParameters,
    px: u32,
    py: u32,
    sub_x: u32,
    sub_y: u32,
) -> (f32, f32) {
    let aa = params.antialias_level as f32;
    let x = px as f32 + (sub_x as f32 + 0.5) / aa;
    let y = py as f32 + (sub_y as f32 + 0.5) / aa;

    let half_w = params.width as f32 * 0.5;
    let half_h = params.height as f32 * 0.5;
    let scale = 1.0 / (half_h * params.magnification);

    ((x - half_w) * scale, (y - half_h) * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(width: u32, height: u32, magnification: f32, aa: u32) -> RenderParameters {
        RenderParameters::new(width, height, magnification, 16, aa).unwrap()
    }

    #[test]
    fn center_pixel_of_odd_frame_is_on_center() {
        let p = params(5, 5, 1.0, 1);
        assert_eq!(pixel_delta(&p, 2, 2, 0, 0), (0.0, 0.0));
    }

    #[test]
    fn view_is_two_units_tall_at_unit_magnification() {
        let p = params(4, 4, 1.0, 1);
        // Bottom-left pixel center is 1.5 pixels from the middle, half height is 2 pixels.
        assert_eq!(pixel_delta(&p, 0, 0, 0, 0), (-0.75, -0.75));
        assert_eq!(pixel_delta(&p, 3, 3, 0, 0), (0.75, 0.75));
    }

    #[test]
    fn magnification_shrinks_offsets() {
        let wide = pixel_delta(&params(8, 8, 1.0, 1), 7, 7, 0, 0);
        let deep = pixel_delta(&params(8, 8, 1e4, 1), 7, 7, 0, 0);
        assert!((deep.0 - wide.0 * 1e-4).abs() < 1e-9);
        assert!((deep.1 - wide.1 * 1e-4).abs() < 1e-9);
    }

    #[test]
    fn sub_samples_straddle_pixel_center() {
        let p = params(4, 4, 1.0, 2);
        let lo = pixel_delta(&p, 1, 1, 0, 0);
        let hi = pixel_delta(&p, 1, 1, 1, 1);
        let center = pixel_delta(&params(4, 4, 1.0, 1), 1, 1, 0, 0);
        assert!(lo.0 < center.0 && center.0 < hi.0);
        assert!(lo.1 < center.1 && center.1 < hi.1);
    }
}
