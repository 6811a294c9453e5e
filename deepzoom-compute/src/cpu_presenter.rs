//! Software presenter running the fragment shader's loop on the CPU.

use deepzoom_core::{CoreError, PixelBuffer, RenderParameters, RowOrder};
use thiserror::Error;

use crate::error::OrbitBufferError;
use crate::orbit::{compute_pixel_perturbation, OrbitBuffer};
use crate::palette::{colorize, to_rgba8};
use crate::presenter::Presenter;
use crate::viewport::pixel_delta;

#[derive(Debug, Error)]
pub enum CpuPresenterError {
    #[error(transparent)]
    Orbit(#[from] OrbitBufferError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Renders rows bottom to top, like a framebuffer indexed by fragment
/// coordinates, so its output is [`RowOrder::BottomUp`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuPresenter;

impl CpuPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Averaged color of one pixel, `py` counted from the bottom.
    pub fn shade_pixel(
        orbit: &OrbitBuffer,
        params: &RenderParameters,
        px: u32,
        py: u32,
    ) -> [u8; 4] {
        let aa = params.antialias_level;
        let mut sum = [0.0_f32; 3];

        for sub_y in 0..aa {
            for sub_x in 0..aa {
                let delta_c = pixel_delta(params, px, py, sub_x, sub_y);
                let result = compute_pixel_perturbation(orbit, delta_c, params.max_iterations);
                let color = colorize(&result);
                for (acc, c) in sum.iter_mut().zip(color) {
                    *acc += c;
                }
            }
        }

        let samples = (aa * aa) as f32;
        to_rgba8(sum.map(|c| c / samples))
    }
}

impl Presenter for CpuPresenter {
    type Error = CpuPresenterError;

    fn name(&self) -> &'static str {
        "cpu"
    }

    fn render_frame(
        &mut self,
        orbit: &OrbitBuffer,
        params: &RenderParameters,
    ) -> Result<PixelBuffer, Self::Error> {
        orbit.validate(params)?;

        let (width, height) = params.resolution();
        let mut data = Vec::with_capacity(params.pixel_count() * 4);
        for py in 0..height {
            for px in 0..width {
                data.extend_from_slice(&Self::shade_pixel(orbit, params, px, py));
            }
        }

        log::debug!("CPU presenter shaded {width}x{height} pixels");
        Ok(PixelBuffer::new(width, height, RowOrder::BottomUp, data)?)
    }
}
