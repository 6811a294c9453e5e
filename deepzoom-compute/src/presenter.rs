//! The seam between orbit generation and pixel output.

use deepzoom_core::{PixelBuffer, RenderParameters};

use crate::orbit::OrbitBuffer;

/// Turns a packed reference orbit into one frame of pixels.
///
/// Implementations validate `orbit` against `params` before drawing and
/// perform exactly one pass per call. The caller saves the result with
/// [`PixelBuffer::save_png`].
pub trait Presenter {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short name for log lines.
    fn name(&self) -> &'static str;

    fn render_frame(
        &mut self,
        orbit: &OrbitBuffer,
        params: &RenderParameters,
    ) -> Result<PixelBuffer, Self::Error>;
}
