//! Render parameters shared by the orbit generator and every presenter.

use crate::error::CoreError;

/// Immutable description of the one frame a run produces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParameters {
    pub width: u32,
    pub height: u32,
    /// Zoom factor relative to a view two units tall.
    pub magnification: f32,
    /// Length of the reference orbit the presenter will index.
    pub max_iterations: u32,
    /// Supersampling factor per axis (`n` means `n×n` samples per pixel).
    pub antialias_level: u32,
}

impl RenderParameters {
    pub fn new(
        width: u32,
        height: u32,
        magnification: f32,
        max_iterations: u32,
        antialias_level: u32,
    ) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidParameters(format!(
                "resolution must be non-zero, got {width}x{height}"
            )));
        }
        if !magnification.is_finite() || magnification <= 0.0 {
            return Err(CoreError::InvalidParameters(format!(
                "magnification must be positive and finite, got {magnification}"
            )));
        }
        if max_iterations == 0 {
            return Err(CoreError::InvalidParameters(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if antialias_level == 0 {
            return Err(CoreError::InvalidParameters(
                "antialias_level must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            width,
            height,
            magnification,
            max_iterations,
            antialias_level,
        })
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_view() {
        let params = RenderParameters::new(3840, 2160, 1e8, 16384, 1).unwrap();
        assert_eq!(params.resolution(), (3840, 2160));
        assert_eq!(params.pixel_count(), 3840 * 2160);
    }

    #[test]
    fn rejects_zero_resolution() {
        assert!(RenderParameters::new(0, 10, 1.0, 10, 1).is_err());
        assert!(RenderParameters::new(10, 0, 1.0, 10, 1).is_err());
    }

    #[test]
    fn rejects_bad_magnification() {
        assert!(RenderParameters::new(10, 10, 0.0, 10, 1).is_err());
        assert!(RenderParameters::new(10, 10, -2.0, 10, 1).is_err());
        assert!(RenderParameters::new(10, 10, f32::NAN, 10, 1).is_err());
        assert!(RenderParameters::new(10, 10, f32::INFINITY, 10, 1).is_err());
    }

    #[test]
    fn rejects_zero_iterations_and_antialias() {
        assert!(RenderParameters::new(10, 10, 1.0, 0, 1).is_err());
        assert!(RenderParameters::new(10, 10, 1.0, 10, 0).is_err());
    }
}
