pub mod cpu_presenter;
pub mod error;
pub mod orbit;
pub mod palette;
pub mod presenter;
pub mod viewport;

pub use cpu_presenter::{CpuPresenter, CpuPresenterError};
pub use error::OrbitBufferError;
pub use orbit::{
    compute_pixel_perturbation, OrbitBuffer, OrbitProgress, PixelOrbit, ReferenceOrbit,
    ReferenceOrbitGenerator, Uniforms, ESCAPE_RADIUS_SQ,
};
pub use presenter::Presenter;

// Re-export core types for convenience
pub use deepzoom_core::*;
