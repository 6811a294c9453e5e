//! GPU presenter for deep-zoom perturbation rendering using wgpu.

mod buffers;
mod device;
mod error;
mod pipeline;
mod renderer;

pub use buffers::{padded_bytes_per_row, GpuBuffers, TARGET_FORMAT};
pub use device::{GpuAvailability, GpuContext};
pub use error::GpuError;
pub use pipeline::GpuPipeline;
pub use renderer::GpuPresenter;
