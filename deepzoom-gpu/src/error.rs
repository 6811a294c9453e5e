//! GPU error types.

use deepzoom_compute::OrbitBufferError;
use deepzoom_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("No GPU adapter found")]
    NoAdapter,

    #[error("Failed to create device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),

    #[error("Buffer mapping failed: {0}")]
    BufferMap(#[from] wgpu::BufferAsyncError),

    #[error("Invalid orbit buffer: {0}")]
    Orbit(#[from] OrbitBufferError),

    #[error("{width}x{height} exceeds the device texture limit of {max}")]
    FrameTooLarge { width: u32, height: u32, max: u32 },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("GPU unavailable: {0}")]
    Unavailable(String),
}
