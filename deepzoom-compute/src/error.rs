use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrbitBufferError {
    #[error("reference orbit is empty")]
    Empty,

    #[error("orbit holds {orbit_len} samples but max_iterations is {max_iterations}")]
    IterationMismatch { orbit_len: usize, max_iterations: u32 },
}
