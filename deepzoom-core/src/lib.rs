pub mod complex;
pub mod config;
pub mod error;
pub mod params;
pub mod pixel_buffer;
pub mod precision;

pub use complex::{Coordinate, HighPrecisionComplex};
pub use config::{Backend, RenderConfig};
pub use error::CoreError;
pub use params::RenderParameters;
pub use pixel_buffer::{PixelBuffer, RowOrder};
pub use precision::{Precision, TieBreak, DEFAULT_PRECISION_DIGITS, GUARD_DIGITS};
