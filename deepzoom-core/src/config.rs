//! Startup configuration for a single render.
//!
//! Defaults reproduce the classic deep-zoom view: a minibrot near
//! `-1.7692 + 0.0034i` at 1e8 magnification, 16384 orbit samples and a 4K
//! frame. A JSON file may override any subset of fields.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::complex::Coordinate;
use crate::error::CoreError;
use crate::params::RenderParameters;
use crate::precision::{Precision, TieBreak, DEFAULT_PRECISION_DIGITS};

pub const DEFAULT_CENTER_RE: &str = "-1.769233641266822788211";
pub const DEFAULT_CENTER_IM: &str = "0.003412911653518676758";
pub const DEFAULT_MAGNIFICATION: f32 = 1e8;
pub const DEFAULT_MAX_ITERATIONS: u32 = 16384;
pub const DEFAULT_WIDTH: u32 = 3840;
pub const DEFAULT_HEIGHT: u32 = 2160;
pub const DEFAULT_OUTPUT: &str = "out/out.png";

/// Which presenter turns the orbit into pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// GPU when an adapter is available, CPU otherwise.
    #[default]
    Auto,
    Gpu,
    Cpu,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "gpu" => Ok(Backend::Gpu),
            "cpu" => Ok(Backend::Cpu),
            other => Err(format!("unknown backend {other:?} (expected auto, gpu or cpu)")),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Auto => "auto",
            Backend::Gpu => "gpu",
            Backend::Cpu => "cpu",
        };
        f.write_str(name)
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "half-up" => Ok(TieBreak::HalfUp),
            "half-even" => Ok(TieBreak::HalfEven),
            other => Err(format!(
                "unknown tie-break rule {other:?} (expected half-up or half-even)"
            )),
        }
    }
}

/// Everything a run needs, before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Real part of the view center, as a decimal string.
    pub center_re: String,
    /// Imaginary part of the view center, as a decimal string.
    pub center_im: String,
    pub magnification: f32,
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
    pub antialias_level: u32,
    /// Significant decimal digits for reference orbit arithmetic.
    pub precision_digits: usize,
    pub tie_break: TieBreak,
    pub backend: Backend,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            center_re: DEFAULT_CENTER_RE.to_string(),
            center_im: DEFAULT_CENTER_IM.to_string(),
            magnification: DEFAULT_MAGNIFICATION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            antialias_level: 1,
            precision_digits: DEFAULT_PRECISION_DIGITS,
            tie_break: TieBreak::HalfUp,
            backend: Backend::Auto,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RenderConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn precision(&self) -> Result<Precision, CoreError> {
        Precision::new(self.precision_digits, self.tie_break)
    }

    /// Parse the center at the given working precision.
    pub fn center(&self, precision: &Precision) -> Result<Coordinate, CoreError> {
        Coordinate::from_strings(&self.center_re, &self.center_im, precision)
    }

    pub fn render_parameters(&self) -> Result<RenderParameters, CoreError> {
        RenderParameters::new(
            self.width,
            self.height,
            self.magnification,
            self.max_iterations,
            self.antialias_level,
        )
    }
}
