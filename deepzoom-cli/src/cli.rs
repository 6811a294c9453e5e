use std::path::PathBuf;

use clap::Parser;
use deepzoom_core::{Backend, CoreError, RenderConfig, TieBreak};

/// Render one deep-zoom Mandelbrot frame to PNG using perturbation.
///
/// Flags override values from `--config`, which override built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "deepzoom", version)]
pub struct Cli {
    /// JSON config file; every field is optional
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Real part of the view center, as a decimal string
    #[arg(long, allow_hyphen_values = true)]
    pub center_re: Option<String>,

    /// Imaginary part of the view center, as a decimal string
    #[arg(long, allow_hyphen_values = true)]
    pub center_im: Option<String>,

    #[arg(long)]
    pub magnification: Option<f32>,

    /// Reference orbit length and per-pixel iteration cap
    #[arg(long)]
    pub iterations: Option<u32>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Samples per pixel along each axis
    #[arg(long)]
    pub antialias: Option<u32>,

    /// Significant decimal digits for the reference orbit
    #[arg(long)]
    pub precision: Option<usize>,

    /// half-up or half-even
    #[arg(long)]
    pub tie_break: Option<TieBreak>,

    /// auto, gpu or cpu
    #[arg(long)]
    pub backend: Option<Backend>,

    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn resolve_config(&self) -> Result<RenderConfig, CoreError> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)?,
            None => RenderConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(re) = &self.center_re {
            config.center_re = re.clone();
        }
        if let Some(im) = &self.center_im {
            config.center_im = im.clone();
        }
        if let Some(magnification) = self.magnification {
            config.magnification = magnification;
        }
        if let Some(iterations) = self.iterations {
            config.max_iterations = iterations;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(antialias) = self.antialias {
            config.antialias_level = antialias;
        }
        if let Some(digits) = self.precision {
            config.precision_digits = digits;
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
    }
}
