use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use deepzoom_compute::{
    CpuPresenter, OrbitBuffer, OrbitProgress, Presenter, ReferenceOrbitGenerator,
};
use deepzoom_core::{Backend, PixelBuffer, Precision, RenderParameters};
use deepzoom_gpu::{GpuAvailability, GpuContext, GpuPresenter};

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let precision = config.precision()?;
    let params = config.render_parameters()?;
    let center = config.center(&precision).context("invalid view center")?;

    let magnification = f64::from(params.magnification);
    if !precision.is_sufficient_for(magnification) {
        log::warn!(
            "{} digits may be too few for magnification {:e}; {} or more recommended",
            precision.digits(),
            magnification,
            Precision::required_digits(magnification)
        );
    }

    log::info!(
        "Center {center} at magnification {:e}, {} iterations, {} digits",
        params.magnification,
        params.max_iterations,
        precision.digits()
    );

    let start = Instant::now();
    let generator = ReferenceOrbitGenerator::new(center, params.max_iterations, precision)?;
    let mut reported_tenths = 0;
    let orbit = generator.generate_with_progress(|progress: OrbitProgress| {
        let tenths = (progress.fraction() * 10.0) as u32;
        if tenths > reported_tenths {
            reported_tenths = tenths;
            log::info!(
                "Reference orbit {}/{} ({}%)",
                progress.completed,
                progress.total,
                tenths * 10
            );
        }
    });
    if orbit.escaped() {
        log::info!("Reference orbit escaped at iteration {}", orbit.escape_index());
    }
    log::info!("Reference orbit computed in {:.2?}", start.elapsed());

    let orbit_buffer = OrbitBuffer::pack(&orbit);
    let frame = render(config.backend, &orbit_buffer, &params)?;

    frame
        .save_png(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    Ok(())
}

fn render(
    backend: Backend,
    orbit: &OrbitBuffer,
    params: &RenderParameters,
) -> anyhow::Result<PixelBuffer> {
    match backend {
        Backend::Cpu => present(CpuPresenter::new(), orbit, params),
        Backend::Gpu => match init_gpu() {
            GpuAvailability::Available(ctx) => present(GpuPresenter::new(ctx), orbit, params),
            GpuAvailability::Unavailable(reason) => {
                bail!("GPU backend requested but unavailable: {reason}")
            }
        },
        Backend::Auto => match init_gpu() {
            GpuAvailability::Available(ctx) => present(GpuPresenter::new(ctx), orbit, params),
            GpuAvailability::Unavailable(reason) => {
                log::warn!("Falling back to CPU presenter: {reason}");
                present(CpuPresenter::new(), orbit, params)
            }
        },
    }
}

fn init_gpu() -> GpuAvailability {
    pollster::block_on(GpuContext::try_init())
}

fn present<P: Presenter>(
    mut presenter: P,
    orbit: &OrbitBuffer,
    params: &RenderParameters,
) -> anyhow::Result<PixelBuffer> {
    let start = Instant::now();
    let frame = presenter
        .render_frame(orbit, params)
        .with_context(|| format!("{} presenter failed", presenter.name()))?;
    log::info!(
        "Rendered {}x{} on {} in {:.2?}",
        params.width,
        params.height,
        presenter.name(),
        start.elapsed()
    );
    Ok(frame)
}
