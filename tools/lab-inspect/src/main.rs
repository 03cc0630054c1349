//! Inspect images the way a colorization model sees them: convert to LAB,
//! normalize, and report per-channel statistics plus the normalization
//! round-trip error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colorize::{
    denormalize_lab, normalize_lab, Channel, CieLabConverter, ColorSpaceConverter, Illuminant,
};
use ndarray::{Array3, Axis};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lab-inspect", version, about = "Report normalized LAB statistics for images")]
struct Cli {
    /// Reference white for the LAB conversion (A, D50, D55, D65, D75, E)
    #[arg(long, default_value_t = Illuminant::D65)]
    illuminant: Illuminant,

    /// Print one JSON object per image instead of a table
    #[arg(long)]
    json: bool,

    /// Images to inspect
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ChannelStats {
    channel: Channel,
    min: f64,
    max: f64,
    mean: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    path: PathBuf,
    width: usize,
    height: usize,
    illuminant: Illuminant,
    channels: Vec<ChannelStats>,
    roundtrip_max_error: f64,
}

/// Load an image as an `(H, W, 3)` RGB tensor in `[0, 1]`
fn load_rgb(path: &Path) -> Result<Array3<f64>> {
    let image = image::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .to_rgb8();
    let (width, height) = image.dimensions();
    let samples: Vec<f64> = image
        .into_raw()
        .into_iter()
        .map(|v| v as f64 / 255.0)
        .collect();
    Array3::from_shape_vec((height as usize, width as usize, 3), samples)
        .with_context(|| format!("unexpected pixel buffer size in {}", path.display()))
}

fn inspect(path: &Path, converter: &CieLabConverter) -> Result<Report> {
    let rgb = load_rgb(path)?;
    let (height, width, _) = rgb.dim();
    debug!(path = %path.display(), width, height, "loaded image");

    let lab = converter.to_lab(&rgb)?;
    let lab_norm = normalize_lab(&lab)?;
    let lab_back = denormalize_lab(&lab_norm)?;

    let roundtrip_max_error = lab
        .iter()
        .zip(lab_back.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);

    let channels = Channel::ALL
        .into_iter()
        .map(|channel| {
            let values = lab_norm.index_axis(Axis(2), channel.index());
            let count = values.len().max(1) as f64;
            ChannelStats {
                channel,
                min: values.iter().copied().fold(f64::INFINITY, f64::min),
                max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                mean: values.sum() / count,
            }
        })
        .collect();

    Ok(Report {
        path: path.to_path_buf(),
        width,
        height,
        illuminant: converter.illuminant(),
        channels,
        roundtrip_max_error,
    })
}

fn print_report(report: &Report) {
    println!(
        "{} ({}x{}, {})",
        report.path.display(),
        report.width,
        report.height,
        report.illuminant
    );
    for stats in &report.channels {
        println!(
            "  {:<2} min {:>9.5}  max {:>9.5}  mean {:>9.5}",
            stats.channel.name(),
            stats.min,
            stats.max,
            stats.mean
        );
    }
    println!("  round-trip max error {:.3e}", report.roundtrip_max_error);
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let converter = CieLabConverter::with_illuminant(cli.illuminant);
    info!(images = cli.images.len(), illuminant = %cli.illuminant, "inspecting images");

    let reports = cli
        .images
        .par_iter()
        .map(|path| inspect(path, &converter))
        .collect::<Result<Vec<_>>>()?;

    for report in &reports {
        if cli.json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            print_report(report);
        }
    }

    Ok(())
}
