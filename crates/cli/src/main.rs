//! heatstamp CLI - point files to heatmap PNGs

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use heatstamp_colormap::{render, render_saturated, scheme_by_name, schemes, InterpolationMode, DEFAULT_SCHEME};
use heatstamp_core::{CancelSignal, Deadline, Error, HeatGrid, Stamp};
use heatstamp_parallel::ParallelAccumulator;

/// Points handed to the grid between progress bar updates.
const PROGRESS_CHUNK: usize = 10_000;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "heatstamp")]
#[command(author, version, about = "Render point data as heatmaps", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accumulate points from a file and render a PNG heatmap
    Render {
        /// Input file with one `x,y` pair per line
        input: PathBuf,
        /// Output PNG file
        output: PathBuf,
        /// Grid width in pixels
        #[arg(long)]
        width: u32,
        /// Grid height in pixels
        #[arg(long)]
        height: u32,
        /// Stamp radius in cells (0 adds single pixels)
        #[arg(short, long, default_value = "8")]
        radius: u32,
        /// Stamp falloff curve
        #[arg(short, long, value_enum, default_value = "linear")]
        falloff: Falloff,
        /// Weight applied to every point
        #[arg(short, long, default_value = "1.0")]
        weight: f32,
        /// Color scheme identifier (see `heatstamp schemes`)
        #[arg(short, long, default_value = DEFAULT_SCHEME)]
        scheme: String,
        /// Clamp heat at this value instead of the grid maximum
        #[arg(long)]
        saturation: Option<f32>,
        /// Stop accumulating after this many seconds and render what is done
        #[arg(long)]
        time_limit: Option<f64>,
        /// Accumulate on all cores
        #[arg(short, long)]
        parallel: bool,
    },
    /// List the predefined color schemes
    Schemes {
        /// Only list schemes with this interpolation mode
        #[arg(short, long)]
        mode: Option<String>,
    },
    /// Print the weights of a generated stamp
    Stamp {
        /// Stamp radius in cells
        #[arg(short, long)]
        radius: u32,
        /// Stamp falloff curve
        #[arg(short, long, value_enum, default_value = "linear")]
        falloff: Falloff,
    },
}

/// Falloff curves over the normalized distance `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Falloff {
    /// 1 - t
    Linear,
    /// sqrt(1 - t)
    Sqrt,
    /// (1 - t)^2
    Quadratic,
}

impl Falloff {
    /// Stamp corners reach `t > 1`; every curve is 0 there.
    fn weight(self, t: f32) -> f32 {
        let u = (1.0 - t).max(0.0);
        match self {
            Falloff::Linear => u,
            Falloff::Sqrt => u.sqrt(),
            Falloff::Quadratic => u * u,
        }
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} points ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

fn build_stamp(radius: u32, falloff: Falloff) -> Result<Stamp> {
    if radius == 0 {
        return Ok(Stamp::unit());
    }
    let stamp = match falloff {
        Falloff::Linear => Stamp::generate_radial(radius),
        other => Stamp::generate_nonlinear(radius, |t| other.weight(t)),
    };
    stamp.context("Failed to generate stamp")
}

/// Parse `x,y` lines. Blank lines and `#` comments are skipped.
fn parse_points<R: BufRead>(reader: R) -> Result<Vec<(i32, i32)>> {
    let mut points = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read points")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((x, y)) = line.split_once(',') else {
            bail!("line {}: expected `x,y`, got `{}`", i + 1, line);
        };
        let x = x
            .trim()
            .parse()
            .with_context(|| format!("line {}: invalid x `{}`", i + 1, x.trim()))?;
        let y = y
            .trim()
            .parse()
            .with_context(|| format!("line {}: invalid y `{}`", i + 1, y.trim()))?;
        points.push((x, y));
    }
    Ok(points)
}

fn read_points(path: &Path) -> Result<Vec<(i32, i32)>> {
    let pb = spinner("Reading points...");
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let points = parse_points(BufReader::new(file))?;
    pb.finish_and_clear();
    info!("Input: {} points", points.len());
    Ok(points)
}

/// Sequential accumulation in slices so the progress bar can advance.
fn accumulate_with_progress<C: CancelSignal>(
    grid: &mut HeatGrid,
    points: &[(i32, i32)],
    weight: f32,
    stamp: &Stamp,
    cancel: &C,
) -> heatstamp_core::Result<()> {
    let pb = progress_bar(points.len());
    let mut applied = 0;
    for chunk in points.chunks(PROGRESS_CHUNK) {
        if let Err(e) = grid.add_weighted_points_with_stamp(chunk, weight, stamp, cancel) {
            pb.abandon();
            return Err(match e {
                Error::Cancelled { completed } => Error::Cancelled {
                    completed: applied + completed,
                },
                other => other,
            });
        }
        applied += chunk.len();
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();
    Ok(())
}

fn write_png(rgba: Vec<u8>, width: u32, height: u32, path: &Path) -> Result<()> {
    let pb = spinner("Writing output...");
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .context("Rendered buffer does not match the image size")?;
    img.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    pb.finish_and_clear();
    Ok(())
}

fn done(name: &str, path: &Path, elapsed: Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Render {
            input,
            output,
            width,
            height,
            radius,
            falloff,
            weight,
            scheme,
            saturation,
            time_limit,
            parallel,
        } => {
            let scheme = scheme_by_name(&scheme).context("Unknown color scheme")?;
            let deadline = match time_limit {
                Some(secs) => Some(
                    Duration::try_from_secs_f64(secs)
                        .map(Deadline::after)
                        .with_context(|| format!("Invalid time limit: {secs}"))?,
                ),
                None => None,
            };
            let cancel = || deadline.as_ref().is_some_and(|d| d.is_cancelled());

            let points = read_points(&input)?;
            let stamp = build_stamp(radius, falloff)?;
            let mut grid = HeatGrid::try_new(width as usize, height as usize)
                .context("Failed to allocate heat grid")?;

            let start = Instant::now();
            let outcome = if parallel {
                let pb = spinner("Accumulating points...");
                let result = ParallelAccumulator::default().accumulate_weighted_points_with_stamp(
                    &mut grid, &points, weight, &stamp, &cancel,
                );
                pb.finish_and_clear();
                result
            } else {
                accumulate_with_progress(&mut grid, &points, weight, &stamp, &cancel)
            };
            match outcome {
                Ok(()) => {}
                Err(Error::Cancelled { completed }) => warn!(
                    "Time limit reached after {} of {} points, rendering partial heatmap",
                    completed,
                    points.len()
                ),
                Err(e) => return Err(e).context("Failed to accumulate points"),
            }
            info!("Heat maximum: {}", grid.max());

            let rgba = match saturation {
                Some(s) => render_saturated(&grid, scheme, s),
                None => render(&grid, scheme),
            }
            .context("Failed to render heatmap")?;
            let elapsed = start.elapsed();

            write_png(rgba, width, height, &output)?;
            done("Heatmap", &output, elapsed);
        }

        Commands::Schemes { mode } => {
            let mode: Option<InterpolationMode> = mode
                .as_deref()
                .map(str::parse)
                .transpose()
                .context("Unknown interpolation mode")?;
            for scheme in schemes() {
                if mode.map_or(true, |m| scheme.mode() == m) {
                    println!("{}", scheme.name());
                }
            }
        }

        Commands::Stamp { radius, falloff } => {
            if radius == 0 {
                bail!("Stamp radius must be at least 1");
            }
            let stamp = build_stamp(radius, falloff)?;
            println!("{} x {} stamp, {:?} falloff", stamp.width(), stamp.height(), falloff);
            print!("{stamp}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_skipping_comments() {
        let input = "# header\n1,2\n\n  -3 , 40 \n# trailing\n";
        let points = parse_points(input.as_bytes()).unwrap();
        assert_eq!(points, vec![(1, 2), (-3, 40)]);
    }

    #[test]
    fn reports_bad_lines() {
        let err = parse_points("1,2\n3;4\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
        let err = parse_points("1,x\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid y"));
    }

    #[test]
    fn falloff_curves_hit_endpoints() {
        for f in [Falloff::Linear, Falloff::Sqrt, Falloff::Quadratic] {
            assert_eq!(f.weight(0.0), 1.0);
            assert_eq!(f.weight(1.0), 0.0);
            assert_eq!(f.weight(1.4), 0.0);
        }
        assert!(Falloff::Sqrt.weight(0.5) > Falloff::Linear.weight(0.5));
        assert!(Falloff::Quadratic.weight(0.5) < Falloff::Linear.weight(0.5));
    }

    #[test]
    fn zero_radius_uses_unit_stamp() {
        assert_eq!(build_stamp(0, Falloff::Quadratic).unwrap(), Stamp::unit());
        assert_eq!(build_stamp(2, Falloff::Linear).unwrap().shape(), (5, 5));
        // corner of a radius-2 stamp sits at t = sqrt(8) / 3 > 1
        let quadratic = build_stamp(2, Falloff::Quadratic).unwrap();
        assert_eq!(quadratic.get(0, 0), Some(0.0));
        assert_eq!(quadratic.get(2, 2), Some(1.0));
    }

    #[test]
    fn progress_accumulation_counts_across_slices() {
        let stamp = Stamp::unit();
        let points = vec![(0, 0); PROGRESS_CHUNK + 50];
        let polls = std::cell::Cell::new(0usize);
        let cancel = || {
            polls.set(polls.get() + 1);
            polls.get() > PROGRESS_CHUNK + 10
        };
        let mut grid = HeatGrid::new(2, 2);
        let err = accumulate_with_progress(&mut grid, &points, 1.0, &stamp, &cancel).unwrap_err();
        assert!(matches!(err, Error::Cancelled { completed } if completed == PROGRESS_CHUNK + 10));
        assert_eq!(grid.get(0, 0), Some((PROGRESS_CHUNK + 10) as f32));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
