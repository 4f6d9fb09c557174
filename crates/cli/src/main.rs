//! sphere-pack CLI

use anyhow::Context;
use clap::{Parser, Subcommand};
use sphere_pack_cli::{OutputFormat, PackReport};
use sphere_pack_core::{Config, Solver};
use sphere_pack_d3::packer::checked_count;
use sphere_pack_d3::{validate_packing, SpherePacker, Volume};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sphere-pack")]
#[command(about = "Randomized packing of non-overlapping spheres into a box")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack spheres into a width x height x depth box
    Pack {
        /// Box extent along x
        #[arg(allow_negative_numbers = true)]
        width: f64,

        /// Box extent along y
        #[arg(allow_negative_numbers = true)]
        height: f64,

        /// Box extent along z
        #[arg(allow_negative_numbers = true)]
        depth: f64,

        /// Maximum number of spheres
        #[arg(short = 'n', long, default_value = "100", allow_negative_numbers = true)]
        max_spheres: i64,

        /// Placement attempts per sphere
        #[arg(short, long, default_value = "200", allow_negative_numbers = true)]
        attempts: i64,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of independent runs; the densest one is kept
        #[arg(short, long, default_value = "1")]
        restarts: usize,

        /// Time limit in milliseconds (0 = unlimited)
        #[arg(short, long, default_value = "0")]
        time_limit: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a JSON report against the packing invariants
    Check {
        /// Path to the JSON report
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Pack {
            width,
            height,
            depth,
            max_spheres,
            attempts,
            seed,
            restarts,
            time_limit,
            format,
            output,
        } => {
            let volume = Volume::try_new(width, height, depth)?;

            let mut config = Config::default()
                .with_max_spheres(checked_count("max_spheres", max_spheres, 0)?)
                .with_attempts_per_sphere(checked_count("attempts_per_sphere", attempts, 1)?)
                .with_restarts(restarts)
                .with_time_limit(time_limit);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let packer = SpherePacker::new(config);
            let result = packer.solve(&volume)?;

            log::info!(
                "Placed {}/{} spheres, utilization {}, {}ms",
                result.placed_count(),
                result.slots_requested,
                result.utilization_percent(),
                result.computation_time_ms
            );
            if result.timed_out {
                log::warn!("Time limit reached, result is partial");
            }

            let rendered = PackReport::from_result(&volume, &result).render(format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Results saved to: {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Check { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let report = PackReport::from_json(&json)?;

            validate_packing(&report.volume, &report.spheres())?;

            println!(
                "{}: {} spheres, packing is valid",
                file.display(),
                report.spheres.len()
            );
        }
    }

    Ok(())
}
