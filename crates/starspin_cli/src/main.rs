//! Starspin CLI
//!
//! `starspin run` drives a demo session on a logical clock and prints its
//! frame statistics. `starspin scenario` replays a JSON scenario and fails
//! with a non-zero exit code when an assertion does not hold.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use starspin_animation::ManualClock;
use starspin_app::{
    run_loaded_scenario, DemoConfig, DemoSession, HeadlessReport, HeadlessRunConfig,
    HeadlessRuntime, HeadlessScenario,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "starspin")]
#[command(about = "Starfield and reel spin demo, driven headless")]
#[command(version)]
struct Cli {
    /// Log filter, e.g. `debug` or `starspin_reels=trace`
    #[arg(long, global = true, default_value = "info")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo for a fixed number of frames
    Run {
        /// Number of frames to simulate
        #[arg(long, default_value = "600", value_parser = clap::value_parser!(u32).range(1..))]
        frames: u32,

        /// Logical milliseconds per frame
        #[arg(long, default_value = "16", value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: u64,

        /// Viewport width override, in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        width: Option<u32>,

        /// Viewport height override, in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        height: Option<u32>,

        /// Seed for star and symbol placement
        #[arg(long)]
        seed: Option<u64>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Request a spin on the first frame
        #[arg(long)]
        spin: bool,

        /// Write final statistics as JSON to this relative path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Replay a JSON scenario file
    Scenario {
        /// Scenario file
        file: PathBuf,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Logical milliseconds per frame
        #[arg(long, default_value = "16")]
        tick_ms: u64,

        /// Write the report as JSON to this relative path
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run {
            frames,
            tick_ms,
            width,
            height,
            seed,
            config,
            spin,
            report,
        } => {
            let mut demo = load_config(config.as_deref())?;
            if let Some(width) = width {
                demo.viewport.width = width;
            }
            if let Some(height) = height {
                demo.viewport.height = height;
            }
            if seed.is_some() {
                demo.seed = seed;
            }
            cmd_run(demo, frames, tick_ms, spin, report.as_deref())
        }
        Commands::Scenario {
            file,
            config,
            tick_ms,
            report,
        } => {
            let demo = load_config(config.as_deref())?;
            cmd_scenario(&file, demo, tick_ms, report.as_deref())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    match path {
        Some(path) => DemoConfig::load(path),
        None => Ok(DemoConfig::default()),
    }
}

fn cmd_run(
    demo: DemoConfig,
    frames: u32,
    tick_ms: u64,
    spin: bool,
    report: Option<&Path>,
) -> Result<()> {
    let clock = ManualClock::default();
    let mut session = DemoSession::new(demo, clock.clone())?;
    let cfg = HeadlessRunConfig {
        max_frames: frames,
        tick_ms,
    };

    if spin {
        session.request_spin()?;
    }

    let mut was_spinning = session.is_spinning();
    HeadlessRuntime::run(cfg, |ctx| {
        clock.advance(cfg.tick());
        let output = session.frame(cfg.tick());

        if was_spinning && !session.is_spinning() {
            tracing::info!(frame = ctx.frame_index, elapsed_ms = ctx.elapsed_ms, "spin finished");
        }
        was_spinning = session.is_spinning();

        if output.warp_toggles > 0 {
            tracing::info!(
                frame = ctx.frame_index,
                warping = session.starfield().camera().is_warping(),
                "warp toggled"
            );
        }
        if (ctx.frame_index + 1) % 60 == 0 {
            tracing::debug!(
                frame = ctx.frame_index,
                depth = session.starfield().camera().depth,
                speed = session.starfield().camera().speed,
                "frame"
            );
        }
    })?;

    let stats = session.stats().clone();
    tracing::info!(
        frames = stats.frames,
        respawns = stats.respawns,
        swaps = stats.symbol_swaps,
        spins = stats.spins_completed,
        depth = stats.camera_depth,
        "run finished"
    );

    let elapsed_ms = tick_ms.saturating_mul(frames as u64);
    let summary = HeadlessReport::passed(stats.frames, elapsed_ms, stats);
    match report {
        Some(path) => summary
            .write_to_path(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => summary.write_to_writer(&mut std::io::stdout().lock())?,
    }
    Ok(())
}

fn cmd_scenario(file: &Path, demo: DemoConfig, tick_ms: u64, report: Option<&Path>) -> Result<()> {
    let scenario = HeadlessScenario::from_path(file)?;
    tracing::info!(steps = scenario.steps.len(), "running scenario {}", file.display());

    let cfg = HeadlessRunConfig {
        max_frames: 1,
        tick_ms,
    };
    let outcome = run_loaded_scenario(&scenario, cfg, demo)?;
    match report {
        Some(path) => outcome
            .report()
            .write_to_path(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => outcome.report().write_to_writer(&mut std::io::stdout().lock())?,
    }

    if outcome.is_failed() {
        let report = outcome.report();
        bail!(
            "scenario failed at step {}: {}",
            report.failed_step_index.unwrap_or_default(),
            report.message.as_deref().unwrap_or("assertion failed")
        );
    }
    tracing::info!("scenario passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_accepts_viewport_overrides() {
        let cli = Cli::try_parse_from(["starspin", "run", "--width", "800", "--height", "600", "--spin"]).unwrap();
        match cli.command {
            Commands::Run {
                width,
                height,
                spin,
                frames,
                ..
            } => {
                assert_eq!(width, Some(800));
                assert_eq!(height, Some(600));
                assert!(spin);
                assert_eq!(frames, 600);
            }
            Commands::Scenario { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn zero_sized_viewport_is_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["starspin", "run", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["starspin", "run", "--height", "-5"]).is_err());
        assert!(Cli::try_parse_from(["starspin", "run", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn scenario_takes_a_file_and_global_log_filter() {
        let cli = Cli::try_parse_from(["starspin", "scenario", "spin.json", "--log", "debug"]).unwrap();
        assert_eq!(cli.log, "debug");
        match cli.command {
            Commands::Scenario { file, tick_ms, .. } => {
                assert_eq!(file, PathBuf::from("spin.json"));
                assert_eq!(tick_ms, 16);
            }
            Commands::Run { .. } => panic!("expected scenario"),
        }
    }
}
