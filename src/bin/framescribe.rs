//! framescribe - headless host for the framebuffer engine.
//!
//! Runs the engine for a fixed number of ticks without a window, optionally
//! writing every uploaded frame and a final snapshot as PNG.

use std::path::PathBuf;
use std::thread;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use framescribe::output::PngFrameSink;
use framescribe::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "framescribe", version, about = "Paint random points or lines into a software framebuffer")]
struct Args {
    /// YAML config file (defaults to <config dir>/framescribe/config.yaml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Draw mode override (points or lines).
    #[arg(long)]
    mode: Option<DrawMode>,

    /// Seed override.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final buffer here as PNG.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write one PNG per uploaded frame into this directory.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Sleep for the configured tick interval between ticks.
    #[arg(long)]
    realtime: bool,
}

/// Sink that discards uploads, used when no frames directory is given.
struct DiscardSink;

impl TextureSink for DiscardSink {
    fn upload_level(&mut self, _: u32, _: &[u8], _: u32, _: u32, _: TextureFormat) -> Result<()> {
        Ok(())
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|p| p.join("framescribe/config.yaml"))
            .unwrap_or_default()
    });
    let mut config = if args.config.is_some() {
        Config::load(&config_path)?
    } else {
        Config::load_or_default(&config_path)
    };
    if let Some(mode) = args.mode {
        config.draw_mode = mode;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut engine = Engine::initialize(&config)?;
    let mut sink: Box<dyn TextureSink> = match &args.frames_dir {
        Some(dir) => Box::new(PngFrameSink::new(dir)?),
        None => Box::new(DiscardSink),
    };

    engine.present(sink.as_mut())?;

    let mut redraws = 0u64;
    for _ in 0..args.ticks {
        if engine.on_tick(sink.as_mut())? == TickOutcome::Redraw {
            redraws += 1;
        }
        if args.realtime {
            thread::sleep(engine.tick_interval());
        }
    }

    info!(ticks = args.ticks, redraws, mode = %engine.mode(), "run finished");

    if let Some(out) = &args.out {
        engine.snapshot_png(out)?;
    }

    Ok(())
}
