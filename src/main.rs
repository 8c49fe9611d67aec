use atomsim::{bench_ticks, run_2d, read_atoms, write_atoms};
use atomsim::{Canvas, Engine, FrameLog, Parameters, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{self, BufReader};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Elastic atoms bouncing around a rectangular arena.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial configuration: atom count, then `color radius x y vx vy` per atom.
    /// Random atoms are generated when omitted.
    file: Option<PathBuf>,

    /// YAML file overriding arena, tick and placement settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of random atoms
    #[arg(long, conflicts_with = "file")]
    count: Option<NonZeroUsize>,

    /// Seed for reproducible random placement
    #[arg(long, conflicts_with = "file")]
    seed: Option<u64>,

    /// Run the tick loop without opening a window
    #[arg(long)]
    headless: bool,

    /// Time the tick for growing atom counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_settings(args: &Args) -> Result<(Parameters, Engine)> {
    let cfg = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open config {}", path.display()))?;
            ScenarioConfig::from_yaml_reader(BufReader::new(file))
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    let (mut params, engine) = cfg.to_runtime()?;
    if let Some(count) = args.count {
        params.count = count.get();
    }
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    Ok((params, engine))
}

fn build_scenario(args: &Args, params: Parameters) -> Result<Scenario> {
    match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            let atoms = read_atoms(BufReader::new(file))
                .with_context(|| format!("invalid configuration source {}", path.display()))?;
            info!("loaded {} atoms from {}", atoms.len(), path.display());
            Ok(Scenario::build_loaded(params, atoms))
        }
        None => Scenario::build_random(params).context("random placement failed"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_ticks();
        return Ok(());
    }

    let (params, engine) = load_settings(&args)?;
    let mut scenario = build_scenario(&args, params)?;

    // observation channel: the atoms exactly as placed
    write_atoms(io::stdout().lock(), &scenario.system.atoms)?;

    if args.headless {
        let p = &scenario.parameters;
        let mut canvas = FrameLog::new();
        canvas.begin(p.width as u32, p.height as u32, &p.title, p.background);
        engine.run(&mut scenario, &mut canvas);
        canvas.end();
        info!("rendered {} frames", canvas.flushes());
    } else {
        run_2d(scenario, engine);
    }

    Ok(())
}
