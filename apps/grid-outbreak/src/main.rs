//! grid-outbreak: run the grid SEIR model from the command line.
//!
//! Every parameter starts from `ModelConfig::default()` (or a JSON file given
//! with `--config`); flags override individual fields.  Per-tick counts and
//! periodic agent snapshots are written as CSV into `--output-dir`.

mod logging;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use seir_core::{DiseaseState, ModelConfig};
use seir_output::{CsvWriter, SimOutputObserver};
use seir_sim::EpidemicModel;

// ── Command line ──────────────────────────────────────────────────────────────

/// Agent-based SEIR epidemic on a 2-D grid.
#[derive(Parser, Debug)]
#[command(name = "grid-outbreak", version)]
struct Args {
    /// Number of agents
    #[arg(long = "n")]
    population: Option<usize>,

    /// Grid width
    #[arg(long)]
    width: Option<u32>,

    /// Grid height
    #[arg(long)]
    height: Option<u32>,

    /// Track the Exposed compartment
    #[arg(long)]
    exposed: bool,

    /// Track deaths (otherwise deaths count as recoveries)
    #[arg(long)]
    dead: bool,

    /// Per-contact transmission probability
    #[arg(long)]
    trans_p: Option<f64>,

    /// Base death rate
    #[arg(long)]
    death_rate: Option<f64>,

    /// Mean recovery time in ticks
    #[arg(long)]
    recover_days: Option<f64>,

    /// Recovery time standard deviation
    #[arg(long)]
    recover_std: Option<f64>,

    /// Mean incubation period in ticks
    #[arg(long)]
    incubation_days: Option<f64>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 100)]
    steps: u64,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Wrap the grid edges
    #[arg(long)]
    torus: bool,

    /// Write agent snapshots every N ticks (0 disables them)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Directory for the CSV output
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// JSON file with a full or partial `ModelConfig`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    /// Base configuration with every flag that was given applied on top.
    fn model_config(&self) -> Result<ModelConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening config {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => ModelConfig::default(),
        };

        if let Some(n) = self.population        { config.population = n; }
        if let Some(w) = self.width             { config.width = w; }
        if let Some(h) = self.height            { config.height = h; }
        if let Some(p) = self.trans_p           { config.transmission_p = p; }
        if let Some(r) = self.death_rate        { config.death_rate = r; }
        if let Some(d) = self.recover_days      { config.recover_days_mean = d; }
        if let Some(s) = self.recover_std       { config.recover_std = s; }
        if let Some(d) = self.incubation_days   { config.incubation_days_mean = d; }
        if let Some(s) = self.seed              { config.seed = s; }
        if let Some(i) = self.snapshot_interval { config.snapshot_interval_ticks = i; }
        config.track_exposed |= self.exposed;
        config.track_deaths  |= self.dead;
        config.torus         |= self.torus;

        Ok(config)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)?;

    let config = args.model_config()?;
    let mut model = EpidemicModel::new(config)?;

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;
    let writer = CsvWriter::new(&args.output_dir)?;
    let mut obs = SimOutputObserver::new(writer);

    info!("running {} ticks, output to {}", args.steps, args.output_dir.display());
    let t0 = Instant::now();
    model.run(args.steps, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), model.tick().0);
    println!("Seeded infections: {}/{}", model.seeded(), model.seed_total());
    println!();

    let counts = model.counts();
    println!("{:<12} {:>8}", "State", "Agents");
    println!("{}", "-".repeat(21));
    for state in DiseaseState::ALL {
        println!("{:<12} {:>8}", state.as_str(), counts.get(state));
    }
    println!("{}", "-".repeat(21));
    println!("{:<12} {:>8}", "total", counts.total());

    if let Some(peak) = model.metrics().iter().max_by_key(|c| c.infected) {
        println!();
        println!("Peak infected: {} at {}", peak.infected, peak.tick);
    }

    Ok(())
}
