use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::{info, warn};

use crate::config::load_or_default;
use crate::conformance::{SweepConfig, mismatches, run, write_cases};
use crate::simd::{self, Native};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Longest random buffer, in elements
    #[arg(long)]
    pub(crate) max_len: Option<usize>,

    /// Random buffers per width
    #[arg(long)]
    pub(crate) rounds: Option<usize>,

    /// Seed for buffer contents
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Optional TOML config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every case as TSV
    #[arg(long)]
    out: Option<PathBuf>,
}

pub fn handle(args: CheckArgs) -> anyhow::Result<()> {
    let config = load_or_default(args.config.as_deref())?;
    let mut sweep = SweepConfig::from(config.check);
    if let Some(max_len) = args.max_len {
        sweep.max_len = max_len;
    }
    if let Some(rounds) = args.rounds {
        sweep.rounds = rounds;
    }
    if let Some(seed) = args.seed {
        sweep.seed = seed;
    }

    let start = Instant::now();
    info!(
        stage = "check",
        backend = simd::backend_name(),
        max_len = sweep.max_len,
        rounds = sweep.rounds,
        seed = sweep.seed,
        "starting stage"
    );
    let cases = run::<Native>(&sweep);
    let failed = mismatches(&cases);
    info!(
        stage = "check",
        cases = cases.len(),
        failed,
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    if let Some(out) = &args.out {
        write_cases(out, &cases)?;
    }

    for case in cases.iter().filter(|c| !c.agrees()) {
        warn!(
            kind = ?case.kind,
            width = case.width,
            len = case.len,
            lead_in = case.lead_in,
            scalar = case.scalar,
            vector = case.vector,
            "reducers disagree"
        );
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} cases disagree", cases.len());
    }
    println!("{} cases agree", cases.len());
    Ok(())
}
