#![allow(non_snake_case)]

pub mod error;
pub mod params;

pub mod cluster;
pub mod io;
pub mod report;
pub mod stats;

use std::time::Instant;

use log::info;

use crate::cluster::Cluster;
use crate::params::Parameters;
use crate::stats::SearchStats;

/// Top-level driver. Called from `main()` after CLI parsing.
pub fn run(params: &Parameters) -> anyhow::Result<()> {
    params.validate()?;

    info!("ruMOTIF v{}", env!("CARGO_PKG_VERSION"));
    info!("in: {}", params.infile.display());
    info!("overlap: {}", params.overlap);
    info!("trials: {}", params.trials);
    info!("threads: {}", params.threads);

    let start_time = Instant::now();

    rayon::ThreadPoolBuilder::new()
        .num_threads(params.threads)
        .build_global()
        .map_err(|e| error::Error::Parameter(format!("failed to configure thread pool: {e}")))?;

    let motifs = io::read_motif_file(&params.infile)?;
    info!("Read {} motifs", motifs.len());

    let initial = Cluster::singletons(motifs);
    let results = cluster::search(
        &initial,
        params.trials,
        params.overlap as usize,
        params.seed,
    );

    let best = cluster::select(&results)
        .ok_or_else(|| error::Error::Motif("search produced no trial results".into()))?;

    SearchStats::from_results(&results).print_summary();

    let stdout = std::io::stdout();
    report::write_clustering(&mut stdout.lock(), &best.clusters)?;

    let seconds = start_time.elapsed().as_secs();
    let (hours, rem) = (seconds / 3600, seconds % 3600);
    let (minutes, seconds) = (rem / 60, rem % 60);
    info!("Successfully finished in {hours}h:{minutes}m:{seconds}s");

    Ok(())
}
