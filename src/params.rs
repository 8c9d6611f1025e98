use std::path::PathBuf;

use clap::Parser;

/// Default number of randomized trials. The search permutes the motif list
/// this many times to escape dependency on the input order.
pub const DEFAULT_TRIALS: usize = 1000;

// ---------------------------------------------------------------------------
// Verbosity enum
// ---------------------------------------------------------------------------

/// merge-motifs' `--verbosity` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verbosity {
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl std::str::FromStr for Verbosity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(format!(
                "unknown verbosity '{s}'; expected DEBUG, INFO, WARN, ERROR or CRITICAL"
            )),
        }
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Verbosity {
    /// Map onto the `log` crate's level filters. `log` has no CRITICAL
    /// level, so CRITICAL filters like ERROR.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Debug => log::LevelFilter::Debug,
            Self::Info => log::LevelFilter::Info,
            Self::Warn => log::LevelFilter::Warn,
            Self::Error | Self::Critical => log::LevelFilter::Error,
        }
    }
}

// ---------------------------------------------------------------------------
// Parameters struct
// ---------------------------------------------------------------------------

/// ruMOTIF command-line parameters, matching merge-motifs' argument names.
///
/// `--trials`, `--threads` and `--seed` are new in this implementation: the
/// repeat count was hard-coded in the original, and the randomized trials
/// are independent enough to run on a worker pool with a reproducible
/// per-trial seed.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ruMOTIF",
    about = "Merge short sequence motifs into bigger consensus sequences \
             (Rust reimplementation of merge-motifs)",
    version
)]
pub struct Parameters {
    /// Verbosity/Log level
    #[arg(short = 'v', long = "verbosity", default_value = "ERROR")]
    pub verbosity: Verbosity,

    /// Store log to this file (in addition to stderr)
    #[arg(short = 'l', long = "logfile")]
    pub logfile: Option<PathBuf>,

    /// Path to the textfile with sequence motifs, one per line (.gz accepted)
    #[arg(long = "in")]
    pub infile: PathBuf,

    /// Minimal number of bases to overlap for the merge
    #[arg(long = "overlap", allow_hyphen_values = true)]
    pub overlap: i64,

    /// Number of random permutations of the motif list
    #[arg(long = "trials", default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Number of worker threads for the trial search
    #[arg(long = "threads", default_value_t = 1)]
    pub threads: usize,

    /// Base RNG seed; omit for a non-reproducible run
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

impl Parameters {
    /// Validate parameter combinations that clap alone cannot enforce.
    pub fn validate(&self) -> Result<(), crate::error::Error> {
        if self.overlap < 1 {
            return Err(crate::error::Error::Parameter(format!(
                "--overlap must be a positive integer, got {}",
                self.overlap
            )));
        }

        if self.trials == 0 {
            return Err(crate::error::Error::Parameter(
                "--trials must be >= 1".into(),
            ));
        }

        if self.threads == 0 {
            return Err(crate::error::Error::Parameter(
                "--threads must be >= 1".into(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
