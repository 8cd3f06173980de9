//! Command-line arguments and the resolved benchmark configuration.

use std::mem::size_of;

use clap::{Parser, ValueEnum};

use crate::data::{Record, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};

/// Repetitions per idiom when none (or garbage) is supplied.
pub const DEFAULT_RUNS: usize = 100;
/// Sequence length when none (or garbage) is supplied.
pub const DEFAULT_ARR_LENGTH: usize = 100_000;
/// Pregenerated inputs above this estimate are logged as a warning.
pub const PREGENERATE_WARN_BYTES: u64 = 1 << 30;

// Heap block behind a `name-<n>` string after allocator rounding.
const NAME_HEAP_BYTES: usize = 16;

/// Command-line arguments of the `loopbench` binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "loopbench",
    version,
    about = "Compares the wall-clock cost of array traversal idioms"
)]
pub struct Args {
    /// Repetitions per idiom; non-numeric or non-positive values fall back to 100.
    #[arg(value_name = "RUNS", allow_negative_numbers = true)]
    pub runs_arg: Option<String>,

    /// Elements per generated sequence; falls back to 100000.
    #[arg(value_name = "ARR_LENGTH", allow_negative_numbers = true)]
    pub arr_length_arg: Option<String>,

    /// Named form of RUNS; wins over the positional value.
    #[arg(long, env = "LOOPBENCH_RUNS", allow_negative_numbers = true)]
    pub runs: Option<String>,

    /// Named form of ARR_LENGTH; wins over the positional value.
    #[arg(long, env = "LOOPBENCH_ARR_LENGTH", allow_negative_numbers = true)]
    pub arr_length: Option<String>,

    /// Report layout written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Seed for reproducible input data.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generate every fresh input of a category before timing it.
    #[arg(long)]
    pub pregenerate: bool,

    /// Tracing filter (e.g. `debug`, `loopbench=trace`); defaults to RUST_LOG or `warn`.
    #[arg(long)]
    pub log_level: Option<String>,
}

/// How the report is rendered.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab_case")]
pub enum OutputFormat {
    /// `Average <label> <avg> Max <max> Min <min>` lines.
    Text,
    /// One markdown table per dataset.
    Markdown,
    /// The report as pretty-printed JSON.
    Json,
}

/// When fresh datasets are generated relative to the timed section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationPolicy {
    /// A new input is generated right before each run.
    PerRun,
    /// All `runs` inputs of a category are generated before its first run.
    Upfront,
}

/// Resolved benchmark parameters.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Timed executions per idiom and dataset.
    pub runs: usize,
    /// Length of every generated sequence.
    pub arr_length: usize,
    /// Inclusive lower bound of generated values.
    pub min_value: u32,
    /// Inclusive upper bound of generated values.
    pub max_value: u32,
    /// Seed for the data generator; `None` keys it from the thread RNG.
    pub seed: Option<u64>,
    /// Generation policy for fresh datasets.
    pub generation: GenerationPolicy,
}

impl BenchConfig {
    /// Configuration with the default value range and per-run generation.
    pub fn new(runs: usize, arr_length: usize) -> Self {
        Self {
            runs,
            arr_length,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
            generation: GenerationPolicy::PerRun,
        }
    }

    /// Resolves parsed arguments, applying the lenient fallbacks.
    pub fn from_args(args: &Args) -> Self {
        let runs = parse_count(
            args.runs.as_deref().or(args.runs_arg.as_deref()),
            DEFAULT_RUNS,
        );
        let arr_length = parse_count(
            args.arr_length.as_deref().or(args.arr_length_arg.as_deref()),
            DEFAULT_ARR_LENGTH,
        );
        let mut config = Self::new(runs, arr_length);
        config.seed = args.seed;
        if args.pregenerate {
            config.generation = GenerationPolicy::Upfront;
        }
        config
    }

    /// Builder-style seed override.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder-style generation policy override.
    pub fn with_generation(mut self, generation: GenerationPolicy) -> Self {
        self.generation = generation;
        self
    }

    /// True when pregenerating this configuration's inputs is expected to
    /// exceed [`PREGENERATE_WARN_BYTES`].
    pub fn exceeds_pregenerate_budget(&self) -> bool {
        self.estimated_pregenerated_bytes() > PREGENERATE_WARN_BYTES
    }

    /// Rough peak footprint of one category's pregenerated fresh inputs:
    /// `runs` integer sequences plus `runs` record sequences.
    pub fn estimated_pregenerated_bytes(&self) -> u64 {
        let per_element = size_of::<u32>() + size_of::<Record>() + NAME_HEAP_BYTES;
        (self.runs as u64)
            .saturating_mul(self.arr_length as u64)
            .saturating_mul(per_element as u64)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RUNS, DEFAULT_ARR_LENGTH)
    }
}

/// Parses a positive count, returning `default` for missing, unparsable,
/// zero or negative input.
pub fn parse_count(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(default)
}
