//! Timing harness.
//!
//! The harness walks the idiom catalog one category at a time. Each run of
//! a category times the idiom against four datasets: a fresh integer
//! sequence, a fresh record sequence, and the two sequences generated once
//! up front and reused by every run.

use std::collections::BTreeMap;
use std::hint::black_box;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::{BenchConfig, GenerationPolicy};
use crate::data::{DataGenerator, Record};
use crate::error::Result;
use crate::idioms::{age_is_even, is_even, Idiom};

/// Element type of a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    /// Plain `u32` values.
    Integers,
    /// [`Record`] values filtered on `age`.
    Records,
}

/// Whether a dataset is regenerated per run or shared across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    /// Generated for each run (or each run slot when pregenerating).
    Fresh,
    /// Generated once and reused by every run.
    Reused,
}

/// One of the four input combinations every idiom is timed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dataset {
    /// Element type.
    pub shape: Shape,
    /// Generation policy.
    pub source: Source,
}

impl Dataset {
    /// Report order.
    pub const ALL: [Dataset; 4] = [
        Dataset::new(Shape::Integers, Source::Fresh),
        Dataset::new(Shape::Records, Source::Fresh),
        Dataset::new(Shape::Integers, Source::Reused),
        Dataset::new(Shape::Records, Source::Reused),
    ];

    /// Builds a dataset descriptor.
    pub const fn new(shape: Shape, source: Source) -> Self {
        Self { shape, source }
    }

    /// Section title used by the report.
    pub fn label(self) -> &'static str {
        match (self.shape, self.source) {
            (Shape::Integers, Source::Fresh) => "Integers",
            (Shape::Records, Source::Fresh) => "Records",
            (Shape::Integers, Source::Reused) => "Reused Integers",
            (Shape::Records, Source::Reused) => "Reused Records",
        }
    }

    /// Stable machine-readable key.
    pub fn key(self) -> &'static str {
        match (self.shape, self.source) {
            (Shape::Integers, Source::Fresh) => "integers",
            (Shape::Records, Source::Fresh) => "records",
            (Shape::Integers, Source::Reused) => "reused_integers",
            (Shape::Records, Source::Reused) => "reused_records",
        }
    }
}

/// Millisecond samples keyed by idiom and dataset.
#[derive(Debug, Default, Clone)]
pub struct Timings {
    samples: BTreeMap<(Idiom, Dataset), Vec<f64>>,
}

impl Timings {
    /// Empty sample map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one sample.
    pub fn record(&mut self, idiom: Idiom, dataset: Dataset, millis: f64) {
        self.samples.entry((idiom, dataset)).or_default().push(millis);
    }

    /// Samples recorded for a combination, empty if none were.
    pub fn samples(&self, idiom: Idiom, dataset: Dataset) -> &[f64] {
        self.samples
            .get(&(idiom, dataset))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every recorded combination with its samples.
    pub fn iter(&self) -> impl Iterator<Item = (Idiom, Dataset, &[f64])> + '_ {
        self.samples
            .iter()
            .map(|((idiom, dataset), samples)| (*idiom, *dataset, samples.as_slice()))
    }

    /// Number of combinations with at least one sample.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Times `idiom` over `items` and returns the elapsed milliseconds.
///
/// Only the idiom call sits between the two clock reads; releasing its
/// output happens after the measurement.
pub fn time_idiom<T, P>(idiom: Idiom, items: &[T], pred: P) -> f64
where
    P: Fn(&T) -> bool,
{
    let start = Instant::now();
    let selection = black_box(idiom.apply(black_box(items), pred));
    let elapsed = start.elapsed();
    drop(selection);
    elapsed.as_secs_f64() * 1_000.0
}

fn measure<T, P>(timings: &mut Timings, idiom: Idiom, dataset: Dataset, items: &[T], pred: P)
where
    P: Fn(&T) -> bool,
{
    let millis = time_idiom(idiom, items, pred);
    timings.record(idiom, dataset, millis);
}

const FRESH_INTEGERS: Dataset = Dataset::new(Shape::Integers, Source::Fresh);
const FRESH_RECORDS: Dataset = Dataset::new(Shape::Records, Source::Fresh);
const REUSED_INTEGERS: Dataset = Dataset::new(Shape::Integers, Source::Reused);
const REUSED_RECORDS: Dataset = Dataset::new(Shape::Records, Source::Reused);

/// Drives the idiom catalog over generated data.
pub struct Harness {
    config: BenchConfig,
    generator: DataGenerator,
}

impl Harness {
    /// Harness whose generator honors `config.seed`.
    pub fn new(config: BenchConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => DataGenerator::seeded(seed),
            None => DataGenerator::new(),
        };
        Self { config, generator }
    }

    /// Runs every idiom without progress reporting.
    pub fn run(&mut self) -> Result<Timings> {
        self.run_with_progress(|_| {})
    }

    /// Runs every idiom, calling `progress` as each category starts.
    pub fn run_with_progress<F>(&mut self, mut progress: F) -> Result<Timings>
    where
        F: FnMut(Idiom),
    {
        info!(
            runs = self.config.runs,
            arr_length = self.config.arr_length,
            generation = ?self.config.generation,
            "starting traversal benchmark"
        );
        if self.config.generation == GenerationPolicy::Upfront
            && self.config.exceeds_pregenerate_budget()
        {
            warn!(
                estimate_bytes = self.config.estimated_pregenerated_bytes(),
                "pregenerated inputs may exhaust available memory"
            );
        }

        let reused_integers = self.integers()?;
        let reused_records = self.records()?;
        let mut timings = Timings::new();

        for idiom in Idiom::ALL {
            progress(idiom);
            debug!(idiom = idiom.key(), "timing category");
            match self.config.generation {
                GenerationPolicy::PerRun => {
                    for _ in 0..self.config.runs {
                        let integers = self.integers()?;
                        measure(&mut timings, idiom, FRESH_INTEGERS, &integers, is_even);
                        let records = self.records()?;
                        measure(&mut timings, idiom, FRESH_RECORDS, &records, age_is_even);
                        measure(&mut timings, idiom, REUSED_INTEGERS, &reused_integers, is_even);
                        measure(&mut timings, idiom, REUSED_RECORDS, &reused_records, age_is_even);
                    }
                }
                GenerationPolicy::Upfront => {
                    let integers = (0..self.config.runs)
                        .map(|_| self.integers())
                        .collect::<Result<Vec<_>>>()?;
                    let records = (0..self.config.runs)
                        .map(|_| self.records())
                        .collect::<Result<Vec<_>>>()?;
                    for (ints, recs) in integers.iter().zip(&records) {
                        measure(&mut timings, idiom, FRESH_INTEGERS, ints, is_even);
                        measure(&mut timings, idiom, FRESH_RECORDS, recs, age_is_even);
                        measure(&mut timings, idiom, REUSED_INTEGERS, &reused_integers, is_even);
                        measure(&mut timings, idiom, REUSED_RECORDS, &reused_records, age_is_even);
                    }
                }
            }
        }

        info!(combinations = timings.len(), "benchmark complete");
        Ok(timings)
    }

    fn integers(&mut self) -> Result<Vec<u32>> {
        self.generator.generate_integers(
            self.config.arr_length,
            self.config.min_value,
            self.config.max_value,
        )
    }

    fn records(&mut self) -> Result<Vec<Record>> {
        self.generator.generate_records(
            self.config.arr_length,
            self.config.min_value,
            self.config.max_value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timings_append_in_order() {
        let mut timings = Timings::new();
        let dataset = Dataset::ALL[0];
        timings.record(Idiom::Filter, dataset, 1.5);
        timings.record(Idiom::Filter, dataset, 0.5);
        assert_eq!(timings.samples(Idiom::Filter, dataset), &[1.5, 0.5]);
        assert!(timings.samples(Idiom::ForEach, dataset).is_empty());
        assert_eq!(timings.len(), 1);
    }

    #[test]
    fn time_idiom_is_non_negative() {
        let items: Vec<u32> = (0..1_000).collect();
        for idiom in Idiom::ALL {
            assert!(time_idiom(idiom, &items, is_even) >= 0.0);
        }
    }

    #[test]
    fn every_combination_gets_runs_samples() {
        let mut harness = Harness::new(BenchConfig::new(4, 16).with_seed(11));
        let timings = harness.run().unwrap();
        assert_eq!(timings.len(), Idiom::ALL.len() * Dataset::ALL.len());
        for (_, _, samples) in timings.iter() {
            assert_eq!(samples.len(), 4);
        }
    }

    #[test]
    fn upfront_generation_records_the_same_shape() {
        let config = BenchConfig::new(2, 8)
            .with_seed(5)
            .with_generation(GenerationPolicy::Upfront);
        let timings = Harness::new(config).run().unwrap();
        for idiom in Idiom::ALL {
            for dataset in Dataset::ALL {
                assert_eq!(timings.samples(idiom, dataset).len(), 2);
            }
        }
    }

    #[test]
    fn progress_reports_each_category_once() {
        let mut seen = Vec::new();
        Harness::new(BenchConfig::new(1, 4).with_seed(1))
            .run_with_progress(|idiom| seen.push(idiom))
            .unwrap();
        assert_eq!(seen, Idiom::ALL.to_vec());
    }

    #[test]
    fn dataset_keys_are_distinct() {
        let mut keys: Vec<&str> = Dataset::ALL.iter().map(|d| d.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }
}
