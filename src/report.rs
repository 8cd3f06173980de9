//! Reduces recorded samples to summary statistics and renders them.

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{BenchError, Result};
use crate::harness::{Dataset, Timings};
use crate::idioms::Idiom;

/// Arithmetic mean, `None` for an empty slice.
pub fn average(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(sum(samples) / samples.len() as f64)
}

/// Largest sample.
pub fn max(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::max)
}

/// Smallest sample.
pub fn min(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::min)
}

/// Total of all samples; zero for an empty slice.
pub fn sum(samples: &[f64]) -> f64 {
    samples.iter().sum()
}

/// Statistics for one sample list, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Arithmetic mean.
    pub average: f64,
    /// Slowest run.
    pub max: f64,
    /// Fastest run.
    pub min: f64,
    /// Sum over all runs.
    pub total: f64,
    /// Number of runs the statistics cover.
    pub samples: usize,
}

impl Summary {
    /// Summarizes `samples`; `what` names the list in the error when it is empty.
    pub fn from_samples(what: &str, samples: &[f64]) -> Result<Self> {
        let empty = || BenchError::EmptySamples(what.to_string());
        Ok(Self {
            average: average(samples).ok_or_else(empty)?,
            max: max(samples).ok_or_else(empty)?,
            min: min(samples).ok_or_else(empty)?,
            total: sum(samples),
            samples: samples.len(),
        })
    }
}

/// One idiom's statistics within a section.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    /// Machine-readable idiom key.
    pub idiom: &'static str,
    /// Display name.
    pub label: &'static str,
    /// Statistics over the idiom's samples.
    #[serde(flatten)]
    pub summary: Summary,
}

/// All idioms timed against one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Machine-readable dataset key.
    pub dataset: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One row per idiom, catalog order.
    pub rows: Vec<Row>,
}

/// Complete benchmark report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// One section per dataset.
    pub sections: Vec<Section>,
}

impl Report {
    /// Builds the report; every idiom must have samples for every dataset.
    pub fn from_timings(timings: &Timings) -> Result<Self> {
        let mut sections = Vec::with_capacity(Dataset::ALL.len());
        for dataset in Dataset::ALL {
            let mut rows = Vec::with_capacity(Idiom::ALL.len());
            for idiom in Idiom::ALL {
                let what = format!("{} / {}", idiom.label(), dataset.label());
                let summary = Summary::from_samples(&what, timings.samples(idiom, dataset))?;
                rows.push(Row {
                    idiom: idiom.key(),
                    label: idiom.label(),
                    summary,
                });
            }
            sections.push(Section {
                dataset: dataset.key(),
                title: dataset.label(),
                rows,
            });
        }
        Ok(Self { sections })
    }

    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Markdown => Ok(self.render_markdown()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// `Average <label> <avg> Max <max> Min <min>` lines under a title per section.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let _ = writeln!(out, "---");
            let _ = writeln!(out, "{}", section.title);
            for row in &section.rows {
                let _ = writeln!(
                    out,
                    "Average {} {} Max {} Min {}",
                    row.label, row.summary.average, row.summary.max, row.summary.min
                );
            }
        }
        out
    }

    /// One markdown table per section, four decimal places.
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "### {}\n", section.title);
            let _ = writeln!(out, "| Type | Average | Max | Min | Total |");
            let _ = writeln!(out, "| --- | --- | --- | --- | --- |");
            for row in &section.rows {
                let s = &row.summary;
                let _ = writeln!(
                    out,
                    "| {} | {:.4} | {:.4} | {:.4} | {:.4} |",
                    row.label, s.average, s.max, s.min, s.total
                );
            }
        }
        out
    }
}
