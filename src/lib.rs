//! Micro-benchmark harness comparing array traversal idioms.
//!
//! Seven idioms (index loops, a preallocated buffer, a reverse loop, a plain
//! `for` over the slice, and the `filter`/`map`/`for_each` adapters) are
//! timed over integer and record sequences, both freshly generated and
//! reused across runs, and summarized as average/max/min/total.

#![warn(missing_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod harness;
pub mod idioms;
pub mod logging;
pub mod report;

pub use config::{Args, BenchConfig, GenerationPolicy, OutputFormat};
pub use data::{DataGenerator, Record};
pub use error::{BenchError, Result};
pub use harness::{Dataset, Harness, Shape, Source, Timings};
pub use idioms::{Idiom, Selection};
pub use report::{Report, Summary};
