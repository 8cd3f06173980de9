//! Runs the traversal benchmark and prints the report.
#![forbid(unsafe_code)]

use clap::Parser;
use loopbench::{logging, Args, BenchConfig, Harness, OutputFormat, Report};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("loopbench failed: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> loopbench::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.log_level.as_deref())?;
    let config = BenchConfig::from_args(&args);

    // JSON output must stay parseable, so progress is only printed for the
    // human-readable formats.
    let chatty = args.format != OutputFormat::Json;
    if chatty {
        println!(
            "loopbench starting (runs={}, arr_length={}, generation={:?})",
            config.runs, config.arr_length, config.generation
        );
    }
    let timings = Harness::new(config).run_with_progress(|idiom| {
        if chatty {
            println!("{}", idiom.label());
        }
    })?;

    let report = Report::from_timings(&timings)?;
    if chatty {
        println!("---");
    }
    print!("{}", report.render(args.format)?);
    Ok(())
}
