#![allow(missing_docs)]

use loopbench::{BenchConfig, Dataset, GenerationPolicy, Harness, Idiom, OutputFormat, Report};

#[test]
fn three_runs_of_ten_elements() {
    let config = BenchConfig::new(3, 10).with_seed(2024);
    let mut harness = Harness::new(config);
    let timings = harness.run().expect("harness run");

    for idiom in Idiom::ALL {
        for dataset in Dataset::ALL {
            let samples = timings.samples(idiom, dataset);
            assert_eq!(samples.len(), 3, "{} / {}", idiom.label(), dataset.label());
            assert!(samples.iter().all(|ms| *ms >= 0.0));
        }
    }

    let report = Report::from_timings(&timings).expect("report");
    for section in &report.sections {
        assert_eq!(section.rows.len(), Idiom::ALL.len());
    }

    let markdown = report.render(OutputFormat::Markdown).expect("markdown");
    let data_rows: Vec<&str> = markdown
        .lines()
        .filter(|line| {
            line.starts_with("| ") && !line.starts_with("| Type") && !line.starts_with("| ---")
        })
        .collect();
    assert_eq!(data_rows.len(), Idiom::ALL.len() * Dataset::ALL.len());
    for row in data_rows {
        let numeric = row
            .split('|')
            .map(str::trim)
            .filter(|cell| cell.parse::<f64>().is_ok())
            .count();
        // average, max, min, total
        assert_eq!(numeric, 4, "row {row}");
    }
}

#[test]
fn pregenerated_inputs_yield_identical_shape() {
    let config = BenchConfig::new(3, 10)
        .with_seed(99)
        .with_generation(GenerationPolicy::Upfront);
    let timings = Harness::new(config).run().expect("harness run");
    assert_eq!(timings.len(), Idiom::ALL.len() * Dataset::ALL.len());
    for (_, _, samples) in timings.iter() {
        assert_eq!(samples.len(), 3);
    }
}

#[test]
fn empty_sequences_still_produce_samples() {
    let mut config = BenchConfig::new(2, 10).with_seed(1);
    config.arr_length = 0;
    let timings = Harness::new(config).run().expect("harness run");
    let report = Report::from_timings(&timings).expect("report");
    assert!(report
        .sections
        .iter()
        .flat_map(|s| &s.rows)
        .all(|row| row.summary.samples == 2));
}
