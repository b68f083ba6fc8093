//! Performance benchmark comparing generation strategies

use knotweave::domain::seed;
use knotweave::{BoundaryPolicy, RunConfig};
use std::time::Instant;

fn config(rows: usize, cols: usize) -> RunConfig {
    RunConfig {
        rule_num: 122,
        rows,
        cols,
        starting_state: seed::random_state(cols, 0.5),
        prior_state: None,
        boundary: BoundaryPolicy::Wrap,
    }
}

fn benchmark_serial(config: &RunConfig) -> f64 {
    let start = Instant::now();
    let grid = config.run().unwrap();
    assert_eq!(grid.rows(), config.rows);
    start.elapsed().as_secs_f64() * 1000.0
}

fn benchmark_parallel(config: &RunConfig) -> f64 {
    let start = Instant::now();
    let grid = config.run_parallel().unwrap();
    assert_eq!(grid.rows(), config.rows);
    start.elapsed().as_secs_f64() * 1000.0
}

fn benchmark_streaming(config: &RunConfig) -> f64 {
    let start = Instant::now();
    let alive: usize = config
        .stream()
        .unwrap()
        .map(|row| row.iter().filter(|&&b| b).count())
        .sum();
    // Keep the consumer from being optimized away
    assert!(alive <= config.rows * config.cols);
    start.elapsed().as_secs_f64() * 1000.0
}

fn main() {
    println!("=== Reversible CA Generation Benchmark ===\n");

    let shapes = [(1000, 100), (1000, 1000), (2000, 2400), (10000, 2400)];

    println!(
        "{:>12} {:>12} {:>12} {:>12} {:>10}",
        "Shape", "Serial", "Parallel", "Streaming", "Speedup"
    );
    println!("{:-<62}", "");

    for (rows, cols) in shapes {
        let config = config(rows, cols);
        let serial_ms = benchmark_serial(&config);
        let parallel_ms = benchmark_parallel(&config);
        let streaming_ms = benchmark_streaming(&config);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", rows, cols),
            serial_ms,
            parallel_ms,
            streaming_ms,
            serial_ms / parallel_ms.min(streaming_ms)
        );
    }

    println!("\n=== Memory (10000x2400) ===\n");

    let (rows, cols) = (10000usize, 2400usize);
    let full = rows * cols; // 1 byte per bool
    let rolling = 2 * cols;
    println!(
        "Full matrix:   {:>10} bytes ({:.1} MB)",
        full,
        full as f64 / 1_000_000.0
    );
    println!("Rolling window:{:>10} bytes", rolling);
    println!("Reduction:     {:>10.0}x", full as f64 / rolling as f64);
}
