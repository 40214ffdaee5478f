//! Benchmark driver: times every selection strategy on shuffled permutations
//!
//! ```bash
//! cargo run --release --bin kth-bench -- -n 131072 -k 256 -t 100
//! KTH_LOG=debug cargo run --release --bin kth-bench -- --strategy fused-heap
//! ```

use anyhow::Context;
use kth_smallest::harness::{Harness, TrialOutcome};
use kth_smallest::options::Options;

fn millis(elapsed: std::time::Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

fn main() -> anyhow::Result<()> {
    if std::env::var("KTH_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("KTH_LOG")
            .write_style("KTH_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let options = Options::parse_from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    log::debug!("kth-bench options: {:?}", options);

    let harness = Harness::new(options.config).context("invalid benchmark configuration")?;

    let print_trial = |outcome: &TrialOutcome| {
        if !options.quiet {
            println!(
                "{}(): kth smallest value: {}, took {:.3}ms.",
                outcome.strategy,
                outcome.kth,
                millis(outcome.elapsed)
            );
        }
    };
    let summaries = harness
        .run_all(&options.strategies, print_trial)
        .context("selection strategy failed its correctness check")?;

    for summary in &summaries {
        println!(
            "{}(): average time was {:.3}ms (min {:.3}ms, max {:.3}ms).",
            summary.strategy,
            millis(summary.mean()),
            millis(summary.min),
            millis(summary.max)
        );
    }

    Ok(())
}
