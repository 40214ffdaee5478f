//! Command-line options of the `kth-bench` binary
//!
//! `-n/--num-elements`, `-k/--k`, `-t/--trials`, `-s/--seed`,
//! `--strategy <name>` (repeatable) and `-q/--quiet`.

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};

use crate::harness::{BenchConfig, DEFAULT_K, DEFAULT_NUM_ELEMENTS, DEFAULT_SEED, DEFAULT_TRIALS};
use crate::select::Strategy;

/// Parsed command line of `kth-bench`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Stream length, rank, trial count and seed
    pub config: BenchConfig,
    /// Strategies to run, in order
    pub strategies: Vec<Strategy>,
    /// Suppress the per-trial lines
    pub quiet: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            config: BenchConfig::default(),
            strategies: Strategy::ALL.to_vec(),
            quiet: false,
        }
    }
}

fn make_options_parser() -> Command {
    Command::new("kth-bench")
        .about("Benchmarks bounded K-smallest selection strategies on shuffled permutations")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("num_elements")
                .short('n')
                .long("num-elements")
                .help("Length of each shuffled stream [default: 131072]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("k")
                .short('k')
                .long("k")
                .help("Rank of the value to select, 1-based [default: 256]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("trials")
                .short('t')
                .long("trials")
                .help("Trials per strategy [default: 100]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed of the permutation generator")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .value_name("NAME")
                .help("Strategy to run; repeat to run several (default: all)")
                .action(ArgAction::Append)
                .value_parser(PossibleValuesParser::new(Strategy::ALL.map(Strategy::name))),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print the per-strategy summary")
                .action(ArgAction::SetTrue),
        )
}

impl Options {
    /// Parses `args`, where the first item is the binary name
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;

        let get_usize =
            |id: &str, default: usize| matches.get_one::<usize>(id).copied().unwrap_or(default);
        let config = BenchConfig {
            num_elements: get_usize("num_elements", DEFAULT_NUM_ELEMENTS),
            k: get_usize("k", DEFAULT_K),
            trials: get_usize("trials", DEFAULT_TRIALS),
            seed: matches.get_one::<u64>("seed").copied().unwrap_or(DEFAULT_SEED),
        };

        let mut strategies = Vec::new();
        if let Some(names) = matches.get_many::<String>("strategy") {
            for name in names {
                let strategy = name
                    .parse::<Strategy>()
                    .map_err(|e| clap::Error::raw(clap::error::ErrorKind::InvalidValue, e))?;
                if !strategies.contains(&strategy) {
                    strategies.push(strategy);
                }
            }
        }
        if strategies.is_empty() {
            strategies = Strategy::ALL.to_vec();
        }

        Ok(Options {
            config,
            strategies,
            quiet: matches.get_flag("quiet"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::parse_from_args(["kth-bench"]).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_overrides() {
        let options = Options::parse_from_args([
            "kth-bench",
            "-n",
            "1000",
            "-k",
            "10",
            "--trials",
            "5",
            "--seed",
            "3",
            "--strategy",
            "fused-heap",
            "--strategy",
            "sorted-buffer",
            "-q",
        ])
        .unwrap();
        assert_eq!(
            options.config,
            BenchConfig {
                num_elements: 1000,
                k: 10,
                trials: 5,
                seed: 3
            }
        );
        assert_eq!(
            options.strategies,
            vec![Strategy::FusedHeap, Strategy::SortedBuffer]
        );
        assert!(options.quiet);
    }

    #[test]
    fn test_parse_err() {
        assert!(Options::parse_from_args(["kth-bench", "--strategy", "quickselect"]).is_err());
        assert!(Options::parse_from_args(["kth-bench", "-k", "minus-one"]).is_err());
    }
}
