use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

use lpsolver::algorithm::SearchStrategy;
use lpsolver::io::import;

/// A linear and integer program solver written in rust.
#[derive(Parser)]
#[command(version, author, about)]
struct Opts {
    /// File containing the problem description, in JSON
    problem_file: PathBuf,
    /// How to search for integer solutions, overrides the problem file
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,
    /// Print more information, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Greedy,
    DepthFirst,
}

impl From<Strategy> for SearchStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Greedy => SearchStrategy::Greedy,
            Strategy::DepthFirst => SearchStrategy::DepthFirst,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 | 1 => "warn",
        2 => "lpsolver=debug",
        _ => "lpsolver=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    debug!(path = ?opts.problem_file, "reading problem file");
    let (problem, mut config) = match import(&opts.problem_file).and_then(|file| file.into_problem()) {
        Ok(read) => read,
        Err(error) => {
            error!(%error, "couldn't read the problem");
            eprintln!("Couldn't read {}: {}", opts.problem_file.display(), error);
            return ExitCode::FAILURE;
        },
    };
    if let Some(strategy) = opts.strategy {
        config.strategy = strategy.into();
    }

    if opts.verbose > 0 {
        println!("{}", problem);
    }

    let start = Instant::now();
    match problem.solve(&config) {
        Ok(solution) => {
            if opts.verbose > 1 {
                println!("Execution time {:.5}s", start.elapsed().as_secs_f64());
                println!("{}", solution);
            } else {
                println!("objective value: {}", solution.objective);
                println!("x: {:?}", solution.x);
            }

            ExitCode::SUCCESS
        },
        Err(error) => {
            println!("{}", error);
            ExitCode::FAILURE
        },
    }
}
