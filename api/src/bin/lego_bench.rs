use legosap::{run_bench, BenchParams};
use std::{path::PathBuf, process};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    about = "Time key-reused proving and verification of the commit-carrying SAP SNARK.",
    rename_all = "kebab-case"
)]
enum Actions {
    /// Runs one benchmark with the given sizes
    Run {
        /// Number of public inputs
        #[structopt(long, default_value = "10")]
        size_pub_input: usize,
        /// Number of committed inputs
        #[structopt(long, default_value = "10")]
        size_comm_input: usize,
        /// Number of R1CS constraints
        #[structopt(long, default_value = "1000")]
        num_constraints: usize,
        /// Proving repetitions
        #[structopt(long, default_value = "5")]
        prove_repetitions: usize,
        /// Verification repetitions
        #[structopt(long, default_value = "5")]
        verify_repetitions: usize,
    },

    /// Runs every benchmark listed in a JSON file (one object or an array of objects)
    Config { path: PathBuf },

    /// Prints the default parameters as JSON
    Defaults,
}

fn run_all(all: &[BenchParams]) {
    for params in all {
        if let Err(e) = run_bench(params) {
            eprintln!("benchmark failed: {}", e);
            process::exit(1);
        }
    }
}

// cargo run --release --features="cli parallel" --bin lego-bench run --num-constraints 10000
fn main() {
    use Actions::*;
    let action = Actions::from_args();
    match action {
        Run {
            size_pub_input,
            size_comm_input,
            num_constraints,
            prove_repetitions,
            verify_repetitions,
        } => {
            let params = BenchParams {
                size_pub_input,
                size_comm_input,
                num_constraints,
                prove_repetitions,
                verify_repetitions,
                ..BenchParams::default()
            };
            run_all(&[params]);
        }

        Config { path } => {
            let json = match std::fs::read_to_string(&path) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("cannot read {}: {}", path.display(), e);
                    process::exit(1);
                }
            };
            let all = match serde_json::from_str::<Vec<BenchParams>>(&json) {
                Ok(all) => all,
                Err(_) => match BenchParams::from_json(&json) {
                    Ok(params) => vec![params],
                    Err(e) => {
                        eprintln!("{}", e);
                        process::exit(1);
                    }
                },
            };
            run_all(&all);
        }

        Defaults => match BenchParams::default().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{}", e),
        },
    }
}
