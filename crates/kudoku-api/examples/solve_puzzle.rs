//! Example running the solve operation from the command line.
//!
//! Prints the response body as JSON, exactly as a transport layer would
//! send it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//! ```
//!
//! Omitting the puzzle argument exercises the missing-field response:
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```

use clap::Parser;
use kudoku_api::{SolveRequest, solve};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The 81-character puzzle string (digits 1-9 and '.').
    puzzle: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let response = solve(&SolveRequest {
        puzzle: args.puzzle,
    });
    println!("{}", serde_json::to_string(&response).expect("response serializes"));
}
