//! charfreq - Character and pattern frequency tables for text files
//!
//! charfreq provides:
//! - Counting of single characters, named character classes or regex matches
//! - File discovery with extension filters and optional recursion
//! - Ranked reports with tie-aware ranks and optional percentages
//! - A run-wide timeout

use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

use crate::core::model::CharfreqError;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = cli::run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<CharfreqError>()
            .map(CharfreqError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
