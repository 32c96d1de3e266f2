//! Tiny demonstration of the `stemmer_core` facade. Not a product CLI —
//! the crate itself has no I/O or CLI surface; this just shows how an
//! embedder would call `stem`.
//!
//! Run: cargo run --example stem_cli -- english consignment

use std::env;
use std::process::ExitCode;

use stemmer_core::{stem, Language};

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let (Some(lang_name), Some(word)) = (args.next(), args.next()) else {
        eprintln!("usage: stem_cli <language> <word>");
        eprintln!("languages: {}", Language::ALL.iter().map(Language::to_string).collect::<Vec<_>>().join(", "));
        return ExitCode::FAILURE;
    };

    match Language::parse(&lang_name) {
        Ok(language) => {
            println!("{}", stem(&word, language));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
