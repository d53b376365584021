use colored::Colorize;
use log::info;

use rowmask::encode::{emit_literals, ROW_TYPE};
use rowmask::presets::reference_sequences;

fn main() {
    // Initialize logger
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let sequences: Vec<&str> = if args.is_empty() {
        reference_sequences().to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };
    info!("Emitting literals for {} sequences.", sequences.len());

    let stdout = std::io::stdout();
    if let Err(e) = emit_literals(&mut stdout.lock(), &sequences, ROW_TYPE) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
