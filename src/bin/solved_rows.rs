use colored::Colorize;
use log::info;

use rowmask::decode::slots;
use rowmask::encode::{encode, ROW_TYPE};
use rowmask::presets::solved_sequences;

fn main() {
    env_logger::init();
    for (name, seq) in ["SOLVED_TOP", "SOLVED_BOTTOM"].iter().zip(solved_sequences()) {
        let row = match encode(seq) {
            Ok(row) => row,
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                std::process::exit(1);
            }
        };
        info!("{} covers {} bits.", name, row.n_bits);
        println!("// {}", seq);
        println!("static constexpr Row {} = {};", name, row.to_literals(ROW_TYPE).pattern.trim_end_matches(','));
        let layout: Vec<String> = slots(row.pattern, row.n_bits)
            .iter()
            .map(|s| format!("{:06b}", s))
            .collect();
        println!("// {}", layout.join(" "));
    }
}
