//! Sample data command.

use clap::Args;
use studyrank_core::demo;

use super::{local_now, open_board};

#[derive(Args)]
pub struct DemoArgs {
    /// Number of activities to generate
    #[arg(long, default_value_t = demo::DEFAULT_COUNT)]
    count: usize,
    /// Seed for a reproducible schedule
    #[arg(long)]
    seed: Option<u64>,
}

pub fn run(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let now = local_now();
    let (store, mut board) = open_board(now)?;

    let generated = match args.seed {
        Some(seed) => demo::generate(now, &mut demo::seeded_rng(seed), args.count),
        None => demo::generate(now, &mut demo::entropy_rng(), args.count),
    };
    board.replace(generated, now);
    store.save_board(&board)?;

    println!("Loaded {} demo activities.", board.len());
    Ok(())
}
