//! Monty Hall Binary
//!
//! Plays the three-door puzzle once or in bulk and tabulates win rates by
//! strategy. Type "Q" + Enter during a long run to stop after the current
//! round and summarize what finished.

use clap::Parser;
use montyhall::game::round::Round;
use montyhall::simulation::batch::Batch;
use montyhall::simulation::summary::Summary;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about = "Monte Carlo simulation of the Monty Hall problem", long_about = None)]
struct Args {
    /// number of rounds to simulate
    #[arg(short = 'n', long, default_value_t = 100)]
    rounds: usize,
    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// run rounds across rayon worker threads
    #[arg(long)]
    parallel: bool,
    /// narrate a single round instead of running a batch
    #[arg(long)]
    single: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    montyhall::log();
    montyhall::brb();
    if args.single {
        let ref mut rng = stream(args.seed);
        let round = Round::new(rng)?;
        println!("{}", round);
        for trial in round.play()? {
            println!("{}", trial);
        }
    } else {
        let batch = match args.parallel {
            true => Batch::run_par(args.rounds, args.seed.unwrap_or_else(rand::random)),
            false => Batch::run(args.rounds, &mut stream(args.seed)),
        }?;
        log::info!("simulated {} rounds", batch.rounds());
        println!("{}", Summary::from(&batch));
    }
    Ok(())
}

fn stream(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
