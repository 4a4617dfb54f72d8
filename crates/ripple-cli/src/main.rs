//! `ripple` — damped wave simulation of pebbles dropped on a lake.
//!
//! ```text
//! ripple <grid_size> <pebbles> <iterations> [--workers 1|2] [--seed S] [--out-dir DIR]
//! ```
//!
//! Seeds `pebbles` random impulses into an N×N energy field, advances
//! the damped wave equation with a 13-point Laplacian stencil for
//! `iterations` steps, prints the wall-clock time of the iteration
//! loop, and writes each worker's final field as a text dump and a
//! grayscale PNG. With `--workers 2` the lake is row-partitioned
//! between two worker threads that exchange 3-row halos every
//! iteration.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ripple_core::{Partition, SimParams, WorkerRank};
use ripple_engine::Simulation;
use ripple_exchange::{ChannelExchanger, HaloExchange, NoExchange};
use ripple_field::Field;

mod render;
mod seed;

#[derive(Parser, Debug)]
#[command(name = "ripple")]
#[command(about = "Damped wave simulation of pebbles dropped on a lake surface")]
struct Cli {
    /// Side length N of the (square) lake grid
    grid_size: usize,

    /// Number of pebbles dropped before iteration 0
    pebbles: usize,

    /// Number of iterations of the main loop
    iterations: usize,

    /// Number of cooperating workers
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// RNG seed for pebble placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the .dat / .png outputs
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ripple: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    match cli.workers {
        1 => run_single(cli, seed),
        2 => run_pair(cli, seed),
        n => Err(format!("workers must be 1 or 2, got {n}").into()),
    }
}

fn run_single(cli: &Cli, seed: u64) -> Result<(), Box<dyn Error>> {
    let partition = Partition::single(cli.grid_size)?;
    run_worker(
        None,
        partition,
        NoExchange,
        cli.pebbles,
        cli.iterations,
        seed,
        &cli.out_dir,
    )
    .map_err(|e| -> Box<dyn Error> { e })?;
    Ok(())
}

fn run_pair(cli: &Cli, seed: u64) -> Result<(), Box<dyn Error>> {
    let (lower, upper) = Partition::pair(cli.grid_size)?;
    let (lower_end, upper_end) = ChannelExchanger::pair(&lower, &upper)?;

    let spawn = |rank: WorkerRank, partition: Partition, endpoint: ChannelExchanger| {
        let pebbles = cli.pebbles;
        let iterations = cli.iterations;
        let out_dir = cli.out_dir.clone();
        thread::spawn(move || {
            run_worker(
                Some(rank),
                partition,
                endpoint,
                pebbles,
                iterations,
                seed,
                &out_dir,
            )
        })
    };
    let handles = [
        spawn(WorkerRank::Lower, lower, lower_end),
        spawn(WorkerRank::Upper, upper, upper_end),
    ];
    for handle in handles {
        handle
            .join()
            .map_err(|_| "worker thread panicked")?
            .map_err(|e| -> Box<dyn Error> { e })?;
    }
    Ok(())
}

/// The loop every worker runs: seed, iterate, report, render.
fn run_worker<E: HaloExchange>(
    rank: Option<WorkerRank>,
    partition: Partition,
    exchanger: E,
    pebbles: usize,
    iterations: usize,
    seed: u64,
    out_dir: &Path,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut field = Field::for_partition(&partition);
    // Per-worker stream: each rank places its own pebbles, as with the
    // single-worker case the whole placement derives from `seed`.
    let rank_index = rank.map_or(0, WorkerRank::index);
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ rank_index as u64);
    seed::drop_pebbles(&mut field, &partition, pebbles, &mut rng);

    let mut sim = Simulation::new(field, SimParams::default(), exchanger);
    let elapsed = sim.run(iterations)?;
    if rank_index == 0 {
        println!("Elapsed time: {} seconds", elapsed.as_secs_f64());
    }
    render::write_outputs(out_dir, rank, sim.field(), &partition)?;
    Ok(())
}
