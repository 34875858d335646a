use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::mapgen::seed::random_usize;
use dungeon_core::{Grid, generate_random_map, generate_standard_map, is_connected};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    cases: u32,
    #[arg(long, default_value_t = 10)]
    min_size: usize,
    #[arg(long, default_value_t = 50)]
    max_size: usize,
}

fn check_invariants(grid: &Grid, require_open_ratio: bool) -> Result<(), String> {
    if let Some(pos) = grid.positions().find(|&pos| grid.is_border(pos) && grid.is_open(pos)) {
        return Err(format!("border cell {pos:?} is open"));
    }
    if !is_connected(grid) {
        return Err("open cells are not fully connected".to_string());
    }
    let required = (grid.interior_area() as f64 * 0.4) as usize;
    if require_open_ratio && grid.interior_open_count() < required {
        return Err(format!(
            "only {} of {} interior cells open",
            grid.interior_open_count(),
            grid.interior_area()
        ));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.min_size < 3 || args.min_size > args.max_size {
        bail!("size range {}..={} is not usable", args.min_size, args.max_size);
    }

    println!(
        "Starting map fuzz on seed {} for {} cases ({}..={} per side)...",
        args.seed, args.cases, args.min_size, args.max_size
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut failures = 0_u32;

    for case in 0..args.cases {
        let case_seed = rng.next_u64();
        let mut case_rng = ChaCha8Rng::seed_from_u64(case_seed);

        let standard = generate_standard_map(&mut case_rng);
        if let Err(reason) = check_invariants(&standard, false) {
            eprintln!("case {case}: standard map (seed {case_seed}) failed: {reason}");
            failures += 1;
        }

        let width = random_usize(&mut rng, args.min_size, args.max_size);
        let height = random_usize(&mut rng, args.min_size, args.max_size);
        let cave = generate_random_map(width, height, &mut case_rng)?;
        // The open-ratio top-up is bounded, so only hold sizes where it always lands.
        if let Err(reason) = check_invariants(&cave, width >= 20 && height >= 20) {
            eprintln!("case {case}: {width}x{height} cave (seed {case_seed}) failed: {reason}");
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} invariant failures across {} cases", args.cases);
    }
    println!("Map fuzzing completed successfully.");
    Ok(())
}
