use std::env;
use std::error::Error;
use std::fmt::Display;
use std::process;
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quadsort_lab::config::{DEFAULT_LEN, DEFAULT_MAX_VALUE, DEFAULT_SEED, PREVIEW_LEN};
use quadsort_lab::{is_sorted, Algorithm, Stopwatch};

fn print_preview<T: Display>(arr: &[T]) {
    println!("\nFirst {} of Array...", PREVIEW_LEN);
    for (i, x) in arr.iter().take(PREVIEW_LEN).enumerate() {
        println!("{}: {}", i + 1, x);
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = env::args();
    args.next();

    let len = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => {
            eprintln!("No length specified. Using {}", DEFAULT_LEN);
            DEFAULT_LEN
        }
    };

    let max_value = match args.next() {
        Some(arg) => arg.parse::<u32>()?,
        None => {
            eprintln!("No max value specified. Using {}", DEFAULT_MAX_VALUE);
            DEFAULT_MAX_VALUE
        }
    };
    if max_value == 0 {
        return Err("max value must be positive".into());
    }

    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>()?,
        None => {
            eprintln!("No seed specified. Using {}", DEFAULT_SEED);
            DEFAULT_SEED
        }
    };

    info!("Generating {} values in 0..{} (seed {})", len, max_value, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let arr: Vec<u32> = (0..len).map(|_| rng.gen_range(0..max_value)).collect();

    println!("\nUnsorted data...");
    print_preview(&arr);

    let mut stopwatch = Stopwatch::new();
    let mut failed = false;
    for algorithm in Algorithm::ALL {
        let mut data = arr.clone();

        println!("\n{}...", algorithm);
        stopwatch.start(algorithm.name())?;
        algorithm.sort(&mut data);
        let duration = stopwatch.stop()?;

        print_preview(&data);
        println!("Time elapsed: {} ms", duration.as_nanos() as f64 / 1_000_000.0);

        if !is_sorted(&data) {
            error!("{} left the data unsorted", algorithm);
            failed = true;
        }
    }

    println!("\n{}", stopwatch.pretty_print());

    if failed {
        process::exit(1);
    }
    Ok(())
}
