use std::time::Instant;

use anyhow::{ensure, Context};
use argh::FromArgs;
use log::info;
use pool_radix::{
    radix::{DEFAULT_FALLBACK_THRESHOLD, DEFAULT_WORKERS},
    PrettyDuration, Scheduler, SortConfig,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Sort integers with the parallel radix sort and print them space-separated.
#[derive(FromArgs)]
struct Args {
    /// scheduler for each digit pass: seq, forte, chili, rayon, raw
    #[argh(option, default = "Scheduler::default()")]
    sch: Scheduler,

    /// max number of workers per digit pass
    #[argh(option, default = "DEFAULT_WORKERS")]
    workers: usize,

    /// inputs of at most this many values are insertion sorted
    #[argh(option, default = "DEFAULT_FALLBACK_THRESHOLD")]
    threshold: usize,

    /// sort this many random values instead of the positional ones
    #[argh(option)]
    random: Option<usize>,

    /// seed for --random
    #[argh(option, default = "0")]
    seed: u64,

    /// largest value generated by --random
    #[argh(option, default = "u32::MAX as i64")]
    max: i64,

    /// check the result against the standard library sort
    #[argh(switch)]
    verify: bool,

    /// don't print the sorted values
    #[argh(switch, short = 'q')]
    quiet: bool,

    /// values to sort
    #[argh(positional)]
    values: Vec<i64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    let mut data: Vec<i64> = match args.random {
        Some(n) => {
            ensure!(args.max >= 0, "--max must not be negative");
            let mut rng = StdRng::seed_from_u64(args.seed);
            (0..n).map(|_| rng.random_range(0..=args.max)).collect()
        }
        None => args.values,
    };

    let config = SortConfig::default()
        .with_workers(args.workers)
        .with_fallback_threshold(args.threshold)
        .with_scheduler(args.sch);

    let expected = args.verify.then(|| {
        let mut expected = data.clone();
        expected.sort();
        expected
    });

    let start = Instant::now();
    pool_radix::sort_with(&mut data, &config)
        .with_context(|| format!("sorting {} values with {:?}", data.len(), args.sch))?;
    info!(
        "sorted {} values in {}",
        data.len(),
        PrettyDuration(start.elapsed())
    );

    if let Some(expected) = expected {
        ensure!(data == expected, "result differs from slice::sort");
        info!("verified against slice::sort");
    }

    if !args.quiet {
        let line: Vec<String> = data.iter().map(|v| v.to_string()).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}
