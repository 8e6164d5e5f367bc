use clap::Parser;
use ekin::{search, validate_size, SearchConfig, SearchSummary, MAX_SIZE};
use table::{table_path, IterationLog};

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ekin state search, logs new maxima per iteration")]
struct Args {
    /// Number of elements per state
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=MAX_SIZE as i64))]
    size: u32,

    /// Stop after this many iterations
    #[arg(long, default_value_t = 10_000_000)]
    max_iterations: usize,

    /// Directory for size-{N}-iterations.csv
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.threads > 0 {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
        {
            log::error!("failed to build Rayon thread pool: {}", err);
            std::process::exit(1);
        }
    }

    let start = Instant::now();
    match sweep(&args) {
        Ok((summary, path)) => log::info!(
            "done in {:.3} s: {} iterations, {} states seen, max {}{}, written to {}",
            start.elapsed().as_secs_f64(),
            summary.iterations,
            summary.states_seen,
            summary.last_max,
            if summary.exhausted { "" } else { " (iteration limit)" },
            path.display()
        ),
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Runs the search and writes its records. The size is checked before the
/// output file is touched.
fn sweep(args: &Args) -> Result<(SearchSummary, PathBuf), Box<dyn Error>> {
    let config = SearchConfig {
        size: args.size as usize,
        max_iterations: args.max_iterations,
    };
    validate_size(config.size)?;

    let path = table_path(&args.out_dir, args.size);
    let mut out = IterationLog::create(&path)?;

    let result = search(&config, |m| {
        out.record(i64::from(m.new_max), m.iteration as u64)
            .map_err(Into::into)
    });
    out.finish()?;

    Ok((result?, path))
}
