use batch::{run, FileSink, PlotConfig, WaitMode};
use chart::ImageFormat;
use clap::{Parser, ValueEnum};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot iterations against new_max, one chart per size")]
struct Args {
    /// Comma-separated list of sizes; each selects size-{N}-iterations.csv
    #[arg(long, default_value = "4,5,6")]
    sizes: String,

    /// Plot the first difference of the iterations column
    #[arg(long)]
    diff: bool,

    /// Directory holding the input CSV files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Directory the chart images are written to
    #[arg(long, default_value = "plots")]
    out_dir: PathBuf,

    /// Image format: png | svg
    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Wait for Enter after each chart before loading the next one
    #[arg(long)]
    wait: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Png,
    Svg,
}

impl From<Format> for ImageFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Png => ImageFormat::Png,
            Format::Svg => ImageFormat::Svg,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let sizes = match parse_sizes(&args.sizes) {
        Ok(sizes) if !sizes.is_empty() => sizes,
        Ok(_) => {
            log::error!("sizes must contain at least one integer value");
            std::process::exit(1);
        }
        Err(token) => {
            log::error!("invalid size {:?} in --sizes", token);
            std::process::exit(1);
        }
    };

    let config = PlotConfig {
        sizes,
        diff_mode: args.diff,
        directory: args.dir,
    };
    let wait = if args.wait {
        WaitMode::Enter
    } else {
        WaitMode::None
    };
    let mut sink = FileSink::new(args.out_dir, args.format.into(), wait);

    match run(&config, &mut sink) {
        Ok(n) => log::info!("{} charts written", n),
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Parses a comma-separated list, skipping empty entries. Returns the first
/// token that is not an unsigned integer.
fn parse_sizes(input: &str) -> Result<Vec<u32>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<u32>().map_err(|_| t.to_string()))
        .collect()
}
