//! prng: print an indefinite stream of xorshift pseudo-random numbers.

mod format;
mod stream;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use prng_core::{Algorithm, PrngError, SeedSource};

use format::{OutputFormat, Radix, Width};
use stream::StreamConfig;

const ALGORITHMS_HELP: &str = "\
Algorithms:

    xorshift64*
    xorshift1024*
    xorshift4096*
    xorshift128+

    Default: xorshift1024*

These generators are fast and statistically strong, but they are NOT
suitable for cryptographic use.";

#[derive(Parser, Debug)]
#[command(name = "prng")]
#[command(about = "Print an indefinite stream of pseudo-random numbers generated by an xorshift PRNG")]
#[command(version = prng_core::VERSION)]
#[command(after_help = ALGORITHMS_HELP)]
#[command(args_override_self = true)]
struct Cli {
    /// Set the generator's seed to the specified 64-bit integer
    /// (use the current time in seconds if omitted)
    #[arg(short = 's', value_name = "SEED", allow_hyphen_values = true, value_parser = prng_core::parse_seed)]
    seed: Option<u64>,

    /// Disable standard output buffering
    #[arg(short = 'u')]
    unbuffered: bool,

    /// Print generated values in hexadecimal with lowercase letters instead of decimal
    #[arg(short = 'x', overrides_with = "upper_hex")]
    lower_hex: bool,

    /// Print generated values in hexadecimal with uppercase letters instead of decimal
    #[arg(short = 'X', overrides_with = "lower_hex")]
    upper_hex: bool,

    /// Print 32-bit values instead of 64-bit ones (also accepted as -32)
    #[arg(long = "low32")]
    low32: bool,

    /// Stop after this many values (0 = infinite)
    #[arg(short = 'n', long, default_value = "0")]
    count: u64,

    /// Generator algorithm
    #[arg(default_value_t = Algorithm::default(), value_parser = parse_algorithm)]
    algorithm: Algorithm,
}

impl Cli {
    fn into_config(self) -> StreamConfig {
        let radix = if self.upper_hex {
            Radix::UpperHex
        } else if self.lower_hex {
            Radix::LowerHex
        } else {
            Radix::Decimal
        };
        let width = if self.low32 { Width::Bits32 } else { Width::Bits64 };
        StreamConfig {
            algorithm: self.algorithm,
            seed: self.seed.map_or(SeedSource::Clock, SeedSource::Explicit),
            format: OutputFormat::new(radix, width),
            unbuffered: self.unbuffered,
            count: (self.count > 0).then_some(self.count),
        }
    }
}

fn parse_algorithm(s: &str) -> Result<Algorithm, PrngError> {
    s.parse()
}

/// clap short flags are single characters, so `-32` becomes `--low32`.
/// The argument after `-s` is a seed and is left alone (`-s -32` is a seed).
fn normalize_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    let mut out = Vec::new();
    let mut after_seed_flag = false;
    for arg in args {
        let is_seed_flag = arg == "-s";
        if arg == "-32" && !after_seed_flag {
            out.push("--low32".to_string());
        } else {
            out.push(arg);
        }
        after_seed_flag = is_seed_flag;
    }
    out
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_from(normalize_args(std::env::args()));
    let config = cli.into_config();

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        if let Err(e) = ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed)) {
            log::warn!("couldn't install Ctrl+C handler: {e}");
        }
    }

    match stream::run(&config, &stop) {
        Ok(n) => log::debug!("wrote {n} values"),
        Err(PrngError::Sink(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            log::debug!("output closed: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
