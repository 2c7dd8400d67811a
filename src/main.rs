use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{SeedableRng, rngs::StdRng};

use combinadic::binomial::n_choose_k_exact;
use combinadic::bit_string::{
    random_bit_string, rank_bit_string, total_bit_strings, unrank_bit_string,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the exact binomial coefficient C(n, k).
    Binomial { n: u64, k: u64 },
    /// Print the bit string at the given zero-based rank.
    Unrank {
        length: usize,
        num_ones: usize,
        /// Decimal rank, may exceed the machine-integer range.
        rank: String,
    },
    /// Print the zero-based rank of the given bit string, e.g. `01101`.
    Rank { bits: String },
    /// Print every bit string of the given shape in rank order.
    Enumerate { length: usize, num_ones: usize },
    /// Draw uniformly random bit strings of the given shape.
    Sample {
        length: usize,
        num_ones: usize,
        /// Number of bit strings to draw.
        #[arg(long, default_value_t = 1)]
        count: u64,
        /// Seed for reproducible draws.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Binomial { n, k } => {
            println!("{}", n_choose_k_exact(n, k));
        }
        Commands::Unrank {
            length,
            num_ones,
            rank,
        } => {
            let rank: BigUint = rank
                .parse()
                .map_err(|err| anyhow!("invalid rank: {rank}: {err}"))?;
            let bits = unrank_bit_string(length, num_ones, &rank)?;
            println!("{}", render_bits(&bits));
        }
        Commands::Rank { bits } => {
            let bits = parse_bits(&bits)?;
            println!("{}", rank_bit_string(&bits));
        }
        Commands::Enumerate { length, num_ones } => {
            let total = total_bit_strings(length, num_ones);
            let mut rank = BigUint::zero();
            while rank < total {
                let bits = unrank_bit_string(length, num_ones, &rank)?;
                println!("{}", render_bits(&bits));
                rank += 1u32;
            }
        }
        Commands::Sample {
            length,
            num_ones,
            count,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            for _ in 0..count {
                let bits = random_bit_string(&mut rng, length, num_ones)?;
                println!("{}", render_bits(&bits));
            }
        }
    }

    Ok(())
}

fn render_bits(bits: &[u8]) -> String {
    bits.iter().join("")
}

fn parse_bits(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(anyhow!("invalid bit string: {s}")),
        })
        .collect()
}
