//! manchester-gen: generate a random bit sequence, encode it with the
//! Manchester line code, and persist the result as one delimited record.
//!
//! The three stages run in order with no shared state; both intermediate
//! sequences are printed for inspection.

mod config;

use config::Config;
use manchester_gen_core::{manchester, metrics::RunMetrics, record, source, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(err) = run(&config) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let mut metrics = RunMetrics::new();

    println!("Seed: {}", config.seed);

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let bits = source::generate(config.length, &mut rng);
    metrics.bits_generated = bits.len() as u64;
    println!("Sequence:   {}", bits);

    let encoded = manchester::encode(&bits)?;
    metrics.symbols_encoded = encoded.len() as u64;
    println!("Manchester: {}", encoded);

    record::write_record_file(&encoded, &config.output_file)?;
    // record body + newline terminator
    metrics.record_bytes_written = record::render_record(&encoded).len() as u64 + 1;
    println!("Record written to {}", config.output_file.display());

    metrics.finish();
    if config.print_summary {
        println!();
        metrics.print_summary();
    }

    Ok(())
}
