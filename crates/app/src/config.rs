//! Configuration for the manchester-gen driver.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! The seed is always printed so runs are reproducible.

use std::path::PathBuf;

/// Default number of source bits per run.
pub const DEFAULT_LENGTH: usize = 32;

/// Complete configuration for a generator run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of source bits to generate
    pub length: usize,

    /// Seed for the random source (explicit or time-based)
    pub seed: u64,

    /// Output record path
    pub output_file: PathBuf,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the run summary
    pub print_summary: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If --seed is not provided, a time-based seed is used (and printed by
    /// the driver, so the run can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut length: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut print_config = false;
        let mut print_summary = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--length" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--length requires a number".to_string());
                    }
                    length = Some(
                        args[i]
                            .parse()
                            .map_err(|_| format!("invalid length: {}", args[i]))?,
                    );
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(
                        args[i]
                            .parse()
                            .map_err(|_| format!("invalid seed: {}", args[i]))?,
                    );
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-summary" => {
                    print_summary = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        Ok(Config {
            length: length.unwrap_or(DEFAULT_LENGTH),
            seed,
            output_file: output_file.unwrap_or_else(|| PathBuf::from("./manchester.csv")),
            print_config,
            print_summary,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Length: {} bits", self.length);
        println!("Seed:   {}", self.seed);
        println!("Output: {}", self.output_file.display());
        println!();
    }
}

fn print_help() {
    println!("manchester-gen: Random bit sequences in Manchester line code");
    println!();
    println!("USAGE:");
    println!("    manchester-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --length <N>       Number of source bits (default: 32)");
    println!("    --seed <N>         Random seed for determinism (default: time-based)");
    println!("    --out <PATH>       Output record path (default: ./manchester.csv)");
    println!();
    println!("    --print-config     Print resolved configuration");
    println!("    --no-summary       Don't print the run summary");
    println!("    --help, -h         Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    manchester-gen                         # 32 random bits, time-based seed");
    println!("    manchester-gen --seed 42               # Deterministic run");
    println!("    manchester-gen --length 64 --out x.csv # 64 bits to a chosen path");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&[]).unwrap();
        assert_eq!(config.length, DEFAULT_LENGTH);
        assert_eq!(config.output_file, PathBuf::from("./manchester.csv"));
        assert!(config.print_summary);
        assert!(!config.print_config);
    }

    #[test]
    fn test_explicit_values() {
        let config =
            Config::from_args(&args(&["--length", "64", "--seed", "9", "--out", "r.csv"]))
                .unwrap();
        assert_eq!(config.length, 64);
        assert_eq!(config.seed, 9);
        assert_eq!(config.output_file, PathBuf::from("r.csv"));
    }

    #[test]
    fn test_negative_length_rejected() {
        let result = Config::from_args(&args(&["--length", "-5"]));
        assert_eq!(result.unwrap_err(), "invalid length: -5");
    }

    #[test]
    fn test_missing_value_rejected() {
        let result = Config::from_args(&args(&["--length"]));
        assert_eq!(result.unwrap_err(), "--length requires a number");
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let result = Config::from_args(&args(&["--bogus"]));
        assert_eq!(result.unwrap_err(), "unknown argument: --bogus");
    }

    #[test]
    fn test_zero_length_allowed() {
        let config = Config::from_args(&args(&["--length", "0"])).unwrap();
        assert_eq!(config.length, 0);
    }
}
