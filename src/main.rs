//! Short-hash CLI entrypoint.

mod hashing;
mod sha256;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use crate::hashing::short_sha256_file;

/// CLI arguments for the file hasher.
#[derive(Parser, Debug)]
#[command(
    name = "shash",
    version,
    about = "Print the short SHA-256 hash of a file"
)]
struct Args {
    /// Path to the file to hash
    file_path: PathBuf,
}

fn main() {
    // Usage errors exit 1, not clap's default 2; help and version stay exit 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if err.use_stderr() {
                eprint!("{err}");
                process::exit(1);
            }
            print!("{err}");
            process::exit(0);
        }
    };
    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Hash the target file and print its short digest.
fn run(args: Args) -> Result<()> {
    if !args.file_path.exists() {
        bail!("File not found - {}", args.file_path.display());
    }
    let short_hash = short_sha256_file(&args.file_path)
        .with_context(|| format!("failed to hash {}", args.file_path.display()))?;
    println!("{short_hash}");
    Ok(())
}
