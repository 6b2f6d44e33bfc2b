//! # AVM Driver
//!
//! Assemble a source program, persist its object form beside the source,
//! and run it against the process stdin/stdout.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use avm_runtime::MachineConfig;
use avm_spec::DEFAULT_MEMORY_WORDS;

/// Longest accepted source path, in bytes.
const MAX_PATH_BYTES: usize = 4096;

/// Assemble and run an AVM source program
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source program path
    source: PathBuf,

    /// Memory capacity in words
    #[arg(long, value_name = "words", default_value_t = DEFAULT_MEMORY_WORDS)]
    memory: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    run(&Args::parse())
}

fn run(args: &Args) -> Result<()> {
    if args.source.as_os_str().len() > MAX_PATH_BYTES {
        bail!("source path exceeds {} bytes", MAX_PATH_BYTES);
    }

    let source = fs::read_to_string(&args.source)
        .with_context(|| format!("failed to open source file {}", args.source.display()))?;

    let object = avm_assembler::assemble(&source)?;

    // The object file exists only for successful compilations, and the
    // machine runs from the file just written, not the in-memory copy.
    let object_path = args.source.with_extension("obj");
    fs::write(&object_path, &object)
        .with_context(|| format!("failed to write object file {}", object_path.display()))?;
    tracing::debug!("wrote object file {}", object_path.display());

    let object = fs::read_to_string(&object_path)
        .with_context(|| format!("failed to read object file {}", object_path.display()))?;

    let config = MachineConfig {
        memory_words: args.memory,
    };
    let state = avm_runtime::run(&object, config, io::stdin().lock(), io::stdout().lock())?;
    tracing::debug!(
        "halted after {} steps, accumulator {}",
        state.steps,
        state.accumulator
    );

    Ok(())
}
