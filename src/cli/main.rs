use clap::Parser;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use crate::cli::{Args, Mode, config};
use crate::crypto;
use crate::utils;

/// Failures surfaced by the command line tool, each with its own exit code
#[derive(Debug)]
pub enum CliError {
    /// Invalid command line
    Usage(String),

    /// Config file missing, malformed, or with an invalid padding symbol
    Config(anyhow::Error),

    /// Input file could not be read
    Read { path: PathBuf, source: io::Error },

    /// Output file could not be written
    Write { path: PathBuf, source: io::Error },

    /// Key matrix has no inverse modulo 26
    Cipher(crate::Error),
}

impl CliError {
    /// Process exit code: 1 usage, 2 read, 3 write, 4 cipher, 5 config
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 1,
            CliError::Read { .. } => 2,
            CliError::Write { .. } => 3,
            CliError::Cipher(_) => 4,
            CliError::Config(_) => 5,
        }
    }
}

impl std::error::Error for CliError {}

impl fmt::Display for CliError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(fmt, "usage error: {}", msg),
            CliError::Config(e) => write!(fmt, "invalid configuration: {:#}", e),
            CliError::Read { path, source } => {
                write!(fmt, "failed to read {}: {}", path.display(), source)
            }
            CliError::Write { path, source } => {
                write!(fmt, "failed to write {}: {}", path.display(), source)
            }
            CliError::Cipher(e) => write!(fmt, "cipher failed: {}", e),
        }
    }
}

/// Reads the input file, runs the cipher and writes the output file
///
/// Output is written only when the whole transform succeeds.
///
/// # Arguments
/// * `args` - Parsed command line: mode, input, output and optional config
///
/// # Returns
/// * `Ok(())` once the output file is written
/// * `Err(CliError)` carrying the failure; see `CliError::exit_code`
pub fn run(args: &Args) -> Result<(), CliError> {
    let (mode, input) = args
        .mode()
        .ok_or_else(|| CliError::Usage("exactly one of --encode or --decode is required".into()))?;

    let cfg = match &args.config {
        Some(path) => config::load(path).map_err(CliError::Config)?,
        None => config::Config::default(),
    };
    tracing::debug!("config: {:?}", cfg);

    let block = crypto::new_block(&cfg.cipher).map_err(|e| CliError::Config(e.into()))?;

    let mut data = fs::read(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", data.len(), input.display());

    let result = match mode {
        Mode::Encode => block.encrypt(&mut data),
        Mode::Decode => block.decrypt(&mut data),
    };
    result.map_err(CliError::Cipher)?;

    fs::write(&args.out, &data).map_err(|source| CliError::Write {
        path: args.out.clone(),
        source,
    })?;

    tracing::info!(
        "{:?} complete, {} letters saved to {}",
        mode,
        data.len(),
        args.out.display()
    );
    Ok(())
}

/// Entry point of the `hill` binary
///
/// Parses arguments, sets up logging and exits the process with the code
/// of any failure.
pub fn run_cli() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = utils::init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}
