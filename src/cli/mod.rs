use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};

pub mod config;
pub mod main;

/// Operation requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

/// Hill cipher file encryptor/decryptor
#[derive(Parser, Debug)]
#[command(name = "hill", author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["encode", "decode"])))]
pub struct Args {
    /// Encrypt the given file
    #[arg(short, long, value_name = "FILE")]
    pub encode: Option<PathBuf>,

    /// Decrypt the given file
    #[arg(short, long, value_name = "FILE")]
    pub decode: Option<PathBuf>,

    /// Where to write the result
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// TOML file with a [cipher] table (key matrix, padding)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Selected mode and its input file
    pub fn mode(&self) -> Option<(Mode, &Path)> {
        match (&self.encode, &self.decode) {
            (Some(input), None) => Some((Mode::Encode, input.as_path())),
            (None, Some(input)) => Some((Mode::Decode, input.as_path())),
            _ => None,
        }
    }
}
