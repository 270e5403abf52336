use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

use crate::bitstream::bitpacker::TailMode;
use crate::compression::compress_block::EncodeOptions;
use crate::lzw::dictionary::DEFAULT_DICT_CAPACITY;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the numeric -v level onto a verbosity. Anything above 5 is Trace.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Define the two output channels
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug)]
pub struct LzhOpts {
    /// Vec of names of files to read for input. Empty means stdin.
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Location where output is sent
    pub output: Output,
    /// Number of dictionary entries the LZW stage may learn, including the 256 seeds
    pub dict_capacity: usize,
    /// What to do with the bits left over in the last partial byte
    pub tail: TailMode,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl LzhOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            output: Output::File,
            dict_capacity: DEFAULT_DICT_CAPACITY,
            tail: TailMode::Truncate,
            verbose: Verbosity::Info,
        }
    }

    /// The subset of options the encoding pipeline cares about.
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            dict_capacity: self.dict_capacity,
            tail: self.tail,
        }
    }
}

impl Default for LzhOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Compress text with LZW followed by Huffman coding of the dictionary indices",
    long_about = "
    Each input line (with its newline) is run through an LZW coder with a fixed size
    dictionary. The resulting dictionary indices are Huffman coded and packed into bytes.
    The last byte of the output holds the number of bits used in the final partial byte.

    Output for FILE goes to FILE.lzh. With no FILE, reads standard input and writes
    standard output."
)]
pub struct Args {
    /// Files to compress
    #[clap()]
    files: Vec<String>,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Dictionary capacity (256..=32768)
    #[clap(short = 'n', long = "dict-size", default_value_t = DEFAULT_DICT_CAPACITY)]
    dict_size: usize,

    /// Write the final partial byte before the trailing bit count
    #[clap(short = 'p', long = "pad-tail")]
    pad_tail: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Parse the command line, set the log level and report what we are going to do.
pub fn lzhopts_init() -> LzhOpts {
    let opts = opts_from_args(Args::parse());

    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    if opts.files.is_empty() {
        warn!("Reading from stdin, sending output to stdout");
    }
    for file in &opts.files {
        info!("Getting input from the file {}", file);
    }
    info!("Output to {}", opts.output);
    info!("Dictionary capacity set to {}", opts.dict_capacity);
    if opts.tail == TailMode::Pad {
        info!("Padding the final partial byte");
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Initialization End ----");
    opts
}

/// Put command line information from CLAP into our internal structure.
fn opts_from_args(args: Args) -> LzhOpts {
    let mut opts = LzhOpts::new();
    opts.output = if args.stdout || args.files.is_empty() {
        Output::Stdout
    } else {
        Output::File
    };
    opts.files = args.files;
    opts.force_overwrite = args.force;
    opts.dict_capacity = args.dict_size;
    if args.pad_tail {
        opts.tail = TailMode::Pad
    };
    opts.verbose = Verbosity::from_level(args.v);
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(argv: &[&str]) -> LzhOpts {
        opts_from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_test() {
        let opts = parse(&["lzhuff", "bible.txt"]);
        assert_eq!(opts.files, vec!["bible.txt".to_string()]);
        assert_eq!(opts.output, Output::File);
        assert_eq!(opts.dict_capacity, 1024);
        assert_eq!(opts.tail, TailMode::Truncate);
        assert_eq!(opts.verbose, Verbosity::Info);
        assert!(!opts.force_overwrite);
    }

    #[test]
    fn no_files_means_stdout_test() {
        let opts = parse(&["lzhuff"]);
        assert!(opts.files.is_empty());
        assert_eq!(opts.output, Output::Stdout);
    }

    #[test]
    fn flags_test() {
        let opts = parse(&["lzhuff", "-c", "-f", "-p", "-n", "4096", "-v", "5", "a.txt"]);
        assert_eq!(opts.output, Output::Stdout);
        assert!(opts.force_overwrite);
        assert_eq!(opts.tail, TailMode::Pad);
        assert_eq!(opts.dict_capacity, 4096);
        assert_eq!(opts.verbose, Verbosity::Trace);
        let enc = opts.encode_options();
        assert_eq!(enc.dict_capacity, 4096);
        assert_eq!(enc.tail, TailMode::Pad);
    }

    #[test]
    fn verbosity_levels_test() {
        assert_eq!(Verbosity::from_level(0).level_filter(), log::LevelFilter::Off);
        assert_eq!(Verbosity::from_level(2).level_filter(), log::LevelFilter::Warn);
        assert_eq!(Verbosity::from_level(9), Verbosity::Trace);
    }
}
