use std::{
    fs, hint,
    io::{self, Write},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{error, info};

use naive_sa::{SuffixArrayBuilder, text};

/// Naive suffix array construction and its timing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the suffix array of TEXT
    Show {
        text: String,

        /// Sentinel byte appended to the text, must sort before every byte of TEXT
        #[arg(long)]
        sentinel: Option<char>,
    },
    /// Measure how long construction takes for a text
    Time {
        #[command(flatten)]
        source: TextSource,

        /// Symbol used by --repeated
        #[arg(long, default_value_t = 'a')]
        symbol: char,

        /// Alphabet used by --random
        #[arg(long, default_value = "ACGT")]
        alphabet: String,

        /// Seed used by --random
        #[arg(long, default_value_t = 0x0DDB1A5E5BAD5EED)]
        seed: u64,

        /// Number of constructions to time
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,
    },
    /// Write a random text to OUT
    Generate {
        out: PathBuf,

        #[arg(long, default_value_t = 10_000)]
        len: usize,

        #[arg(long, default_value = "ACGT")]
        alphabet: String,

        #[arg(long, default_value_t = 0x0DDB1A5E5BAD5EED)]
        seed: u64,
    },
    /// banana, then the text of --file, then --len repeated `a`s
    Demo {
        #[arg(long, default_value = "randomstring.txt")]
        file: PathBuf,

        #[arg(long, default_value_t = 10_000)]
        len: usize,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct TextSource {
    /// Read the text from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Use N repetitions of --symbol
    #[arg(long, value_name = "N")]
    repeated: Option<usize>,

    /// Use N random symbols of --alphabet
    #[arg(long, value_name = "N")]
    random: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    run(cli.command, &mut io::stdout().lock())
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Show { text, sentinel } => show(&text, sentinel, out),
        Command::Time {
            source,
            symbol,
            alphabet,
            seed,
            runs,
        } => {
            let text = if let Some(path) = source.file {
                text::load_text_file(&path)?
            } else if let Some(len) = source.repeated {
                text::repeated_symbol_text(ascii_byte(symbol)?, len)
            } else if let Some(len) = source.random {
                text::random_text(len, alphabet.as_bytes(), seed)?
            } else {
                bail!("no text source given");
            };

            time(&text, runs, out)
        }
        Command::Generate {
            out: path,
            len,
            alphabet,
            seed,
        } => generate(&path, len, alphabet.as_bytes(), seed),
        Command::Demo { file, len } => demo(&file, len, out),
    }
}

fn show(text: &str, sentinel: Option<char>, out: &mut impl Write) -> Result<()> {
    let mut builder = SuffixArrayBuilder::<u8, usize>::new();
    if let Some(sentinel) = sentinel {
        builder.with_sentinel(ascii_byte(sentinel)?);
    }

    print_suffix_array(&builder, text.as_bytes(), out)
}

fn time(text: &[u8], runs: u32, out: &mut impl Write) -> Result<()> {
    let mut best = Duration::MAX;
    for _ in 0..runs {
        best = best.min(print_time_taken(text, out)?);
    }

    info!("best of {} runs over {} bytes: {:?}", runs, text.len(), best);

    Ok(())
}

fn generate(path: &Path, len: usize, alphabet: &[u8], seed: u64) -> Result<()> {
    let text = text::random_text(len, alphabet, seed)?;
    fs::write(path, &text)
        .with_context(|| format!("Failed to write random text to '{}'", path.display()))?;

    info!("wrote {} random bytes to '{}'", len, path.display());

    Ok(())
}

// an unreadable file is reported but does not stop the repeated text run
fn demo(file: &Path, len: usize, out: &mut impl Write) -> Result<()> {
    let builder = SuffixArrayBuilder::<u8, usize>::new();
    print_suffix_array(&builder, b"banana", out)?;

    match text::load_text_file(file) {
        Ok(random_text) => {
            print_time_taken(&random_text, out)?;
        }
        Err(err) => error!("{err}"),
    }

    print_time_taken(&text::repeated_symbol_text(b'a', len), out)?;

    Ok(())
}

fn print_suffix_array(
    builder: &SuffixArrayBuilder<u8, usize>,
    text: &[u8],
    out: &mut impl Write,
) -> Result<()> {
    let suffix_array = builder
        .construct_suffix_array(text)
        .context("Failed to construct suffix array")?;

    writeln!(out, "Suffix Array: {suffix_array:?}")?;

    Ok(())
}

fn print_time_taken(text: &[u8], out: &mut impl Write) -> Result<Duration> {
    let start = Instant::now();
    let suffix_array = naive_sa::build(text).context("Failed to construct suffix array")?;
    let elapsed = start.elapsed();
    hint::black_box(suffix_array);

    writeln!(out, "Time taken to build suffix array: {elapsed:?}")?;

    Ok(elapsed)
}

fn ascii_byte(symbol: char) -> Result<u8> {
    if !symbol.is_ascii() {
        bail!("'{symbol}' is not an ASCII character");
    }

    Ok(symbol as u8)
}
