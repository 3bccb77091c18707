//! Command-line interface (CLI) for pushlr-calc
//!
//! This binary replays the hardcoded demonstration drivers of [`Demo`]
//! through the [`CalcParser`](pushlr_calc::CalcParser) and prints the value of
//! every completed statement, or the error that stopped it.
//!
//! Set `RUST_LOG=trace` to watch the parse stack evolve token by token.

use anyhow::{Result, bail};
use clap::{Parser as ClapParser, Subcommand};
use pushlr::ParserOptions;
use pushlr_calc::{Demo, Outcome};
use smartstring::alias::String;
use std::fmt::Write;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replays demonstration drivers
    Demo {
        /// Driver to replay; all of them when omitted
        #[arg(value_enum)]
        name: Option<Demo>,

        /// Skip to the next newline after an error instead of stopping
        #[arg(long)]
        resync: bool,

        /// Maximum number of parse stack entries
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

fn render(outcome: &Outcome) -> Result<String> {
    let mut line = String::new();
    write!(line, "{}:", outcome.title)?;
    for result in &outcome.results {
        match result {
            Ok(stat) => match stat.number() {
                Some(n) => write!(line, " {}", n)?,
                None => write!(line, " ()")?,
            },
            Err(err) => write!(line, " [{}]", err)?,
        }
    }
    Ok(line)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Demo {
            name,
            resync,
            max_depth,
        } => {
            let mut options = ParserOptions::default().resync(resync);
            if let Some(max_depth) = max_depth {
                options = options.max_depth(max_depth);
            }
            let demos = match name {
                Some(demo) => vec![demo],
                None => Demo::ALL.to_vec(),
            };

            let mut failures = 0;
            for demo in demos {
                println!("== {}", demo.name());
                for outcome in demo.run(options) {
                    println!("{}", render(&outcome)?);
                    failures += outcome.errors().count();
                }
            }
            if failures > 0 {
                bail!("{} error(s) reported", failures);
            }
        }
    }
    Ok(())
}
