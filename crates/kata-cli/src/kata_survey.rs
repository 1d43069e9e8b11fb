//! Number survey CLI
//!
//! Usage: kata_survey <armstrong|collatz|perfect> --end <N> [options]
//!
//! Options:
//!   --start <N>        First number to check (default: 1)
//!   --end <N>          Last number to check (inclusive)
//!   --threads <N>      Worker threads (default: one per core)
//!   --chunk-size <N>   Numbers per parallel task
//!   --json             Print the summary as JSON
//!
//! Progress is written to stderr, the summary to stdout.
//!
//! Example: kata_survey collatz --end 1000000

mod logging;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use kata_drills::constants::SURVEY_CHUNK_SIZE;
use kata_drills::{SurveyOptions, armstrong_numbers, classify_numbers, longest_collatz};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Survey {
    /// Every Armstrong number in the range
    Armstrong,
    /// Start with the longest Collatz sequence
    Collatz,
    /// Deficient, perfect and abundant counts
    Perfect,
}

#[derive(Parser, Debug)]
#[command(name = "kata_survey", version, about = "Run a numeric check over a whole range")]
struct Args {
    #[arg(value_enum)]
    survey: Survey,

    /// First number to check
    #[arg(long, default_value_t = 1)]
    start: u64,

    /// Last number to check (inclusive)
    #[arg(long)]
    end: u64,

    /// Worker threads (default: one per core)
    #[arg(long, env = "KATA_THREADS")]
    threads: Option<usize>,

    /// Numbers per parallel task
    #[arg(long, default_value_t = SURVEY_CHUNK_SIZE)]
    chunk_size: u64,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(tag = "survey", rename_all = "lowercase")]
enum Summary {
    Armstrong {
        start: u64,
        end: u64,
        numbers: Vec<u64>,
    },
    Collatz {
        start: u64,
        end: u64,
        longest: Option<CollatzSummary>,
    },
    Perfect {
        start: u64,
        end: u64,
        deficient: u64,
        perfect: u64,
        abundant: u64,
        perfect_numbers: Vec<u64>,
    },
}

#[derive(Serialize)]
struct CollatzSummary {
    number: u64,
    steps: u32,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let args = Args::parse();

    if args.start > args.end {
        bail!("start ({}) must not exceed end ({})", args.start, args.end);
    }
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configure worker threads")?;
    }
    info!(?args, "survey requested");

    let started = Instant::now();
    let summary = survey(&args)?;
    eprintln!();
    eprintln!("Finished in {:.2} seconds", started.elapsed().as_secs_f64());

    if args.json {
        println!("{}", serde_json::to_string(&summary).context("serialize summary")?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_progress(label: &str, current: u64, total: u64) {
    let percent = if total > 0 {
        (current as f64 / total as f64) * 100.0
    } else {
        100.0
    };
    eprint!("\r[{}] Progress: {:.2}% ({}/{})", label, percent, current, total);
}

fn survey(args: &Args) -> Result<Summary> {
    let (start, end) = (args.start, args.end);
    let range = start..=end;
    let label = format!("{:?}", args.survey);
    let options = SurveyOptions::default()
        .with_chunk_size(args.chunk_size)
        .with_progress(|current, total| print_progress(&label, current, total));

    let summary = match args.survey {
        Survey::Armstrong => Summary::Armstrong {
            start,
            end,
            numbers: armstrong_numbers(range, options),
        },
        Survey::Collatz => {
            let longest = longest_collatz(range, options).context("collatz survey")?;
            Summary::Collatz {
                start,
                end,
                longest: longest.map(|record| CollatzSummary {
                    number: record.start,
                    steps: record.steps,
                }),
            }
        }
        Survey::Perfect => {
            let counts = classify_numbers(range, options).context("classification survey")?;
            Summary::Perfect {
                start,
                end,
                deficient: counts.deficient,
                perfect: counts.perfect,
                abundant: counts.abundant,
                perfect_numbers: counts.perfect_numbers,
            }
        }
    };
    Ok(summary)
}

fn print_summary(summary: &Summary) {
    match summary {
        Summary::Armstrong { start, end, numbers } => {
            println!("Armstrong numbers in {}..={}: {}", start, end, numbers.len());
            for n in numbers {
                println!("{}", n);
            }
        }
        Summary::Collatz { start, end, longest } => match longest {
            Some(record) => println!(
                "Longest Collatz sequence in {}..={}: {} ({} steps)",
                start, end, record.number, record.steps
            ),
            None => println!("No numbers in {}..={}", start, end),
        },
        Summary::Perfect {
            start,
            end,
            deficient,
            perfect,
            abundant,
            perfect_numbers,
        } => {
            println!("Classification of {}..={}:", start, end);
            println!("  deficient: {}", deficient);
            println!("  perfect:   {} {:?}", perfect, perfect_numbers);
            println!("  abundant:  {}", abundant);
        }
    }
}
