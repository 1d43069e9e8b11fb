//! Exercise evaluation CLI
//!
//! Usage: kata [--json] <exercise> <args>...
//!
//! Runs one exercise and prints its result. With `--json` the result is
//! printed as `{"exercise": ..., "result": ...}`. Invalid input exits with
//! status 1 and a message on stderr.
//!
//! Example: kata wordy "What is 5 plus 13?"

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kata_drills::domain::numbers::{
    armstrong, collatz, darts, grains, leap, perfect_numbers, raindrops, roman, secret_handshake,
    triangle::Triangle,
};
use kata_drills::domain::resistor::{self, duo, expert, trio};
use kata_drills::domain::text::{
    anagram, bob, house, isbn, isogram, pangram, protein_translation, reverse,
    rna_transcription, rotational_cipher, wordy,
};
use kata_drills::domain::collections::plane_tickets;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Parser)]
#[command(name = "kata", version, about = "Evaluate a single exercise")]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Candidates that are anagrams of WORD
    Anagram { word: String, candidates: Vec<String> },
    /// Bob's reply to a remark
    Bob { remark: String },
    /// Whether no letter repeats
    Isogram { text: String },
    /// Whether every letter a-z appears
    Pangram { sentence: String },
    /// Reverse a string
    Reverse { text: String },
    /// Caesar-shift letters by KEY (0-26)
    Rotate {
        #[arg(short, long)]
        key: u8,
        text: String,
    },
    /// Transcribe DNA to RNA
    Rna { dna: String },
    /// Translate an RNA strand to proteins
    Proteins { strand: String },
    /// Validate an ISBN-10
    Isbn { isbn: String },
    /// Verses START..=END of "This is the House that Jack Built"
    House { start: usize, end: usize },
    /// Evaluate a word problem such as "What is 5 plus 13?"
    Wordy { question: String },
    /// Whether NUMBER is an Armstrong number
    Armstrong { number: u64 },
    /// Collatz steps to reach 1
    Collatz { number: u64 },
    /// Score a dart landing at (X, Y)
    Darts {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Grains on SQUARE, or on the whole board when omitted
    Grains { square: Option<u32> },
    /// Whether YEAR is a leap year
    Leap { year: u32 },
    /// Perfect, abundant or deficient
    Classify { number: u64 },
    /// Pling, Plang, Plong
    Raindrops { number: u64 },
    /// Roman numeral for NUMBER (1-3999)
    Roman { number: u32 },
    /// Integer value of a Roman numeral
    FromRoman { numeral: String },
    /// Handshake actions for a binary code such as 10011
    Handshake { code: String },
    /// Kind of triangle with sides A, B and C
    Triangle { a: f64, b: f64, c: f64 },
    /// Digit value of one resistor color
    ColorCode { color: String },
    /// Two-band resistor value
    ResistorDuo { colors: Vec<String> },
    /// Three-band resistor label
    ResistorTrio { colors: Vec<String> },
    /// Full resistor label (1, 4 or 5 bands)
    Resistor { colors: Vec<String> },
    /// Assign seats to passengers in order
    Seats { passengers: Vec<String> },
}

/// Result of one exercise in both output forms
#[derive(Serialize)]
struct Report {
    exercise: &'static str,
    result: Value,
    #[serde(skip)]
    text: String,
}

impl Report {
    fn new(exercise: &'static str, text: impl Into<String>, result: Value) -> Self {
        Self {
            exercise,
            result,
            text: text.into(),
        }
    }

    /// Report whose text is the JSON value's plain rendering
    fn plain<T: ToString + Serialize>(exercise: &'static str, value: T) -> Self {
        let text = value.to_string();
        Self::new(exercise, text, json!(value))
    }

    fn lines(exercise: &'static str, lines: Vec<String>) -> Self {
        Self::new(exercise, lines.join("\n"), json!(lines))
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    debug!(command = ?cli.command, json = cli.json, "running exercise");

    let report = evaluate(cli.command)?;
    if cli.json {
        println!("{}", serde_json::to_string(&report).context("serialize result")?);
    } else {
        println!("{}", report.text);
    }
    Ok(())
}

fn strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

fn evaluate(command: Command) -> Result<Report> {
    let report = match command {
        Command::Anagram { word, candidates } => {
            let found: Vec<String> = anagram::find_anagrams(&word, &strs(&candidates))
                .into_iter()
                .map(str::to_string)
                .collect();
            Report::lines("anagram", found)
        }
        Command::Bob { remark } => Report::plain("bob", bob::response(&remark)),
        Command::Isogram { text } => Report::plain("isogram", isogram::is_isogram(&text)),
        Command::Pangram { sentence } => Report::plain("pangram", pangram::is_pangram(&sentence)),
        Command::Reverse { text } => Report::plain("reverse", reverse::reverse(&text)),
        Command::Rotate { key, text } => {
            let rotated = rotational_cipher::rotate(&text, key)
                .with_context(|| format!("rotate {text:?}"))?;
            Report::plain("rotate", rotated)
        }
        Command::Rna { dna } => Report::plain("rna", rna_transcription::to_rna(&dna)),
        Command::Proteins { strand } => {
            let names: Vec<String> = protein_translation::proteins(&strand)
                .iter()
                .map(ToString::to_string)
                .collect();
            Report::lines("proteins", names)
        }
        Command::Isbn { isbn } => Report::plain("isbn", isbn::is_valid(&isbn)),
        Command::House { start, end } => Report::lines("house", house::recite(start, end)?),
        Command::Wordy { question } => {
            let value =
                wordy::answer(&question).with_context(|| format!("cannot answer {question:?}"))?;
            Report::plain("wordy", value)
        }
        Command::Armstrong { number } => {
            Report::plain("armstrong", armstrong::is_armstrong_number(number))
        }
        Command::Collatz { number } => Report::plain("collatz", collatz::steps(number)?),
        Command::Darts { x, y } => Report::plain("darts", darts::score(x, y)),
        Command::Grains { square } => match square {
            Some(square) => Report::plain("grains", grains::square(square)?),
            None => Report::plain("grains", grains::total()),
        },
        Command::Leap { year } => Report::plain("leap", leap::is_leap_year(year)),
        Command::Classify { number } => {
            let classification = perfect_numbers::classify(number)?;
            Report::new("classify", classification.to_string(), json!(classification.to_string()))
        }
        Command::Raindrops { number } => Report::plain("raindrops", raindrops::convert(number)),
        Command::Roman { number } => Report::plain("roman", roman::to_roman(number)?),
        Command::FromRoman { numeral } => Report::plain(
            "from-roman",
            roman::from_roman(&numeral).with_context(|| format!("parse {numeral:?}"))?,
        ),
        Command::Handshake { code } => {
            let actions: Vec<String> = secret_handshake::commands(&code)?
                .iter()
                .map(ToString::to_string)
                .collect();
            Report::lines("handshake", actions)
        }
        Command::Triangle { a, b, c } => {
            let kind = match Triangle::new([a, b, c]) {
                None => "not a triangle",
                Some(t) if t.is_equilateral() => "equilateral",
                Some(t) if t.is_isosceles() => "isosceles",
                Some(_) => "scalene",
            };
            Report::plain("triangle", kind)
        }
        Command::ColorCode { color } => Report::plain("color-code", resistor::color_code(&color)?),
        Command::ResistorDuo { colors } => {
            Report::plain("resistor-duo", duo::value(&strs(&colors))?)
        }
        Command::ResistorTrio { colors } => {
            Report::plain("resistor-trio", trio::label(&strs(&colors))?)
        }
        Command::Resistor { colors } => {
            Report::plain("resistor", expert::resistor_label(&strs(&colors))?)
        }
        Command::Seats { passengers } => {
            let names = strs(&passengers);
            let assigned = plane_tickets::assign_seats(&names);
            let text = assigned
                .iter()
                .map(|(name, seat)| format!("{name}: {seat}"))
                .collect::<Vec<_>>()
                .join("\n");
            let value: serde_json::Map<String, Value> = assigned
                .into_iter()
                .map(|(name, seat)| (name.to_string(), json!(seat)))
                .collect();
            Report::new("seats", text, Value::Object(value))
        }
    };
    Ok(report)
}
