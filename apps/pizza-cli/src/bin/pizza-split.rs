//! # Pizza Bill Splitter
//!
//! One-shot command: how much does each person pay for N pizzas at a fixed
//! price?
//!
//! ## Usage
//! ```bash
//! pizza-split 3 4          # 3 pizzas split among 4 people
//! pizza-split 3 4 --json   # same, as JSON
//! ```
//!
//! Any argument error prints the problem and usage, then exits with status 1.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use pizza_core::{split_evenly, BillSplit, CoreError, CoreResult, Money};
use tracing::debug;

/// Fixed price of one pizza.
const PIZZA_PRICE: Money = Money::from_cents(1000);

/// Largest pizza count or party size accepted.
const MAX_COUNT: i64 = 1000;

#[derive(Parser)]
#[command(name = "pizza-split", version)]
#[command(about = "Calculate pizza delivery bill split")]
#[command(after_help = "Example:\n  pizza-split 3 4    # 3 pizzas split among 4 people\n\nNote: Each pizza costs 10.00")]
struct Cli {
    /// Number of pizzas ordered
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_COUNT))]
    pizzas: u32,

    /// Number of people splitting the bill
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_COUNT))]
    people: u32,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    pizza_cli::init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let split = split_pizzas(cli.pizzas, cli.people)?;
    debug!(pizzas = cli.pizzas, people = cli.people, per_person = %split.per_person, "Bill split");

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&split)?)?;
        return Ok(());
    }

    writeln!(out, "=== Pizza Delivery Bill Splitter ===")?;
    writeln!(out)?;
    writeln!(out, "=== Bill Split Results ===")?;
    writeln!(out, "Number of pizzas: {}", cli.pizzas)?;
    writeln!(out, "Price per pizza: {}", PIZZA_PRICE)?;
    writeln!(out, "Total bill: {}", split.total)?;
    writeln!(out, "Number of people: {}", split.num_people)?;
    writeln!(out, "Cost per person: {}", split.per_person)?;
    Ok(())
}

/// Splits the cost of `pizzas` fixed-price pizzas between `people`.
fn split_pizzas(pizzas: u32, people: u32) -> CoreResult<BillSplit> {
    let total = PIZZA_PRICE
        .checked_mul_quantity(pizzas)
        .ok_or(CoreError::ArithmeticOverflow)?;
    split_evenly(total, people)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_for(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let output = output_for(&["pizza-split", "3", "4"]);

        assert_eq!(
            output,
            "=== Pizza Delivery Bill Splitter ===\n\
             \n\
             === Bill Split Results ===\n\
             Number of pizzas: 3\n\
             Price per pizza: 10.00\n\
             Total bill: 30.00\n\
             Number of people: 4\n\
             Cost per person: 7.50\n"
        );
    }

    #[test]
    fn test_uneven_split_rounds_to_cent() {
        let split = split_pizzas(1, 3).unwrap();
        assert_eq!(split.per_person, Money::from_cents(333));

        let split = split_pizzas(1000, 1000).unwrap();
        assert_eq!(split.total, Money::from_cents(1_000_000));
        assert_eq!(split.per_person, Money::from_cents(1000));
    }

    #[test]
    fn test_json_output() {
        let output = output_for(&["pizza-split", "2", "4", "--json"]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["total"], 2000);
        assert_eq!(value["num_people"], 4);
        assert_eq!(value["per_person"], 500);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        for args in [
            vec!["pizza-split"],
            vec!["pizza-split", "3"],
            vec!["pizza-split", "3", "4", "5"],
            vec!["pizza-split", "0", "4"],
            vec!["pizza-split", "3", "-1"],
            vec!["pizza-split", "1001", "4"],
            vec!["pizza-split", "three", "4"],
        ] {
            let err = Cli::try_parse_from(args.clone()).err().unwrap();
            assert!(err.use_stderr(), "{:?} should fail", args);
        }
    }

    #[test]
    fn test_help_is_not_an_error() {
        let err = Cli::try_parse_from(["pizza-split", "--help"]).err().unwrap();
        assert!(!err.use_stderr());
    }
}
