use std::fs;

use clap::Parser;
use unima::{
    get_results,
    interpreter::value::{Quantity, Value},
    latex::{unit_to_latex, value_to_scientific},
    units::UnitVector,
};

/// unima is an easy to use calculator for LaTeX mathematics with full SI
/// dimension tracking.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells unima to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last
    /// successful value of a unima script, with no unit or notation applied.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let results = get_results(&script);

    if args.pipe_mode {
        if let Some(value) = results.iter().rev().find_map(|result| result.as_ref().ok()) {
            println!("{value}");
        }
        return;
    }

    for result in &results {
        match result {
            Ok(value) => println!("[VALUE]: {}", render(value)),
            Err(e) => println!("[ERROR]: {e}"),
        }
    }
}

/// Renders a result the way it would appear in a worksheet: the number in
/// plain or scientific notation honoring significant figures, followed by
/// the unit in LaTeX when the result carries one.
fn render(value: &Value) -> String {
    match value {
        Value::Scalar(quantity) => render_quantity(quantity),
        other => other.to_string(),
    }
}

fn render_quantity(quantity: &Quantity) -> String {
    let mut rendered = value_to_scientific(quantity.value, quantity.sig_figs);

    if quantity.is_complex() {
        let imag = value_to_scientific(quantity.imag, quantity.sig_figs);
        rendered = format!("{rendered} + {imag}i");
    }

    if quantity.unit != UnitVector::DIMENSIONLESS {
        rendered = format!("{rendered} {}", unit_to_latex(quantity.unit));
    }

    rendered
}
