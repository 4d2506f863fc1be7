use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stoich::*;

/// Interactive formula weight and stoichiometry calculator.
#[derive(Parser)]
#[command(name = "stoich", version)]
struct Args {
    /// CSV periodic table (name,symbol,number,weight) to use instead of the built-in one.
    #[arg(long, env = "STOICH_TABLE")]
    table: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error or off.
    #[arg(long, env = "STOICH_LOG", default_value = "warn")]
    log_level: String,
}

const FULL_MENU: &str = "Enter a formula at any time, or choose from the following:

        d) display full menu
        g) grams to moles
        m) moles to grams
        M) moles to mL
        s) search
        x) exit, or type \"exit\"

entry: ";

const SHORT_MENU: &str = "entry: ";

/// Prints `text` and reads one trimmed line. `None` means stdin is closed.
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Asks for an amount until one parses.
fn prompt_quantity(input: &mut impl BufRead, text: &str) -> Result<Option<f64>> {
    loop {
        let Some(entry) = prompt(input, text)? else {
            return Ok(None);
        };
        match parse_quantity(&entry) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => eprintln!("\nERROR: {}\n", e),
        }
    }
}

/// Offers to reuse the previous amount, otherwise asks for a new one.
fn request(input: &mut impl BufRead, previous: f64, unit: &str) -> Result<Option<f64>> {
    if previous != 0.0 {
        loop {
            let Some(answer) = prompt(input, &format!("use {} {}? (y or n) ", previous, unit))?
            else {
                return Ok(None);
            };
            match answer.as_str() {
                "y" => return Ok(Some(previous)),
                "n" => break,
                other => eprintln!("\nERROR: invalid option '{}'\n", other),
            }
        }
    }
    prompt_quantity(input, &format!("enter {}: ", unit))
}

fn report<T>(result: stoich::Result<T>) -> Option<T> {
    result.map_err(|e| eprintln!("ERROR: {}\n", e)).ok()
}

fn run<R: ElementRepository + ?Sized>(calc: &mut Calculator<R>, input: &mut impl BufRead) -> Result<()> {
    let mut full_menu = true;

    loop {
        let menu = if full_menu { FULL_MENU } else { SHORT_MENU };
        let Some(entry) = prompt(input, menu)? else {
            break;
        };
        full_menu = false;
        println!();

        match entry.as_str() {
            "" => continue,
            "x" | "exit" => break,
            "d" => full_menu = true,
            "m" | "g" | "M" if calc.molecule().is_none() => {
                eprintln!("ERROR: {}\n", Error::NoFormula);
            }
            "m" => {
                let Some(moles) = request(input, calc.state().moles, "mol")? else {
                    break;
                };
                if let Some(grams) = report(calc.grams_for(moles)) {
                    println!("\n\t{} mol {} = {} g\n", moles, calc.state().formula, grams);
                }
            }
            "g" => {
                let Some(grams) = request(input, calc.state().grams, "g")? else {
                    break;
                };
                if let Some(moles) = report(calc.moles_for(grams)) {
                    println!("\n\t{} g {} = {} mol\n", grams, calc.state().formula, moles);
                }
            }
            "M" => {
                let Some(moles) = request(input, calc.state().moles, "mol")? else {
                    break;
                };
                let Some(molarity) = prompt_quantity(input, "M of solution (moles/1000mL): ")? else {
                    break;
                };
                if let Some(volume) = report(calc.volume_for(moles, molarity)) {
                    println!(
                        "\n\t{} mol {} of {} M solution = {} mL\n",
                        moles,
                        calc.state().formula,
                        molarity,
                        volume
                    );
                }
            }
            "s" => {
                let Some(key) = prompt(input, "search by name, number, weight or symbol: ")? else {
                    break;
                };
                println!();
                match calc.search(&key) {
                    Some(element) => println!("{}\n", element),
                    None => eprintln!("ERROR: key '{}' not found\n", key),
                }
            }
            formula => {
                if let Some(molecule) = report(calc.parse_and_build(formula)) {
                    println!("\tformula: {}, weight: {}\n", formula, molecule.total_weight());
                    println!("{}", molecule);
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let loaded;
    let table = match &args.table {
        Some(path) => {
            loaded = PeriodicTable::from_path(path)
                .with_context(|| format!("could not load periodic table from {}", path.display()))?;
            &loaded
        }
        None => PeriodicTable::builtin(),
    };

    let mut calc = Calculator::new(table);
    let stdin = io::stdin();
    run(&mut calc, &mut stdin.lock())
}
