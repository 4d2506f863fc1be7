use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use stoich::*;

/// Prints the molecular weight of each formula.
///
/// Formulas are read from the arguments, or one per line from stdin when
/// there are none.
#[derive(Parser)]
#[command(name = "formula-weight", version)]
struct Args {
    /// Formulas to weigh, e.g. H2O C6H12O6.
    formulas: Vec<String>,

    /// Also print the percentage composition of each formula.
    #[arg(short, long)]
    composition: bool,

    /// CSV periodic table (name,symbol,number,weight) to use instead of the built-in one.
    #[arg(long, env = "STOICH_TABLE")]
    table: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error or off.
    #[arg(long, env = "STOICH_LOG", default_value = "warn")]
    log_level: String,
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

    let formulas = if args.formulas.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("could not read formulas from stdin")?
    } else {
        args.formulas
    };

    let mut failures = 0;
    for formula in formulas.iter().map(|f| f.trim()).filter(|f| !f.is_empty()) {
        match parse_and_build(formula, table) {
            Ok(molecule) => {
                println!("formula: {}, weight: {}", formula, molecule.total_weight());
                if args.composition {
                    print!("{}", molecule);
                }
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} formula(s) could not be weighed", failures);
    }
    Ok(())
}
