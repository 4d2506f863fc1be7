use crate::{Error, Result};
use csv::StringRecord;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A single entry of the periodic table.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub name: String,
    pub symbol: String,
    pub atomic_number: u32,
    pub atomic_weight: f64,
}

impl ElementRecord {
    pub fn new(name: &str, symbol: &str, atomic_number: u32, atomic_weight: f64) -> Self {
        Self {
            name: name.to_owned(),
            symbol: symbol.to_owned(),
            atomic_number,
            atomic_weight,
        }
    }

    /// Builds a record from a `name,symbol,number,weight` row.
    ///
    /// # Arguments
    ///
    /// * `row` - The raw CSV record.
    /// * `line` - The 1-based line the row came from, used in error messages.
    pub fn from_row(row: &StringRecord, line: u64) -> Result<Self> {
        if row.len() != 4 {
            return Err(Error::invalid_row(
                line,
                format!("expected 4 columns, found {}", row.len()),
            ));
        }

        let name = row[0].trim();
        if name.is_empty() {
            return Err(Error::invalid_row(line, "empty element name"));
        }

        let symbol = row[1].trim();
        if !is_valid_symbol(symbol) {
            return Err(Error::invalid_row(
                line,
                format!("'{}' is not an element symbol", symbol),
            ));
        }

        let atomic_number = row[2]
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                Error::invalid_row(line, format!("invalid atomic number '{}'", &row[2]))
            })?;

        let atomic_weight = row[3]
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w > 0.0)
            .ok_or_else(|| {
                Error::invalid_row(line, format!("invalid atomic weight '{}'", &row[3]))
            })?;

        Ok(Self::new(name, symbol, atomic_number, atomic_weight))
    }
}

/// One uppercase letter, optionally followed by one lowercase letter.
pub fn is_valid_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), None, None) => first.is_ascii_uppercase(),
        (Some(first), Some(second), None) => {
            first.is_ascii_uppercase() && second.is_ascii_lowercase()
        }
        _ => false,
    }
}

impl Display for ElementRecord {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "\tNumber: {}", self.atomic_number)?;
        writeln!(f, "\tName:   {}", self.name)?;
        writeln!(f, "\tSymbol: {}", self.symbol)?;
        write!(f, "\tWeight: {}", self.atomic_weight)
    }
}
