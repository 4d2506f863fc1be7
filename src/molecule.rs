use crate::{tokenize, ElementRecord, ElementRepository, Error, FormulaToken, Result};
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::*;

/// One occurrence of an element in a formula.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeEntry {
    pub element: ElementRecord,
    pub count: u32,
    /// Share of the molecule's weight, 0 to 100.
    pub percentage: f64,
}

impl MoleculeEntry {
    fn new(element: ElementRecord, count: u32) -> Self {
        Self {
            element,
            count,
            percentage: 0.0,
        }
    }

    /// The weight this entry contributes to the molecule.
    pub fn mass(&self) -> f64 {
        self.element.atomic_weight * self.count as f64
    }
}

/// A formula resolved against a periodic table.
///
/// Entries keep formula order and are never merged, so `OHO` has three
/// entries. A molecule is built whole or not at all and is not changed
/// after [`build`] returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    entries: Vec<MoleculeEntry>,
    total_weight: f64,
}

impl Molecule {
    pub fn entries(&self) -> &[MoleculeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Molecular weight in g/mol.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The formula written back out from the entries, e.g. `C6H12O6`.
    pub fn formula(&self) -> String {
        self.entries
            .iter()
            .map(|entry| FormulaToken::new(entry.element.symbol.as_str(), entry.count).to_string())
            .collect()
    }

    /// Fills in the total weight and every entry's percentage.
    ///
    /// Running it again on its own output gives the same molecule.
    pub fn compute(mut self) -> Result<Self> {
        let total_weight: f64 = self.entries.iter().map(MoleculeEntry::mass).sum();
        if total_weight == 0.0 {
            return Err(Error::ZeroWeight {
                formula: self.formula(),
            });
        }

        for entry in self.entries.iter_mut() {
            entry.percentage = entry.mass() / total_weight * 100.0;
        }
        self.total_weight = total_weight;
        Ok(self)
    }
}

/// Resolves every token against `repository` and computes the composition.
///
/// Fails on the first symbol the repository does not know.
pub fn build<R>(tokens: &[FormulaToken], repository: &R) -> Result<Molecule>
where
    R: ElementRepository + ?Sized,
{
    let mut entries = Vec::with_capacity(tokens.len());
    for token in tokens {
        let element = repository
            .lookup(&token.symbol)
            .ok_or_else(|| Error::UnknownElement(token.symbol.clone()))?;
        debug!("Resolved {} x{} ({})", element.symbol, token.subscript, element.name);
        entries.push(MoleculeEntry::new(element.clone(), token.subscript));
    }

    Molecule {
        entries,
        total_weight: 0.0,
    }
    .compute()
}

/// Tokenizes `formula` and builds it in one step.
pub fn parse_and_build<R>(formula: &str, repository: &R) -> Result<Molecule>
where
    R: ElementRepository + ?Sized,
{
    let tokens = tokenize(formula)?;
    let molecule = build(&tokens, repository)?;
    info!("formula: {}, weight: {}", formula, molecule.total_weight());
    Ok(molecule)
}

impl Display for Molecule {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for entry in &self.entries {
            writeln!(
                f,
                "\t{}: {:.3}g / {:.3}g * 100 = {:.2} %",
                FormulaToken::new(entry.element.symbol.as_str(), entry.count),
                entry.mass(),
                self.total_weight,
                entry.percentage
            )?;
        }
        Ok(())
    }
}
