use crate::{
    grams_from_moles, moles_from_grams, parse_and_build, volume_ml_from_moles, ElementRecord,
    ElementRepository, Error, Molecule, Result,
};
use tracing::*;

/// The values a calculator session carries between commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionState {
    pub formula: String,
    pub weight: f64,
    pub moles: f64,
    pub grams: f64,
    pub volume_ml: f64,
}

/// A stoichiometry session over a periodic table.
///
/// Each command either succeeds and updates the session, or fails and
/// leaves the last accepted molecule and every stored amount as they were.
pub struct Calculator<'a, R: ElementRepository + ?Sized> {
    repository: &'a R,
    molecule: Option<Molecule>,
    state: ConversionState,
}

impl<'a, R: ElementRepository + ?Sized> Calculator<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self {
            repository,
            molecule: None,
            state: ConversionState::default(),
        }
    }

    pub fn molecule(&self) -> Option<&Molecule> {
        self.molecule.as_ref()
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    /// Parses `formula` and makes it the current molecule.
    ///
    /// Amounts from earlier conversions are kept so they can be reused
    /// with the new formula.
    pub fn parse_and_build(&mut self, formula: &str) -> Result<&Molecule> {
        let molecule = parse_and_build(formula, self.repository).map_err(|e| {
            warn!("Rejected formula '{}': {}", formula, e);
            e
        })?;

        self.state.formula = formula.to_owned();
        self.state.weight = molecule.total_weight();
        Ok(self.molecule.insert(molecule))
    }

    fn weight(&self) -> Result<f64> {
        match self.molecule {
            Some(_) => Ok(self.state.weight),
            None => Err(Error::NoFormula),
        }
    }

    /// Converts moles of the current formula to grams.
    pub fn grams_for(&mut self, moles: f64) -> Result<f64> {
        let grams = grams_from_moles(moles, self.weight()?)?;
        self.state.moles = moles;
        self.state.grams = grams;
        debug!("{} mol {} = {} g", moles, self.state.formula, grams);
        Ok(grams)
    }

    /// Converts grams of the current formula to moles.
    pub fn moles_for(&mut self, grams: f64) -> Result<f64> {
        let moles = moles_from_grams(grams, self.weight()?)?;
        self.state.grams = grams;
        self.state.moles = moles;
        debug!("{} g {} = {} mol", grams, self.state.formula, moles);
        Ok(moles)
    }

    /// Volume in mL of a `molarity` solution of the current formula.
    pub fn volume_for(&mut self, moles: f64, molarity: f64) -> Result<f64> {
        self.weight()?;
        let volume_ml = volume_ml_from_moles(moles, molarity)?;
        self.state.moles = moles;
        self.state.volume_ml = volume_ml;
        debug!("{} mol at {} M = {} mL", moles, molarity, volume_ml);
        Ok(volume_ml)
    }

    pub fn search(&self, key: &str) -> Option<&ElementRecord> {
        self.repository.search(key)
    }
}
