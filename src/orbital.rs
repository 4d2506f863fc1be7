//! A bookkeeping model of electron shells.
//!
//! Shells hold subshells (s, p, d, f), subshells hold orbitals, and each
//! orbital has two spin slots. Nothing here touches formulas or weights.

use crate::{Error, Result};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Highest principal quantum number found on the periodic table.
pub const MAX_SHELL: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubshellKind {
    S,
    P,
    D,
    F,
}

impl SubshellKind {
    pub const ALL: [SubshellKind; 4] = [Self::S, Self::P, Self::D, Self::F];

    pub fn letter(self) -> char {
        match self {
            Self::S => 's',
            Self::P => 'p',
            Self::D => 'd',
            Self::F => 'f',
        }
    }

    /// 1, 3, 5 and 7 orbitals for s, p, d and f.
    pub fn orbital_count(self) -> usize {
        match self {
            Self::S => 1,
            Self::P => 3,
            Self::D => 5,
            Self::F => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Up,
    Down,
}

impl Spin {
    fn slot(self) -> usize {
        match self {
            Spin::Up => 0,
            Spin::Down => 1,
        }
    }
}

impl Display for Spin {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Spin::Up => write!(f, "\u{2191}"),
            Spin::Down => write!(f, "\u{2193}"),
        }
    }
}

/// One orbital: an up slot and a down slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orbital {
    slots: [Option<Spin>; 2],
}

impl Orbital {
    pub fn occupy(&mut self, spin: Spin) {
        self.slots[spin.slot()] = Some(spin);
    }

    pub fn electron_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_full(&self) -> bool {
        self.electron_count() == 2
    }
}

impl Display for Orbital {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(spin) => write!(f, "{}", spin)?,
                None => write!(f, "_")?,
            }
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subshell {
    kind: SubshellKind,
    orbitals: Vec<Orbital>,
}

impl Subshell {
    pub fn new(kind: SubshellKind) -> Self {
        Self {
            kind,
            orbitals: vec![Orbital::default(); kind.orbital_count()],
        }
    }

    pub fn kind(&self) -> SubshellKind {
        self.kind
    }

    pub fn orbitals(&self) -> &[Orbital] {
        &self.orbitals
    }

    /// Puts an electron with `spin` into orbital `ml`.
    pub fn occupy(&mut self, ml: usize, spin: Spin) -> Result<()> {
        let max = self.orbitals.len() - 1;
        let orbital = self
            .orbitals
            .get_mut(ml)
            .ok_or(Error::InvalidMagneticNumber {
                kind: self.kind.letter(),
                ml,
                max,
            })?;
        orbital.occupy(spin);
        Ok(())
    }

    pub fn fill(&mut self) {
        for orbital in self.orbitals.iter_mut() {
            orbital.occupy(Spin::Up);
            orbital.occupy(Spin::Down);
        }
    }

    pub fn electron_count(&self) -> usize {
        self.orbitals.iter().map(Orbital::electron_count).sum()
    }
}

/// A shell with principal quantum number `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    n: u8,
    subshells: Vec<Subshell>,
}

impl Shell {
    /// Every shell has an s subshell, p from shell 2, d from shell 4 and
    /// f from shell 6, following the rows where they start filling.
    pub fn new(n: u8) -> Result<Self> {
        if n == 0 || n > MAX_SHELL {
            return Err(Error::InvalidShell(n));
        }

        let subshells = SubshellKind::ALL
            .iter()
            .zip([1, 2, 4, 6])
            .filter(|(_, first_shell)| n >= *first_shell)
            .map(|(&kind, _)| Subshell::new(kind))
            .collect();

        Ok(Self { n, subshells })
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn subshells(&self) -> &[Subshell] {
        &self.subshells
    }

    pub fn subshell_mut(&mut self, kind: SubshellKind) -> Option<&mut Subshell> {
        self.subshells.iter_mut().find(|s| s.kind == kind)
    }

    pub fn fill(&mut self) {
        self.subshells.iter_mut().for_each(Subshell::fill);
    }

    pub fn electron_count(&self) -> usize {
        self.subshells.iter().map(Subshell::electron_count).sum()
    }
}

impl Display for Shell {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "shell {}", self.n)?;
        for subshell in &self.subshells {
            write!(f, "    {}{}:", self.n, subshell.kind.letter())?;
            for orbital in &subshell.orbitals {
                write!(f, " {}", orbital)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
