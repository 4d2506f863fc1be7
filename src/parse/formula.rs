use crate::{Error, Result};
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::*;

/// An element symbol and the subscript that follows it in a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaToken {
    pub symbol: String,
    pub subscript: u32,
}

impl FormulaToken {
    pub fn new(symbol: impl Into<String>, subscript: u32) -> Self {
        Self {
            symbol: symbol.into(),
            subscript,
        }
    }
}

impl Display for FormulaToken {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if self.subscript > 1 {
            write!(f, "{}{}", self.symbol, self.subscript)
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

/// Splits a formula such as `C6H12O6` into `(symbol, subscript)` tokens.
///
/// An uppercase letter starts a new symbol, lowercase letters extend the
/// current one, and a run of digits sets its subscript (1 when absent).
/// Groups, charges and hydrates are not understood: any character outside
/// `[A-Za-z0-9]` is rejected.
///
/// Tokens are not checked against a periodic table here, so `Xx2`
/// tokenizes fine and only fails when the molecule is built.
///
/// # Returns
///
/// * `Result<Vec<FormulaToken>>` - The tokens in formula order, or
///   [`Error::MalformedFormula`] with the character position of the problem.
pub fn tokenize(formula: &str) -> Result<Vec<FormulaToken>> {
    if formula.is_empty() {
        return Err(Error::malformed(formula, 0, "empty formula"));
    }

    let chars: Vec<char> = formula.chars().collect();
    let mut tokens = Vec::new();
    let mut symbol = String::new();
    let mut subscript: Option<u32> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_uppercase() {
            // Start of a new element, so the previous one is complete.
            if !symbol.is_empty() {
                tokens.push(FormulaToken::new(
                    std::mem::take(&mut symbol),
                    subscript.take().unwrap_or(1),
                ));
            }
            symbol.push(c);
            i += 1;
        } else if c.is_ascii_lowercase() {
            if i == 0 {
                return Err(Error::malformed(
                    formula,
                    i,
                    "formula must start with an uppercase element symbol",
                ));
            }
            if subscript.is_some() {
                return Err(Error::malformed(
                    formula,
                    i,
                    format!("lowercase '{}' after a subscript", c),
                ));
            }
            symbol.push(c);
            i += 1;
        } else if c.is_ascii_digit() {
            if i == 0 {
                return Err(Error::malformed(formula, i, "formula cannot start with a digit"));
            }

            // Take the whole digit run at once for multi-digit subscripts.
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let digits: String = chars[start..i].iter().collect();
            let count = digits.parse::<u32>().map_err(|_| {
                Error::malformed(formula, start, format!("subscript {} is too large", digits))
            })?;
            if count == 0 {
                return Err(Error::malformed(formula, start, "subscript must be at least 1"));
            }
            subscript = Some(count);
        } else {
            return Err(Error::malformed(
                formula,
                i,
                format!("unexpected character '{}'", c),
            ));
        }
    }

    if !symbol.is_empty() {
        tokens.push(FormulaToken::new(symbol, subscript.unwrap_or(1)));
    }

    debug!("Tokenized '{}' into {:?}", formula, tokens);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(formula: &str) -> Vec<(String, u32)> {
        tokenize(formula)
            .unwrap()
            .into_iter()
            .map(|t| (t.symbol, t.subscript))
            .collect()
    }

    fn expect(list: &[(&str, u32)]) -> Vec<(String, u32)> {
        list.iter().map(|(s, n)| (s.to_string(), *n)).collect()
    }

    fn assert_malformed(formula: &str, expected_position: usize) {
        match tokenize(formula) {
            Err(Error::MalformedFormula { position, .. }) => {
                assert_eq!(position, expected_position, "wrong position for '{}'", formula)
            }
            other => panic!("expected '{}' to be malformed, got {:?}", formula, other),
        }
    }

    #[test]
    fn test_simple_formulas() {
        assert_eq!(pairs("H2O"), expect(&[("H", 2), ("O", 1)]));
        assert_eq!(pairs("NaCl"), expect(&[("Na", 1), ("Cl", 1)]));
        assert_eq!(pairs("C6H12O6"), expect(&[("C", 6), ("H", 12), ("O", 6)]));
        assert_eq!(pairs("O"), expect(&[("O", 1)]));
        assert_eq!(pairs("C60"), expect(&[("C", 60)]));
    }

    #[test]
    fn test_unknown_symbols_still_tokenize() {
        assert_eq!(pairs("Xx2"), expect(&[("Xx", 2)]));
    }

    #[test]
    fn test_repeated_symbols_are_kept() {
        assert_eq!(pairs("OHO"), expect(&[("O", 1), ("H", 1), ("O", 1)]));
        assert_eq!(
            pairs("CH3COOH"),
            expect(&[("C", 1), ("H", 3), ("C", 1), ("O", 1), ("O", 1), ("H", 1)])
        );
    }

    #[test]
    fn test_malformed_formulas() {
        assert_malformed("", 0);
        assert_malformed("2H", 0);
        assert_malformed("h2", 0);
        assert_malformed("Ca(OH)2", 2);
        assert_malformed("H2O+", 3);
        assert_malformed("CuSO4·5H2O", 5);
        assert_malformed("H 2", 1);
        assert_malformed("H0", 1);
        assert_malformed("H2e", 2);
        assert_malformed("H99999999999", 1);
    }

    /// Every maximal `[A-Z][a-z]?` run becomes a symbol and the digits after
    /// it become its subscript.
    #[test]
    fn test_tokens_follow_symbol_runs() {
        let corpus = [
            "H2O", "NaCl", "C6H12O6", "Fe2O3", "KMnO4", "C8H10N4O2", "Al2S3O12", "UF6",
            "H2SO4", "CH3CH2OH", "Mg3N2", "C12H22O11",
        ];

        for formula in corpus {
            let bytes = formula.as_bytes();
            let mut expected = Vec::new();
            let mut i = 0;
            while i < bytes.len() {
                let mut symbol = (bytes[i] as char).to_string();
                i += 1;
                if i < bytes.len() && bytes[i].is_ascii_lowercase() {
                    symbol.push(bytes[i] as char);
                    i += 1;
                }
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                let subscript: u32 = formula[start..i].parse().unwrap_or(1);
                expected.push((symbol, subscript));
            }
            assert_eq!(pairs(formula), expected, "{}", formula);
        }
    }

    #[test]
    fn test_display() {
        let rendered: String = tokenize("C6H12O6")
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(rendered, "C6H12O6");
        assert_eq!(FormulaToken::new("O", 1).to_string(), "O");
    }
}
