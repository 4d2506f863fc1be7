//! Conversions between grams, moles and solution volume.
//!
//! Every function checks its inputs the same way: amounts must be finite
//! and not negative, and a zero weight or molarity is refused rather than
//! producing an infinity.

use crate::{Error, Result};

/// Rejects NaN, infinities and negative amounts.
pub(crate) fn check_quantity(value: f64, input: &str) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_number(input, "not a finite number"));
    }
    if value < 0.0 {
        return Err(Error::invalid_number(input, "must not be negative"));
    }
    // Collapse -0.0 so it never shows up in output.
    Ok(if value == 0.0 { 0.0 } else { value })
}

fn amount(value: f64, what: &str) -> Result<f64> {
    check_quantity(value, &format!("{} {}", value, what))
}

fn divisor(value: f64, what: &'static str) -> Result<f64> {
    let value = amount(value, what)?;
    if value == 0.0 {
        return Err(Error::DivisionByZero(what));
    }
    Ok(value)
}

/// `grams / weight`
pub fn moles_from_grams(grams: f64, weight: f64) -> Result<f64> {
    let grams = amount(grams, "g")?;
    let weight = divisor(weight, "molecular weight")?;
    Ok(grams / weight)
}

/// `moles * weight`
pub fn grams_from_moles(moles: f64, weight: f64) -> Result<f64> {
    let moles = amount(moles, "mol")?;
    let weight = divisor(weight, "molecular weight")?;
    Ok(moles * weight)
}

/// Volume in mL of a `molarity` mol/L solution holding `moles` of solute.
pub fn volume_ml_from_moles(moles: f64, molarity: f64) -> Result<f64> {
    let moles = amount(moles, "mol")?;
    let molarity = divisor(molarity, "molarity")?;
    Ok(moles * 1000.0 / molarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_conversions() {
        assert!(close(moles_from_grams(36.03, 18.015).unwrap(), 2.0));
        assert!(close(grams_from_moles(0.5, 58.44).unwrap(), 29.22));
        assert!(close(volume_ml_from_moles(0.25, 0.5).unwrap(), 500.0));
        assert_eq!(moles_from_grams(0.0, 18.015).unwrap(), 0.0);
    }

    #[test]
    fn test_round_trip() {
        for weight in [1.008, 18.015, 58.44, 180.156, 342.297, 1e-6, 1e6] {
            for grams in [0.0, 0.001, 1.0, 12.5, 1000.0, 123456.789] {
                let moles = moles_from_grams(grams, weight).unwrap();
                let back = grams_from_moles(moles, weight).unwrap();
                assert!(close(back, grams), "{} g at {} g/mol came back as {}", grams, weight, back);
            }
        }
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            moles_from_grams(1.0, 0.0),
            Err(Error::DivisionByZero("molecular weight"))
        ));
        assert!(matches!(
            grams_from_moles(1.0, 0.0),
            Err(Error::DivisionByZero("molecular weight"))
        ));
        assert!(matches!(
            volume_ml_from_moles(1.0, 0.0),
            Err(Error::DivisionByZero("molarity"))
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        let bad = [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        for value in bad {
            assert!(matches!(moles_from_grams(value, 18.0), Err(Error::InvalidNumericInput { .. })));
            assert!(matches!(grams_from_moles(value, 18.0), Err(Error::InvalidNumericInput { .. })));
            assert!(matches!(moles_from_grams(1.0, value), Err(Error::InvalidNumericInput { .. })));
            assert!(matches!(volume_ml_from_moles(1.0, value), Err(Error::InvalidNumericInput { .. })));
        }
    }
}
