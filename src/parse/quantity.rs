use crate::units::check_quantity;
use crate::{Error, Result};
use nom::{
    character::complete::multispace0,
    combinator::all_consuming,
    number::complete::double,
    sequence::delimited,
    IResult,
};

fn quantity(input: &str) -> IResult<&str, f64> {
    all_consuming(delimited(multispace0, double, multispace0))(input)
}

/// Parses user input such as `"2.5"` or `" 1e-3 "` into an amount.
///
/// The whole input must be one number, finite and not negative.
pub fn parse_quantity(input: &str) -> Result<f64> {
    let (_, value) = quantity(input).map_err(|_| Error::invalid_number(input, "not a number"))?;
    check_quantity(value, input)
}
