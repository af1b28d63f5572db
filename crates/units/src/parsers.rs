//! Parser combinators for quantity and unit expressions

// crate modules
use crate::error::{Error, Result};
use crate::unit::Unit;

// external crates
use log::trace;

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, i8, one_of, space0, space1};
use nom::combinator::{map, opt, value};
use nom::multi::many0;
use nom::number::complete::double;
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;

/// A single named unit raised to a power, e.g. `s^-1`
#[derive(Debug, PartialEq)]
pub(crate) struct Term<'a> {
    pub name: &'a str,
    pub exponent: i8,
}

/// Parse `<value> <unit expression>` where the unit expression is optional
pub(crate) fn quantity(i: &str) -> IResult<&str, (f64, Vec<Term>)> {
    let (i, magnitude) = double(i.trim_start())?;
    let (i, _) = space0(i)?;
    let (i, terms) = opt(unit_expression)(i)?;
    Ok((i, (magnitude, terms.unwrap_or_default())))
}

/// Parse a chain of unit terms joined by `*`, `/`, or whitespace
///
/// Division only applies to the term immediately following the `/`, so
/// `Bq/g*mol` is read as `(Bq/g)*mol`.
pub(crate) fn unit_expression(i: &str) -> IResult<&str, Vec<Term>> {
    let (i, first) = term(i)?;
    let (i, rest) = many0(pair(operator, term))(i)?;

    let mut terms = vec![first];
    terms.extend(rest.into_iter().map(|(divide, t)| match divide {
        true => Term {
            name: t.name,
            exponent: -t.exponent,
        },
        false => t,
    }));

    Ok((i, terms))
}

/// Resolve parsed terms into a single compound [Unit]
pub(crate) fn combine_terms(terms: &[Term]) -> Result<Unit> {
    terms.iter().try_fold(Unit::DIMENSIONLESS, |unit, t| {
        trace!("Unit term {} ^ {}", t.name, t.exponent);
        let named = Unit::lookup(t.name).ok_or_else(|| Error::UnknownUnit(t.name.to_string()))?;
        Ok(unit * named.powi(t.exponent))
    })
}

/// Operator between terms, true for division
fn operator(i: &str) -> IResult<&str, bool> {
    alt((
        map(delimited(space0, one_of("*/"), space0), |op| op == '/'),
        value(false, space1),
    ))(i)
}

/// Named unit with an optional integer exponent
fn term(i: &str) -> IResult<&str, Term> {
    let (i, name) = take_while1(|c: char| c.is_ascii_alphabetic() || c == '_')(i)?;
    let (i, exponent) = opt(preceded(char('^'), i8))(i)?;
    Ok((
        i,
        Term {
            name,
            exponent: exponent.unwrap_or(1),
        },
    ))
}
