use citymap::{CityGraph, Error as CityError, LocationId};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, eof, map, map_res, not, peek, recognize},
    error::{convert_error, VerboseError},
    multi::{many1, separated_list1},
    sequence::{delimited, terminated},
};
use thiserror::Error;

use crate::parser::util::separator;

/// A stop as written by the user: either a location id or its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopRef {
    Id(LocationId),
    Name(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("empty stop list")]
    Empty,
    #[error("cannot parse stops:\n{0}")]
    Syntax(String),
}

/// Digits standing alone before a separator or the end of input.
fn parse_id(input: &str) -> IResult<&str, StopRef, VerboseError<&str>> {
    map_res(
        terminated(digit1, terminated(space0, peek(alt((tag("->"), tag(","), eof))))),
        |s: &str| s.parse::<LocationId>().map(StopRef::Id)
    )(input)
}

/// Anything up to the next `,` or `->`. A lone `-` stays part of the name.
fn parse_name(input: &str) -> IResult<&str, StopRef, VerboseError<&str>> {
    map(
        recognize(many1(alt((is_not(",-"), recognize(terminated(char('-'), not(char('>')))))))),
        |s: &str| StopRef::Name(s.trim_end().to_string())
    )(input)
}

fn parse_stop_ref(input: &str) -> IResult<&str, StopRef, VerboseError<&str>> {
    delimited(space0, alt((parse_id, parse_name)), space0)(input)
}

/// Parses `"0 -> Satellite, 9"` style stop lists.
pub fn parse(input: &str) -> Result<Vec<StopRef>, Error> {
    if input.trim().is_empty() {
        return Err(Error::Empty);
    }
    match all_consuming(separated_list1(separator, parse_stop_ref))(input) {
        Ok((_, stops)) => Ok(stops),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(Error::Syntax(convert_error(input, e))),
        Err(nom::Err::Incomplete(_)) => Err(Error::Syntax(input.to_string())),
    }
}

/// Parses exactly one stop.
pub fn parse_stop(input: &str) -> Result<StopRef, Error> {
    let mut stops = parse(input)?;
    if stops.len() != 1 {
        return Err(Error::Syntax(format!("expected a single stop, got `{}`", input)));
    }
    Ok(stops.remove(0))
}

/// Maps stops to location ids, checking that each one exists in `city`.
pub fn resolve(city: &CityGraph, stops: &[StopRef]) -> Result<Vec<LocationId>, CityError> {
    stops.iter().map(|s| match s {
        StopRef::Id(id) if city.contains(*id) => Ok(*id),
        StopRef::Id(id) => Err(CityError::InvalidLocation(*id)),
        StopRef::Name(name) => city.location_id(name).ok_or_else(|| CityError::UnknownLocation(name.clone())),
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use citymap::sample_city;

    fn name(s: &str) -> StopRef {
        StopRef::Name(s.to_string())
    }

    #[test]
    fn parse_ids_test() {
        assert_eq!(parse("0,4,9").unwrap(), vec![StopRef::Id(0), StopRef::Id(4), StopRef::Id(9)]);
        assert_eq!(parse(" 3 -> 7 ").unwrap(), vec![StopRef::Id(3), StopRef::Id(7)]);
    }

    #[test]
    fn parse_names_test() {
        let stops = parse("SG Highway -> CG Road, Chandkheda").unwrap();
        assert_eq!(stops, vec![name("SG Highway"), name("CG Road"), name("Chandkheda")]);
    }

    #[test]
    fn parse_mixed_test() {
        let stops = parse("0 -> Satellite -> 9").unwrap();
        assert_eq!(stops, vec![StopRef::Id(0), name("Satellite"), StopRef::Id(9)]);
        // a name may start with digits
        assert_eq!(parse("4th Street").unwrap(), vec![name("4th Street")]);
        assert_eq!(parse("12 Main Road -> 3").unwrap(), vec![name("12 Main Road"), StopRef::Id(3)]);
    }

    #[test]
    fn parse_punctuated_names_test() {
        let stops = parse("Law Garden-East -> St. Xavier's (North), 12 Main Road").unwrap();
        assert_eq!(stops, vec![name("Law Garden-East"), name("St. Xavier's (North)"), name("12 Main Road")]);
        assert_eq!(parse("A-B->C").unwrap(), vec![name("A-B"), name("C")]);
        assert_eq!(parse("Paldi; Satellite").unwrap(), vec![name("Paldi; Satellite")]);
    }

    #[test]
    fn parse_errors_test() {
        assert_eq!(parse("   "), Err(Error::Empty));
        assert!(matches!(parse("0,,1"), Err(Error::Syntax(_))));
        assert!(matches!(parse("0 -> "), Err(Error::Syntax(_))));
        assert!(matches!(parse("-> Paldi"), Err(Error::Syntax(_))));
        assert!(matches!(parse("Paldi,"), Err(Error::Syntax(_))));
    }

    #[test]
    fn parse_stop_test() {
        assert_eq!(parse_stop("Paldi").unwrap(), name("Paldi"));
        assert!(parse_stop("1,2").is_err());
    }

    #[test]
    fn resolve_test() {
        let city = sample_city();
        let ids = resolve(&city, &parse("SG Highway, 4, Chandkheda").unwrap()).unwrap();
        assert_eq!(ids, vec![0, 4, 9]);
        assert_eq!(resolve(&city, &[StopRef::Id(10)]), Err(CityError::InvalidLocation(10)));
        assert_eq!(
            resolve(&city, &[name("sg highway")]),
            Err(CityError::UnknownLocation("sg highway".to_string()))
        );
    }
}
