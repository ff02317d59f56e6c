use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::space0,
    error::VerboseError,
    sequence::delimited,
    IResult,
};

/// `,` or `->`, with optional surrounding blanks.
pub fn separator(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    delimited(space0, alt((tag("->"), tag(","))), space0)(input)
}
