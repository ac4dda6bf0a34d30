//! Terminal tokens of the report grammar
//!
//! Small nom parsers shared by the line and clause grammars. Every token
//! that can run into following text enforces its own word boundary so the
//! callers never have to.

use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_while_m_n};
use nom::character::complete::{char, one_of, satisfy, space0};
use nom::combinator::{map, map_res, opt, recognize};
use nom::error::{Error, ErrorKind};
use nom::{IResult, Parser};

use crate::codes::direction::Direction;
use crate::codes::terrain::Terrain;
use crate::coords::Coord;
use crate::core::turn::TurnId;
use crate::core::unit::UnitId;
use crate::report::moves::HexSpec;

fn boundary_error(i: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(i, ErrorKind::Verify))
}

/// Reject the parse when the next character continues a word
fn require_boundary<'a, T>(parsed: (&'a str, T)) -> IResult<&'a str, T> {
    let (rest, value) = parsed;
    if rest.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
        Err(boundary_error(rest))
    } else {
        Ok((rest, value))
    }
}

fn digits(count: usize) -> impl FnMut(&str) -> IResult<&str, &str> {
    move |i| take_while_m_n(count, count, |c: char| c.is_ascii_digit()).parse(i)
}

/// A direction code. Two-letter codes are tried first so `NE` never reads
/// as `N` with trailing garbage.
pub fn direction(i: &str) -> IResult<&str, Direction> {
    let (rest, code) = alt((
        tag_no_case("NE"),
        tag_no_case("NW"),
        tag_no_case("SE"),
        tag_no_case("SW"),
        tag_no_case("N"),
        tag_no_case("S"),
    ))
    .parse(i)?;
    match Direction::from_code(code) {
        Some(dir) => Ok((rest, dir)),
        None => Err(boundary_error(i)),
    }
}

/// A direction code that must end at a word boundary
pub fn direction_word(i: &str) -> IResult<&str, Direction> {
    require_boundary(direction(i)?)
}

/// A terrain short code (`PR`, `HSM`, ...), ended at a word boundary
pub fn terrain_code(i: &str) -> IResult<&str, Terrain> {
    let (rest, code) =
        take_while_m_n(1, 4, |c: char| c.is_ascii_alphabetic()).parse(i)?;
    let (rest, code) = require_boundary((rest, code))?;
    match Terrain::from_code(code) {
        Some(terrain) => Ok((rest, terrain)),
        None => Err(boundary_error(i)),
    }
}

/// A unit id (`0987` or `0987c1`), ended at a word boundary
pub fn unit_id(i: &str) -> IResult<&str, UnitId> {
    let (rest, text) = recognize((
        digits(4),
        opt((one_of("cefgCEFG"), satisfy(|c| c.is_ascii_digit()))),
    ))
    .parse(i)?;
    let (rest, text) = require_boundary((rest, text))?;
    match UnitId::parse(text) {
        Ok(unit) => Ok((rest, unit)),
        Err(_) => Err(boundary_error(i)),
    }
}

/// A grid coordinate (`"AB 0110"`)
pub fn grid_coord(i: &str) -> IResult<&str, Coord> {
    let (rest, text) = recognize((
        satisfy(|c| c.is_ascii_alphabetic()),
        satisfy(|c| c.is_ascii_alphabetic()),
        char(' '),
        digits(4),
    ))
    .parse(i)?;
    let (rest, text) = require_boundary((rest, text))?;
    match Coord::parse_grid(text) {
        Ok(coord) => Ok((rest, coord)),
        Err(_) => Err(boundary_error(i)),
    }
}

/// A hex reference: grid coordinate, `N/A`, or obscured `## dddd`
pub fn hex_spec(i: &str) -> IResult<&str, HexSpec> {
    alt((
        map(tag_no_case("N/A"), |_| HexSpec::NotAvailable),
        map_res(
            recognize((tag("##"), space0, digits(4))),
            |text: &str| HexSpec::parse(text).map_err(|_| ()),
        ),
        map(grid_coord, HexSpec::Grid),
    ))
    .parse(i)
}

/// A turn id (`"0900-04"`)
pub fn turn_id(i: &str) -> IResult<&str, TurnId> {
    let (rest, text) = recognize((digits(4), char('-'), digits(2))).parse(i)?;
    let (rest, text) = require_boundary((rest, text))?;
    match TurnId::parse(text) {
        Ok(turn) => Ok((rest, turn)),
        Err(_) => Err(boundary_error(i)),
    }
}

/// A parenthesised turn number: `(#4)`
pub fn turn_number(i: &str) -> IResult<&str, u32> {
    map_res(
        (
            char('('),
            space0,
            opt(char('#')),
            take_while_m_n(1, 4, |c: char| c.is_ascii_digit()),
            char(')'),
        ),
        |(_, _, _, digits, _)| str::parse::<u32>(digits),
    )
    .parse(i)
}
