//! Text notation for 4D coordinates.
//!
//! Accepted forms: four packed digits (`0100`), or four integers separated by
//! commas and/or whitespace, optionally wrapped in parentheses
//! (`(0,1,0,0)`, `0 1 0 0`). Output is always `(w,x,y,z)`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Coord;

pub fn parse_coord(text: &str) -> ChessResult<Coord> {
    let invalid = || ChessErrors::InvalidNotation(text.to_owned());
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed);

    let axes: Vec<i8> = if inner.len() == 4 && inner.bytes().all(|b| b.is_ascii_digit()) {
        inner.bytes().map(|b| (b - b'0') as i8).collect()
    } else {
        inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<i8>().map_err(|_| invalid()))
            .collect::<ChessResult<_>>()?
    };

    let axes: [i8; 4] = axes.try_into().map_err(|_| invalid())?;
    let coord = Coord::from_axes(axes);
    if !coord.is_valid() {
        return Err(ChessErrors::InvalidCoordinate(coord));
    }
    Ok(coord)
}

#[inline]
pub fn format_coord(coord: Coord) -> String {
    coord.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_accepted_form() {
        let expected = Coord::new(0, 1, 0, 0);
        for text in ["0100", "(0,1,0,0)", "0 1 0 0", " 0, 1, 0, 0 ", "(0 1 0 0)"] {
            assert_eq!(parse_coord(text), Ok(expected), "{text}");
        }
    }

    #[test]
    fn rejects_malformed_and_out_of_range() {
        assert_eq!(
            parse_coord("010"),
            Err(ChessErrors::InvalidNotation("010".to_owned()))
        );
        assert_eq!(
            parse_coord("a,b,c,d"),
            Err(ChessErrors::InvalidNotation("a,b,c,d".to_owned()))
        );
        assert_eq!(
            parse_coord("0,1,0,0,0"),
            Err(ChessErrors::InvalidNotation("0,1,0,0,0".to_owned()))
        );
        assert_eq!(
            parse_coord("0400"),
            Err(ChessErrors::InvalidCoordinate(Coord::new(0, 4, 0, 0)))
        );
        assert_eq!(
            parse_coord("0,0,-1,0"),
            Err(ChessErrors::InvalidCoordinate(Coord::new(0, 0, -1, 0)))
        );
    }

    #[test]
    fn formats_as_tuple() {
        assert_eq!(format_coord(Coord::new(3, 2, 1, 0)), "(3,2,1,0)");
        assert_eq!(parse_coord(&format_coord(Coord::new(3, 2, 1, 0))), Ok(Coord::new(3, 2, 1, 0)));
    }
}
