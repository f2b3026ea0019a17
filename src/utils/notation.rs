//! The 4-5 character coordinate move grammar.
//!
//! A move string matches `([a-h][1-8])([a-h][1-8])([bkqr])?`: start tile,
//! end tile, optional promotion letter. Parsed byte-wise; anything else is a
//! format error, reported separately from rule violations.

use crate::board::piece::PieceKind;
use crate::board::tile::Tile;
use crate::errors::ChessError;

/// A syntactically valid move request. Whether it is legal is a different
/// question, answered by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub start: Tile,
    pub end: Tile,
    pub promotion: Option<PieceKind>,
}

/// Parses a coordinate move string such as `"e2e4"` or `"e7e8q"`.
pub fn parse_move(input: &str) -> Result<ParsedMove, ChessError> {
    let malformed = || ChessError::MalformedMove(input.to_owned());
    if input.len() != 4 && input.len() != 5 {
        return Err(malformed());
    }
    if !input.is_ascii() {
        return Err(malformed());
    }
    let start = Tile::from_algebraic(&input[0..2]).map_err(|_| malformed())?;
    let end = Tile::from_algebraic(&input[2..4]).map_err(|_| malformed())?;
    let promotion = match input.as_bytes().get(4) {
        None => None,
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'k') => Some(PieceKind::Knight),
        Some(_) => return Err(malformed()),
    };
    Ok(ParsedMove {
        start,
        end,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_move;
    use crate::board::piece::PieceKind;
    use crate::board::tile::Tile;

    fn tile(name: &str) -> Tile {
        Tile::from_algebraic(name).expect("test tile should parse")
    }

    #[test]
    fn plain_and_promoting_moves_parse() {
        let plain = parse_move("e2e4").expect("e2e4 parses");
        assert_eq!(plain.start, tile("e2"));
        assert_eq!(plain.end, tile("e4"));
        assert_eq!(plain.promotion, None);

        let promoting = parse_move("e7e8q").expect("e7e8q parses");
        assert_eq!(promoting.promotion, Some(PieceKind::Queen));
        // 'k' promotes to a knight.
        let knight = parse_move("a7a8k").expect("a7a8k parses");
        assert_eq!(knight.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn malformed_strings_are_rejected() {
        for input in ["", "e2", "e2e", "e2e44", "e9e4", "i2e4", "e2e4x", "E2E4", "e2 e4"] {
            let err = parse_move(input).expect_err("input should be rejected");
            assert!(err.is_format_error(), "{input:?} should be a format error");
        }
    }

    #[test]
    fn non_ascii_input_is_a_format_error_not_a_panic() {
        assert!(parse_move("e2é4").is_err());
        assert!(parse_move("♙2e4").is_err());
    }
}
