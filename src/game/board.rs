//! The board grid and its text form.
//!
//! Tiles are stored row-major with row 0 at the bottom. All reads and writes
//! go through [`Board::get`] and [`Board::set`], which treat everything
//! outside the grid as air and silently drop writes there.

use std::fmt;

use crate::error::{GameError, ParseError, ParseErrorKind};
use crate::game::{Hen, Position, Tile};

/// Width of the row label ("7|") in front of every row of board text.
const ROW_LABEL_WIDTH: usize = 2;

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Width of the board in cells.
    width: u16,
    /// Height of the board in cells.
    height: u16,
    /// Tiles stored in row-major order, bottom row first.
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a new board filled with air.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        Some(Self {
            width,
            height,
            tiles: vec![Tile::Air; size],
        })
    }

    /// Get the width of the board.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the board.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the raw tiles in row-major order, bottom row first.
    #[must_use]
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Check if a position is within the board bounds.
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Convert a position to an index into the tiles array.
    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if x < usize::from(self.width) && y < usize::from(self.height) {
            Some(y * usize::from(self.width) + x)
        } else {
            None
        }
    }

    /// Position of the tile at a row-major index.
    ///
    /// Both coordinates fit in `i32`: the index is bounded by `u16 * u16`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn position_of(&self, idx: usize) -> Position {
        let width = usize::from(self.width);
        Position::new((idx % width) as i32, (idx / width) as i32)
    }

    /// Get the tile at `pos`, or air if `pos` is off the board.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Tile {
        self.index(pos).map_or(Tile::Air, |idx| self.tiles[idx])
    }

    /// Set the tile at `pos`. Writes off the board are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, tile: Tile) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx] = tile;
        }
    }

    /// Iterate over all positions and tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(idx, tile)| (self.position_of(idx), *tile))
    }

    /// Find the first cell holding exactly `tile`, scanning row-major.
    ///
    /// Matches the full tile state, not actor identity: a player standing
    /// on a ladder is only found by `Tile::Player(Player::on_ladder())`.
    /// Use [`Board::find_player`] to find the player wherever it stands.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LookupFailure`] if no cell holds `tile`.
    pub fn locate(&self, tile: Tile) -> Result<Position, GameError> {
        self.iter()
            .find(|(_, t)| *t == tile)
            .map(|(pos, _)| pos)
            .ok_or(GameError::LookupFailure("tile"))
    }

    /// Find the player, scanning column by column (x, then y).
    #[must_use]
    pub fn find_player(&self) -> Option<Position> {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        (0..width)
            .flat_map(|x| (0..height).map(move |y| Position::new(x, y)))
            .find(|&pos| self.get(pos).as_player().is_some())
    }

    /// Whether any egg remains on the board.
    #[must_use]
    pub fn find_egg(&self) -> bool {
        self.tiles.iter().any(|tile| tile.is_egg())
    }

    /// Count the eggs remaining on the board.
    #[must_use]
    pub fn count_eggs(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_egg()).count()
    }

    /// Snapshot every hen with its position, in row-major order.
    #[must_use]
    pub fn hens(&self) -> Vec<(Position, Hen)> {
        self.iter()
            .filter_map(|(pos, tile)| tile.as_hen().map(|hen| (pos, hen)))
            .collect()
    }

    /// Parse a board from its text form.
    ///
    /// Line `i` of `text` holds board row `height - 1 - i`. Each line starts
    /// with a two-character row label that is skipped; anything after the
    /// last column, and any lines after the last row, are ignored. This
    /// accepts the output of the [`Display`](fmt::Display) impl.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for a zero dimension, a missing or short
    /// row, an unknown tile character, or a second player.
    pub fn parse(width: u16, height: u16, text: &str) -> Result<Self, ParseError> {
        let mut board = Self::new(width, height).ok_or(ParseError {
            line: 0,
            kind: ParseErrorKind::EmptyBoard,
        })?;

        let mut lines = text.split('\n');
        let mut seen_player = false;

        for line_no in 0..usize::from(height) {
            let line = lines.next().ok_or(ParseError {
                line: line_no,
                kind: ParseErrorKind::MissingRow,
            })?;
            let line = line.strip_suffix('\r').unwrap_or(line);
            let chars: Vec<char> = line.chars().collect();
            if chars.len() < ROW_LABEL_WIDTH + usize::from(width) {
                return Err(ParseError {
                    line: line_no,
                    kind: ParseErrorKind::ShortRow { len: chars.len() },
                });
            }

            let y = i32::from(height) - 1 - i32::try_from(line_no).unwrap_or(i32::MAX);
            for (column, &c) in chars[ROW_LABEL_WIDTH..]
                .iter()
                .take(usize::from(width))
                .enumerate()
            {
                let tile = Tile::from_char(c).ok_or(ParseError {
                    line: line_no,
                    kind: ParseErrorKind::InvalidChar { column, found: c },
                })?;
                if tile.as_player().is_some() {
                    if seen_player {
                        return Err(ParseError {
                            line: line_no,
                            kind: ParseErrorKind::DuplicatePlayer { column },
                        });
                    }
                    seen_player = true;
                }
                let x = i32::try_from(column).unwrap_or(i32::MAX);
                board.set(Position::new(x, y), tile);
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Rows top to bottom, each labelled with `y % 10`, then an x-axis line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.width);
        for (y, row) in self.tiles.chunks(width).enumerate().rev() {
            write!(f, "{}|", y % 10)?;
            for tile in row {
                write!(f, "{}", tile.to_char())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "  ")?;
        for x in 0..width {
            write!(f, "{}", x % 10)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crate::game::testing::board_from_rows as make_board;

    #[test]
    fn test_board_creation() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert!(board.tiles().iter().all(|t| t.is_air()));
    }

    #[test]
    fn test_board_zero_size() {
        assert!(Board::new(0, 3).is_none());
        assert!(Board::new(3, 0).is_none());
    }

    #[test]
    fn test_out_of_bounds_reads_air() {
        let mut board = Board::new(2, 2).unwrap();
        for pos in [Position::new(0, 0), Position::new(1, 1)] {
            board.set(pos, Tile::Platform);
        }
        assert_eq!(board.get(Position::new(-1, 0)), Tile::Air);
        assert_eq!(board.get(Position::new(0, -1)), Tile::Air);
        assert_eq!(board.get(Position::new(2, 0)), Tile::Air);
        assert_eq!(board.get(Position::new(0, 2)), Tile::Air);
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut board = Board::new(2, 2).unwrap();
        let before = board.clone();
        board.set(Position::new(-1, 0), Tile::Egg);
        board.set(Position::new(2, 1), Tile::Egg);
        board.set(Position::new(0, 5), Tile::Egg);
        assert_eq!(board, before);
    }

    #[test]
    fn test_get_set() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(Position::new(2, 1), Tile::Ladder);
        assert_eq!(board.get(Position::new(2, 1)), Tile::Ladder);
        assert_eq!(board.tiles()[5], Tile::Ladder);
    }

    #[test]
    fn test_parse_orientation() {
        let board = make_board(&["* O", "==="]);
        assert_eq!(board.get(Position::new(0, 1)), Tile::Egg);
        assert_eq!(board.get(Position::new(2, 1)), Tile::Player(Player::new()));
        assert_eq!(board.get(Position::new(0, 0)), Tile::Platform);
    }

    #[test]
    fn test_find_player_column_major() {
        let board = make_board(&[" O", "  "]);
        assert_eq!(board.find_player(), Some(Position::new(1, 1)));
        assert_eq!(Board::new(3, 3).unwrap().find_player(), None);
    }

    #[test]
    fn test_find_and_count_eggs() {
        let board = make_board(&["* *", "==="]);
        assert!(board.find_egg());
        assert_eq!(board.count_eggs(), 2);
        assert!(!Board::new(2, 2).unwrap().find_egg());
    }

    #[test]
    fn test_locate() {
        let board = make_board(&["  #", "#=="]);
        assert_eq!(board.locate(Tile::Ladder), Ok(Position::new(0, 0)));
        assert_eq!(
            board.locate(Tile::Egg),
            Err(GameError::LookupFailure("tile"))
        );
    }

    #[test]
    fn test_locate_matches_exact_player_state() {
        let mut board = make_board(&[" #", "=="]);
        board.set(Position::new(1, 1), Tile::Player(Player::on_ladder()));
        assert_eq!(
            board.locate(Tile::Player(Player::new())),
            Err(GameError::LookupFailure("tile"))
        );
        assert_eq!(
            board.locate(Tile::Player(Player::on_ladder())),
            Ok(Position::new(1, 1))
        );
        assert_eq!(board.find_player(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_hens_row_major() {
        let board = make_board(&["q p", " p "]);
        let hens: Vec<Position> = board.hens().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            hens,
            vec![Position::new(1, 0), Position::new(0, 1), Position::new(2, 1)]
        );
    }

    #[test]
    fn test_display_format() {
        let board = make_board(&["* O", "==="]);
        assert_eq!(board.to_string(), "1|* O|\n0|===|\n  012");
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let board = make_board(&["q@ *", "p#p=", "===="]);
        let text = board.to_string();
        assert_eq!(Board::parse(4, 3, &text), Ok(board));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::parse(0, 1, "").unwrap_err().kind,
            ParseErrorKind::EmptyBoard
        );
        assert_eq!(
            Board::parse(2, 2, "0|  ").unwrap_err(),
            ParseError {
                line: 1,
                kind: ParseErrorKind::MissingRow
            }
        );
        assert_eq!(
            Board::parse(3, 1, "0| ").unwrap_err().kind,
            ParseErrorKind::ShortRow { len: 3 }
        );
        assert_eq!(
            Board::parse(3, 1, "0| x ").unwrap_err().kind,
            ParseErrorKind::InvalidChar {
                column: 1,
                found: 'x'
            }
        );
        assert_eq!(
            Board::parse(3, 1, "0|O O").unwrap_err().kind,
            ParseErrorKind::DuplicatePlayer { column: 2 }
        );
    }

    #[test]
    fn test_parse_ignores_label_and_trailing() {
        let board = Board::parse(2, 1, "xy*=|trailing\n  01").unwrap();
        assert_eq!(board.get(Position::new(0, 0)), Tile::Egg);
        assert_eq!(board.get(Position::new(1, 0)), Tile::Platform);
    }
}
