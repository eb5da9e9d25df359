//! Board vocabulary shared by the session core and the UI layer
//!
//! Provides newtypes for files, ranks and cells plus the piece and side enums.
//! These types are deliberately independent of any rules backend so the
//! selection, promotion and status logic never touches backend types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board file (column), 0 = 'a' .. 7 = 'h'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// Create a file from a character ('a'..='h', case-insensitive)
    ///
    /// ```rust,ignore
    /// let file = File::from_char('e').unwrap(); // File 4
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            c @ 'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    pub fn new(index: u8) -> Option<Self> {
        (index < 8).then_some(File(index))
    }

    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board rank (row), 0 = rank 1 .. 7 = rank 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from its printed number (1-8)
    pub fn from_number(n: u8) -> Option<Self> {
        (1..=8).contains(&n).then(|| Rank(n - 1))
    }

    pub fn new(index: u8) -> Option<Self> {
        (index < 8).then_some(Rank(index))
    }

    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

/// A board cell keyed by algebraic coordinate ("e4")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub file: File,
    pub rank: Rank,
}

impl Cell {
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        Cell { file, rank }
    }

    /// Create a cell from file and rank indices (both 0-7)
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        Some(Cell {
            file: File::new(file)?,
            rank: Rank::new(rank)?,
        })
    }

    /// Parse algebraic notation ("e4"); anything but exactly two valid characters fails
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_number(chars.next()?.to_digit(10)? as u8)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Cell { file, rank })
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    /// Linear index 0-63 with a1 = 0, h1 = 7, a8 = 56
    pub fn index(self) -> usize {
        self.rank.index() as usize * 8 + self.file.index() as usize
    }

    /// All 64 cells, a1 first, rank by rank
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Cell::from_parts(File(file), Rank(rank))))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    White,
    Black,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }

    /// The rank a pawn of this side promotes on
    pub fn last_rank(self) -> Rank {
        match self {
            Side::White => Rank(7),
            Side::Black => Rank(0),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A piece standing on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPiece {
    pub side: Side,
    pub kind: PieceKind,
}

impl BoardPiece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        BoardPiece { side, kind }
    }

    /// Unicode chess glyph used by the board renderer
    pub fn glyph(self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::King) => '♔',
            (Side::White, PieceKind::Queen) => '♕',
            (Side::White, PieceKind::Rook) => '♖',
            (Side::White, PieceKind::Bishop) => '♗',
            (Side::White, PieceKind::Knight) => '♘',
            (Side::White, PieceKind::Pawn) => '♙',
            (Side::Black, PieceKind::King) => '♚',
            (Side::Black, PieceKind::Queen) => '♛',
            (Side::Black, PieceKind::Rook) => '♜',
            (Side::Black, PieceKind::Bishop) => '♝',
            (Side::Black, PieceKind::Knight) => '♞',
            (Side::Black, PieceKind::Pawn) => '♟',
        }
    }
}

/// Pieces a pawn may promote to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    /// Modal order: queen first
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'q' => Some(PromotionPiece::Queen),
            'r' => Some(PromotionPiece::Rook),
            'b' => Some(PromotionPiece::Bishop),
            'n' => Some(PromotionPiece::Knight),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PromotionPiece::Queen => 'q',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Knight => 'n',
        }
    }

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PromotionPiece::Queen => "Queen",
            PromotionPiece::Rook => "Rook",
            PromotionPiece::Bishop => "Bishop",
            PromotionPiece::Knight => "Knight",
        }
    }
}
