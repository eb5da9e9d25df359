//! Board view
//!
//! Flattens the rules snapshot, the selection and the last move into the 64
//! cells the board widget draws, oriented from the human's side.

use super::rules::RulesEngine;
use super::selection::Selection;
use super::types::{BoardPiece, Cell, PieceKind, Side};

/// Highlight state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellMarks {
    pub selected: bool,
    pub destination: bool,
    pub last_move: bool,
    /// The king of the side to move, while in check
    pub in_check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub cell: Cell,
    pub piece: Option<BoardPiece>,
    pub light: bool,
    pub marks: CellMarks,
}

/// The most recent move by either side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub from: Cell,
    pub to: Cell,
}

/// Cells in drawing order: `rows[0]` is the top row on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub rows: Vec<Vec<CellView>>,
    pub orientation: Side,
}

impl BoardView {
    pub fn build(
        rules: &dyn RulesEngine,
        selection: &Selection,
        last_move: Option<LastMove>,
        orientation: Side,
    ) -> Self {
        let snapshot = rules.snapshot();
        let destinations: Vec<Cell> = selection.destinations().collect();
        let turn = rules.turn();
        let in_check = rules.is_check();

        let rank_order: Vec<u8> = match orientation {
            Side::White => (0..8).rev().collect(),
            Side::Black => (0..8).collect(),
        };
        let file_order: Vec<u8> = match orientation {
            Side::White => (0..8).collect(),
            Side::Black => (0..8).rev().collect(),
        };

        let rows = rank_order
            .iter()
            .map(|&rank| {
                file_order
                    .iter()
                    .filter_map(|&file| Cell::new(file, rank))
                    .map(|cell| {
                        let piece = snapshot[cell.index()];
                        CellView {
                            cell,
                            piece,
                            light: (cell.file.index() + cell.rank.index()) % 2 == 1,
                            marks: CellMarks {
                                selected: selection.source() == Some(cell),
                                destination: destinations.contains(&cell),
                                last_move: last_move
                                    .is_some_and(|m| m.from == cell || m.to == cell),
                                in_check: in_check
                                    && piece.is_some_and(|p| {
                                        p.side == turn && p.kind == PieceKind::King
                                    }),
                            },
                        }
                    })
                    .collect()
            })
            .collect();

        BoardView { rows, orientation }
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.rows.iter().flatten()
    }
}
