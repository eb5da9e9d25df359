//! Board widget
//!
//! Paints a [`BoardView`] into a square area and reports which cell, if any,
//! was clicked this frame. All game logic stays in the session; the widget
//! only maps pixels to cells.

use crate::session::{BoardView, Cell, CellView};
use crate::ui::styles::*;
use bevy_egui::egui;

/// Draw the board filling the available space; returns the clicked cell
pub fn board_widget(
    ui: &mut egui::Ui,
    view: &BoardView,
    result_label: Option<&str>,
) -> Option<Cell> {
    let available = ui.available_size();
    let size = available.x.min(available.y).max(8.0 * 24.0);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    let painter = ui.painter_at(rect);
    let square = size / 8.0;

    for (row, cells) in view.rows.iter().enumerate() {
        for (col, cell_view) in cells.iter().enumerate() {
            let cell_rect = egui::Rect::from_min_size(
                rect.min + egui::vec2(col as f32 * square, row as f32 * square),
                egui::vec2(square, square),
            );
            paint_cell(&painter, cell_rect, cell_view);

            if col == 0 {
                painter.text(
                    cell_rect.left_top() + egui::vec2(3.0, 2.0),
                    egui::Align2::LEFT_TOP,
                    cell_view.cell.rank.to_number().to_string(),
                    egui::FontId::proportional(square * 0.18),
                    coordinate_color(cell_view),
                );
            }
            if row == 7 {
                painter.text(
                    cell_rect.right_bottom() - egui::vec2(3.0, 2.0),
                    egui::Align2::RIGHT_BOTTOM,
                    cell_view.cell.file.to_char().to_string(),
                    egui::FontId::proportional(square * 0.18),
                    coordinate_color(cell_view),
                );
            }
        }
    }

    if let Some(label) = result_label {
        let banner = egui::Rect::from_center_size(rect.center(), egui::vec2(size * 0.6, square));
        painter.rect_filled(banner, 8.0, UiColors::BG_OVERLAY);
        painter.text(
            banner.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(square * 0.45),
            UiColors::TEXT_PRIMARY,
        );
    }

    if !response.clicked() {
        return None;
    }
    response
        .interact_pointer_pos()
        .and_then(|pos| cell_at(view, rect, pos))
}

fn paint_cell(painter: &egui::Painter, rect: egui::Rect, cell: &CellView) {
    let mut fill = if cell.light {
        UiColors::SQUARE_LIGHT
    } else {
        UiColors::SQUARE_DARK
    };
    if cell.marks.last_move {
        fill = ColorUtils::mix(fill, UiColors::LAST_MOVE, 0.5);
    }
    if cell.marks.in_check {
        fill = ColorUtils::mix(fill, UiColors::DANGER, 0.6);
    }
    if cell.marks.selected {
        fill = ColorUtils::mix(fill, UiColors::ACCENT_GOLD, 0.6);
    }
    painter.rect_filled(rect, 0.0, fill);

    let square = rect.width();
    if let Some(piece) = cell.piece {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            piece.glyph().to_string(),
            egui::FontId::proportional(square * 0.75),
            UiColors::PIECE_INK,
        );
    }

    if cell.marks.destination {
        let hint = ColorUtils::with_alpha(UiColors::DESTINATION, 90);
        if cell.piece.is_some() {
            painter.circle_stroke(
                rect.center(),
                square * 0.44,
                egui::Stroke::new(square * 0.07, hint),
            );
        } else {
            painter.circle_filled(rect.center(), square * 0.15, hint);
        }
    }
}

fn coordinate_color(cell: &CellView) -> egui::Color32 {
    if cell.light {
        UiColors::SQUARE_DARK
    } else {
        UiColors::SQUARE_LIGHT
    }
}

/// Map a pointer position inside `rect` to the cell drawn there
pub fn cell_at(view: &BoardView, rect: egui::Rect, pos: egui::Pos2) -> Option<Cell> {
    if !rect.contains(pos) {
        return None;
    }
    let square = rect.width() / 8.0;
    let col = (((pos.x - rect.min.x) / square) as usize).min(7);
    let row = (((pos.y - rect.min.y) / square) as usize).min(7);
    view.rows.get(row)?.get(col).map(|c| c.cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Selection, ShakmatyRules, Side};

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(400.0, 400.0))
    }

    #[test]
    fn test_cell_at_white_orientation() {
        let rules = ShakmatyRules::new();
        let view = BoardView::build(&rules, &Selection::default(), None, Side::White);
        let rect = board_rect();

        assert_eq!(
            cell_at(&view, rect, egui::pos2(110.0, 60.0)),
            Cell::from_algebraic("a8")
        );
        assert_eq!(
            cell_at(&view, rect, egui::pos2(499.0, 449.0)),
            Cell::from_algebraic("h1")
        );
        // e2: fifth column, seventh row
        assert_eq!(
            cell_at(&view, rect, egui::pos2(100.0 + 4.5 * 50.0, 50.0 + 6.5 * 50.0)),
            Cell::from_algebraic("e2")
        );
        assert_eq!(cell_at(&view, rect, egui::pos2(90.0, 60.0)), None);
    }

    #[test]
    fn test_cell_at_black_orientation() {
        let rules = ShakmatyRules::new();
        let view = BoardView::build(&rules, &Selection::default(), None, Side::Black);
        assert_eq!(
            cell_at(&view, board_rect(), egui::pos2(110.0, 60.0)),
            Cell::from_algebraic("h1")
        );
    }
}
