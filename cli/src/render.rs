use std::fmt::Write;

use sweeper_core::{Board, CellView};

/// Text grid with row and column headers.
pub fn render(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..size.cols {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');

    for view in board.cells() {
        if view.col == 0 {
            let _ = write!(out, "{:>3} ", view.row);
        }
        let _ = write!(out, "{:>3}", symbol(&view));
        if view.col + 1 == size.cols {
            out.push('\n');
        }
    }
    out
}

fn symbol(view: &CellView) -> char {
    if view.shows_mine {
        '*'
    } else if view.is_flagged {
        'F'
    } else if !view.is_revealed {
        '.'
    } else if view.neighbor_mine_count == 0 {
        ' '
    } else {
        char::from(b'0' + view.neighbor_mine_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::*;

    fn board(rows: Coord, cols: Coord, mines: &[CellIndex]) -> Board {
        Board::with_placer(GridSize::new(rows, cols), FixedMinePlacer::new(mines.iter().copied())).unwrap()
    }

    #[test]
    fn hidden_board_is_all_dots() {
        let rendered = render(&board(2, 2, &[0]));

        assert_eq!(rendered, "      0  1\n  0   .  .\n  1   .  .\n");
    }

    #[test]
    fn shows_numbers_flags_and_lost_mines() {
        let mut board = board(1, 3, &[0]);

        board.click(0, 2, Button::Right).unwrap();
        board.click(0, 1, Button::Left).unwrap();
        assert_eq!(render(&board), "      0  1  2\n  0   .  1  F\n");

        board.click(0, 0, Button::Left).unwrap();
        assert_eq!(render(&board), "      0  1  2\n  0   *  1  F\n");
    }
}
