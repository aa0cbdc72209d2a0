use crate::{Board, BOARD_SIZE};

const CELL_WIDTH: usize = 3;

/// Draws a board in a box, with 1-based row and column numbers around it.
///
/// Empty cells are shown as `·`.
pub fn visualize_board(board: &Board) -> String {
    // Column headers
    let mut result = String::from("    ");
    for j in 0..BOARD_SIZE {
        result += &format!("{:>width$}", j + 1, width = CELL_WIDTH);
    }
    result += "\n    ╭";
    for _ in 0..BOARD_SIZE * CELL_WIDTH + 1 {
        result += "─";
    }
    result += "╮";

    for (i, row) in board.rows().iter().enumerate() {
        result += &format!("\n{:>3} │", i + 1);
        for cell in row {
            match cell {
                Some(number) => result += &format!("{:>width$}", number, width = CELL_WIDTH),
                None => result += &format!("{:>width$}", "·", width = CELL_WIDTH),
            }
        }
        result += " │";
    }

    result += "\n    ╰";
    for _ in 0..BOARD_SIZE * CELL_WIDTH + 1 {
        result += "─";
    }
    result += "╯";
    result
}

/// Puts two boards next to each other, each with a title above it.
pub fn visualize_boards_side_by_side(
    left_title: &str,
    left: &Board,
    right_title: &str,
    right: &Board,
) -> String {
    let left_lines: Vec<String> = std::iter::once(format!("    {}", left_title))
        .chain(visualize_board(left).lines().map(String::from))
        .collect();
    let right_lines: Vec<String> = std::iter::once(format!("    {}", right_title))
        .chain(visualize_board(right).lines().map(String::from))
        .collect();
    let width = left_lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut result = String::new();
    for (l, r) in left_lines.iter().zip(&right_lines) {
        let padding = width - l.chars().count();
        result += &format!("{}{}    {}\n", l, " ".repeat(padding), r);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_numbers_and_empty_cells() {
        let mut board = Board::new();
        board.place(0, 0, 13).unwrap();
        board.place(4, 4, 1).unwrap();
        let expected = [
            "      1  2  3  4  5",
            "    ╭────────────────╮",
            "  1 │ 13  ·  ·  ·  · │",
            "  2 │  ·  ·  ·  ·  · │",
            "  3 │  ·  ·  ·  ·  · │",
            "  4 │  ·  ·  ·  ·  · │",
            "  5 │  ·  ·  ·  ·  1 │",
            "    ╰────────────────╯",
        ]
        .join("\n");
        assert_eq!(visualize_board(&board), expected);
    }

    #[test]
    fn side_by_side_has_one_line_per_row() {
        let mut right = Board::new();
        right.place(2, 4, 11).unwrap();
        let text = visualize_boards_side_by_side("You", &Board::new(), "Computer", &right);
        assert_eq!(text.lines().count(), 1 + 8);
        assert!(text.lines().next().unwrap().ends_with("Computer"));
        let row_3 = text.lines().nth(5).unwrap();
        assert!(row_3.starts_with("  3 │  ·  ·  ·  ·  · │"));
        assert!(row_3.ends_with("  3 │  ·  ·  ·  · 11 │"));
    }
}
