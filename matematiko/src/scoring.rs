//! Scoring of lines and whole boards.
//!
//! Every complete row, column and diagonal of a board is scored on its own and
//! the board's score is the sum. A line may match one grouping pattern (pairs,
//! triples, ...) and, independently of that, any of the other patterns.
//! Diagonals are worth a little more than rows and columns.

use std::collections::BTreeSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Board, LineKind, Number, BOARD_SIZE};

/// A scoring combination within one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    FourOfAKind,
    /// Three of one number and two of another.
    ThreePlusTwo,
    TwoPairs,
    ThreeOfAKind,
    OnePair,
    /// Five consecutive numbers, in any order.
    Sequence,
    /// Exactly the numbers 1, 10, 11, 12 and 13.
    SpecialRun,
    FourOnes,
    ThreeOnesTwoThirteens,
}

/// The score of a single line along with the patterns that produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScore {
    pub score: u32,
    /// In the order the patterns are listed in [`Pattern::ALL`].
    pub patterns: Vec<Pattern>,
}

/// How one complete line of a board was scored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineExplanation {
    pub kind: LineKind,
    pub values: [Number; BOARD_SIZE],
    pub score: LineScore,
}

/// The result of [`evaluate_board()`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardScore {
    pub total: u32,
    /// One entry per complete line, in the order of [`Board::lines()`].
    /// Only filled in when an explanation was requested.
    pub lines: Vec<LineExplanation>,
}

impl Pattern {
    pub const ALL: [Pattern; 9] = [
        Pattern::FourOfAKind,
        Pattern::ThreePlusTwo,
        Pattern::TwoPairs,
        Pattern::ThreeOfAKind,
        Pattern::OnePair,
        Pattern::Sequence,
        Pattern::SpecialRun,
        Pattern::FourOnes,
        Pattern::ThreeOnesTwoThirteens,
    ];

    /// Points for this pattern in a row/column or in a diagonal.
    pub fn points(self, diagonal: bool) -> u32 {
        let (straight, diag) = match self {
            Pattern::FourOfAKind => (160, 170),
            Pattern::ThreePlusTwo => (80, 90),
            Pattern::TwoPairs => (20, 30),
            Pattern::ThreeOfAKind => (40, 50),
            Pattern::OnePair => (10, 20),
            Pattern::Sequence => (50, 60),
            Pattern::SpecialRun => (150, 160),
            Pattern::FourOnes => (200, 210),
            Pattern::ThreeOnesTwoThirteens => (100, 110),
        };
        if diagonal {
            diag
        } else {
            straight
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::FourOfAKind => "four of a kind",
            Pattern::ThreePlusTwo => "three+two",
            Pattern::TwoPairs => "two pairs",
            Pattern::ThreeOfAKind => "three of a kind",
            Pattern::OnePair => "one pair",
            Pattern::Sequence => "sequence",
            Pattern::SpecialRun => "special run 1-13-12-11-10",
            Pattern::FourOnes => "four ones",
            Pattern::ThreeOnesTwoThirteens => "three ones two thirteens",
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for LineScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.patterns.is_empty() {
            write!(f, "no combination")
        } else {
            write!(f, "{}", self.patterns.iter().join(", "))
        }
    }
}

impl std::fmt::Display for LineExplanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: [{}] -> {}: {} points",
            self.kind,
            self.values.iter().join(", "),
            self.score,
            self.score.score
        )
    }
}

/// The grouping pattern of a line, if any. At most one of these applies.
fn grouping_pattern(multiplicities: &[usize]) -> Option<Pattern> {
    let has = |n: usize| multiplicities.contains(&n);
    let num_pairs = multiplicities.iter().filter(|&&m| m == 2).count();
    if has(4) {
        Some(Pattern::FourOfAKind)
    } else if has(3) && has(2) {
        Some(Pattern::ThreePlusTwo)
    } else if num_pairs == 2 {
        Some(Pattern::TwoPairs)
    } else if has(3) {
        Some(Pattern::ThreeOfAKind)
    } else if num_pairs == 1 {
        Some(Pattern::OnePair)
    } else {
        None
    }
}

fn is_sequence(values: &[Number; BOARD_SIZE]) -> bool {
    values
        .iter()
        .sorted()
        .tuple_windows()
        .all(|(&a, &b)| b.checked_sub(a) == Some(1))
}

/// Scores one complete line.
pub fn evaluate_line(values: [Number; BOARD_SIZE], kind: LineKind) -> LineScore {
    let counts = values.iter().copied().counts();
    let multiplicities: Vec<usize> = counts.values().copied().collect();
    let count_of = |n: Number| counts.get(&n).copied().unwrap_or(0);

    let mut patterns = Vec::new();
    patterns.extend(grouping_pattern(&multiplicities));
    if is_sequence(&values) {
        patterns.push(Pattern::Sequence);
    }
    if BTreeSet::from(values) == BTreeSet::from([1, 10, 11, 12, 13]) {
        patterns.push(Pattern::SpecialRun);
    }
    if count_of(1) == 4 {
        patterns.push(Pattern::FourOnes);
    }
    if count_of(1) == 3 && count_of(13) == 2 {
        patterns.push(Pattern::ThreeOnesTwoThirteens);
    }

    let score = patterns
        .iter()
        .map(|pattern| pattern.points(kind.is_diagonal()))
        .sum();
    LineScore { score, patterns }
}

/// Scores all complete lines of a board.
///
/// Lines with an empty cell are skipped. With `record_explanation`, the
/// returned [`BoardScore::lines`] describes each scored line, otherwise it is
/// left empty, which is what the opponent uses for its simulations.
pub fn evaluate_board(board: &Board, record_explanation: bool) -> BoardScore {
    let mut result = BoardScore::default();
    for line in board.lines() {
        let Some(values) = line.values() else {
            continue;
        };
        let score = evaluate_line(values, line.kind);
        result.total += score.score;
        if record_explanation {
            result.lines.push(LineExplanation {
                kind: line.kind,
                values,
                score,
            });
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::FullLine;

    const ROW: LineKind = LineKind::Row(0);
    const DIAG: LineKind = LineKind::Diagonal;

    fn check(values: [Number; 5], kind: LineKind, score: u32, patterns: &[Pattern]) {
        let result = evaluate_line(values, kind);
        assert_eq!(result.patterns, patterns, "patterns for {:?}", values);
        assert_eq!(result.score, score, "score for {:?}", values);
    }

    #[test]
    fn full_house_of_ones_and_thirteens() {
        check([1, 1, 13, 13, 13], ROW, 80, &[Pattern::ThreePlusTwo]);
    }

    #[test]
    fn sequence() {
        check([9, 10, 11, 12, 13], ROW, 50, &[Pattern::Sequence]);
        check([13, 11, 9, 12, 10], DIAG, 60, &[Pattern::Sequence]);
        check([1, 2, 3, 4, 6], ROW, 0, &[]);
    }

    #[test]
    fn four_ones_stack_with_four_of_a_kind() {
        check(
            [1, 1, 1, 1, 13],
            DIAG,
            380,
            &[Pattern::FourOfAKind, Pattern::FourOnes],
        );
        check(
            [1, 13, 1, 1, 1],
            ROW,
            360,
            &[Pattern::FourOfAKind, Pattern::FourOnes],
        );
    }

    #[test]
    fn three_ones_two_thirteens_stack_with_three_plus_two() {
        check(
            [1, 1, 1, 13, 13],
            ROW,
            180,
            &[Pattern::ThreePlusTwo, Pattern::ThreeOnesTwoThirteens],
        );
        check(
            [13, 1, 13, 1, 1],
            DIAG,
            200,
            &[Pattern::ThreePlusTwo, Pattern::ThreeOnesTwoThirteens],
        );
    }

    #[test]
    fn special_run() {
        check([13, 1, 11, 12, 10], ROW, 150, &[Pattern::SpecialRun]);
        check([1, 10, 11, 12, 13], DIAG, 160, &[Pattern::SpecialRun]);
    }

    #[test]
    fn groupings() {
        check([7, 7, 7, 7, 2], ROW, 160, &[Pattern::FourOfAKind]);
        check([7, 7, 7, 7, 2], DIAG, 170, &[Pattern::FourOfAKind]);
        check([5, 3, 5, 3, 5], DIAG, 90, &[Pattern::ThreePlusTwo]);
        check([2, 2, 9, 9, 4], ROW, 20, &[Pattern::TwoPairs]);
        check([2, 2, 9, 9, 4], DIAG, 30, &[Pattern::TwoPairs]);
        check([8, 8, 8, 1, 2], ROW, 40, &[Pattern::ThreeOfAKind]);
        check([8, 8, 8, 1, 2], DIAG, 50, &[Pattern::ThreeOfAKind]);
        check([6, 6, 1, 2, 3], ROW, 10, &[Pattern::OnePair]);
        check([6, 6, 1, 2, 3], DIAG, 20, &[Pattern::OnePair]);
    }

    #[test]
    fn five_of_a_kind_is_not_a_grouping() {
        check([4, 4, 4, 4, 4], ROW, 0, &[]);
    }

    #[test]
    fn display() {
        assert_eq!(evaluate_line([1, 2, 4, 6, 8], ROW).to_string(), "no combination");
        assert_eq!(
            evaluate_line([1, 1, 1, 13, 13], ROW).to_string(),
            "three+two, three ones two thirteens"
        );
        let explanation = LineExplanation {
            kind: LineKind::Column(2),
            values: [9, 10, 11, 12, 13],
            score: evaluate_line([9, 10, 11, 12, 13], LineKind::Column(2)),
        };
        assert_eq!(
            explanation.to_string(),
            "Column 3: [9, 10, 11, 12, 13] -> sequence: 50 points"
        );
    }

    quickcheck! {
        fn diagonal_never_scores_less(line: FullLine) -> bool {
            let straight = evaluate_line(line.0, ROW);
            let diagonal = evaluate_line(line.0, DIAG);
            straight.patterns == diagonal.patterns && straight.score <= diagonal.score
        }

        fn score_is_order_independent(line: FullLine) -> bool {
            let mut reversed = line.0;
            reversed.reverse();
            evaluate_line(line.0, ROW) == evaluate_line(reversed, ROW)
        }

        fn at_most_one_grouping(line: FullLine) -> bool {
            let groupings = [
                Pattern::FourOfAKind,
                Pattern::ThreePlusTwo,
                Pattern::TwoPairs,
                Pattern::ThreeOfAKind,
                Pattern::OnePair,
            ];
            evaluate_line(line.0, ROW)
                .patterns
                .iter()
                .filter(|p| groupings.contains(p))
                .count()
                <= 1
        }

        fn explanations_add_up(board: Board) -> bool {
            let explained = evaluate_board(&board, true);
            let silent = evaluate_board(&board, false);
            silent.lines.is_empty()
                && explained.total == silent.total
                && explained.lines.iter().map(|l| l.score.score).sum::<u32>() == explained.total
        }
    }

    #[test]
    fn empty_board_scores_zero() {
        assert_eq!(evaluate_board(&Board::new(), true), BoardScore::default());
    }

    #[test]
    fn board_with_one_complete_row_and_diagonal() {
        let mut board = Board::new();
        for (j, n) in [9, 10, 11, 12, 13].into_iter().enumerate() {
            board.place(0, j, n).unwrap();
        }
        // Completes the diagonal 9, 1, 1, 1, 1
        for k in 1..5 {
            board.place(k, k, 1).unwrap();
        }
        let score = evaluate_board(&board, true);
        let kinds: Vec<LineKind> = score.lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::Row(0), LineKind::Diagonal]);
        assert_eq!(score.total, 50 + 170 + 210);
    }

    #[test]
    fn board_round_trips_through_json() {
        let mut board = Board::new();
        let numbers = [3, 7, 7, 1, 13, 12, 5, 5, 5, 9, 10, 11, 2];
        for (k, (row, col)) in Board::new().empty_cells().enumerate() {
            board.place(row, col, numbers[k % numbers.len()]).unwrap();
        }
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
        assert_eq!(evaluate_board(&restored, true), evaluate_board(&board, true));
    }
}
