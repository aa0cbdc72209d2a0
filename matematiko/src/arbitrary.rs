use quickcheck::{Arbitrary, Gen};

use crate::{Board, Number, BOARD_SIZE, MAX_NUMBER, MIN_NUMBER};

fn arbitrary_number(g: &mut Gen) -> Number {
    MIN_NUMBER + u8::arbitrary(g) % (MAX_NUMBER - MIN_NUMBER + 1)
}

/// The values of a complete line. Every value is a valid token number.
#[derive(Clone, Copy, Debug)]
pub struct FullLine(pub [Number; BOARD_SIZE]);

impl Arbitrary for FullLine {
    fn arbitrary(g: &mut Gen) -> Self {
        // Small alphabets make pairs and triples likely enough to be exercised
        let alphabet_size = 1 + u8::arbitrary(g) % (MAX_NUMBER - MIN_NUMBER + 1);
        let offset = u8::arbitrary(g) % (MAX_NUMBER - alphabet_size + 1);
        let mut values = [0; BOARD_SIZE];
        for value in values.iter_mut() {
            *value = MIN_NUMBER + offset + u8::arbitrary(g) % alphabet_size;
        }
        FullLine(values)
    }
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut rows = [[None; BOARD_SIZE]; BOARD_SIZE];
        // Anything from empty to full, so that complete lines show up too
        let fill_percentage = u8::arbitrary(g) % 101;
        for cell in rows.iter_mut().flatten() {
            if u8::arbitrary(g) % 100 < fill_percentage {
                *cell = Some(arbitrary_number(g));
            }
        }
        Board::from_rows(rows)
    }
}
