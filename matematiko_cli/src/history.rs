use matematiko::{FinalResult, Winner};

/// One finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub summary: String,
    pub winner: Winner,
}

/// The results of all games finished since the program started.
///
/// Entries are only ever appended.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

/// Wins per side and draws over a [`History`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub player_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &FinalResult) {
        self.entries.push(HistoryEntry {
            summary: result.summary(),
            winner: result.winner,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for entry in &self.entries {
            match entry.winner {
                Winner::Player => tally.player_wins += 1,
                Winner::Computer => tally.computer_wins += 1,
                Winner::Draw => tally.draws += 1,
            }
        }
        tally
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "No finished games.");
        }
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "- {}", entry.summary)?;
        }
        Ok(())
    }
}
