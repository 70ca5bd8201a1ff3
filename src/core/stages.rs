//! Failure-stage drawings
//!
//! The gallows picture grows one stage per incorrect guess. The number of
//! stages also fixes how many misses a round allows.

/// The gallows drawing, from an empty base to the full figure
pub const HANGMAN_STAGES: &[&[&str]] = &[
    &["___   "],
    &["_|_   "],
    &[" |    ", "_|_   "],
    &[" |    ", " |    ", "_|_   "],
    &[" |    ", " |    ", " |    ", "_|_   "],
    &[" ____ ", " |    ", " |    ", " |    ", " |    ", "_|_   "],
    &[" ____ ", " |  | ", " |    ", " |    ", " |    ", "_|_   "],
    &[" ____ ", " |  | ", " |  O ", " |    ", " |    ", "_|_   "],
    &[" ____ ", " |  | ", " |  O ", " | /|\\", " |    ", "_|_   "],
    &[" ____ ", " |  | ", " |  O ", " | /|\\", " | / \\", "_|_   "],
];

/// An ordered, immutable set of failure-stage drawings
///
/// Stage `i` is shown after `i` incorrect guesses; the last stage means the
/// round is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTable {
    stages: Vec<Vec<String>>,
}

impl StageTable {
    /// Build a table from custom drawings
    ///
    /// Returns `None` with fewer than two stages, since the round would be
    /// lost before the first guess.
    #[must_use]
    pub fn new(stages: Vec<Vec<String>>) -> Option<Self> {
        (stages.len() >= 2).then_some(Self { stages })
    }

    /// Number of stages in the table
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Misses allowed per round: one less than the number of stages
    #[inline]
    #[must_use]
    pub fn max_incorrect_guesses(&self) -> usize {
        self.stages.len() - 1
    }

    /// Lines of the drawing for `incorrect` misses, clamped to the last stage
    #[must_use]
    pub fn stage(&self, incorrect: usize) -> &[String] {
        let index = incorrect.min(self.max_incorrect_guesses());
        &self.stages[index]
    }
}

impl Default for StageTable {
    fn default() -> Self {
        Self {
            stages: HANGMAN_STAGES
                .iter()
                .map(|stage| stage.iter().map(|&line| line.to_string()).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_ten_stages() {
        let table = StageTable::default();
        assert_eq!(table.len(), 10);
        assert_eq!(table.max_incorrect_guesses(), 9);
    }

    #[test]
    fn first_and_last_stage() {
        let table = StageTable::default();
        assert_eq!(table.stage(0), &["___   ".to_string()]);
        assert_eq!(table.stage(9)[4], " | / \\");
    }

    #[test]
    fn detail_never_shrinks() {
        let table = StageTable::default();
        for i in 1..table.len() {
            let ink = |lines: &[String]| {
                lines
                    .iter()
                    .flat_map(|line| line.chars())
                    .filter(|c| !c.is_whitespace())
                    .count()
            };
            assert!(ink(table.stage(i)) >= ink(table.stage(i - 1)), "stage {i}");
        }
    }

    #[test]
    fn stage_index_is_clamped() {
        let table = StageTable::default();
        assert_eq!(table.stage(42), table.stage(9));
    }

    #[test]
    fn custom_table_needs_two_stages() {
        assert!(StageTable::new(vec![vec!["x".to_string()]]).is_none());

        let table = StageTable::new(vec![vec![], vec!["x".to_string()]]).unwrap();
        assert_eq!(table.max_incorrect_guesses(), 1);
    }
}
