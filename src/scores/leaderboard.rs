//! Ranked view over seeded high scores plus the player's own results.

use serde::Serialize;

use super::ScoreRecord;

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// 1-based position.
    pub rank: usize,
    pub record: ScoreRecord,
}

/// Leaderboard builder.
pub struct Leaderboard;

impl Leaderboard {
    /// Merge `seeded` and `recent`, highest score first, keep `limit` rows.
    ///
    /// Equal scores keep their input order, seeded records ahead of the
    /// player's.
    #[must_use]
    pub fn standings(
        seeded: &[ScoreRecord],
        recent: &[ScoreRecord],
        limit: usize,
    ) -> Vec<Standing> {
        let mut all: Vec<&ScoreRecord> = seeded.iter().chain(recent).collect();
        all.sort_by(|a, b| b.score.cmp(&a.score));

        all.into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, record)| Standing {
                rank: i + 1,
                record: record.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn rec(name: &str, score: u32) -> ScoreRecord {
        ScoreRecord::new(name, "Company Trivia", score, Utc::now())
    }

    #[test]
    fn test_merge_and_rank() {
        let seeded = vec![rec("Sarah", 2850), rec("Marcus", 2650)];
        let recent = vec![rec("You", 300), rec("You", 3000)];

        let rows = Leaderboard::standings(&seeded, &recent, 10);
        let names: Vec<_> = rows.iter().map(|s| (s.rank, s.record.score)).collect();
        assert_eq!(names, vec![(1, 3000), (2, 2850), (3, 2650), (4, 300)]);
    }

    #[test]
    fn test_limit_and_stable_ties() {
        let seeded = vec![rec("Seed", 500)];
        let recent = vec![rec("You", 500), rec("You", 100)];

        let rows = Leaderboard::standings(&seeded, &recent, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].record.player_name, "Seed");
        assert_eq!(rows[1].record.player_name, "You");
        assert!(Leaderboard::standings(&seeded, &recent, 0).is_empty());
    }
}
